//! The parser itself: a stack of small combinators, leaves first. Each
//! layer is built only out of the layer below it; nothing re-reads
//! characters directly once a lower layer exists for that job.
//!
//! Layers, in ascending order (see SPEC_FULL.md §2 for the full table):
//! L0 [`chars`] predicates, L1 [`tokens`], L2/L3 [`lexical`] and [`amount`],
//! L4 [`header`], L5 [`posting`], L6 [`transaction`], L7 [`price`] and
//! [`journal`].

pub mod amount;
pub mod chars;
pub mod header;
pub mod journal;
pub mod lexical;
pub mod posting;
pub mod price;
pub mod tokens;
pub mod transaction;

use combine::easy;
use combine::stream::position;
use combine::stream::position::SourcePosition;

/// The concrete input stream type threaded through every combinator in this
/// module. Fixing it (rather than staying generic over `Stream`) trades a
/// little reusability for grammar functions that read like the EBNF in
/// SPEC_FULL.md §6 — and it's all this crate ever parses.
///
/// Wrapped in [`easy::Stream`] up front (rather than only at the final
/// `parse_journal`/`parse_price_db` call) so that every `and_then`-based
/// conversion error inside the grammar — e.g. a malformed quantity — can be
/// reported with the same rich `{line, column, expected, found}` detail as
/// a structural grammar failure.
pub(crate) type Input<'a> = easy::Stream<position::Stream<&'a str, SourcePosition>>;

pub(crate) fn input(text: &str) -> Input<'_> {
    easy::Stream(position::Stream::new(text))
}
