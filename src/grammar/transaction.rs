//! L6 — a full transaction: a header followed by one or more posting lines,
//! with free-standing comment lines interleaved and discarded.

use std::rc::Rc;

use combine::{many1, Parser};

use super::Input;
use crate::ast::{Posting, Transaction};
use crate::grammar::header::header;
use crate::grammar::posting::posting_or_comment_line;
use crate::grammar::tokens::line_ending;

/// `header line_ending (posting_line | comment_line)+`
///
/// At least one body line is required; it need not be a posting, though a
/// transaction made up entirely of comment lines (no postings at all) is
/// syntactically accepted here and left for a downstream pass to reject if
/// it cares.
pub fn transaction<'a>() -> impl Parser<Input<'a>, Output = Transaction> {
    (header().skip(line_ending()), many1(posting_or_comment_line())).map(
        |(header, lines): (_, Vec<Option<_>>)| {
            let header = Rc::new(header);
            let postings = lines
                .into_iter()
                .flatten()
                .map(|raw| Posting::new(Rc::clone(&header), raw.line, raw.account, raw.amount, raw.comment))
                .collect();
            Transaction::new(header, postings)
        },
    )
}
