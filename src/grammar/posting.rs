//! L5 — a single indented line inside a transaction: either a posting
//! (account, optional amount, optional comment) or a free-standing comment
//! line. The header back-reference is attached one layer up, in
//! [`crate::grammar::transaction`], once the enclosing `Header` exists.

use combine::{attempt, optional, Parser};

use super::Input;
use crate::ast::AmountValue;
use crate::grammar::amount::amount_value;
use crate::grammar::lexical::{account, comment};
use crate::grammar::tokens::{line_ending, line_number, mandatory_whitespace, whitespace};

/// The fields of a posting, minus the back-reference to its enclosing
/// header — that gets attached once the header is known, in the
/// transaction-level combinator.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RawPosting {
    pub line: usize,
    pub account: Vec<String>,
    pub amount: AmountValue,
    pub comment: Option<String>,
}

/// `account whitespace? amount_value whitespace? comment?`
fn posting<'a>() -> impl Parser<Input<'a>, Output = RawPosting> {
    (
        line_number(),
        account(),
        whitespace(),
        amount_value(),
        whitespace(),
        optional(comment()),
    )
        .map(|(line, account, _, amount, _, comment)| RawPosting {
            line,
            account,
            amount,
            comment,
        })
}

/// A posting line: mandatory leading whitespace, the posting itself, and a
/// line ending.
fn posting_line<'a>() -> impl Parser<Input<'a>, Output = RawPosting> {
    mandatory_whitespace().with(posting()).skip(line_ending())
}

/// A comment line inside a transaction body: optional leading whitespace,
/// a comment, and a line ending. The text is parsed but discarded — it
/// carries no structured data this crate's AST represents.
fn comment_line<'a>() -> impl Parser<Input<'a>, Output = ()> {
    whitespace()
        .with(comment())
        .skip(line_ending())
        .map(|_| ())
}

/// One line of a transaction body: a posting, or a comment line that is
/// parsed and discarded. `attempt` is required on both arms since a
/// comment line and a posting line share an indeterminate amount of
/// leading whitespace before they diverge.
pub(crate) fn posting_or_comment_line<'a>() -> impl Parser<Input<'a>, Output = Option<RawPosting>>
{
    attempt(posting_line().map(Some)).or(attempt(comment_line().map(|_| None)))
}
