//! L7 (supplemental) — a complete journal file: transactions and standalone
//! price entries in any order, with blank lines and free-standing comment
//! lines between them skipped.

use combine::{attempt, choice, many, optional, skip_many, Parser};

use super::Input;
use crate::ast::JournalEntry;
use crate::grammar::lexical::comment;
use crate::grammar::price::price;
use crate::grammar::tokens::{line_ending, whitespace};
use crate::grammar::transaction::transaction;

/// A blank line, or a line containing only an optional comment: whitespace,
/// an optional comment, a line ending. Parsed and discarded.
fn blank_or_comment_line<'a>() -> impl Parser<Input<'a>, Output = ()> {
    whitespace()
        .with(optional(comment()))
        .skip(line_ending())
        .map(|_| ())
}

fn skip_blank_and_comment_lines<'a>() -> impl Parser<Input<'a>, Output = ()> {
    skip_many(attempt(blank_or_comment_line()))
}

fn entry<'a>() -> impl Parser<Input<'a>, Output = JournalEntry> {
    choice((
        attempt(transaction()).map(JournalEntry::Transaction),
        price().map(JournalEntry::Price),
    ))
}

/// `skip_blank_and_comment_lines (entry skip_blank_and_comment_lines)*`
pub fn journal<'a>() -> impl Parser<Input<'a>, Output = Vec<JournalEntry>> {
    skip_blank_and_comment_lines().with(many::<Vec<JournalEntry>, _, _>(
        entry().skip(skip_blank_and_comment_lines()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::input;

    #[test]
    fn journal_with_transaction_and_price_and_blank_lines() {
        let text = "\
; a top-of-file comment

P 2015-10-20 \"MUTF514\" $13.25

2015-10-20 * Opening Balance
  Assets:Savings:Bank  $100.00
  Equity:Opening Balance

";
        let result = journal().parse(input(text)).map(|(entries, _)| entries.len());
        assert_eq!(result, Ok(2));
    }

    #[test]
    fn journal_empty_file_yields_no_entries() {
        let result = journal().parse(input("")).map(|(entries, _)| entries);
        assert_eq!(result, Ok(Vec::new()));
    }

    #[test]
    fn journal_only_comments_and_blank_lines_yields_no_entries() {
        let result = journal()
            .parse(input("; nothing here\n\n  ; still nothing\n"))
            .map(|(entries, _)| entries);
        assert_eq!(result, Ok(Vec::new()));
    }

    #[test]
    fn journal_preserves_entry_order() {
        let text = "2015-10-20 * First\n  Assets:Bank  $1.00\n  Equity:Opening Balance\nP 2015-10-21 \"MUTF514\" $13.30\n";
        let result = journal().parse(input(text)).map(|(entries, _)| entries);
        let entries = result.unwrap();
        assert!(matches!(entries[0], JournalEntry::Transaction(_)));
        assert!(matches!(entries[1], JournalEntry::Price(_)));
    }
}
