//! Parser for plain-text double-entry accounting journals in the
//! Ledger/hledger family.
//!
//! The grammar is layered bottom-up from character predicates to a whole
//! journal file; see [`grammar`] for the layers and SPEC_FULL.md §2/§6 for
//! the table and EBNF they implement. This crate only parses: balancing,
//! commodity inference, and `include` resolution are downstream concerns
//! left to callers.

mod ast;
mod error;
mod grammar;

pub use ast::{
    Amount, AmountFormat, AmountValue, Date, Header, JournalEntry, Posting, Price, Quantity,
    Status, Symbol, Transaction,
};
pub use error::ParseError;

use combine::Parser;

/// Parses a complete journal file: transactions and standalone price
/// entries, in source order, with blank lines and free-standing comments
/// between them discarded.
#[tracing::instrument(skip(text), fields(bytes = text.len()))]
pub fn parse_journal(text: &str) -> Result<Vec<JournalEntry>, ParseError> {
    grammar::journal::journal()
        .parse(grammar::input(text))
        .map(|(entries, _)| entries)
        .map_err(|err| {
            let err = ParseError::from_easy_errors(err);
            tracing::debug!(line = err.line, column = err.column, "journal parse failed");
            err
        })
}

/// Parses a price-db file: nothing but price entries, one per line.
#[tracing::instrument(skip(text), fields(bytes = text.len()))]
pub fn parse_price_db(text: &str) -> Result<Vec<Price>, ParseError> {
    grammar::price::price_db()
        .parse(grammar::input(text))
        .map(|(prices, _)| prices)
        .map_err(|err| {
            let err = ParseError::from_easy_errors(err);
            tracing::debug!(line = err.line, column = err.column, "price-db parse failed");
            err
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_journal_end_to_end() {
        let text = "\
; household ledger

2015/10/17 * Opening Balance
  Assets:Checking                $1,000.00
  Equity:Opening Balances

2015/10/20 ! (conf# 802) Grocery Store ; weekly shop
  Expenses:Food:Groceries         $45.00
  Assets:Checking

P 2015/10/20 \"MUTF514\" $13.25
";
        let entries = parse_journal(text).expect("valid journal parses");
        assert_eq!(entries.len(), 3);

        match &entries[0] {
            JournalEntry::Transaction(transaction) => {
                assert_eq!(transaction.header.payee, "Opening Balance");
                assert_eq!(transaction.postings.len(), 2);
                assert_eq!(
                    transaction.postings[1].amount,
                    AmountValue::Infer
                );
            }
            other => panic!("expected a transaction, got {other:?}"),
        }

        match &entries[2] {
            JournalEntry::Price(price) => {
                assert_eq!(price.symbol, Symbol::new("MUTF514", true));
            }
            other => panic!("expected a price entry, got {other:?}"),
        }
    }

    #[test]
    fn parse_journal_reports_line_and_column_on_failure() {
        let err = parse_journal("not a journal line\n")
            .expect_err("text starting with neither a date nor a price marker must fail");
        assert_eq!(err.line, 1);
        assert_eq!(err.column, 1);
    }

    #[test]
    fn parse_price_db_end_to_end() {
        let text = "P 2015/10/20 \"MUTF514\" $13.25\nP 2015/10/21 \"MUTF514\" $13.30\n";
        let prices = parse_price_db(text).expect("valid price-db parses");
        assert_eq!(prices.len(), 2);
        assert_eq!(prices[0].symbol, prices[1].symbol);
    }
}
