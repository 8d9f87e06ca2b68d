//! L4 — the first line of a transaction: date, status, optional code,
//! payee, and optional trailing comment.

use combine::{optional, Parser};

use super::Input;
use crate::ast::Header;
use crate::grammar::lexical::{code, comment, date, payee, transaction_status};
use crate::grammar::tokens::{line_number, whitespace};

/// `date whitespace status whitespace (code whitespace)? payee comment?`
///
/// Every inter-field gap here accepts zero characters — unlike the price
/// grammar's mandatory gaps, nothing here requires a separator to actually
/// be present.
pub fn header<'a>() -> impl Parser<Input<'a>, Output = Header> {
    (
        line_number(),
        date(),
        whitespace(),
        transaction_status(),
        whitespace(),
        optional(code().skip(whitespace())),
        payee(),
        optional(comment()),
    )
        .map(|(line, date, _, status, _, code, payee, comment)| {
            Header::new(line, date, status, code, payee, comment)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Date, Status};
    use crate::grammar::input;

    #[test]
    fn header_without_code_or_comment() {
        let result = header()
            .parse(input("2015-10-20 * Opening Balance"))
            .map(|(h, _)| h);
        let header = result.unwrap();
        assert_eq!(header.line, 1);
        assert_eq!(header.date, Date::new(2015, 10, 20));
        assert_eq!(header.status, Status::Cleared);
        assert_eq!(header.code, None);
        assert_eq!(header.payee, "Opening Balance");
        assert_eq!(header.comment, None);
    }

    #[test]
    fn header_with_zero_width_gaps() {
        let result = header()
            .parse(input("2015-10-20*Opening Balance"))
            .map(|(h, _)| h);
        let header = result.unwrap();
        assert_eq!(header.status, Status::Cleared);
        assert_eq!(header.code, None);
        assert_eq!(header.payee, "Opening Balance");
    }

    #[test]
    fn header_with_code_and_comment() {
        let result = header()
            .parse(input("2015-10-20 ! (conf# 802) Opening Balance ; note"))
            .map(|(h, _)| h);
        let header = result.unwrap();
        assert_eq!(header.status, Status::Uncleared);
        assert_eq!(header.code, Some("conf# 802".to_string()));
        assert_eq!(header.payee, "Opening Balance ");
        assert_eq!(header.comment, Some(" note".to_string()));
    }
}
