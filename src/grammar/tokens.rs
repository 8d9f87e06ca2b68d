//! L1 — whitespace runs, line endings, and a side-effect-free line-number
//! probe built on the stream's own position tracking.

use combine::parser::char::char;
use combine::stream::position::SourcePosition;
use combine::{attempt, many, many1, satisfy, Parser};

use super::{input, Input};
use crate::grammar::chars::is_horizontal_whitespace;

/// Whether a `whitespace` run consumed anything. Downstream amount parsing
/// uses this to decide `AmountFormat`'s spacing axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhitespaceTag {
    Whitespace,
    NoWhitespace,
}

impl WhitespaceTag {
    pub fn is_present(self) -> bool {
        matches!(self, WhitespaceTag::Whitespace)
    }
}

/// Consumes zero or more horizontal whitespace characters (space or tab).
/// Always succeeds; never fails, never errors.
pub fn whitespace<'a>() -> impl Parser<Input<'a>, Output = WhitespaceTag> {
    many::<String, _, _>(satisfy(is_horizontal_whitespace)).map(|consumed| {
        if consumed.is_empty() {
            WhitespaceTag::NoWhitespace
        } else {
            WhitespaceTag::Whitespace
        }
    })
}

/// Requires at least one horizontal whitespace character.
pub fn mandatory_whitespace<'a>() -> impl Parser<Input<'a>, Output = ()> {
    many1::<String, _, _>(satisfy(is_horizontal_whitespace)).map(|_| ())
}

/// Accepts a Unix (`\n`) or Windows (`\r\n`) line ending. A bare `\r` is
/// never treated as a line terminator.
pub fn line_ending<'a>() -> impl Parser<Input<'a>, Output = ()> {
    attempt(char('\r').with(char('\n')))
        .map(|_| ())
        .or(char('\n').map(|_| ()))
}

/// The current 1-based source line, read without consuming any input.
pub fn line_number<'a>() -> impl Parser<Input<'a>, Output = usize> {
    combine::position::<Input<'a>>().map(|pos: SourcePosition| pos.line.max(1) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_on_empty_input_is_no_whitespace() {
        let result = whitespace().parse(input("")).map(|(tag, _)| tag);
        assert_eq!(result, Ok(WhitespaceTag::NoWhitespace));
    }

    #[test]
    fn whitespace_space_is_tagged_present() {
        let result = whitespace().parse(input(" ")).map(|(tag, _)| tag);
        assert_eq!(result, Ok(WhitespaceTag::Whitespace));
    }

    #[test]
    fn mandatory_whitespace_empty_is_error() {
        let result = mandatory_whitespace().parse(input(""));
        assert!(result.is_err());
    }

    #[test]
    fn line_ending_unix() {
        assert!(line_ending().parse(input("\n")).is_ok());
    }

    #[test]
    fn line_ending_windows() {
        assert!(line_ending().parse(input("\r\n")).is_ok());
    }

    #[test]
    fn line_ending_bare_cr_is_error() {
        let result = line_ending().parse(input("\rX"));
        assert!(result.is_err());
    }

    #[test]
    fn line_number_starts_at_one() {
        let result = line_number().parse(input("abc")).map(|(n, _)| n);
        assert_eq!(result, Ok(1));
    }
}
