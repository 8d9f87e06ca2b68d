//! L2 — lexical atoms: date components, transaction status, code, payee,
//! comment, account, quantity, and quoted/unquoted symbols.

use combine::error::StreamError;
use combine::parser::char::char;
use combine::parser::range::recognize;
use combine::stream::StreamErrorFor;
use combine::{attempt, count, many, many1, optional, satisfy, sep_by1, Parser};

use super::Input;
use crate::ast::{Date, Quantity, Status, Symbol};
use crate::grammar::chars::{
    is_alphanumeric, is_code_char, is_comment_char, is_digit, is_payee_char, is_quantity_char,
    is_quoted_symbol_char, is_unquoted_symbol_char,
};

fn digits<'a>(count_of: usize) -> impl Parser<Input<'a>, Output = String> {
    count::<String, _, _>(count_of, satisfy(is_digit))
}

/// Exactly four digits.
pub fn year<'a>() -> impl Parser<Input<'a>, Output = i32> {
    digits(4).map(|text| text.parse::<i32>().expect("4 ascii digits always parse as i32"))
}

/// Exactly two digits.
pub fn month<'a>() -> impl Parser<Input<'a>, Output = u32> {
    digits(2).map(|text| text.parse::<u32>().expect("2 ascii digits always parse as u32"))
}

/// Exactly two digits.
pub fn day<'a>() -> impl Parser<Input<'a>, Output = u32> {
    digits(2).map(|text| text.parse::<u32>().expect("2 ascii digits always parse as u32"))
}

/// `year sep month sep day`. The two separators may differ (`2015/02-14`
/// parses); calendar validity is never checked here.
pub fn date<'a>() -> impl Parser<Input<'a>, Output = Date> {
    (
        year(),
        char('/').or(char('-')),
        month(),
        char('/').or(char('-')),
        day(),
    )
        .map(|(year, _, month, _, day)| Date::new(year, month, day))
}

/// `*` (cleared) or `!` (uncleared).
pub fn transaction_status<'a>() -> impl Parser<Input<'a>, Output = Status> {
    char('*')
        .map(|_| Status::Cleared)
        .or(char('!').map(|_| Status::Uncleared))
}

/// `( code_char* )`. Failure to find the closing `)` is a final (consumed)
/// error, since `(` has already been committed.
pub fn code<'a>() -> impl Parser<Input<'a>, Output = String> {
    (
        char('('),
        many::<String, _, _>(satisfy(is_code_char)),
        char(')'),
    )
        .map(|(_, text, _)| text)
}

/// One or more `payee_char`, stopping before `;` or a newline. Trailing
/// spaces are preserved verbatim.
pub fn payee<'a>() -> impl Parser<Input<'a>, Output = String> {
    many1::<String, _, _>(satisfy(is_payee_char))
}

/// `; comment_char*`, excluding the leading `;` but preserving any leading
/// space that followed it.
pub fn comment<'a>() -> impl Parser<Input<'a>, Output = String> {
    char(';').with(many::<String, _, _>(satisfy(is_comment_char)))
}

/// One or more alphanumeric characters; may start with a digit.
pub fn sub_account<'a>() -> impl Parser<Input<'a>, Output = String> {
    many1::<String, _, _>(satisfy(is_alphanumeric))
}

/// `sub_account (':' sub_account)*` — at least one sub-account is required.
pub fn account<'a>() -> impl Parser<Input<'a>, Output = Vec<String>> {
    sep_by1::<Vec<String>, _, _, _>(sub_account(), char(':'))
}

fn quantity_text<'a>() -> impl Parser<Input<'a>, Output = &'a str> {
    recognize((
        optional(char('-')),
        satisfy(is_digit),
        many::<Vec<char>, _, _>(satisfy(is_quantity_char)),
    ))
}

/// `-? DIGIT (DIGIT|','|'.')*`, normalised (commas stripped) into an exact
/// decimal. Malformed numeric text (e.g. a second `.`) is a final
/// (consumed) error raised by the decimal converter, not a silent
/// acceptance and not a backtrackable failure.
pub fn quantity<'a>() -> impl Parser<Input<'a>, Output = Quantity> {
    quantity_text().and_then(|text: &str| {
        crate::ast::parse_quantity_text(text)
            .map_err(|err| StreamErrorFor::<Input<'a>>::message_format(err))
    })
}

fn quoted_symbol<'a>() -> impl Parser<Input<'a>, Output = Symbol> {
    (
        char('"'),
        many1::<String, _, _>(satisfy(is_quoted_symbol_char)),
        char('"'),
    )
        .map(|(_, value, _)| Symbol::new(value, true))
}

fn unquoted_symbol<'a>() -> impl Parser<Input<'a>, Output = Symbol> {
    many1::<String, _, _>(satisfy(is_unquoted_symbol_char)).map(|value| Symbol::new(value, false))
}

/// Tries a quoted symbol first; on failure (no leading `"`) falls back to
/// an unquoted symbol.
pub fn symbol<'a>() -> impl Parser<Input<'a>, Output = Symbol> {
    attempt(quoted_symbol()).or(unquoted_symbol())
}
