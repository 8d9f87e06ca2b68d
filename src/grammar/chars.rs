//! L0 — character predicates. Pure functions over a single code point; no
//! parser state, no lookahead.

pub fn is_open_paren(c: char) -> bool {
    c == '('
}

pub fn is_close_paren(c: char) -> bool {
    c == ')'
}

pub fn is_semicolon(c: char) -> bool {
    c == ';'
}

pub fn is_colon(c: char) -> bool {
    c == ':'
}

pub fn is_dash(c: char) -> bool {
    c == '-'
}

pub fn is_quote(c: char) -> bool {
    c == '"'
}

pub fn is_space(c: char) -> bool {
    c == ' '
}

pub fn is_tab(c: char) -> bool {
    c == '\t'
}

pub fn is_horizontal_whitespace(c: char) -> bool {
    is_space(c) || is_tab(c)
}

pub fn is_line_feed(c: char) -> bool {
    c == '\n'
}

pub fn is_carriage_return(c: char) -> bool {
    c == '\r'
}

pub fn is_newline(c: char) -> bool {
    is_line_feed(c) || is_carriage_return(c)
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_date_separator(c: char) -> bool {
    c == '/' || c == '-'
}

pub fn is_status_flag(c: char) -> bool {
    c == '*' || c == '!'
}

pub fn is_price_indicator(c: char) -> bool {
    c == 'P'
}

pub fn is_code_char(c: char) -> bool {
    !is_newline(c) && !is_close_paren(c)
}

pub fn is_payee_char(c: char) -> bool {
    !is_newline(c) && !is_semicolon(c)
}

pub fn is_comment_char(c: char) -> bool {
    !is_newline(c)
}

pub fn is_quoted_symbol_char(c: char) -> bool {
    !is_newline(c) && !is_quote(c)
}

/// The unquoted-symbol character class is defined by exclusion: anything
/// that is not a dash, digit, semicolon, horizontal whitespace, quote, or
/// newline. This is why, in `$13,245.00`, only the leading `$` is consumed
/// as an unquoted symbol — the digits and comma terminate it.
pub fn is_unquoted_symbol_char(c: char) -> bool {
    !(is_dash(c)
        || is_digit(c)
        || is_semicolon(c)
        || is_horizontal_whitespace(c)
        || is_quote(c)
        || is_newline(c))
}

pub fn is_quantity_char(c: char) -> bool {
    is_digit(c) || c == ',' || c == '.'
}

pub fn is_alphanumeric(c: char) -> bool {
    c.is_alphanumeric()
}
