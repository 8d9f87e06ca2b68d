//! L7 — a standalone price observation, and a price-db file made up of
//! nothing else.

use combine::{satisfy, sep_end_by, Parser};

use super::Input;
use crate::ast::Price;
use crate::grammar::amount::amount_value;
use crate::grammar::chars::is_price_indicator;
use crate::grammar::lexical::{date, symbol};
use crate::grammar::tokens::{line_ending, line_number, mandatory_whitespace};

/// `P mandatory_whitespace date mandatory_whitespace symbol
/// mandatory_whitespace amount_value`
pub fn price<'a>() -> impl Parser<Input<'a>, Output = Price> {
    (
        line_number(),
        satisfy(is_price_indicator),
        mandatory_whitespace(),
        date(),
        mandatory_whitespace(),
        symbol(),
        mandatory_whitespace(),
        amount_value(),
    )
        .map(|(line, _, _, date, _, symbol, _, amount)| Price::new(line, date, symbol, amount))
}

/// A price-db file: zero or more price entries, each terminated by a line
/// ending (the final entry's line ending is optional).
pub fn price_db<'a>() -> impl Parser<Input<'a>, Output = Vec<Price>> {
    sep_end_by::<Vec<Price>, _, _, _>(price(), line_ending())
}
