//! L3 — amounts: a quantity paired with a commodity symbol, in any of the
//! four symbol/spacing layouts, plus the elided ("to be inferred") case.

use combine::{attempt, optional, Parser};

use super::Input;
use crate::ast::{Amount, AmountFormat, AmountValue};
use crate::grammar::lexical::{quantity, symbol};
use crate::grammar::tokens::{whitespace, WhitespaceTag};

fn format_for(position_is_left: bool, spacing: WhitespaceTag) -> AmountFormat {
    match (position_is_left, spacing.is_present()) {
        (true, false) => AmountFormat::SymbolLeftNoSpace,
        (true, true) => AmountFormat::SymbolLeftWithSpace,
        (false, false) => AmountFormat::SymbolRightNoSpace,
        (false, true) => AmountFormat::SymbolRightWithSpace,
    }
}

/// `symbol whitespace? quantity`, e.g. `$100.00` or `US$ 100.00`.
fn symbol_then_quantity<'a>() -> impl Parser<Input<'a>, Output = Amount> {
    (symbol(), whitespace(), quantity()).map(|(symbol, spacing, quantity)| {
        Amount::new(quantity, symbol, format_for(true, spacing))
    })
}

/// `quantity whitespace? symbol`, e.g. `100.00 "MUTF514"`.
fn quantity_then_symbol<'a>() -> impl Parser<Input<'a>, Output = Amount> {
    (quantity(), whitespace(), symbol()).map(|(quantity, spacing, symbol)| {
        Amount::new(quantity, symbol, format_for(false, spacing))
    })
}

/// An amount in either symbol-first or quantity-first order.
pub fn amount<'a>() -> impl Parser<Input<'a>, Output = Amount> {
    attempt(symbol_then_quantity()).or(quantity_then_symbol())
}

/// An amount, or nothing at all — an elided amount that a downstream
/// balancing pass must infer. Never fails: absence of an amount is always
/// valid here, by design.
pub fn amount_value<'a>() -> impl Parser<Input<'a>, Output = AmountValue> {
    optional(amount()).map(|found| match found {
        Some(amount) => AmountValue::Resolved(amount),
        None => AmountValue::Infer,
    })
}
