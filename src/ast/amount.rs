use std::fmt;

use super::quantity::Quantity;
use super::symbol::Symbol;

/// Records how an amount was laid out in the source text, so that it can be
/// rendered back in the same form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountFormat {
    SymbolLeftNoSpace,
    SymbolLeftWithSpace,
    SymbolRightNoSpace,
    SymbolRightWithSpace,
}

/// A quantity denominated in a commodity, with enough layout information to
/// round-trip back to source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Amount {
    pub quantity: Quantity,
    pub symbol: Symbol,
    pub format: AmountFormat,
}

impl Amount {
    pub fn new(quantity: Quantity, symbol: Symbol, format: AmountFormat) -> Amount {
        Amount {
            quantity,
            symbol,
            format,
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format {
            AmountFormat::SymbolLeftNoSpace => write!(f, "{}{}", self.symbol, self.quantity),
            AmountFormat::SymbolLeftWithSpace => write!(f, "{} {}", self.symbol, self.quantity),
            AmountFormat::SymbolRightNoSpace => write!(f, "{}{}", self.quantity, self.symbol),
            AmountFormat::SymbolRightWithSpace => write!(f, "{} {}", self.quantity, self.symbol),
        }
    }
}

/// Either a provided amount, or the sentinel meaning "this amount was
/// elided; a downstream pass must infer it from the rest of the
/// transaction". Kept as a dedicated sum type rather than `Option<Amount>`
/// so the two kinds of "no amount" (absent field vs. elided-for-inference)
/// are never conflated.
#[derive(Debug, Clone, PartialEq)]
pub enum AmountValue {
    Resolved(Amount),
    Infer,
}

impl AmountValue {
    pub fn as_amount(&self) -> Option<&Amount> {
        match self {
            AmountValue::Resolved(amount) => Some(amount),
            AmountValue::Infer => None,
        }
    }
}
