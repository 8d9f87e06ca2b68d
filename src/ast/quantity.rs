use rust_decimal::Decimal;

/// An exact decimal quantity. A thin alias over [`rust_decimal::Decimal`],
/// which preserves written scale natively (`45.00` and `45` compare unequal
/// in string form even though they are numerically equal) and never loses
/// precision the way a binary float would.
pub type Quantity = Decimal;

/// Normalises quantity text captured by the grammar (commas removed) into an
/// exact [`Quantity`]. Returns an error for malformed numeric text, e.g. a
/// second decimal point; the grammar itself is liberal about what it
/// captures, and this is where that liberality gets rejected.
pub fn parse_quantity_text(text: &str) -> Result<Quantity, rust_decimal::Error> {
    let normalized: String = text.chars().filter(|&c| c != ',').collect();
    normalized.parse::<Decimal>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn strips_thousands_separators() {
        let qty = parse_quantity_text("13,245.00").unwrap();
        assert_eq!(qty, Decimal::from_str("13245.00").unwrap());
    }

    #[test]
    fn preserves_scale() {
        let qty = parse_quantity_text("45.00").unwrap();
        assert_eq!(qty.to_string(), "45.00");
        assert_ne!(qty.to_string(), Decimal::from_str("45").unwrap().to_string());
    }

    #[test]
    fn rejects_two_decimal_points() {
        assert!(parse_quantity_text("12.3.4").is_err());
    }

    #[test]
    fn keeps_negative_sign() {
        let qty = parse_quantity_text("-1,110.38").unwrap();
        assert_eq!(qty, Decimal::from_str("-1110.38").unwrap());
    }
}
