/// Formats `amount` with two decimals and the sign ahead of the currency symbol.
pub fn format_amount(amount: f64, symbol: &str) -> String {
    let cents = (amount * 100.0).round() / 100.0;
    if cents < 0.0 {
        format!("-{symbol}{:.2}", -cents)
    } else {
        format!("{symbol}{:.2}", cents.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_two_decimals() {
        assert_eq!(format_amount(1000.0, "$"), "$1000.00");
        assert_eq!(format_amount(12.5, "$"), "$12.50");
    }

    #[test]
    fn sign_precedes_symbol() {
        assert_eq!(format_amount(-12.5, "$"), "-$12.50");
    }

    #[test]
    fn tiny_negatives_round_to_plain_zero() {
        assert_eq!(format_amount(-0.001, "$"), "$0.00");
        assert_eq!(format_amount(-0.0, "€"), "€0.00");
    }
}
