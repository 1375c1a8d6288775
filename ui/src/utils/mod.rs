pub mod time;

use rust_decimal::Decimal;

/// Returns true if the application is running in development mode.
/// Checks if BACKEND_URL points at a local dev-server.
pub fn is_dev_mode() -> bool {
    option_env!("BACKEND_URL")
        .map(|url| url.contains("localhost") || url.contains("127.0.0.1"))
        .unwrap_or(false)
}

/// Prices are in Angolan kwanzas, always with two decimal places.
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2} Kz", amount.round_dp(2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    #[test]
    fn amounts_have_two_decimals() {
        assert_eq!(format_amount(dec!(5000)), "5000.00 Kz");
        assert_eq!(format_amount(dec!(75.5)), "75.50 Kz");
        assert_eq!(format_amount(dec!(0.125)), "0.12 Kz");
    }
}
