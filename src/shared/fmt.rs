//! Display formatting for prices and price changes.

/// Format a price for display, e.g. `150.0 → "$150.00"`.
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Format a signed change with an explicit sign, e.g. `2.0 → "+2.00"`.
pub fn format_change(change: f64) -> String {
    format!("{:+.2}", change)
}

/// Percentage change relative to the previous close, e.g. `"+1.35%"`.
pub fn format_change_percent(change: f64, previous_close: f64) -> String {
    if previous_close == 0.0 {
        return "+0.00%".to_string();
    }
    format!("{:+.2}%", change / previous_close * 100.0)
}
