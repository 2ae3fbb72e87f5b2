/// Formats a monetary value with two decimals, e.g. `$12.50` or `$-5.00`.
pub fn format_amount(value: f64) -> String {
    format!("${:.2}", value)
}
