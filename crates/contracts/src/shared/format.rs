//! Price formatting for the storefront (Indian rupee, whole units)

/// Groups the integer digits Indian style: last three, then pairs ("1,23,45,678")
fn group_indian(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().rev().collect();
    let mut result = String::with_capacity(chars.len() + chars.len() / 2);

    for (i, c) in chars.iter().enumerate() {
        if i == 3 || (i > 3 && (i - 3) % 2 == 0) {
            result.push(',');
        }
        result.push(*c);
    }

    result.chars().rev().collect()
}

/// Formats an amount as INR without fraction digits
///
/// # Examples
///
/// ```
/// use contracts::shared::format::format_inr;
/// assert_eq!(format_inr(1699.0), "₹1,699");
/// assert_eq!(format_inr(125000.0), "₹1,25,000");
/// ```
pub fn format_inr(value: f64) -> String {
    let rounded = format!("{:.0}", value.abs());
    let sign = if value.round() < 0.0 { "-" } else { "" };
    format!("{}₹{}", sign, group_indian(&rounded))
}

/// "25% OFF" style badge text
pub fn format_discount(percent: u32) -> String {
    format!("{}% OFF", percent)
}
