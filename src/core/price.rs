// src/core/price.rs
//
// Prices are stored as display text ("$1,299.99", "€ 19,99", "From 5"),
// so every numeric use goes through here. The rule is deliberately dumb:
// drop everything that isn't a digit or '.', then read the longest leading
// decimal number. Currency and locale are ignored ("19,99" reads as 1999).

/// Numeric value of a display price, or None when nothing number-like is left.
pub fn parse_price(text: &str) -> Option<f64> {
    let kept: String = text.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();
    leading_decimal(&kept)
}

/// Longest prefix of the form `digits [. digits]` (either side may be empty,
/// but at least one digit overall). "1.2.3" → 1.2, "." → None.
fn leading_decimal(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0usize;
    let mut digits = 0usize;
    let mut seen_dot = false;

    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => digits += 1,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }

    if digits == 0 {
        return None;
    }
    let slice = s[..end].trim_end_matches('.');
    let slice = if slice.starts_with('.') { format!("0{slice}") } else { s!(slice) };
    slice.parse::<f64>().ok()
}

/// Two-decimal rendering used for totals ("25.00").
pub fn format_amount(v: f64) -> String {
    format!("{v:.2}")
}
