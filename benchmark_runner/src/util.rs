//!
//! Utility functions.
//!

///
/// Rounds `value` to two decimal places.
///
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

///
/// Converts bytes into megabytes.
///
pub fn bytes_to_megabytes(bytes: u64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}

///
/// Returns the arithmetic mean, or `None` for an empty slice.
///
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    Some(values.iter().sum::<f64>() / values.len() as f64)
}

///
/// Truncates `text` to at most `limit` characters.
///
pub fn excerpt(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

///
/// Quotes a CSV text field, doubling the embedded quotes.
///
pub fn csv_quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
