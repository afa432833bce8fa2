//! A module to build todo contents

use super::SEPARATOR;

/// Append a due date to a text.
///
/// A missing or blank `date` leaves the text unchanged.
pub fn build_from(text: &str, date: Option<&str>) -> String {
    match date.map(str::trim) {
        Some(date) if date.is_empty() == false => format!("{}{}{}", text, SEPARATOR, date),
        _ => text.to_string(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_build() {
        assert_eq!(build_from("Buy milk", Some("2024-03-05")), "Buy milk||2024-03-05");
        assert_eq!(build_from("Buy milk", None), "Buy milk");
        assert_eq!(build_from("Buy milk", Some("")), "Buy milk");
        assert_eq!(build_from("Buy milk", Some("  ")), "Buy milk");
    }
}
