//! A module to parse todo contents

use super::{TodoContent, SEPARATOR};

/// Split a raw content on the first separator.
///
/// Everything after the first separator is considered to be the date, even if it contains another separator. \
/// An empty date is reported as `None`, so that it never matches any calendar day.
pub fn parse(content: &str) -> TodoContent {
    match content.split_once(SEPARATOR) {
        None => TodoContent::new(content, None),
        Some((text, date)) => {
            let date = match date.is_empty() {
                true => None,
                false => Some(date.to_string()),
            };
            TodoContent::new(text, date)
        }
    }
}

/// Parse a line typed by a user (e.g. `"Buy milk || 2024-03-05"`).
///
/// Unlike [`parse`], the whitespace around the text and the date is dropped.
pub fn parse_input(line: &str) -> TodoContent {
    let parsed = parse(line.trim());
    let date = parsed.date
        .map(|date| date.trim().to_string())
        .filter(|date| date.is_empty() == false);
    TodoContent::new(parsed.text.trim(), date)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::content::build_from;

    #[test]
    fn test_parse_without_date() {
        let parsed = parse("No date task");
        assert_eq!(parsed.text, "No date task");
        assert_eq!(parsed.date, None);
        assert_eq!(parse(&build_from("No date task", None)), parsed);
    }

    #[test]
    fn test_parse_with_date() {
        let parsed = parse("Buy milk||2024-03-05");
        assert_eq!(parsed, TodoContent::new("Buy milk", Some("2024-03-05".to_string())));
        assert_eq!(parsed.encode(), "Buy milk||2024-03-05");
        assert_eq!(parsed.due_date(), chrono::NaiveDate::from_ymd_opt(2024, 3, 5));
    }

    #[test]
    fn test_parse_edge_cases() {
        // Trailing separator: no phantom date
        assert_eq!(parse("Buy milk||"), TodoContent::new("Buy milk", None));

        // Only the first separator counts
        let parsed = parse("a||b||2024-03-05");
        assert_eq!(parsed.text, "a");
        assert_eq!(parsed.date.as_deref(), Some("b||2024-03-05"));
        assert_eq!(parsed.due_date(), None);

        assert_eq!(parse(""), TodoContent::new("", None));
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input("Buy milk || 2024-03-05"), TodoContent::new("Buy milk", Some("2024-03-05".to_string())));
        assert_eq!(parse_input("  Buy milk||2024-03-05 "), TodoContent::new("Buy milk", Some("2024-03-05".to_string())));
        assert_eq!(parse_input("Buy milk ||  "), TodoContent::new("Buy milk", None));
        assert_eq!(parse_input(" No date task "), TodoContent::new("No date task", None));
        assert_eq!(parse_input("Buy milk || 2024-03-05").encode(), "Buy milk||2024-03-05");
    }
}
