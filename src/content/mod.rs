//! This module handles the convention used to embed a due date inside the text of a todo
//!
//! Backends only store a free-text `content`. A due date is appended to it, after a `||` separator: `"Buy milk||2024-03-05"`. \
//! There is no escaping: a text that contains the separator itself cannot be decoded faithfully.

mod parser;
pub use parser::{parse, parse_input};
mod builder;
pub use builder::build_from;

/// What separates the display text from the due date
pub const SEPARATOR: &str = "||";

/// The decoded form of a todo `content`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoContent {
    /// The text that should be displayed
    pub text: String,
    /// The due date, as an ISO `YYYY-MM-DD` string
    pub date: Option<String>,
}

impl TodoContent {
    pub fn new<S: ToString>(text: S, date: Option<String>) -> Self {
        Self { text: text.to_string(), date }
    }

    /// Build the raw `content` that should be sent to a backend
    pub fn encode(&self) -> String {
        build_from(&self.text, self.date.as_deref())
    }

    /// The due date, if it is a valid calendar date
    pub fn due_date(&self) -> Option<chrono::NaiveDate> {
        self.date.as_deref()
            .and_then(|d| chrono::NaiveDate::parse_from_str(d, crate::calendar::ISO_DATE_FORMAT).ok())
    }
}
