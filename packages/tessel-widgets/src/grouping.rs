//! Thousands grouping for counter labels.
//!
//! The server formats the initial value with [`group_digits`]; the client
//! reverses it with [`DigitGrouping::parse`] before every increment. The
//! separator is matched literally, so `"."` or `"|"` are safe. A separator
//! that is itself a digit, or empty, is not special-cased: such labels do not
//! survive a format/parse round trip.

use crate::error::WidgetError;
use regex::Regex;
use std::borrow::Cow;
use std::fmt;

/// Inserts `separator` every three digits counted from the right.
pub fn group_digits(value: u64, separator: &str) -> String {
    let digits = value.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + separator.len() * (len / 3));
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

/// What a counter label holds once the separators are stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelValue {
    Number(u64),
    /// The label text was not a grouped integer, e.g. after outside edits.
    NotANumber,
}

impl fmt::Display for LabelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelValue::Number(n) => write!(f, "{}", n),
            LabelValue::NotANumber => f.write_str("NaN"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DigitGrouping {
    separator: String,
    pattern: Regex,
}

impl DigitGrouping {
    pub fn new(separator: impl Into<String>) -> Result<Self, WidgetError> {
        let separator = separator.into();
        let pattern = Regex::new(&regex::escape(&separator))?;
        Ok(Self { separator, pattern })
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn format(&self, value: u64) -> String {
        group_digits(value, &self.separator)
    }

    pub fn strip<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(text, "")
    }

    pub fn parse(&self, text: &str) -> LabelValue {
        let digits = self.strip(text.trim());
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return LabelValue::NotANumber;
        }
        digits
            .parse()
            .map(LabelValue::Number)
            .unwrap_or(LabelValue::NotANumber)
    }

    pub fn display(&self, value: LabelValue) -> String {
        match value {
            LabelValue::Number(n) => self.format(n),
            LabelValue::NotANumber => LabelValue::NotANumber.to_string(),
        }
    }

    /// Label text after one click: parse, add one, re-group. A label that
    /// no longer parses stays `NaN`.
    pub fn increment(&self, text: &str) -> String {
        let next = match self.parse(text) {
            LabelValue::Number(n) => n.checked_add(1).map_or(LabelValue::NotANumber, LabelValue::Number),
            LabelValue::NotANumber => LabelValue::NotANumber,
        };
        self.display(next)
    }
}
