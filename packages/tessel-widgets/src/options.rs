use crate::icon::Icon;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_SEPARATOR: &str = " ";

/// Everything a counter button accepts besides its id. Unknown `color` and
/// `size` keywords are passed to the CSS framework untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterOptions {
    pub label: String,
    pub icon: Option<Icon>,
    pub value: u64,
    pub color: String,
    pub size: String,
    pub separator: String,
    /// Extra attributes for the clickable element.
    pub attributes: BTreeMap<String, String>,
}

impl Default for CounterOptions {
    fn default() -> Self {
        Self {
            label: String::new(),
            icon: None,
            value: 0,
            color: String::new(),
            size: String::new(),
            separator: DEFAULT_SEPARATOR.to_string(),
            attributes: BTreeMap::new(),
        }
    }
}
