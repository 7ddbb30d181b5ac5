use tessel_widgets::{DigitGrouping, WidgetError};

/// What one click produced: the new value-label text (if the counter has a
/// label) and the host-facing click count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickOutcome {
    pub label: Option<String>,
    pub clicks: u64,
}

/// Per-widget client state. The click count is kept apart from the label so
/// the host sees how often the button was pressed, whatever the label says.
#[derive(Debug, Clone)]
pub struct CounterBinding {
    grouping: DigitGrouping,
    clicks: u64,
}

impl CounterBinding {
    pub fn new(separator: &str) -> Result<Self, WidgetError> {
        Ok(Self {
            grouping: DigitGrouping::new(separator)?,
            clicks: 0,
        })
    }

    pub fn clicks(&self) -> u64 {
        self.clicks
    }

    pub fn click(&mut self, label_text: Option<&str>) -> ClickOutcome {
        self.clicks += 1;
        ClickOutcome {
            label: label_text.map(|text| self.grouping.increment(text)),
            clicks: self.clicks,
        }
    }
}
