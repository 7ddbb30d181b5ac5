use crate::error::WidgetError;
use crate::icon::Icon;
use serde::{Deserialize, Serialize};
use tessel_core::Session;

/// Changes to apply to a rendered counter button. Unset fields leave the
/// client's current content alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CounterUpdate {
    pub label: Option<String>,
    pub icon: Option<Icon>,
}

impl CounterUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// Wire form of [`CounterUpdate`]. The icon travels as rendered markup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterUpdateMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl From<&CounterUpdate> for CounterUpdateMessage {
    fn from(update: &CounterUpdate) -> Self {
        Self {
            label: update.label.clone(),
            icon: update.icon.as_ref().map(Icon::to_html),
        }
    }
}

/// Sends `update` to the counter button `id` on the client behind `session`.
pub fn update_counter_button<S: Session + ?Sized>(
    session: &S,
    id: &str,
    update: &CounterUpdate,
) -> Result<(), WidgetError> {
    let message = serde_json::to_value(CounterUpdateMessage::from(update))?;
    session.send_input_message(id, message);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tessel_core::MessageBuffer;

    #[test]
    fn test_label_only_omits_icon() {
        let session = MessageBuffer::new();
        update_counter_button(&session, "likes", &CounterUpdate::new().label("Loved")).unwrap();

        let sent = session.drain();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].id, "likes");
        assert_eq!(sent[0].message, json!({ "label": "Loved" }));
        assert!(sent[0].message.get("icon").is_none());
    }

    #[test]
    fn test_icon_is_sent_as_markup() {
        let session = MessageBuffer::new();
        let update = CounterUpdate::new().icon(Icon::new("star"));
        update_counter_button(&session, "likes", &update).unwrap();
        assert_eq!(session.drain()[0].message, json!({ "icon": "<i class=\"star icon\"></i>" }));
    }

    #[test]
    fn test_empty_update_sends_empty_object() {
        let session = MessageBuffer::new();
        update_counter_button(&session, "likes", &CounterUpdate::new()).unwrap();
        assert_eq!(session.drain()[0].message, json!({}));
    }

    #[test]
    fn test_empty_label_is_still_sent() {
        let session = MessageBuffer::new();
        update_counter_button(&session, "likes", &CounterUpdate::new().label("")).unwrap();
        assert_eq!(session.drain()[0].message, json!({ "label": "" }));
    }
}
