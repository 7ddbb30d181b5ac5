use serde::{Deserialize, Serialize};

/// A DOM change produced on the client side of a widget, expressed against
/// arena node ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Mutation {
    SetText {
        id: u64,
        value: String,
    },
    CreateTextNode {
        value: String,
        id: u64,
    },
    AppendChildren {
        id: u64,
        m: Vec<u64>,
    },
    /// Replace node `id` with parsed markup.
    ReplaceWithHtml {
        id: u64,
        html: String,
    },
    /// Insert parsed markup as the first child of `id`.
    PrependHtml {
        id: u64,
        html: String,
    },
    /// The host input store received a new value for `key`.
    InputChanged {
        key: String,
        value: u64,
    },
}
