use crate::classes::join_classes;
use serde::{Deserialize, Serialize};
use tessel_core::{NodeId, VDomArena, el};
use tessel_ssr::escape_html;

/// A Fomantic UI icon, e.g. `Icon::new("plus")` for `<i class="plus icon">`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Icon {
    pub name: String,
}

impl Icon {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn class(&self) -> String {
        join_classes([self.name.as_str(), "icon"])
    }

    pub fn render(&self, arena: &mut VDomArena) -> NodeId {
        el("i").class(self.class()).build(arena)
    }

    pub fn to_html(&self) -> String {
        format!("<i class=\"{}\"></i>", escape_html(&self.class()))
    }
}
