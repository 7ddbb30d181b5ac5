use crate::vdom::{Attribute, Element, NodeId, VDomArena, VirtualNode};
use smallvec::SmallVec;
use std::borrow::Cow;

/// Fluent construction of an element node. Children must already live in the
/// arena the element is built into.
#[derive(Debug, Clone)]
pub struct ElementBuilder {
    tag: &'static str,
    props: SmallVec<[Attribute; 4]>,
    children: SmallVec<[NodeId; 4]>,
}

pub fn el(tag: &'static str) -> ElementBuilder {
    ElementBuilder {
        tag,
        props: SmallVec::new(),
        children: SmallVec::new(),
    }
}

impl ElementBuilder {
    pub fn attr(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        self.props.push(Attribute::new(name, value));
        self
    }

    /// Adds `class` only when the joined value is non-empty.
    pub fn class(self, class: impl Into<String>) -> Self {
        let class = class.into();
        if class.is_empty() { self } else { self.attr("class", class) }
    }

    pub fn child(mut self, child: NodeId) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = NodeId>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn build(self, arena: &mut VDomArena) -> NodeId {
        let children = self.children;
        let id = arena.insert(VirtualNode::Element(Element {
            tag: self.tag,
            props: self.props,
            children: SmallVec::new(),
            parent: None,
        }));
        for child in children {
            if let Err(err) = arena.append_child(id, child) {
                tracing::warn!("Skipping child of <{}>: {}", self.tag, err);
            }
        }
        id
    }
}
