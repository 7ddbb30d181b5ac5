use crate::dependency::Dependency;
use crate::error::CoreError;
use slotmap::{Key, KeyData, SlotMap, new_key_type};
use smallvec::SmallVec;
use std::borrow::Cow;

new_key_type! {
    pub struct NodeId;
}

/// Stable numeric form of a node id, as carried by mutations and messages.
pub fn ffi_id(id: NodeId) -> u64 {
    id.data().as_ffi()
}

pub fn node_from_ffi(id: u64) -> NodeId {
    NodeId::from(KeyData::from_ffi(id))
}

pub struct GenericArena<T> {
    items: SlotMap<NodeId, T>,
}

impl<T> Default for GenericArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> GenericArena<T> {
    pub fn new() -> Self {
        Self {
            items: SlotMap::with_key(),
        }
    }
    pub fn insert(&mut self, item: T) -> NodeId {
        self.items.insert(item)
    }
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.items.get(id)
    }
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.items.get_mut(id)
    }
    pub fn remove(&mut self, id: NodeId) -> Option<T> {
        self.items.remove(id)
    }
    pub fn contains(&self, id: NodeId) -> bool {
        self.items.contains_key(id)
    }
    pub fn len(&self) -> usize {
        self.items.len()
    }
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum VirtualNode {
    Element(Element),
    Text(Text),
    Fragment(Fragment),
    /// Trusted markup emitted verbatim.
    Raw(Raw),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub props: SmallVec<[Attribute; 4]>,
    pub children: SmallVec<[NodeId; 4]>,
    pub parent: Option<NodeId>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            props: SmallVec::new(),
            children: SmallVec::new(),
            parent: None,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.props
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: Cow<'static, str>,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub text: String,
    pub parent: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Fragment {
    pub children: SmallVec<[NodeId; 4]>,
    pub parent: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Raw {
    pub html: String,
    pub parent: Option<NodeId>,
}

impl VirtualNode {
    pub fn parent(&self) -> Option<NodeId> {
        match self {
            VirtualNode::Element(el) => el.parent,
            VirtualNode::Text(t) => t.parent,
            VirtualNode::Fragment(f) => f.parent,
            VirtualNode::Raw(r) => r.parent,
        }
    }

    fn set_parent(&mut self, parent: Option<NodeId>) {
        match self {
            VirtualNode::Element(el) => el.parent = parent,
            VirtualNode::Text(t) => t.parent = parent,
            VirtualNode::Fragment(f) => f.parent = parent,
            VirtualNode::Raw(r) => r.parent = parent,
        }
    }

    pub fn children(&self) -> &[NodeId] {
        match self {
            VirtualNode::Element(el) => &el.children,
            VirtualNode::Fragment(f) => &f.children,
            VirtualNode::Text(_) | VirtualNode::Raw(_) => &[],
        }
    }

    fn children_mut(&mut self) -> Option<&mut SmallVec<[NodeId; 4]>> {
        match self {
            VirtualNode::Element(el) => Some(&mut el.children),
            VirtualNode::Fragment(f) => Some(&mut f.children),
            VirtualNode::Text(_) | VirtualNode::Raw(_) => None,
        }
    }
}

/// Owns every node of a markup tree together with the page dependencies the
/// tree's widgets asked for.
pub struct VDomArena {
    pub nodes: GenericArena<VirtualNode>,
    dependencies: Vec<Dependency>,
}

impl Default for VDomArena {
    fn default() -> Self {
        Self::new()
    }
}

impl VDomArena {
    pub fn new() -> Self {
        Self {
            nodes: GenericArena::new(),
            dependencies: Vec::new(),
        }
    }

    pub fn insert(&mut self, node: VirtualNode) -> NodeId {
        self.nodes.insert(node)
    }

    pub fn text(&mut self, text: impl Into<String>) -> NodeId {
        self.insert(VirtualNode::Text(Text {
            text: text.into(),
            parent: None,
        }))
    }

    pub fn raw(&mut self, html: impl Into<String>) -> NodeId {
        self.insert(VirtualNode::Raw(Raw {
            html: html.into(),
            parent: None,
        }))
    }

    pub fn fragment(&mut self, children: &[NodeId]) -> Result<NodeId, CoreError> {
        let id = self.insert(VirtualNode::Fragment(Fragment::default()));
        for &child in children {
            self.append_child(id, child)?;
        }
        Ok(id)
    }

    pub fn get(&self, id: NodeId) -> Option<&VirtualNode> {
        self.nodes.get(id)
    }

    pub fn element(&self, id: NodeId) -> Result<&Element, CoreError> {
        match self.nodes.get(id) {
            Some(VirtualNode::Element(el)) => Ok(el),
            Some(_) => Err(CoreError::NotAnElement(id)),
            None => Err(CoreError::UnknownNode(id)),
        }
    }

    fn element_mut(&mut self, id: NodeId) -> Result<&mut Element, CoreError> {
        match self.nodes.get_mut(id) {
            Some(VirtualNode::Element(el)) => Ok(el),
            Some(_) => Err(CoreError::NotAnElement(id)),
            None => Err(CoreError::UnknownNode(id)),
        }
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id).ok().and_then(|el| el.attribute(name))
    }

    /// Sets `name`, replacing an existing value in place so attribute order
    /// stays stable.
    pub fn set_attribute(
        &mut self,
        id: NodeId,
        name: impl Into<Cow<'static, str>>,
        value: impl Into<String>,
    ) -> Result<(), CoreError> {
        let el = self.element_mut(id)?;
        let attr = Attribute::new(name, value);
        match el.props.iter_mut().find(|a| a.name == attr.name) {
            Some(existing) => existing.value = attr.value,
            None => el.props.push(attr),
        }
        Ok(())
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(id).map(VirtualNode::children).unwrap_or(&[])
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(VirtualNode::parent)
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), CoreError> {
        self.insert_child(parent, child, None)
    }

    pub fn insert_child_at(&mut self, parent: NodeId, child: NodeId, index: usize) -> Result<(), CoreError> {
        self.insert_child(parent, child, Some(index))
    }

    pub fn prepend_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), CoreError> {
        self.insert_child(parent, child, Some(0))
    }

    fn insert_child(
        &mut self,
        parent: NodeId,
        child: NodeId,
        index: Option<usize>,
    ) -> Result<(), CoreError> {
        if !self.nodes.contains(child) {
            return Err(CoreError::UnknownNode(child));
        }
        let children = self
            .nodes
            .get_mut(parent)
            .ok_or(CoreError::UnknownNode(parent))?
            .children_mut()
            .ok_or(CoreError::NotAContainer(parent))?;
        match index {
            Some(i) => children.insert(i.min(children.len()), child),
            None => children.push(child),
        }
        if let Some(node) = self.nodes.get_mut(child) {
            node.set_parent(Some(parent));
        }
        Ok(())
    }

    /// Swaps `old` for `new` in its parent's child list and drops the old
    /// subtree.
    pub fn replace(&mut self, old: NodeId, new: NodeId) -> Result<(), CoreError> {
        let parent = self.parent(old).ok_or(CoreError::UnknownNode(old))?;
        if !self.nodes.contains(new) {
            return Err(CoreError::UnknownNode(new));
        }
        if let Some(children) = self.nodes.get_mut(parent).and_then(VirtualNode::children_mut) {
            for slot in children.iter_mut().filter(|slot| **slot == old) {
                *slot = new;
            }
        }
        if let Some(node) = self.nodes.get_mut(new) {
            node.set_parent(Some(parent));
        }
        self.drop_subtree(old);
        Ok(())
    }

    /// Detaches `id` from its parent and frees it with all its descendants.
    pub fn remove(&mut self, id: NodeId) {
        if let Some(parent) = self.parent(id) {
            if let Some(children) = self.nodes.get_mut(parent).and_then(VirtualNode::children_mut) {
                children.retain(|c| *c != id);
            }
        }
        self.drop_subtree(id);
    }

    fn drop_subtree(&mut self, id: NodeId) {
        if let Some(node) = self.nodes.remove(id) {
            for &child in node.children() {
                self.drop_subtree(child);
            }
        }
    }

    /// The next sibling of `id` that is an element, skipping text and raw
    /// nodes.
    pub fn next_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id)?;
        self.children(parent)
            .iter()
            .skip_while(|&&c| c != id)
            .skip(1)
            .copied()
            .find(|&c| matches!(self.nodes.get(c), Some(VirtualNode::Element(_))))
    }

    /// Concatenated text of every text node below `id`.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match self.nodes.get(id) {
            Some(VirtualNode::Text(t)) => out.push_str(&t.text),
            Some(node) => {
                for &child in node.children() {
                    self.collect_text(child, out);
                }
            }
            None => {}
        }
    }

    /// Replaces every child of `id` with a single text node and returns it.
    pub fn set_text_content(&mut self, id: NodeId, text: impl Into<String>) -> Result<NodeId, CoreError> {
        if let Some(VirtualNode::Text(t)) = self.nodes.get_mut(id) {
            t.text = text.into();
            return Ok(id);
        }
        let old: SmallVec<[NodeId; 4]> = self
            .nodes
            .get(id)
            .ok_or(CoreError::UnknownNode(id))?
            .children()
            .into();
        for child in old {
            self.remove(child);
        }
        let text_id = self.text(text);
        self.append_child(id, text_id)?;
        Ok(text_id)
    }

    /// All nodes under `root` (inclusive) in document order.
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if let Some(node) = self.nodes.get(id) {
                out.push(id);
                stack.extend(node.children().iter().rev());
            }
        }
        out
    }

    /// Registers a page dependency. Later requests for the same name are
    /// ignored.
    pub fn require(&mut self, dependency: Dependency) {
        if self.dependencies.iter().any(|d| d.name == dependency.name) {
            return;
        }
        tracing::debug!("Registering page dependency {}@{}", dependency.name, dependency.version);
        self.dependencies.push(dependency);
    }

    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }
}
