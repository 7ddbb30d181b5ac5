use crate::binding::CounterBinding;
use crate::error::WebError;
use rustc_hash::FxHashMap;
use tessel_core::vdom::node_from_ffi;
use tessel_core::{InputMessage, InputStore, Mutation, NodeId, VDomArena, VirtualNode, ffi_id};
use tessel_widgets::counter::{COUNTER_MARKER, SEPARATOR_ATTR};
use tessel_widgets::options::DEFAULT_SEPARATOR;
use tessel_widgets::{CounterHandle, CounterUpdateMessage};

/// Native stand-in for a browser page: owns a rendered tree, binds its
/// counters the way the client script does, and records every DOM change
/// as a [`Mutation`].
#[derive(Default)]
pub struct Runtime {
    pub arena: VDomArena,
    pub root_node: Option<NodeId>,
    counters: FxHashMap<NodeId, MountedCounter>,
    ids: FxHashMap<String, NodeId>,
    inputs: InputStore,
    mutation_buffer: Vec<Mutation>,
}

struct MountedCounter {
    id: String,
    label: Option<NodeId>,
    binding: CounterBinding,
}

impl Runtime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership of a rendered tree and binds every counter under
    /// `root`, locating each value label by sibling position. Returns the
    /// number of counters bound.
    pub fn mount(&mut self, arena: VDomArena, root: NodeId) -> Result<usize, WebError> {
        tracing::info!("Runtime::mount started");
        self.arena = arena;
        self.root_node = Some(root);
        self.counters.clear();
        self.ids.clear();

        let buttons: Vec<NodeId> = self
            .arena
            .descendants(root)
            .into_iter()
            .filter(|&id| self.arena.attribute(id, COUNTER_MARKER).is_some())
            .collect();
        for &button in &buttons {
            let label = self.arena.next_element_sibling(button);
            self.bind(button, label)?;
        }

        tracing::info!("Mount complete. Bound {} counters.", buttons.len());
        Ok(buttons.len())
    }

    /// Binds a counter whose parts are already known, skipping the sibling
    /// lookup.
    pub fn attach(&mut self, handle: CounterHandle) -> Result<(), WebError> {
        self.bind(handle.button, Some(handle.value_label))
    }

    fn bind(&mut self, button: NodeId, label: Option<NodeId>) -> Result<(), WebError> {
        let el = self.arena.element(button)?;
        let id = el.attribute("id").unwrap_or_default().to_string();
        let separator = el.attribute(SEPARATOR_ATTR).unwrap_or(DEFAULT_SEPARATOR);
        let binding = CounterBinding::new(separator)?;

        if label.is_none() {
            tracing::warn!("Counter {:?} has no value label; clicks only reach the host", id);
        }
        match self.ids.get(&id) {
            Some(&first) if first != button => {
                tracing::warn!("Duplicate counter id {:?}; lookups resolve to the first one", id);
            }
            Some(_) => {}
            None => {
                self.ids.insert(id.clone(), button);
            }
        }
        self.counters.insert(button, MountedCounter { id, label, binding });
        Ok(())
    }

    pub fn handle_event(&mut self, node_id: u64, event_name: &str) -> Result<(), WebError> {
        let node = node_from_ffi(node_id);
        tracing::debug!("Runtime handling event '{}' for node {:?}", event_name, node);
        if !self.counters.contains_key(&node) {
            return Err(WebError::UnknownNode(node_id));
        }
        match event_name {
            "click" => self.click_node(node),
            _ => Ok(()),
        }
    }

    /// Clicks the counter registered under `id`.
    pub fn click(&mut self, id: &str) -> Result<(), WebError> {
        let node = self.button(id)?;
        self.click_node(node)
    }

    fn click_node(&mut self, node: NodeId) -> Result<(), WebError> {
        let counter = self
            .counters
            .get_mut(&node)
            .ok_or(WebError::UnknownNode(ffi_id(node)))?;

        let text = counter.label.map(|label| self.arena.text_content(label));
        let outcome = counter.binding.click(text.as_deref());

        if let (Some(label), Some(next)) = (counter.label, outcome.label) {
            self.arena.set_text_content(label, next.clone())?;
            self.mutation_buffer.push(Mutation::SetText {
                id: ffi_id(label),
                value: next,
            });
        }

        self.inputs.set(&counter.id, outcome.clicks);
        self.mutation_buffer.push(Mutation::InputChanged {
            key: counter.id.clone(),
            value: outcome.clicks,
        });
        Ok(())
    }

    /// Applies a counter update message sent through a session.
    pub fn apply_input_message(&mut self, id: &str, message: &serde_json::Value) -> Result<(), WebError> {
        let update: CounterUpdateMessage = serde_json::from_value(message.clone())?;
        let button = self.button(id)?;

        if let Some(html) = update.icon {
            let icon = self.arena.raw(html.clone());
            match self.current_icon(button) {
                Some(old) => {
                    self.mutation_buffer.push(Mutation::ReplaceWithHtml { id: ffi_id(old), html });
                    self.arena.replace(old, icon)?;
                }
                None => {
                    self.arena.prepend_child(button, icon)?;
                    self.mutation_buffer.push(Mutation::PrependHtml {
                        id: ffi_id(button),
                        html,
                    });
                }
            }
        }

        if let Some(label) = update.label {
            let text = self
                .arena
                .children(button)
                .iter()
                .copied()
                .find(|&c| matches!(self.arena.get(c), Some(VirtualNode::Text(_))));
            match text {
                Some(text) => {
                    self.arena.set_text_content(text, label.clone())?;
                    self.mutation_buffer.push(Mutation::SetText {
                        id: ffi_id(text),
                        value: label,
                    });
                }
                None => {
                    let text = self.arena.text(label.clone());
                    self.arena.append_child(button, text)?;
                    self.mutation_buffer.push(Mutation::CreateTextNode {
                        value: label,
                        id: ffi_id(text),
                    });
                    self.mutation_buffer.push(Mutation::AppendChildren {
                        id: ffi_id(button),
                        m: vec![ffi_id(text)],
                    });
                }
            }
        }
        Ok(())
    }

    /// Applies queued session messages in order.
    pub fn deliver(&mut self, messages: impl IntoIterator<Item = InputMessage>) -> Result<(), WebError> {
        for message in messages {
            self.apply_input_message(&message.id, &message.message)?;
        }
        Ok(())
    }

    // Either a rendered <i> or markup swapped in by an earlier update.
    fn current_icon(&self, button: NodeId) -> Option<NodeId> {
        self.arena.children(button).iter().copied().find(|&c| match self.arena.get(c) {
            Some(VirtualNode::Element(el)) => el.tag == "i",
            Some(VirtualNode::Raw(_)) => true,
            _ => false,
        })
    }

    fn button(&self, id: &str) -> Result<NodeId, WebError> {
        self.ids
            .get(id)
            .copied()
            .ok_or_else(|| WebError::UnknownWidget(id.to_string()))
    }

    pub fn button_node(&self, id: &str) -> Option<NodeId> {
        self.ids.get(id).copied()
    }

    pub fn label_text(&self, id: &str) -> Option<String> {
        let node = self.ids.get(id)?;
        let label = self.counters.get(node)?.label?;
        Some(self.arena.text_content(label))
    }

    pub fn clicks(&self, id: &str) -> Option<u64> {
        let node = self.ids.get(id)?;
        self.counters.get(node).map(|c| c.binding.clicks())
    }

    pub fn inputs(&self) -> &InputStore {
        &self.inputs
    }

    pub fn drain_mutations(&mut self) -> Vec<Mutation> {
        std::mem::take(&mut self.mutation_buffer)
    }

    /// Current markup of the mounted tree.
    pub fn html(&self) -> Result<String, WebError> {
        let root = self.root_node.ok_or(WebError::NotMounted)?;
        Ok(tessel_ssr::render_to_string(&self.arena, root)?)
    }
}
