use crate::assets::{counter_dependency, fomantic_dependency};
use crate::classes::join_classes;
use crate::grouping::group_digits;
use crate::icon::Icon;
use crate::options::CounterOptions;
use crate::error::WidgetError;
use tessel_core::{NodeId, VDomArena, el};

/// Marks the clickable element so the client handler can find it.
pub const COUNTER_MARKER: &str = "data-tessel-counter";
pub const VALUE_ATTR: &str = "data-value";
pub const SEPARATOR_ATTR: &str = "data-separator";

const RESERVED_ATTRIBUTES: &[&str] = &["id", "class", VALUE_ATTR, SEPARATOR_ATTR, COUNTER_MARKER];

/// Node ids of a rendered counter. Bindings hold on to these instead of
/// searching the tree by selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterHandle {
    pub container: NodeId,
    pub button: NodeId,
    pub value_label: NodeId,
}

/// A Fomantic UI labeled button whose label counts clicks.
///
/// ```
/// use tessel_core::VDomArena;
/// use tessel_widgets::CounterButton;
///
/// let mut arena = VDomArena::new();
/// let handle = CounterButton::new("likes")
///     .label("Like")
///     .value(1234567)
///     .render(&mut arena);
/// assert_eq!(arena.text_content(handle.value_label), "1 234 567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterButton {
    id: String,
    options: CounterOptions,
}

impl CounterButton {
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_options(id, CounterOptions::default())
    }

    pub fn with_options(id: impl Into<String>, options: CounterOptions) -> Self {
        Self {
            id: id.into(),
            options,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn options(&self) -> &CounterOptions {
        &self.options
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.options.label = label.into();
        self
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.options.icon = Some(icon);
        self
    }

    pub fn value(mut self, value: u64) -> Self {
        self.options.value = value;
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.options.color = color.into();
        self
    }

    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.options.size = size.into();
        self
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.options.separator = separator.into();
        self
    }

    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.attributes.insert(name.into(), value.into());
        self
    }

    /// Classes of the clickable element: size, color, then the fixed
    /// `ui button`.
    pub fn button_class(&self) -> String {
        join_classes([self.options.size.as_str(), self.options.color.as_str(), "ui", "button"])
    }

    fn value_label_class(&self) -> String {
        join_classes(["ui", "basic", self.options.color.as_str(), "left", "pointing", "label"])
    }

    /// Builds the widget into `arena` and registers the page dependencies
    /// it needs. Never fails; an empty id is rendered as given.
    pub fn render(&self, arena: &mut VDomArena) -> CounterHandle {
        let opts = &self.options;
        if self.id.is_empty() {
            tracing::warn!("Rendering counter button without an id; its clicks cannot be bound");
        }

        let mut button = el("div")
            .attr("id", self.id.clone())
            .class(self.button_class())
            .attr(VALUE_ATTR, opts.value.to_string())
            .attr(SEPARATOR_ATTR, opts.separator.clone())
            .attr(COUNTER_MARKER, "");
        for (name, value) in &opts.attributes {
            if RESERVED_ATTRIBUTES.contains(&name.as_str()) {
                tracing::warn!("Counter {}: ignoring reserved attribute {}", self.id, name);
                continue;
            }
            button = button.attr(name.clone(), value.clone());
        }
        if let Some(icon) = &opts.icon {
            button = button.child(icon.render(arena));
        }
        let label = arena.text(opts.label.clone());
        let button = button.child(label).build(arena);

        let shown = arena.text(group_digits(opts.value, &opts.separator));
        let value_label = el("a").class(self.value_label_class()).child(shown).build(arena);

        let container = el("div")
            .class("ui labeled button")
            .attr("tabindex", "0")
            .children([button, value_label])
            .build(arena);

        arena.require(fomantic_dependency());
        arena.require(counter_dependency());

        tracing::debug!("Rendered counter button {}", self.id);
        CounterHandle {
            container,
            button,
            value_label,
        }
    }

    /// Renders the widget and appends it to `parent`.
    pub fn mount(&self, arena: &mut VDomArena, parent: NodeId) -> Result<CounterHandle, WidgetError> {
        let handle = self.render(arena);
        arena.append_child(parent, handle.container)?;
        Ok(handle)
    }
}
