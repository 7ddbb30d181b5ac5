//! Browser binding. Does the same work as the bundled counter script, with
//! the per-widget state held in Rust closures.

use crate::INPUT_EVENT;
use crate::binding::CounterBinding;
use tessel_widgets::CounterUpdateMessage;
use tessel_widgets::counter::{COUNTER_MARKER, SEPARATOR_ATTR};
use tessel_widgets::options::DEFAULT_SEPARATOR;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CustomEvent, CustomEventInit, Document, Element, Event, Node};

const BOUND_ATTR: &str = "data-tessel-bound";

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Binds every counter button on the page that is not bound yet. Returns
/// how many were bound by this call.
#[wasm_bindgen(js_name = bindCounters)]
pub fn bind_counters() -> Result<u32, JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let nodes = document()?.query_selector_all(&format!("[{}]", COUNTER_MARKER))?;
    let mut bound = 0;
    for i in 0..nodes.length() {
        let Some(button) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        if button.has_attribute(BOUND_ATTR) {
            continue;
        }
        bind_counter(button)?;
        bound += 1;
    }
    tracing::debug!("Bound {} counter buttons", bound);
    Ok(bound)
}

fn bind_counter(button: Element) -> Result<(), JsValue> {
    button.set_attribute(BOUND_ATTR, "true")?;

    let label = button.next_element_sibling();
    let separator = button
        .get_attribute(SEPARATOR_ATTR)
        .unwrap_or_else(|| DEFAULT_SEPARATOR.to_string());
    let mut binding = CounterBinding::new(&separator).map_err(to_js)?;

    let target = button.clone();
    let handler = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        let text = label.as_ref().map(|l| l.text_content().unwrap_or_default());
        let outcome = binding.click(text.as_deref());
        if let (Some(label), Some(next)) = (&label, &outcome.label) {
            label.set_text_content(Some(next.as_str()));
        }
        if let Err(err) = notify_host(&target, outcome.clicks) {
            web_sys::console::warn_1(&err);
        }
    });
    button.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
    // The listener lives as long as the page.
    handler.forget();
    Ok(())
}

fn notify_host(button: &Element, clicks: u64) -> Result<(), JsValue> {
    let detail = js_sys::Object::new();
    js_sys::Reflect::set(&detail, &JsValue::from_str("id"), &JsValue::from_str(&button.id()))?;
    js_sys::Reflect::set(&detail, &JsValue::from_str("value"), &JsValue::from_f64(clicks as f64))?;

    let init = CustomEventInit::new();
    init.set_bubbles(true);
    init.set_detail(&detail);
    let event = CustomEvent::new_with_event_init_dict(INPUT_EVENT, &init)?;
    button.dispatch_event(&event)?;
    Ok(())
}

/// Applies a JSON counter update message to the button `id`. Unknown ids
/// are ignored.
#[wasm_bindgen(js_name = updateCounterButton)]
pub fn update_counter_button(id: &str, message: &str) -> Result<(), JsValue> {
    let update: CounterUpdateMessage = serde_json::from_str(message).map_err(to_js)?;
    let document = document()?;
    let Some(button) = document.get_element_by_id(id) else {
        tracing::warn!("updateCounterButton: no element with id {:?}", id);
        return Ok(());
    };

    if let Some(html) = &update.icon {
        let holder = document.create_element("div")?;
        holder.set_inner_html(html);
        if let Some(icon) = holder.first_element_child() {
            match button.query_selector(":scope > i.icon")? {
                Some(old) => {
                    button.replace_child(&icon, &old)?;
                }
                None => {
                    button.insert_before(&icon, button.first_child().as_ref())?;
                }
            }
        }
    }

    if let Some(label) = &update.label {
        let children = button.child_nodes();
        let text = (0..children.length())
            .filter_map(|i| children.get(i))
            .find(|n| n.node_type() == Node::TEXT_NODE);
        match text {
            Some(text) => text.set_node_value(Some(label.as_str())),
            None => {
                button.append_child(&document.create_text_node(label))?;
            }
        }
    }
    Ok(())
}
