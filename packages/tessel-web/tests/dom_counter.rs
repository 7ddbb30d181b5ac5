#![cfg(target_arch = "wasm32")]

use tessel_core::VDomArena;
use tessel_ssr::render_to_string;
use tessel_web::dom::{bind_counters, update_counter_button};
use tessel_widgets::{COUNTER_SCRIPT, CounterButton, Icon};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn install(id: &str, counter: CounterButton) -> web_sys::Element {
    let mut arena = VDomArena::new();
    let handle = counter.render(&mut arena);
    let html = render_to_string(&arena, handle.container).unwrap();

    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    root.set_id(id);
    root.set_inner_html(&html);
    document.body().unwrap().append_child(&root).unwrap();
    root
}

fn click(id: &str) {
    let document = web_sys::window().unwrap().document().unwrap();
    let button = document.get_element_by_id(id).unwrap();
    button.dyn_ref::<web_sys::HtmlElement>().unwrap().click();
}

fn label_text(root: &web_sys::Element) -> String {
    root.query_selector("a.label").unwrap().unwrap().text_content().unwrap()
}

#[wasm_bindgen_test]
fn test_dom_counter() {
    let root = install("root-a", CounterButton::new("dom-a").value(999).separator(","));
    assert!(bind_counters().unwrap() >= 1);

    assert_eq!(label_text(&root), "999");
    click("dom-a");
    assert_eq!(label_text(&root), "1,000");
}

#[wasm_bindgen_test]
fn test_dom_update_keeps_icon() {
    let root = install("root-b", CounterButton::new("dom-b").label("Like").icon(Icon::new("heart")));
    bind_counters().unwrap();

    update_counter_button("dom-b", r#"{ "label": "Loved" }"#).unwrap();

    let button = root.query_selector("#dom-b").unwrap().unwrap();
    assert_eq!(button.inner_html(), "<i class=\"heart icon\"></i>Loved");
}

fn run_counter_script() {
    js_sys::eval(COUNTER_SCRIPT).unwrap();
}

#[wasm_bindgen_test]
fn test_script_groups_after_click() {
    let root = install("root-js-a", CounterButton::new("js-a").value(999).separator(","));
    run_counter_script();

    click("js-a");
    assert_eq!(label_text(&root), "1,000");
}

#[wasm_bindgen_test]
fn test_script_binds_once() {
    let root = install("root-js-once", CounterButton::new("js-once").value(5));
    run_counter_script();
    run_counter_script();

    click("js-once");
    assert_eq!(label_text(&root), "6");
}

#[wasm_bindgen_test]
fn test_script_escapes_separator() {
    let root = install("root-js-dot", CounterButton::new("js-dot").value(1_999).separator("."));
    run_counter_script();

    click("js-dot");
    assert_eq!(label_text(&root), "2.000");
}

#[wasm_bindgen_test]
fn test_script_counts_past_float_precision() {
    let root = install("root-js-big", CounterButton::new("js-big").value(9_007_199_254_740_993));
    run_counter_script();

    click("js-big");
    assert_eq!(label_text(&root), "9 007 199 254 740 994");
}

#[wasm_bindgen_test]
fn test_script_overflow_is_nan() {
    let root = install("root-js-max", CounterButton::new("js-max").value(u64::MAX).separator(""));
    run_counter_script();

    click("js-max");
    assert_eq!(label_text(&root), "NaN");
}

#[wasm_bindgen_test]
fn test_script_reports_click_count() {
    let root = install("root-js-input", CounterButton::new("js-input").value(41));
    run_counter_script();
    js_sys::eval(
        r#"document.getElementById("js-input").addEventListener("tessel:input", function (e) {
            window.lastTesselInput = e.detail;
        });"#,
    )
    .unwrap();

    click("js-input");
    click("js-input");
    assert_eq!(label_text(&root), "43");
    let value = js_sys::eval("window.lastTesselInput.value").unwrap();
    assert_eq!(value.as_f64(), Some(2.0));
    let id = js_sys::eval("window.lastTesselInput.id").unwrap();
    assert_eq!(id.as_string().as_deref(), Some("js-input"));
}

#[wasm_bindgen_test]
fn test_script_update_keeps_icon() {
    let root = install("root-js-b", CounterButton::new("js-b").label("Like").icon(Icon::new("heart")));
    run_counter_script();

    js_sys::eval(r#"window.tessel.updateCounterButton("js-b", { label: "Loved" });"#).unwrap();

    let button = root.query_selector("#js-b").unwrap().unwrap();
    assert_eq!(button.inner_html(), "<i class=\"heart icon\"></i>Loved");
}
