use tessel_core::*;
use tessel_ssr::{PageOptions, render_page, render_to_string};
use tessel_widgets::*;

#[test]
fn test_initial_value_is_grouped() {
    let mut arena = VDomArena::new();
    let handle = CounterButton::new("views").value(1234567).separator(" ").render(&mut arena);

    assert_eq!(arena.text_content(handle.value_label), "1 234 567");
    assert_eq!(arena.attribute(handle.button, "data-value"), Some("1234567"));
}

#[test]
fn test_page_with_two_counters_ships_one_script() {
    let mut arena = VDomArena::new();
    let root = el("main").build(&mut arena);
    CounterButton::new("a").label("A").mount(&mut arena, root).unwrap();
    CounterButton::new("b").label("B").value(5).mount(&mut arena, root).unwrap();

    let page = render_page(&arena, root, &PageOptions::default()).unwrap();

    assert_eq!(page.matches("tessel:input").count(), 1);
    assert_eq!(page.matches("semantic.min.css").count(), 1);
    assert_eq!(page.matches("data-tessel-counter=\"\"").count(), 2);
    assert!(page.contains("id=\"a\""));
    assert!(page.contains("id=\"b\""));
}

#[test]
fn test_hostile_id_and_separator_stay_in_attributes() {
    let mut arena = VDomArena::new();
    let handle = CounterButton::new("x\"><script>alert(1)</script>")
        .separator("\"")
        .value(1000)
        .render(&mut arena);

    let html = render_to_string(&arena, handle.container).unwrap();
    assert!(!html.contains("<script>"));
    assert!(html.contains("id=\"x&quot;&gt;&lt;script&gt;alert(1)&lt;/script&gt;\""));
    assert!(html.contains("data-separator=\"&quot;\""));
    assert!(html.contains(">1&quot;000</a>"));
}

#[test]
fn test_options_from_json() {
    let options: CounterOptions = serde_json::from_str(
        r#"{ "label": "Stars", "icon": "star", "value": 42000, "color": "yellow",
             "separator": ",", "attributes": { "title": "Give a star" } }"#,
    )
    .unwrap();

    let mut arena = VDomArena::new();
    let handle = CounterButton::with_options("stars", options).render(&mut arena);

    assert_eq!(arena.text_content(handle.button), "Stars");
    assert_eq!(arena.text_content(handle.value_label), "42,000");
    assert_eq!(arena.attribute(handle.button, "title"), Some("Give a star"));
    assert_eq!(arena.attribute(handle.button, "class"), Some("yellow ui button"));
}

#[test]
fn test_empty_id_still_renders() {
    let mut arena = VDomArena::new();
    let handle = CounterButton::new("").render(&mut arena);
    assert_eq!(arena.attribute(handle.button, "id"), Some(""));
}
