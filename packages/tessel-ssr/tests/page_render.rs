use futures::StreamExt;
use tessel_core::*;
use tessel_ssr::*;

fn sample_tree(arena: &mut VDomArena) -> NodeId {
    let hello = arena.text("hello");
    let world = arena.text("world");
    let span = el("span").child(world).build(arena);
    let frag = arena.fragment(&[hello, span]).unwrap();
    el("div").attr("class", "ui segment").child(frag).build(arena)
}

#[tokio::test]
async fn test_ssr_streaming_order() {
    let mut arena = VDomArena::new();
    let root = sample_tree(&mut arena);

    let chunks: Vec<String> = Renderer::new(&arena)
        .render_to_stream(root)
        .unwrap()
        .collect()
        .await;

    assert_eq!(
        chunks,
        vec![
            "<div class=\"ui segment\">",
            "hello",
            "<span>",
            "world",
            "</span>",
            "</div>",
        ]
    );
}

#[test]
fn test_page_emits_each_dependency_once() {
    let mut arena = VDomArena::new();
    let root = sample_tree(&mut arena);
    let script = Dependency {
        name: "demo",
        version: "0.1.0",
        kind: DependencyKind::InlineScript("window.demo = 1;"),
    };
    arena.require(script.clone());
    arena.require(script);
    arena.require(Dependency {
        name: "css",
        version: "2.9.3",
        kind: DependencyKind::Stylesheet { href: "https://cdn.example/ui.css" },
    });

    let page = render_page(&arena, root, &PageOptions::default()).unwrap();

    assert!(page.starts_with("<!DOCTYPE html><html lang=\"en\"><head>"));
    assert_eq!(page.matches("window.demo = 1;").count(), 1);
    let css = page.find("ui.css").unwrap();
    let js = page.find("window.demo").unwrap();
    assert!(css < js);
    assert!(page.ends_with("<body><div class=\"ui segment\">hello<span>world</span></div></body></html>"));
}

#[test]
fn test_page_title_is_escaped() {
    let mut arena = VDomArena::new();
    let root = el("div").build(&mut arena);
    let options = PageOptions {
        title: "a <b>".to_string(),
        ..PageOptions::default()
    };
    let page = render_page(&arena, root, &options).unwrap();
    assert!(page.contains("<title>a &lt;b&gt;</title>"));
}
