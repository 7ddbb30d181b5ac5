use tessel_core::*;

#[test]
fn test_remove_frees_whole_subtree() {
    let mut arena = VDomArena::new();
    let leaf = arena.text("leaf");
    let inner = el("span").child(leaf).build(&mut arena);
    let keep = arena.text("keep");
    let root = el("div").children([inner, keep]).build(&mut arena);
    assert_eq!(arena.nodes.len(), 4);

    arena.remove(inner);

    assert_eq!(arena.nodes.len(), 2);
    assert!(arena.get(leaf).is_none());
    assert_eq!(arena.children(root), &[keep]);
}

#[test]
fn test_ffi_ids_round_trip() {
    let mut arena = VDomArena::new();
    let node = el("div").build(&mut arena);
    assert_eq!(node_from_ffi(ffi_id(node)), node);
}

#[test]
fn test_fragment_children_get_parent() {
    let mut arena = VDomArena::new();
    let a = arena.text("a");
    let b = arena.text("b");
    let frag = arena.fragment(&[a, b]).unwrap();
    assert_eq!(arena.parent(a), Some(frag));
    assert_eq!(arena.text_content(frag), "ab");
}

#[test]
fn test_builder_skips_missing_children() {
    let mut arena = VDomArena::new();
    let gone = arena.text("gone");
    arena.remove(gone);
    let root = el("div").class("").child(gone).build(&mut arena);

    assert!(arena.children(root).is_empty());
    assert_eq!(arena.attribute(root, "class"), None);
}

#[test]
fn test_element_errors() {
    let mut arena = VDomArena::new();
    let text = arena.text("t");
    assert_eq!(arena.element(text).unwrap_err(), CoreError::NotAnElement(text));
    assert_eq!(
        arena.set_attribute(text, "id", "x"),
        Err(CoreError::NotAnElement(text))
    );
}
