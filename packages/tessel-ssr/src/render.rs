use futures::stream::{Stream, StreamExt};
use tessel_core::vdom::{NodeId, VDomArena, VirtualNode};
use std::collections::VecDeque;
use std::pin::Pin;
use std::task::{Context, Poll};
use thiserror::Error;

/// Elements that never carry a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SsrError {
    #[error("render root {0:?} is not in the arena")]
    UnknownRoot(NodeId),
}

pub struct SsrStream<'a> {
    arena: &'a VDomArena,
    // Start tag, then children, then a Close marker for the end tag.
    stack: VecDeque<RenderOp>,
}

enum RenderOp {
    Visit(NodeId),
    Close(&'static str),
}

impl<'a> SsrStream<'a> {
    pub fn new(arena: &'a VDomArena, root: NodeId) -> Self {
        let mut stack = VecDeque::new();
        stack.push_front(RenderOp::Visit(root));
        Self { arena, stack }
    }
}

impl<'a> Stream for SsrStream<'a> {
    type Item = String;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let arena = self.arena;
        let op = match self.stack.pop_front() {
            Some(op) => op,
            None => return Poll::Ready(None),
        };

        match op {
            RenderOp::Close(tag) => Poll::Ready(Some(format!("</{}>", tag))),
            RenderOp::Visit(id) => match arena.nodes.get(id) {
                Some(VirtualNode::Element(el)) => {
                    let mut chunk = String::new();
                    chunk.push('<');
                    chunk.push_str(el.tag);

                    for attr in &el.props {
                        chunk.push(' ');
                        chunk.push_str(&attr.name);
                        chunk.push_str("=\"");
                        chunk.push_str(&escape_html(&attr.value));
                        chunk.push('"');
                    }
                    chunk.push('>');

                    if !VOID_ELEMENTS.contains(&el.tag) {
                        self.stack.push_front(RenderOp::Close(el.tag));
                        for &child in el.children.iter().rev() {
                            self.stack.push_front(RenderOp::Visit(child));
                        }
                    }

                    Poll::Ready(Some(chunk))
                }
                Some(VirtualNode::Text(txt)) => Poll::Ready(Some(escape_html(&txt.text))),
                Some(VirtualNode::Raw(raw)) => Poll::Ready(Some(raw.html.clone())),
                Some(VirtualNode::Fragment(frag)) => {
                    for &child in frag.children.iter().rev() {
                        self.stack.push_front(RenderOp::Visit(child));
                    }
                    // Fragments emit nothing themselves.
                    self.poll_next(cx)
                }
                None => {
                    tracing::warn!("Skipping dangling node {:?} during render", id);
                    self.poll_next(cx)
                }
            },
        }
    }
}

pub fn escape_html(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '&' => output.push_str("&amp;"),
            '"' => output.push_str("&quot;"),
            _ => output.push(c),
        }
    }
    output
}

pub struct Renderer<'a> {
    arena: &'a VDomArena,
}

impl<'a> Renderer<'a> {
    pub fn new(arena: &'a VDomArena) -> Self {
        Self { arena }
    }

    pub fn render_to_stream(&self, root_id: NodeId) -> Result<SsrStream<'a>, SsrError> {
        if self.arena.get(root_id).is_none() {
            return Err(SsrError::UnknownRoot(root_id));
        }
        Ok(SsrStream::new(self.arena, root_id))
    }

    pub async fn render_to_string(&self, root_id: NodeId) -> Result<String, SsrError> {
        let chunks: Vec<String> = self.render_to_stream(root_id)?.collect().await;
        Ok(chunks.concat())
    }
}

/// Serializes the tree under `root` into one HTML string.
pub fn render_to_string(arena: &VDomArena, root: NodeId) -> Result<String, SsrError> {
    futures::executor::block_on(Renderer::new(arena).render_to_string(root))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessel_core::el;

    #[test]
    fn test_escapes_text_and_attributes() {
        let mut arena = VDomArena::new();
        let text = arena.text("a < b & c");
        let root = el("span").attr("title", "say \"hi\"").child(text).build(&mut arena);

        assert_eq!(
            render_to_string(&arena, root).unwrap(),
            "<span title=\"say &quot;hi&quot;\">a &lt; b &amp; c</span>"
        );
    }

    #[test]
    fn test_raw_is_verbatim() {
        let mut arena = VDomArena::new();
        let raw = arena.raw("<i class=\"x icon\"></i>");
        let root = el("div").child(raw).build(&mut arena);
        assert_eq!(render_to_string(&arena, root).unwrap(), "<div><i class=\"x icon\"></i></div>");
    }

    #[test]
    fn test_void_elements_have_no_end_tag() {
        let mut arena = VDomArena::new();
        let root = el("link").attr("rel", "stylesheet").build(&mut arena);
        assert_eq!(render_to_string(&arena, root).unwrap(), "<link rel=\"stylesheet\">");
    }

    #[test]
    fn test_unknown_root() {
        let mut arena = VDomArena::new();
        let id = arena.text("gone");
        arena.remove(id);
        assert_eq!(render_to_string(&arena, id), Err(SsrError::UnknownRoot(id)));
    }
}
