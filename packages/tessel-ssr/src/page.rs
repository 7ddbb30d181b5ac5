use crate::render::{SsrError, escape_html, render_to_string};
use serde::{Deserialize, Serialize};
use tessel_core::{DependencyKind, NodeId, VDomArena};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageOptions {
    pub title: String,
    pub lang: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: "Tessel".to_string(),
            lang: "en".to_string(),
        }
    }
}

/// Renders `root` as the body of a complete document. Every dependency the
/// arena collected lands once in `<head>`, stylesheets first.
pub fn render_page(arena: &VDomArena, root: NodeId, options: &PageOptions) -> Result<String, SsrError> {
    let body = render_to_string(arena, root)?;

    let mut head = String::new();
    head.push_str("<meta charset=\"utf-8\">");
    head.push_str(&format!("<title>{}</title>", escape_html(&options.title)));

    let deps = arena.dependencies();
    for dep in deps {
        if let DependencyKind::Stylesheet { href } = dep.kind {
            head.push_str(&format!("<link rel=\"stylesheet\" href=\"{}\">", escape_html(href)));
        }
    }
    for dep in deps {
        match dep.kind {
            DependencyKind::Script { src } => {
                head.push_str(&format!("<script src=\"{}\"></script>", escape_html(src)));
            }
            DependencyKind::InlineScript(body) => {
                head.push_str(&format!("<script data-dependency=\"{}\">{}</script>", dep.name, body));
            }
            DependencyKind::Stylesheet { .. } => {}
        }
    }

    tracing::debug!("Rendered page with {} dependencies", deps.len());

    Ok(format!(
        "<!DOCTYPE html><html lang=\"{}\"><head>{}</head><body>{}</body></html>",
        escape_html(&options.lang),
        head,
        body
    ))
}
