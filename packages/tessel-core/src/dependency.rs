/// Something a widget needs present once in the page `<head>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub name: &'static str,
    pub version: &'static str,
    pub kind: DependencyKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyKind {
    /// Script body emitted inside a `<script>` tag.
    InlineScript(&'static str),
    Script { src: &'static str },
    Stylesheet { href: &'static str },
}
