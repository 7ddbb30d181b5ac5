use tessel_core::{Dependency, DependencyKind};

/// Client handler shared by every counter on a page. It binds each
/// `[data-tessel-counter]` element once and reads its separator from
/// `data-separator`, so no per-widget script text is generated.
pub const COUNTER_SCRIPT: &str = include_str!("../assets/counter.js");

pub const FOMANTIC_VERSION: &str = "2.9.3";

pub fn counter_dependency() -> Dependency {
    Dependency {
        name: "tessel-counter",
        version: env!("CARGO_PKG_VERSION"),
        kind: DependencyKind::InlineScript(COUNTER_SCRIPT),
    }
}

pub fn fomantic_dependency() -> Dependency {
    Dependency {
        name: "fomantic-ui",
        version: FOMANTIC_VERSION,
        kind: DependencyKind::Stylesheet {
            href: "https://cdn.jsdelivr.net/npm/fomantic-ui@2.9.3/dist/semantic.min.css",
        },
    }
}
