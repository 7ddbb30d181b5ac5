pub mod page;
pub mod render;

pub use page::{PageOptions, render_page};
pub use render::{Renderer, SsrError, SsrStream, escape_html, render_to_string};
