pub mod binding;
#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod error;
pub mod runtime;

pub use binding::{ClickOutcome, CounterBinding};
pub use error::WebError;
pub use runtime::Runtime;

/// Name of the bubbling event a counter dispatches for the host after each
/// click. Its detail is `{ id, value }` where `value` is the click count.
pub const INPUT_EVENT: &str = "tessel:input";
