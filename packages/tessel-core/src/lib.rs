pub mod builder;
pub mod dependency;
pub mod error;
pub mod input;
pub mod mutations;
pub mod session;
pub mod vdom;

pub use builder::{ElementBuilder, el};
pub use dependency::{Dependency, DependencyKind};
pub use error::CoreError;
pub use input::InputStore;
pub use mutations::Mutation;
pub use session::{InputMessage, MessageBuffer, Session};
pub use vdom::{Attribute, Element, Fragment, NodeId, Raw, Text, VDomArena, VirtualNode, ffi_id, node_from_ffi};
