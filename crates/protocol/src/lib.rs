pub mod flags;
pub mod vnode;

pub use flags::{CardPhase, MessageKind, NavFlags};
pub use vnode::ViewNode;
