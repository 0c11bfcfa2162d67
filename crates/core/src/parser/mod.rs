//! Lightweight structure discovery over raw script text

pub mod class_index;
pub mod method_body;

// Re-export commonly used items
pub use class_index::{ClassEntry, ClassIndex};
pub use method_body::method_body_end;
