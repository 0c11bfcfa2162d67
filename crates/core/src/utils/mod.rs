pub mod line_index;
pub mod numeric;
pub mod serde_helpers;

pub use line_index::LineIndex;
pub use numeric::is_numeric_literal;
