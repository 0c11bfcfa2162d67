pub mod file;
pub mod parser;

pub use file::{Document, asset_lister, resolve_document};
pub use parser::parse_filepath_with_line;
