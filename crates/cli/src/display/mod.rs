pub mod formatter;

pub use formatter::{describe_kind, format_descriptor, print_asset_folders, print_extraction, type_icon};
