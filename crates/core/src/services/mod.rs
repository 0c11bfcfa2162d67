//! Concrete implementations driving the engine

pub mod fs_asset_lister;
pub mod inspector_session;

pub use fs_asset_lister::{FsAssetLister, resolve_asset_file};
pub use inspector_session::{InspectorRequest, InspectorResponse, InspectorSession};
