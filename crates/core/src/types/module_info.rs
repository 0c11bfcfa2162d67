use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::parameter::ParameterDescriptor;

/// A `load_folder(...)` reference and the images found in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetFolder {
    pub path: String,
    pub contents: Vec<String>,
}

/// Referenced folder path -> image file names present at scan time
pub type AssetFolderListing = BTreeMap<String, Vec<String>>;

/// Grouped view of a scan, used for presentation only
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleInfo {
    pub global_config: Vec<ParameterDescriptor>,
    pub init_params: Vec<ParameterDescriptor>,
    pub asset_folders: Vec<AssetFolder>,
}

impl ModuleInfo {
    /// Shape used for JSON and shader documents: every descriptor is config
    pub fn all_global(parameters: &[ParameterDescriptor]) -> Self {
        Self {
            global_config: parameters.to_vec(),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.global_config.is_empty() && self.init_params.is_empty() && self.asset_folders.is_empty()
    }
}
