use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, trace};

use crate::{
    patterns::{ScanPass, ScanState},
    types::AssetFolder,
};

static LOAD_FOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"load_folder\s*\(\s*['"]([^'"]+)['"](?:\s*,\s*[^)]+)?\)"#).unwrap()
});

/// `load_folder('path')` references and the images found there
pub struct AssetFolderPass;

impl ScanPass for AssetFolderPass {
    fn name(&self) -> &'static str {
        "asset-folders"
    }

    fn scan(&self, state: &mut ScanState<'_>) {
        let mut found = 0;

        for caps in LOAD_FOLDER_RE.captures_iter(state.text) {
            let path = caps[1].to_string();
            let contents = state.context.assets.list_images(&path);
            trace!("asset folder '{}' has {} images", path, contents.len());

            state.asset_folders.insert(path.clone(), contents.clone());
            state.module_info.asset_folders.push(AssetFolder { path, contents });
            found += 1;
        }

        debug!("{}: {} folders", self.name(), found);
    }
}
