//! File system backed asset listing

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::interfaces::{AssetLister, is_image_file};

/// Lists asset folders relative to a workspace root
#[derive(Debug, Clone)]
pub struct FsAssetLister {
    root: PathBuf,
}

impl FsAssetLister {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn folder_path(&self, folder: &str) -> PathBuf {
        self.root.join(folder.trim_start_matches(['/', '\\']))
    }
}

impl AssetLister for FsAssetLister {
    fn list_images(&self, folder: &str) -> Vec<String> {
        let path = self.folder_path(folder);
        let entries = match std::fs::read_dir(&path) {
            Ok(entries) => entries,
            Err(e) => {
                debug!("asset folder {:?} not readable: {}", path, e);
                return Vec::new();
            }
        };

        let mut images: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| is_image_file(name))
            .collect();
        images.sort();
        images
    }
}

/// Path of an asset file as the host should open it
pub fn resolve_asset_file(root: &Path, folder: &str, file_name: &str) -> PathBuf {
    FsAssetLister::new(root).folder_path(folder).join(file_name)
}
