//! Host-facing interfaces
//!
//! The extraction engine is a set of pure scans over text. Everything that
//! needs the outside world (asset directories, asking the user for input)
//! goes through the traits here so the host can supply its own.

use std::path::{Path, PathBuf};

pub mod asset_lister;
pub mod prompt;

pub use asset_lister::{AssetLister, IMAGE_EXTENSIONS, NoAssets, is_image_file};
pub use prompt::{FixedAnswer, RenamePrompt};

/// Scan context provided by the host
pub struct ScanContext<'a> {
    /// Path of the scanned document, used for the folder provenance tag
    pub file_path: Option<PathBuf>,
    pub assets: &'a dyn AssetLister,
}

impl<'a> ScanContext<'a> {
    pub fn new(assets: &'a dyn AssetLister) -> Self {
        Self {
            file_path: None,
            assets,
        }
    }

    pub fn with_file_path(mut self, path: impl AsRef<Path>) -> Self {
        self.file_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Name of the directory containing the scanned file, or empty
    pub fn folder_tag(&self) -> String {
        self.file_path
            .as_deref()
            .and_then(Path::parent)
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

impl Default for ScanContext<'static> {
    fn default() -> Self {
        ScanContext::new(&NoAssets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_tag() {
        let context = ScanContext::default().with_file_path("game/entities/player.py");
        assert_eq!(context.folder_tag(), "entities");

        assert_eq!(ScanContext::default().folder_tag(), "");
        assert_eq!(
            ScanContext::default().with_file_path("player.py").folder_tag(),
            ""
        );
    }
}
