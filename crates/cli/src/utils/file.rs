use anyhow::{Context, Result, anyhow};
use soma_inspector_core::{Config, FileKind, FsAssetLister, InspectorSession};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A file on disk together with the settings that govern it
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub kind: FileKind,
    pub config: Config,
}

impl Document {
    /// Asset root: the `--root` flag, then the config file, then the cwd
    pub fn asset_root(&self, root_flag: Option<&Path>) -> PathBuf {
        root_flag
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.config.resolved_asset_root())
    }

    pub fn open_session(&self, root_flag: Option<&Path>) -> Result<InspectorSession> {
        let session = InspectorSession::open(&self.path, self.kind)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        Ok(session.with_assets(Box::new(asset_lister(self, root_flag))))
    }

    pub fn save(&self, text: &str) -> Result<()> {
        std::fs::write(&self.path, text)
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }
}

pub fn asset_lister(document: &Document, root_flag: Option<&Path>) -> FsAssetLister {
    FsAssetLister::new(document.asset_root(root_flag))
}

/// Locate `filepath`, load its config and settle its kind.
///
/// `--kind` wins over the config's `file_kinds`, which wins over the
/// built-in extension mapping.
pub fn resolve_document(filepath: &Path, kind_flag: Option<FileKind>) -> Result<Document> {
    let path = if filepath.is_absolute() {
        filepath.to_path_buf()
    } else {
        std::env::current_dir()?.join(filepath)
    };

    if !path.is_file() {
        return Err(anyhow!("File not found: {}", path.display()));
    }

    let config = Config::discover(&path)
        .with_context(|| format!("Failed to load configuration for {}", path.display()))?;

    let kind = kind_flag.or_else(|| config.kind_for(&path)).ok_or_else(|| {
        anyhow!(
            "Cannot tell the kind of {}; pass --kind script|json|shader",
            path.display()
        )
    })?;
    debug!("{} treated as {}", path.display(), kind.as_str());

    Ok(Document { path, kind, config })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_kind_flag_wins() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tilemap.py");
        fs::write(&path, "{}").unwrap();

        let document = resolve_document(&path, None).unwrap();
        assert_eq!(document.kind, FileKind::Script);

        let document = resolve_document(&path, Some(FileKind::Json)).unwrap();
        assert_eq!(document.kind, FileKind::Json);
    }

    #[test]
    fn test_unknown_extension_needs_kind() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.txt");
        fs::write(&path, "").unwrap();

        assert!(resolve_document(&path, None).is_err());
        assert!(resolve_document(&temp_dir.path().join("missing.py"), None).is_err());
    }

    #[test]
    fn test_root_flag_wins_over_config() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(".soma-inspector.json"),
            r#"{"asset_root": "game"}"#,
        )
        .unwrap();
        let path = temp_dir.path().join("main.py");
        fs::write(&path, "").unwrap();

        let document = resolve_document(&path, None).unwrap();
        assert_eq!(document.asset_root(None), temp_dir.path().join("game"));
        assert_eq!(
            document.asset_root(Some(Path::new("/srv/assets"))),
            PathBuf::from("/srv/assets")
        );
    }
}
