use anyhow::Result;
use soma_inspector_core::{Error, Position, edit::find_update_method};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|name| name.starts_with('.'))
            .unwrap_or(false)
}

fn is_script(entry: &DirEntry) -> bool {
    entry.file_type().is_file()
        && entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("py"))
            .unwrap_or(false)
}

/// First script under `root` (in file-name order) defining `class_name`
/// with an update method
pub fn find_update_target(root: &Path, class_name: &str) -> Option<(PathBuf, Position)> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
        .filter_map(|e| e.ok())
        .filter(is_script)
        .find_map(|entry| {
            trace!("searching {}", entry.path().display());
            let text = std::fs::read_to_string(entry.path()).ok()?;
            find_update_method(&text, class_name).map(|pos| (entry.into_path(), pos))
        })
}

pub fn jump_command(class_name: &str, root: Option<&Path>) -> Result<()> {
    let root = match root {
        Some(root) => root.to_path_buf(),
        None => std::env::current_dir()?,
    };
    debug!("Searching {} for {}.update", root.display(), class_name);

    let (path, position) = find_update_target(&root, class_name)
        .ok_or_else(|| Error::UpdateMethodNotFound(class_name.to_string()))?;

    println!(
        "{}:{}:{}",
        path.display(),
        position.line + 1,
        position.character + 1
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_first_file_with_a_hit_wins() {
        let temp_dir = TempDir::new().unwrap();
        let enemies = temp_dir.path().join("enemies");
        fs::create_dir_all(&enemies).unwrap();
        fs::create_dir_all(temp_dir.path().join(".venv")).unwrap();

        fs::write(
            temp_dir.path().join(".venv/slime.py"),
            "class Slime(pp.Entity):\n    def update(self):\n        pass\n",
        )
        .unwrap();
        fs::write(enemies.join("a_bat.py"), "class Bat(pp.Entity):\n    pass\n").unwrap();
        fs::write(
            enemies.join("b_slime.py"),
            "import pygpen as pp\n\nclass Slime(pp.Entity):\n    def update(self, dt):\n        pass\n",
        )
        .unwrap();
        fs::write(
            enemies.join("c_slime.py"),
            "class Slime(pp.Entity):\n    def update(self):\n        pass\n",
        )
        .unwrap();

        let (path, position) = find_update_target(temp_dir.path(), "Slime").unwrap();
        assert_eq!(path, enemies.join("b_slime.py"));
        assert_eq!(position.line, 3);

        assert!(find_update_target(temp_dir.path(), "Bat").is_none());
    }
}
