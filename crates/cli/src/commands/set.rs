use anyhow::{Context, Result};
use soma_inspector_core::FileKind;
use std::path::Path;
use tracing::info;

use crate::utils::resolve_document;

pub fn set_command(
    filepath: &Path,
    class_name: &str,
    name: &str,
    value: &str,
    kind: Option<FileKind>,
    dry_run: bool,
) -> Result<()> {
    let document = resolve_document(filepath, kind)?;
    let mut session = document.open_session(None)?;
    let original = session.text().to_string();

    let edits = session
        .change_value(class_name, name, value)
        .with_context(|| format!("Failed to set {class_name}.{name}"))?;

    if dry_run {
        for edit in &edits {
            let old = edit.range.slice(&original).unwrap_or_default();
            println!(
                "{}:{}:{}: {:?} -> {:?}",
                document.path.display(),
                edit.range.start.line + 1,
                edit.range.start.character + 1,
                old,
                edit.new_text
            );
        }
        return Ok(());
    }

    document.save(session.text())?;
    info!("Wrote {}", document.path.display());
    println!("✅ {class_name}.{name} = {value}");

    Ok(())
}
