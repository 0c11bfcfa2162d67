use anyhow::Result;
use soma_inspector_core::FileKind;
use std::path::Path;

use crate::display::print_asset_folders;
use crate::utils::resolve_document;

pub fn assets_command(filepath: &Path, root: Option<&Path>) -> Result<()> {
    let document = resolve_document(filepath, Some(FileKind::Script))?;
    let session = document.open_session(root)?;

    let asset_root = document.asset_root(root);
    println!("🖼️  Assets referenced by {}", document.path.display());
    println!("   • Root: {}", asset_root.display());
    print_asset_folders(&asset_root, &session.snapshot().asset_folders);

    Ok(())
}
