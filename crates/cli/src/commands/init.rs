use anyhow::{Context, Result};
use soma_inspector_core::{Config, config::CONFIG_FILE_NAMES};
use std::{env, path::PathBuf};
use tracing::info;

pub fn init_command(cwd: Option<&str>, asset_root: Option<PathBuf>, force: bool) -> Result<()> {
    // Determine the project root
    let project_root = if let Some(cwd) = cwd {
        PathBuf::from(cwd)
    } else {
        env::current_dir().context("Failed to get current directory")?
    };

    let config_path = project_root.join(CONFIG_FILE_NAMES[0]);
    if config_path.exists() && !force {
        println!("❌ Config already exists at: {}", config_path.display());
        println!("   Use --force to overwrite");
        return Ok(());
    }

    let config = Config {
        asset_root,
        ..Config::default()
    };
    config.validate()?;
    config
        .save_to_file(&config_path)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    info!("Created {}", config_path.display());
    println!("✅ Created config: {}", config_path.display());
    println!("\n📌 Settings:");
    println!("   • asset_root: directory load_folder paths are resolved against");
    println!("   • file_kinds: extension overrides, e.g. {{\"fx\": \"shader\"}}");
    println!("   • watch_debounce_ms: delay before re-scanning in watch mode");

    Ok(())
}
