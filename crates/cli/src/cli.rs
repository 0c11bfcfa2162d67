use anyhow::Result;
use clap::{Parser, Subcommand};
use soma_inspector_core::FileKind;
use std::path::PathBuf;

use crate::commands::{
    assets_command, init_command, jump_command, rename_command, scan_command, set_command, watch_command,
};

#[derive(Parser, Debug)]
#[command(name = "soma-inspector")]
#[command(version, about, long_about = None, propagate_version = true)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the tunable parameters of a file
    #[command(visible_alias = "s")]
    Scan {
        /// Path to the file with optional line number (e.g., scripts/player.py:12)
        filepath: String,

        /// Content kind (script, json, shader); detected from the extension by default
        #[arg(short, long)]
        kind: Option<FileKind>,

        /// Directory asset folders are resolved against
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Print the extraction as JSON
        #[arg(long)]
        json: bool,
    },
    /// Change one parameter value and write the file back
    Set {
        filepath: PathBuf,

        /// Owning class (GlobalConfig, Engine, JSON, Shader or a script class)
        class_name: String,

        /// Parameter name
        name: String,

        /// New value, written as-is
        #[arg(allow_hyphen_values = true)]
        value: String,

        #[arg(short, long)]
        kind: Option<FileKind>,

        /// Print the edit without writing the file
        #[arg(short, long)]
        dry_run: bool,
    },
    /// Rename an instance property (`self.<property>`) throughout a script
    Rename {
        filepath: PathBuf,

        /// Current property name
        property: String,

        /// New name; asked for on stdin when omitted
        new_name: Option<String>,
    },
    /// Find the update method of a class among the scripts under a directory
    #[command(visible_alias = "j")]
    Jump {
        class_name: String,

        /// Directory to search (defaults to the current directory)
        #[arg(short, long)]
        root: Option<PathBuf>,
    },
    /// List the asset folders a script loads and the images in them
    Assets {
        filepath: PathBuf,

        #[arg(short, long)]
        root: Option<PathBuf>,
    },
    /// Create a soma-inspector configuration file
    Init {
        /// Directory to create the config in (defaults to the current directory)
        #[arg(short, long)]
        cwd: Option<String>,

        /// Asset root to record in the config
        #[arg(short, long)]
        asset_root: Option<PathBuf>,

        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
    /// Re-scan a file every time it changes
    #[command(visible_alias = "w")]
    Watch {
        filepath: PathBuf,

        #[arg(short, long)]
        kind: Option<FileKind>,

        #[arg(short, long)]
        root: Option<PathBuf>,
    },
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Scan {
                filepath,
                kind,
                root,
                json,
            } => scan_command(&filepath, kind, root.as_deref(), json),
            Commands::Set {
                filepath,
                class_name,
                name,
                value,
                kind,
                dry_run,
            } => set_command(&filepath, &class_name, &name, &value, kind, dry_run),
            Commands::Rename {
                filepath,
                property,
                new_name,
            } => rename_command(&filepath, &property, new_name),
            Commands::Jump { class_name, root } => jump_command(&class_name, root.as_deref()),
            Commands::Assets { filepath, root } => assets_command(&filepath, root.as_deref()),
            Commands::Init {
                cwd,
                asset_root,
                force,
            } => init_command(cwd.as_deref(), asset_root, force),
            Commands::Watch {
                filepath,
                kind,
                root,
            } => watch_command(&filepath, kind, root.as_deref()),
        }
    }
}
