//! soma-inspector - A parameter inspector for pygpen-style game projects
//!
//! This crate provides functionality to:
//! - Scan game scripts, JSON data and GLSL shaders for tunable parameters
//! - Translate a new parameter value into a minimal text edit
//! - Rename instance properties and locate update methods
//! - List image assets referenced by `load_folder` calls
pub mod config;
pub mod edit;
pub mod error;
pub mod interfaces;
pub mod parser;
pub mod patterns;
pub mod services;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use config::Config;
pub use edit::{TextEdit, apply_edits, translate};
pub use interfaces::{AssetLister, RenamePrompt, ScanContext};
pub use patterns::{ParameterDetector, extract};
pub use services::{FsAssetLister, InspectorRequest, InspectorResponse, InspectorSession};
