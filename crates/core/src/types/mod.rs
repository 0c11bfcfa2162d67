pub mod extraction;
pub mod module_info;
pub mod parameter;
pub mod position;
pub mod span;

use crate::impl_case_insensitive_deserialize;
use serde::Serialize;

/// Content kind of a document, supplied by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    /// pygpen game script
    Script,
    Json,
    Shader,
}

// Implement case-insensitive deserialization
impl_case_insensitive_deserialize!(
    FileKind,
    Script => "script",
    Json => "json",
    Shader => "shader"
);

impl FileKind {
    /// Default mapping from a file extension (without the dot)
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "py" => Some(FileKind::Script),
            "json" => Some(FileKind::Json),
            "glsl" | "frag" | "vert" | "fs" | "vs" => Some(FileKind::Shader),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Script => "script",
            FileKind::Json => "json",
            FileKind::Shader => "shader",
        }
    }
}

impl std::str::FromStr for FileKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "script" | "python" | "py" => Ok(FileKind::Script),
            "json" => Ok(FileKind::Json),
            "shader" | "glsl" => Ok(FileKind::Shader),
            other => Err(format!(
                "unknown file kind '{other}', expected one of: script, json, shader"
            )),
        }
    }
}

// Re-export commonly used types
pub use extraction::Extraction;
pub use module_info::{AssetFolder, AssetFolderListing, ModuleInfo};
pub use parameter::{ClassType, ParamType, ParameterDescriptor, ParameterOrigin};
pub use position::Position;
pub use span::TextRange;
