//! Extraction passes

pub mod asset_folder;
pub mod class_fields;
pub mod config_constant;
pub mod detector;
pub mod image_property;
pub mod init_call;
pub mod json_leaf;
pub mod pattern;
pub mod shader_uniform;
pub mod used_systems;
pub mod value_type;

pub use asset_folder::AssetFolderPass;
pub use class_fields::ClassStructurePass;
pub use config_constant::ConfigConstantPass;
pub use detector::{ParameterDetector, extract};
pub use image_property::ImagePropertyPass;
pub use init_call::InitCallPass;
pub use json_leaf::JsonLeafPass;
pub use pattern::{ScanPass, ScanState};
pub use shader_uniform::ShaderUniformPass;
