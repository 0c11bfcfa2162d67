use serde::{Deserialize, Serialize};

use super::module_info::{AssetFolderListing, ModuleInfo};
use super::parameter::ParameterDescriptor;
use super::FileKind;

/// Result of one full scan of a document.
///
/// A new `Extraction` replaces the previous one wholesale; nothing in it is
/// ever patched after the fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    pub kind: FileKind,
    pub parameters: Vec<ParameterDescriptor>,
    pub module_info: ModuleInfo,
    pub asset_folders: AssetFolderListing,
    /// md5 digest of the scanned text
    pub fingerprint: String,
}

impl Extraction {
    pub fn fingerprint_of(text: &str) -> String {
        format!("{:x}", md5::compute(text.as_bytes()))
    }

    /// Whether this snapshot was taken from exactly `text`
    pub fn is_current_for(&self, text: &str) -> bool {
        self.fingerprint == Self::fingerprint_of(text)
    }

    pub fn find(&self, class_name: &str, name: &str) -> Option<&ParameterDescriptor> {
        self.parameters
            .iter()
            .find(|p| p.class_name == class_name && p.name == name)
    }

    pub fn find_mut(&mut self, class_name: &str, name: &str) -> Option<&mut ParameterDescriptor> {
        self.parameters
            .iter_mut()
            .find(|p| p.class_name == class_name && p.name == name)
    }

    /// Descriptors starting on a 0-based line
    pub fn at_line(&self, line: u32) -> impl Iterator<Item = &ParameterDescriptor> {
        self.parameters.iter().filter(move |p| p.line == line)
    }
}
