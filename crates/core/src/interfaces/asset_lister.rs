//! Asset listing interface
//!
//! The scanner never touches the file system directly; whoever drives the
//! scan decides where referenced asset folders live.

/// File extensions treated as images when listing asset folders
pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "bmp"];

/// Trait for listing the image files of a referenced asset folder
pub trait AssetLister {
    /// Image file names inside `folder`, relative to the lister's root.
    ///
    /// Missing or unreadable folders yield an empty list.
    fn list_images(&self, folder: &str) -> Vec<String>;
}

/// Lister used when no workspace root is known
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAssets;

impl AssetLister for NoAssets {
    fn list_images(&self, _folder: &str) -> Vec<String> {
        Vec::new()
    }
}

/// Whether a file name carries one of the image extensions (any case)
pub fn is_image_file(file_name: &str) -> bool {
    std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|image| image.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}
