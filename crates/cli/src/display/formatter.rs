use soma_inspector_core::{
    AssetFolderListing, Extraction, FileKind, ParamType, ParameterDescriptor,
    services::resolve_asset_file,
};
use std::path::Path;

/// Kind of document for display purposes
pub fn describe_kind(kind: FileKind) -> &'static str {
    match kind {
        FileKind::Script => "🐍 game script",
        FileKind::Json => "🗂️  JSON data",
        FileKind::Shader => "🎨 shader",
    }
}

pub fn type_icon(param_type: ParamType) -> &'static str {
    match param_type {
        ParamType::Int => "🔢",
        ParamType::Float => "📏",
        ParamType::Boolean => "🔘",
        ParamType::String => "🔤",
        ParamType::Array => "📚",
        ParamType::Unknown => "❔",
    }
}

/// One line per descriptor: `line  icon name = value  (type)`
pub fn format_descriptor(descriptor: &ParameterDescriptor) -> String {
    let name = descriptor.display_name.as_deref().unwrap_or(&descriptor.name);
    format!(
        "{:>5}  {} {} = {}  ({})",
        descriptor.line + 1,
        type_icon(descriptor.param_type),
        name,
        descriptor.value,
        descriptor.param_type
    )
}

/// Print descriptors grouped by owning class, in document order.
///
/// With `line`, only descriptors starting on that 0-based line are shown.
pub fn print_extraction(path: &Path, extraction: &Extraction, line: Option<u32>) {
    println!(
        "🔍 Scanning: {}{}",
        path.display(),
        line.map(|l| format!(":{}", l + 1)).unwrap_or_default()
    );
    println!("   • Kind: {}", describe_kind(extraction.kind));
    println!("{}", "=".repeat(80));

    let shown: Vec<&ParameterDescriptor> = match line {
        Some(line) => extraction.at_line(line).collect(),
        None => extraction.parameters.iter().collect(),
    };

    if shown.is_empty() {
        println!("\nℹ️  No parameters found");
        return;
    }

    let mut current: Option<(&str, &str)> = None;
    for descriptor in &shown {
        let scope = (descriptor.class_name.as_str(), descriptor.method.as_str());
        if current != Some(scope) {
            println!("\n📦 {}", class_heading(descriptor));
            current = Some(scope);
        }
        println!("{}", format_descriptor(descriptor));
    }

    println!("\n✅ {} parameter(s)", shown.len());
}

fn class_heading(descriptor: &ParameterDescriptor) -> String {
    let mut heading = format!("{} ({})", descriptor.class_name, descriptor.method);
    if let Some(class_type) = descriptor.class_type {
        heading.push_str(&format!(" [{}]", class_type.as_str()));
    }
    if descriptor.has_update_method == Some(true) {
        heading.push_str(" ⟳ update");
    }
    if !descriptor.used_systems.is_empty() {
        heading.push_str(&format!(" uses {}", descriptor.used_systems.join(", ")));
    }
    if let Some(folder) = &descriptor.image_folder {
        heading.push_str(&format!(" 🖼️  {folder}"));
    }
    heading
}

pub fn print_asset_folders(root: &Path, folders: &AssetFolderListing) {
    if folders.is_empty() {
        println!("ℹ️  No asset folders referenced");
        return;
    }

    for (folder, images) in folders {
        println!("📂 {} ({} images)", folder, images.len());
        for image in images {
            println!("   • {}", resolve_asset_file(root, folder, image).display());
        }
    }
}
