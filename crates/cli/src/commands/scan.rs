use anyhow::Result;
use soma_inspector_core::{FileKind, ParameterDescriptor};
use std::path::Path;
use tracing::debug;

use crate::display::print_extraction;
use crate::utils::{parse_filepath_with_line, resolve_document};

pub fn scan_command(
    filepath_arg: &str,
    kind: Option<FileKind>,
    root: Option<&Path>,
    json: bool,
) -> Result<()> {
    // Parse filepath and line number first
    let (filepath, line) = parse_filepath_with_line(filepath_arg);
    debug!("Scanning file: {} at line: {:?}", filepath, line);

    let document = resolve_document(Path::new(&filepath), kind)?;
    let session = document.open_session(root)?;
    let extraction = session.snapshot();

    if json {
        let output = match line {
            Some(line) => {
                let descriptors: Vec<&ParameterDescriptor> = extraction.at_line(line).collect();
                serde_json::to_string_pretty(&descriptors)?
            }
            None => serde_json::to_string_pretty(extraction)?,
        };
        println!("{output}");
    } else {
        print_extraction(&document.path, extraction, line);
    }

    Ok(())
}
