use anyhow::{Context, Result};
use soma_inspector_core::{
    FileKind, InspectorRequest, InspectorResponse, RenamePrompt, interfaces::FixedAnswer,
};
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::utils::resolve_document;

/// Reads the new name from stdin. An empty line keeps the current name,
/// end of input cancels.
pub struct StdinPrompt<R> {
    input: R,
}

impl<R: BufRead> StdinPrompt<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> RenamePrompt for StdinPrompt<R> {
    fn ask(&mut self, message: &str, current: &str) -> Option<String> {
        eprint!("{message} [{current}]: ");
        io::stderr().flush().ok();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                let answer = line.trim();
                Some(if answer.is_empty() { current } else { answer }.to_string())
            }
        }
    }
}

pub fn rename_command(filepath: &Path, property: &str, new_name: Option<String>) -> Result<()> {
    let document = resolve_document(filepath, Some(FileKind::Script))?;
    let mut session = document.open_session(None)?;

    let class_name = session
        .snapshot()
        .parameters
        .iter()
        .find(|p| p.name == property)
        .map(|p| p.class_name.clone())
        .unwrap_or_default();
    let request = InspectorRequest::RenameProperty {
        class_name,
        property_name: property.to_string(),
    };

    let response = match new_name {
        Some(name) => session.handle(request, &mut FixedAnswer(Some(name)))?,
        None => {
            let stdin = io::stdin();
            session.handle(request, &mut StdinPrompt::new(stdin.lock()))?
        }
    };

    match response {
        InspectorResponse::Renamed { occurrences: 0 } => {
            println!("ℹ️  Nothing to rename");
        }
        InspectorResponse::Renamed { occurrences } => {
            document
                .save(session.text())
                .context("Failed to save renamed property")?;
            println!("✏️  Renamed self.{property} in {occurrences} place(s)");
        }
        _ => println!("ℹ️  Rename cancelled"),
    }

    Ok(())
}
