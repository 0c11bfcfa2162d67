use anyhow::{Context, Result};
use notify::{Config as WatcherConfig, Event, RecommendedWatcher, RecursiveMode, Watcher};
use soma_inspector_core::FileKind;
use std::path::Path;
use std::sync::mpsc::{self, RecvTimeoutError};
use tracing::{debug, warn};

use crate::display::print_extraction;
use crate::utils::resolve_document;

// Only the watched directory is observed, so the file name is enough
fn touches(event: &Event, path: &Path) -> bool {
    event.paths.iter().any(|p| p.file_name() == path.file_name())
}

/// Re-scan `filepath` whenever its content changes, until interrupted
pub fn watch_command(filepath: &Path, kind: Option<FileKind>, root: Option<&Path>) -> Result<()> {
    let document = resolve_document(filepath, kind)?;
    let mut session = document.open_session(root)?;
    let debounce = document.config.watch_debounce();

    print_extraction(&document.path, session.snapshot(), None);
    let mut digest = md5::compute(session.text().as_bytes());

    let (tx, rx) = mpsc::channel();
    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| {
            let _ = tx.send(res);
        },
        WatcherConfig::default(),
    )?;

    // Watch the directory so editors that replace the file are still seen
    let directory = document
        .path
        .parent()
        .context("Watched file has no parent directory")?;
    watcher.watch(directory, RecursiveMode::NonRecursive)?;
    println!("\n👀 Watching {} (Ctrl+C to stop)", document.path.display());

    while let Ok(res) = rx.recv() {
        match res {
            Ok(event) if touches(&event, &document.path) => {}
            Ok(_) => continue,
            Err(e) => {
                warn!("watch error: {}", e);
                continue;
            }
        }

        // Swallow the burst of events a single save produces
        loop {
            match rx.recv_timeout(debounce) {
                Ok(_) => continue,
                Err(RecvTimeoutError::Timeout) => break,
                Err(RecvTimeoutError::Disconnected) => return Ok(()),
            }
        }

        let text = match std::fs::read_to_string(&document.path) {
            Ok(text) => text,
            Err(e) => {
                debug!("{} not readable yet: {}", document.path.display(), e);
                continue;
            }
        };

        let new_digest = md5::compute(text.as_bytes());
        if new_digest == digest {
            debug!("{} unchanged, skipping scan", document.path.display());
            continue;
        }
        digest = new_digest;

        println!();
        print_extraction(&document.path, session.document_changed(text), None);
    }

    Ok(())
}
