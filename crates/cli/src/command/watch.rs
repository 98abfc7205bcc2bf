use super::analyze::host_message;
use anyhow::{anyhow, Result};
use clap::Parser;
use notify::{Event, EventKind, RecursiveMode, Watcher};
use quill_config::Settings;
use quill_core::{Document, HostMessage};
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::mpsc;

/// Re-analyze a document whenever it changes on disk.
///
/// One JSON host message is printed per line: first for the current content,
/// then after every modification that changes the analysis.
#[derive(Parser, Debug, Clone)]
pub struct Watch {
    /// Document to watch.
    file: PathBuf,
}

/// Turns file changes into host messages, skipping duplicates.
struct Refresher<'a> {
    document: Document,
    settings: &'a Settings,
    last: Option<HostMessage>,
}

impl<'a> Refresher<'a> {
    fn new(document: Document, settings: &'a Settings) -> Self {
        Self {
            document,
            settings,
            last: None,
        }
    }

    /// Reloads the document and returns the message to send, if any changed.
    fn refresh(&mut self) -> Option<HostMessage> {
        let message = match self.document.reload() {
            Ok(()) => host_message(&self.document, self.settings),
            Err(err) => {
                tracing::warn!(?err, "Failed to reload the watched document");
                HostMessage::Error {
                    message: err.to_string(),
                }
            }
        };

        if self.last.as_ref() == Some(&message) {
            return None;
        }

        self.last.replace(message.clone());
        Some(message)
    }
}

/// Whether `event` touches the file named `file_name`.
///
/// Editors that save by writing a temporary file and renaming it show up as
/// `Create` events rather than `Modify`.
fn is_relevant(event: &Event, file_name: &OsString) -> bool {
    matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_))
        && event
            .paths
            .iter()
            .any(|path| path.file_name() == Some(file_name.as_os_str()))
}

fn write_message(out: &mut impl Write, message: &HostMessage) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string(message)?)?;
    out.flush()?;
    Ok(())
}

impl Watch {
    pub fn run(&self, settings: &Settings) -> Result<()> {
        let document = super::open_document(&self.file)?;
        let mut refresher = Refresher::new(document, settings);

        let stdout = std::io::stdout();
        if let Some(message) = refresher.refresh() {
            write_message(&mut stdout.lock(), &message)?;
        }

        let (watch_target, file_name) = watch_target(&self.file)?;

        let (event_tx, event_rx) = mpsc::channel::<notify::Result<Event>>();
        let mut watcher = notify::recommended_watcher(event_tx)?;
        watcher.watch(&watch_target, RecursiveMode::NonRecursive)?;

        tracing::info!(path = %self.file.display(), "Watching document for changes");

        for event in event_rx {
            match event {
                Ok(event) if is_relevant(&event, &file_name) => {
                    tracing::debug!(kind = ?event.kind, "Document changed");
                    if let Some(message) = refresher.refresh() {
                        write_message(&mut stdout.lock(), &message)?;
                    }
                }
                Ok(_) => {}
                Err(err) => tracing::warn!(?err, "File watcher error"),
            }
        }

        Ok(())
    }
}

/// The directory to watch and the file name to filter events by.
fn watch_target(file: &Path) -> Result<(PathBuf, OsString)> {
    let file = file.canonicalize()?;
    match (file.parent(), file.file_name()) {
        (Some(parent), Some(name)) => Ok((parent.to_path_buf(), name.to_os_string())),
        _ => Err(anyhow!("invalid file path: {}", file.display())),
    }
}
