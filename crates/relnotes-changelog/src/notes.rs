//! Reading version notes from files

use std::path::Path;

use relnotes_core::{NotesError, Result};
use serde::Deserialize;
use tracing::{debug, info, instrument};

use crate::types::VersionNote;

/// Accepted shapes of a notes file
#[derive(Deserialize)]
#[serde(untagged)]
enum NotesFile {
    Many(Vec<VersionNote>),
    Wrapped { notes: Vec<VersionNote> },
    One(VersionNote),
}

impl From<NotesFile> for Vec<VersionNote> {
    fn from(file: NotesFile) -> Self {
        match file {
            NotesFile::Many(notes) | NotesFile::Wrapped { notes } => notes,
            NotesFile::One(note) => vec![note],
        }
    }
}

/// Load version notes from a JSON, YAML or TOML file.
///
/// The file may hold a single note, a list of notes, or a table with a
/// `notes` list. Order is kept as written.
#[instrument(skip(path), fields(path = %path.display()))]
pub fn load_notes(path: &Path) -> Result<Vec<VersionNote>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    info!(format = %extension, "loading notes");

    let content = std::fs::read_to_string(path).map_err(NotesError::Io)?;

    let parse_failed = |message: String| NotesError::ParseFailed {
        path: path.to_path_buf(),
        message,
    };

    let file: NotesFile = match extension.as_str() {
        "json" => serde_json::from_str(&content).map_err(|e| parse_failed(e.to_string()))?,
        "yaml" | "yml" => {
            serde_yaml::from_str(&content).map_err(|e| parse_failed(e.to_string()))?
        }
        "toml" => toml::from_str(&content).map_err(|e| parse_failed(e.to_string()))?,
        _ => return Err(NotesError::UnsupportedFormat(path.to_path_buf()).into()),
    };

    let notes: Vec<VersionNote> = file.into();
    debug!(note_count = notes.len(), "notes loaded");
    Ok(notes)
}
