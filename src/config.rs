use crate::writer::CollisionPolicy;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Prefix used for output files when no label is given.
pub const DEFAULT_LABEL: &str = "Certificate";

/// Everything a split run needs, independent of how it was gathered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub sources: Vec<PathBuf>,
    pub destination: PathBuf,
    pub label: String,
    pub collisions: CollisionPolicy,
    pub keep_going: bool,
}

/// A partially filled configuration, as read from a JSON file or the command
/// line. Missing pieces are filled in interactively.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartialConfig {
    pub sources: Vec<PathBuf>,
    pub destination: Option<PathBuf>,
    pub label: Option<String>,
    pub collisions: Option<CollisionPolicy>,
    pub keep_going: Option<bool>,
}

impl PartialConfig {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Fill unset fields from `other`; values already set here win.
    pub fn or(mut self, other: PartialConfig) -> Self {
        if self.sources.is_empty() {
            self.sources = other.sources;
        }
        self.destination = self.destination.or(other.destination);
        self.label = self.label.or(other.label);
        self.collisions = self.collisions.or(other.collisions);
        self.keep_going = self.keep_going.or(other.keep_going);
        self
    }
}

/// Empty or whitespace-only labels fall back to [`DEFAULT_LABEL`].
pub fn normalize_label(label: Option<&str>) -> String {
    match label.map(str::trim) {
        Some(label) if !label.is_empty() => label.to_string(),
        _ => DEFAULT_LABEL.to_string(),
    }
}

/// Expand directory sources into the PDF files beneath them, sorted by name.
/// File sources are kept as given, in order.
pub fn expand_sources(sources: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for source in sources {
        if source.is_dir() {
            for entry in WalkDir::new(source).sort_by_file_name() {
                let entry = entry
                    .with_context(|| format!("Failed to read directory: {}", source.display()))?;
                if entry.file_type().is_file() && is_pdf(entry.path()) {
                    files.push(entry.into_path());
                }
            }
        } else if source.exists() {
            files.push(source.clone());
        } else {
            anyhow::bail!("Source not found: {}", source.display());
        }
    }
    Ok(files)
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Create the destination directory if it doesn't exist
pub fn ensure_destination(destination: &Path) -> Result<()> {
    std::fs::create_dir_all(destination)
        .with_context(|| format!("Failed to create directory: {}", destination.display()))
}
