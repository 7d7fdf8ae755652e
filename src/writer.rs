use crate::fields::CertificateFields;
use crate::pages::Page;
use crate::pdf::PdfDocument;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::warn;

/// What to do when two pages resolve to the same output filename.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Later pages replace earlier files of the same name.
    #[default]
    Overwrite,
    /// Insert " (2)", " (3)", ... before the extension.
    Suffix,
}

/// `{label}_{id}_{name}.pdf`, with path separators and control characters
/// replaced so the file always lands directly in the output directory.
pub fn output_filename(label: &str, fields: &CertificateFields) -> String {
    format!(
        "{}_{}_{}.pdf",
        sanitize(label),
        sanitize(&fields.id),
        sanitize(&fields.name)
    )
}

fn sanitize(component: &str) -> String {
    component
        .chars()
        .map(|c| {
            if c == '/' || c == '\\' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect()
}

/// Writes single-page documents into one output directory, tracking the names
/// used so far in this run.
pub struct PageWriter {
    output_dir: PathBuf,
    label: String,
    policy: CollisionPolicy,
    written: HashMap<String, u32>,
}

impl PageWriter {
    pub fn new(output_dir: &Path, label: &str, policy: CollisionPolicy) -> Self {
        PageWriter {
            output_dir: output_dir.to_path_buf(),
            label: label.to_string(),
            policy,
            written: HashMap::new(),
        }
    }

    /// Write `page` alone to a new PDF and return the filename used.
    pub fn write(&mut self, page: &Page<'_>, fields: &CertificateFields) -> Result<String> {
        let filename = self.claim(output_filename(&self.label, fields));
        let output_path = self.output_dir.join(&filename);

        let mut new_doc = page.source.extract_page(page.number())?;
        PdfDocument::save(&mut new_doc, &output_path)?;

        Ok(filename)
    }

    fn claim(&mut self, filename: String) -> String {
        let seen = {
            let count = self.written.entry(filename.clone()).or_insert(0);
            *count += 1;
            *count
        };
        if seen == 1 {
            return filename;
        }

        match self.policy {
            CollisionPolicy::Overwrite => {
                warn!(filename = %filename, "overwriting a file written earlier in this run");
                filename
            }
            CollisionPolicy::Suffix => {
                let stem = filename.strip_suffix(".pdf").unwrap_or(&filename);
                let mut n = seen;
                loop {
                    let candidate = format!("{} ({}).pdf", stem, n);
                    if !self.written.contains_key(&candidate) {
                        self.written.insert(candidate.clone(), 1);
                        return candidate;
                    }
                    n += 1;
                }
            }
        }
    }
}
