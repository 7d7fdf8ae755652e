use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// File name of the index written into the output directory.
pub const INDEX_FILE_NAME: &str = "extracted_data.xlsx";

const HEADERS: [&str; 4] = ["ID", "Name", "Filename", "Source PDF"];

/// One row of the index: a page that was written out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRecord {
    pub id: String,
    pub name: String,
    pub filename: String,
    pub source_pdf: String,
}

impl OutputRecord {
    fn cells(&self) -> [&str; 4] {
        [&self.id, &self.name, &self.filename, &self.source_pdf]
    }
}

/// Records in the order pages were processed.
#[derive(Debug, Default)]
pub struct IndexRecorder {
    records: Vec<OutputRecord>,
}

impl IndexRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: OutputRecord) {
        self.records.push(record);
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Write all records to `{output_dir}/extracted_data.xlsx`, replacing any
    /// existing file, and return its path.
    pub fn save(&self, output_dir: &Path) -> Result<PathBuf> {
        let path = output_dir.join(INDEX_FILE_NAME);

        let mut workbook = Workbook::new();
        let bold = Format::new().set_bold();
        let sheet = workbook.add_worksheet();
        sheet.set_name("Sheet1")?;

        for (col, header) in HEADERS.iter().enumerate() {
            sheet.write_string_with_format(0, col as u16, *header, &bold)?;
        }
        for (row, record) in self.records.iter().enumerate() {
            for (col, value) in record.cells().iter().enumerate() {
                sheet.write_string(row as u32 + 1, col as u16, *value)?;
            }
        }

        workbook
            .save(&path)
            .with_context(|| format!("Failed to save spreadsheet: {}", path.display()))?;
        Ok(path)
    }
}
