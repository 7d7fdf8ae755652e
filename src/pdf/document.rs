use anyhow::{Context, Result};
use lopdf::{Document, ObjectId};
use std::path::{Path, PathBuf};

/// A source PDF held in memory: raw bytes for text extraction and the parsed
/// document for page manipulation.
pub struct PdfDocument {
    pub doc: Document,
    pub bytes: Vec<u8>,
    pub path: PathBuf,
}

impl PdfDocument {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes =
            std::fs::read(path).with_context(|| format!("Failed to read PDF: {}", path.display()))?;
        let doc = Document::load_mem(&bytes)
            .with_context(|| format!("Failed to open PDF: {}", path.display()))?;
        Ok(PdfDocument {
            doc,
            bytes,
            path: path.to_path_buf(),
        })
    }

    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Get 1-indexed page object IDs
    pub fn page_ids(&self) -> Vec<(u32, ObjectId)> {
        // get_pages is a BTreeMap keyed by page number, so this is already sorted
        self.doc.get_pages().into_iter().collect()
    }

    /// File name of the source, as recorded in the index.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Copy of this document containing only the given 1-indexed page.
    pub fn extract_page(&self, page: u32) -> Result<Document> {
        let total = self.page_count();
        if page == 0 || page > total {
            anyhow::bail!("Page {} is out of range (1-{})", page, total);
        }

        let mut new_doc = self.doc.clone();
        let pages_to_delete: Vec<u32> = self
            .page_ids()
            .into_iter()
            .map(|(num, _)| num)
            .filter(|&num| num != page)
            .collect();

        if !pages_to_delete.is_empty() {
            new_doc.delete_pages(&pages_to_delete);
            new_doc.prune_objects();
        }

        Ok(new_doc)
    }

    /// Save to a file
    pub fn save<P: AsRef<Path>>(doc: &mut Document, path: P) -> Result<()> {
        doc.save(&path)
            .with_context(|| format!("Failed to save PDF: {}", path.as_ref().display()))?;
        Ok(())
    }
}
