use crate::pdf::text::extract_page_texts;
use crate::pdf::PdfDocument;
use anyhow::Result;
use std::path::Path;
use tracing::debug;

/// All source documents of a run, loaded once up front so the total page
/// count is known before any page is processed.
pub struct SourceBatch {
    documents: Vec<PdfDocument>,
}

/// One page of one source document, with its extracted text.
pub struct Page<'a> {
    pub source: &'a PdfDocument,
    /// Zero-based position within `source`.
    pub index: u32,
    pub text: String,
}

impl Page<'_> {
    pub fn number(&self) -> u32 {
        self.index + 1
    }
}

impl SourceBatch {
    pub fn open<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let documents = paths
            .iter()
            .map(|path| {
                let doc = PdfDocument::open(path)?;
                debug!(path = %doc.path.display(), pages = doc.page_count(), "opened source");
                Ok(doc)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(SourceBatch { documents })
    }

    pub fn documents(&self) -> &[PdfDocument] {
        &self.documents
    }

    pub fn total_pages(&self) -> u64 {
        self.documents.iter().map(|d| d.page_count() as u64).sum()
    }

    /// Every page of every document, in input order then page order.
    ///
    /// Text is extracted one document at a time, when iteration reaches it.
    pub fn pages(&self) -> impl Iterator<Item = Page<'_>> + '_ {
        self.documents.iter().flat_map(|source| {
            extract_page_texts(source)
                .into_iter()
                .enumerate()
                .map(move |(index, text)| Page {
                    source,
                    index: index as u32,
                    text,
                })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::fixtures::write_pdf;

    #[test]
    fn test_concatenation_order() {
        let dir = tempfile::tempdir().unwrap();
        let d1 = write_pdf(dir.path(), "d1.pdf", &["a", "b"]);
        let d2 = write_pdf(dir.path(), "d2.pdf", &["c", "d", "e"]);

        let batch = SourceBatch::open(&[d1, d2]).unwrap();
        assert_eq!(batch.total_pages(), 5);

        let order: Vec<(String, u32)> = batch
            .pages()
            .map(|p| (p.source.file_name(), p.index))
            .collect();
        assert_eq!(
            order,
            vec![
                ("d1.pdf".to_string(), 0),
                ("d1.pdf".to_string(), 1),
                ("d2.pdf".to_string(), 0),
                ("d2.pdf".to_string(), 1),
                ("d2.pdf".to_string(), 2),
            ]
        );
    }

    #[test]
    fn test_same_document_twice() {
        let dir = tempfile::tempdir().unwrap();
        let d1 = write_pdf(dir.path(), "d1.pdf", &["a", "b"]);

        let batch = SourceBatch::open(&[d1.clone(), d1]).unwrap();
        assert_eq!(batch.total_pages(), 4);
        assert_eq!(batch.pages().count(), 4);
    }

    #[test]
    fn test_empty_batch() {
        let batch = SourceBatch::open::<&Path>(&[]).unwrap();
        assert_eq!(batch.total_pages(), 0);
        assert_eq!(batch.pages().count(), 0);
    }

    #[test]
    fn test_unreadable_source_fails_open() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_pdf(dir.path(), "good.pdf", &["a"]);
        let missing = dir.path().join("missing.pdf");
        assert!(SourceBatch::open(&[good, missing]).is_err());
    }
}
