use crate::pdf::PdfDocument;
use tracing::{debug, warn};

/// Extract the text of every page of `pdf`, one entry per page in page order.
///
/// pdf-extract is tried first. If it fails, or disagrees with the page tree on
/// the number of pages, lopdf's per-page extraction is used instead. A page
/// whose text cannot be extracted at all comes back as an empty string.
pub fn extract_page_texts(pdf: &PdfDocument) -> Vec<String> {
    let total = pdf.page_count() as usize;

    // pdf-extract panics on some malformed fonts instead of returning an error
    let bytes = pdf.bytes.as_slice();
    let extracted = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes));

    match extracted {
        Ok(Ok(pages)) if pages.len() == total => return pages,
        Ok(Ok(pages)) => debug!(
            path = %pdf.path.display(),
            extracted = pages.len(),
            expected = total,
            "pdf-extract page count mismatch, falling back to lopdf"
        ),
        Ok(Err(e)) => debug!(
            path = %pdf.path.display(),
            error = %e,
            "pdf-extract failed, falling back to lopdf"
        ),
        Err(_) => warn!(
            path = %pdf.path.display(),
            "pdf-extract panicked, falling back to lopdf"
        ),
    }

    pdf.page_ids()
        .into_iter()
        .map(|(page_num, _)| match pdf.doc.extract_text(&[page_num]) {
            Ok(text) => text,
            Err(e) => {
                warn!(
                    path = %pdf.path.display(),
                    page = page_num,
                    error = %e,
                    "could not extract page text"
                );
                String::new()
            }
        })
        .collect()
}
