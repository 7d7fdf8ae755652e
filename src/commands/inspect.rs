use crate::config::normalize_label;
use crate::fields::CertificateFields;
use crate::pages::SourceBatch;
use crate::writer::output_filename;
use anyhow::Result;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct PagePreview {
    pub page: u32,
    #[serde(flatten)]
    pub fields: CertificateFields,
    pub filename: String,
}

/// Parse every page of `path` without writing anything.
pub fn preview<P: AsRef<Path>>(path: P, label: Option<&str>) -> Result<Vec<PagePreview>> {
    let label = normalize_label(label);
    let batch = SourceBatch::open(&[path.as_ref()])?;
    let previews = batch
        .pages()
        .map(|page| {
            let fields = CertificateFields::parse(&page.text);
            PagePreview {
                page: page.number(),
                filename: output_filename(&label, &fields),
                fields,
            }
        })
        .collect();
    Ok(previews)
}

pub fn run<P: AsRef<Path>>(path: P, label: Option<&str>, json: bool) -> Result<()> {
    let previews = preview(&path, label)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&previews)?);
        return Ok(());
    }

    println!("File: {}", path.as_ref().display());
    println!("Pages: {}", previews.len());
    for p in &previews {
        println!(
            "p{}: ID={} Name={} -> {}",
            p.page, p.fields.id, p.fields.name, p.filename
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::fixtures::write_pdf;

    #[test]
    fn test_preview_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pdf(
            dir.path(),
            "batch.pdf",
            &["We hereby confirm that Jane Doe ID: 7", "blank"],
        );

        let previews = preview(&path, None).unwrap();
        assert_eq!(previews.len(), 2);
        assert_eq!(previews[0].page, 1);
        assert_eq!(previews[0].filename, "Certificate_7_Jane Doe.pdf");
        assert_eq!(previews[1].filename, "Certificate_Unknown_Unknown.pdf");

        let entries = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_preview_json_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pdf(dir.path(), "one.pdf", &["ID: 5"]);
        let previews = preview(&path, Some("Award")).unwrap();
        let json = serde_json::to_value(&previews).unwrap();
        assert_eq!(json[0]["id"], "5");
        assert_eq!(json[0]["name"], "Unknown");
        assert_eq!(json[0]["filename"], "Award_5_Unknown.pdf");
    }
}
