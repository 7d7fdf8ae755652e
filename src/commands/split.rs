use crate::config::{ensure_destination, expand_sources, RunConfig};
use crate::fields::CertificateFields;
use crate::index::{IndexRecorder, OutputRecord};
use crate::pages::SourceBatch;
use crate::report::{Progress, RunReport};
use crate::writer::PageWriter;
use anyhow::{Context, Result};
use tracing::{debug, error, info};

/// Split every page of every source into its own PDF, named after the fields
/// found on the page, and write the index spreadsheet.
pub fn run(config: &RunConfig, show_progress: bool) -> Result<RunReport> {
    ensure_destination(&config.destination)?;

    let sources = expand_sources(&config.sources)?;
    let batch = SourceBatch::open(&sources)?;
    let total_pages = batch.total_pages();
    info!(
        documents = batch.documents().len(),
        pages = total_pages,
        destination = %config.destination.display(),
        "splitting"
    );

    let mut writer = PageWriter::new(&config.destination, &config.label, config.collisions);
    let mut index = IndexRecorder::new();
    let mut progress = if show_progress {
        Progress::new(total_pages)?
    } else {
        Progress::hidden(total_pages)
    };

    for page in batch.pages() {
        let fields = CertificateFields::parse(&page.text);
        let source_pdf = page.source.file_name();

        let filename = match writer.write(&page, &fields) {
            Ok(filename) => filename,
            Err(e) if config.keep_going => {
                error!(
                    source = %source_pdf,
                    page = page.number(),
                    error = %format!("{:#}", e),
                    "skipping page"
                );
                continue;
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to write page {} of {}", page.number(), source_pdf)
                })
            }
        };
        debug!(source = %source_pdf, page = page.number(), %filename, "wrote page");

        index.push(OutputRecord {
            id: fields.id,
            name: fields.name,
            filename,
            source_pdf,
        });
        progress.page_done();
    }

    let index_path = index.save(&config.destination)?;
    let completion = progress.finish();
    info!(
        read = completion.pages_read,
        processed = completion.pages_processed,
        records = index.count(),
        "finished"
    );

    Ok(RunReport {
        completion,
        output_dir: config.destination.clone(),
        index_path,
    })
}
