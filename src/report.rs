use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::PathBuf;

/// Tracks processed pages against the total expected up front.
pub struct Progress {
    expected: u64,
    processed: u64,
    bar: ProgressBar,
}

impl Progress {
    pub fn new(expected: u64) -> Result<Self> {
        let bar = ProgressBar::new(expected);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("Processing pages [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} ({per_sec}, eta {eta})")?
                .progress_chars("=> "),
        );
        Ok(Self::with_bar(expected, bar))
    }

    pub fn hidden(expected: u64) -> Self {
        Self::with_bar(expected, ProgressBar::hidden())
    }

    fn with_bar(expected: u64, bar: ProgressBar) -> Self {
        Progress {
            expected,
            processed: 0,
            bar,
        }
    }

    /// Count a page that was written and recorded.
    pub fn page_done(&mut self) {
        self.processed += 1;
        self.bar.inc(1);
    }

    pub fn finish(self) -> Completion {
        self.bar.finish_and_clear();
        Completion::compare(self.expected, self.processed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Complete,
    Incomplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Completion {
    pub status: Status,
    pub pages_read: u64,
    pub pages_processed: u64,
}

impl Completion {
    pub fn compare(pages_read: u64, pages_processed: u64) -> Self {
        let status = if pages_read == pages_processed {
            Status::Complete
        } else {
            Status::Incomplete
        };
        Completion {
            status,
            pages_read,
            pages_processed,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.status == Status::Complete
    }
}

/// Final outcome of a split run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    #[serde(flatten)]
    pub completion: Completion,
    pub output_dir: PathBuf,
    pub index_path: PathBuf,
}

impl RunReport {
    pub fn print(&self) {
        let c = &self.completion;
        if c.is_complete() {
            println!("Extraction complete: all files have been successfully extracted.");
        } else {
            println!("WARNING: Extraction may be incomplete.");
        }
        println!("Total Pages Read: {}", c.pages_read);
        println!("Total Pages Processed: {}", c.pages_processed);
        println!(
            "PDF pages have been split and saved in {}",
            self.output_dir.display()
        );
        println!(
            "Extracted data has been saved in {}",
            self.index_path.display()
        );
    }
}
