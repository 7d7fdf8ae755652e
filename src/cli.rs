use crate::config::PartialConfig;
use crate::writer::CollisionPolicy;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "certsplit")]
#[command(about = "Split certificate PDFs into one file per page, named by ID and name")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split PDFs into single pages and write extracted_data.xlsx (default)
    #[command(alias = "burst")]
    Split(SplitArgs),

    /// Show the ID, name and output filename parsed from each page
    Inspect {
        /// PDF file to inspect
        path: PathBuf,

        /// Label used for the previewed filenames
        #[arg(short, long)]
        label: Option<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Default)]
pub struct SplitArgs {
    /// PDF files, or folders to search for PDF files. Prompted for if omitted
    pub sources: Vec<PathBuf>,

    /// Output directory (created if missing). Prompted for if omitted
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Prefix for every output filename [default: Certificate]
    #[arg(short, long)]
    pub label: Option<String>,

    /// JSON file providing sources, destination, label, collisions, keep_going
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// What to do when two pages produce the same filename
    #[arg(long, value_enum)]
    pub collisions: Option<CollisionPolicy>,

    /// Log pages that fail to write and continue with the rest
    #[arg(long)]
    pub keep_going: bool,

    /// Print the final report as JSON
    #[arg(long)]
    pub json: bool,
}

impl SplitArgs {
    /// The values given as flags; unset flags stay unset.
    pub fn to_partial(&self) -> PartialConfig {
        PartialConfig {
            sources: self.sources.clone(),
            destination: self.output_dir.clone(),
            label: self.label.clone(),
            collisions: self.collisions,
            keep_going: self.keep_going.then_some(true),
        }
    }
}
