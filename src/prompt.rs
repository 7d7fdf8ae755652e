use crate::config::{normalize_label, PartialConfig, RunConfig};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Line-based questions on a terminal, or any reader/writer pair in tests.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;
        let mut line = String::new();
        self.input
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        Ok(line.trim().to_string())
    }

    /// Paths one per line, until an empty line or end of input.
    pub fn ask_sources(&mut self) -> Result<Vec<PathBuf>> {
        writeln!(
            self.output,
            "Enter the PDF files (or folders) to split, one per line. Finish with an empty line."
        )?;
        let mut sources = Vec::new();
        loop {
            let line = self.ask("> ")?;
            if line.is_empty() {
                break;
            }
            sources.push(PathBuf::from(strip_quotes(&line)));
        }
        Ok(sources)
    }

    pub fn ask_destination(&mut self) -> Result<PathBuf> {
        let answer = self.ask("Output folder: ")?;
        if answer.is_empty() {
            anyhow::bail!("No output folder given");
        }
        Ok(PathBuf::from(strip_quotes(&answer)))
    }

    pub fn ask_label(&mut self) -> Result<String> {
        let answer = self.ask("Enter custom name for certificates [Certificate]: ")?;
        Ok(normalize_label(Some(answer.as_str())))
    }
}

/// Drag-and-drop into a terminal often wraps paths in quotes.
fn strip_quotes(s: &str) -> &str {
    s.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| s.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')))
        .unwrap_or(s)
}

/// Turn a partial configuration into a complete one.
///
/// When sources or destination are missing, the prompter is asked for them,
/// and for the label too if that was not given either. Without a prompter the
/// missing pieces are an error.
pub fn resolve<R: BufRead, W: Write>(
    partial: PartialConfig,
    prompter: Option<&mut Prompter<R, W>>,
) -> Result<RunConfig> {
    let needs_input = partial.sources.is_empty() || partial.destination.is_none();

    let (sources, destination, label) = match prompter {
        Some(prompter) if needs_input => {
            let sources = if partial.sources.is_empty() {
                prompter.ask_sources()?
            } else {
                partial.sources
            };
            let destination = match partial.destination {
                Some(destination) => destination,
                None => prompter.ask_destination()?,
            };
            let label = match partial.label {
                Some(label) => normalize_label(Some(label.as_str())),
                None => prompter.ask_label()?,
            };
            (sources, destination, label)
        }
        _ => {
            let destination = partial
                .destination
                .context("No output directory given (use --output-dir)")?;
            (
                partial.sources,
                destination,
                normalize_label(partial.label.as_deref()),
            )
        }
    };

    Ok(RunConfig {
        sources,
        destination,
        label,
        collisions: partial.collisions.unwrap_or_default(),
        keep_going: partial.keep_going.unwrap_or(false),
    })
}
