mod cli;
mod commands;
mod config;
mod fields;
mod index;
mod pages;
mod pdf;
mod prompt;
mod report;
mod writer;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands, SplitArgs};
use config::PartialConfig;
use prompt::Prompter;
use std::io::IsTerminal;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Inspect { path, label, json }) => {
            commands::inspect::run(&path, label.as_deref(), json)?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Split(args)) => split(args),
        None => split(SplitArgs::default()),
    }
}

fn split(args: SplitArgs) -> Result<ExitCode> {
    let mut partial = args.to_partial();
    if let Some(path) = &args.config {
        partial = partial.or(PartialConfig::from_json_file(path)?);
    }

    let config = if std::io::stdin().is_terminal() {
        let stdin = std::io::stdin();
        let mut prompter = Prompter::new(stdin.lock(), std::io::stdout());
        prompt::resolve(partial, Some(&mut prompter))?
    } else {
        prompt::resolve::<std::io::StdinLock, std::io::Stdout>(partial, None)?
    };

    let report = commands::split::run(&config, !args.json)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report.print();
    }

    if report.completion.is_complete() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(2))
    }
}
