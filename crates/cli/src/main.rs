//! # citegen-cli
//!
//! Command-line interface for citegen: reads bibliographic records from an
//! XLSX workbook and writes a sorted citation list.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use citegen_core::Standard;
use citegen_formatting::CitationFormatter;
use citegen_reader::{write_template, SourcesReader};
use citegen_render::Renderer;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// citegen - bibliography generator
#[derive(Parser)]
#[command(name = "citegen")]
#[command(author, version, about = "Formats bibliographic records as GOST or APA citations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose output (filter with RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Format a workbook as a GOST R 7.0.5-2008 bibliography
    Gost(GenerateArgs),
    /// Format a workbook as an APA 7th edition reference list
    Apa(GenerateArgs),
    /// Write an empty source workbook for a citation standard
    Template {
        /// Citation standard the workbook is laid out for
        #[arg(value_enum)]
        standard: StandardArg,

        /// Output workbook path
        #[arg(short, long, default_value = "template.xlsx")]
        output: PathBuf,
    },
}

#[derive(clap::Args)]
struct GenerateArgs {
    /// Source XLSX workbook
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output document (.docx, otherwise plain text)
    #[arg(short, long, default_value = "output.docx")]
    output: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
enum StandardArg {
    Gost,
    Apa,
}

impl From<StandardArg> for Standard {
    fn from(arg: StandardArg) -> Self {
        match arg {
            StandardArg::Gost => Standard::Gost,
            StandardArg::Apa => Standard::Apa,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Gost(args) => generate(&args.input, &args.output, Standard::Gost),
        Command::Apa(args) => generate(&args.input, &args.output, Standard::Apa),
        Command::Template { standard, output } => {
            let standard = Standard::from(standard);
            write_template(&output, standard).with_context(|| {
                format!("Failed to write {standard} template: {}", output.display())
            })?;
            println!("{} {}", "Template written:".green(), output.display());
            Ok(())
        }
    }
}

/// Read, format and render. Nothing is written unless reading and
/// formatting both succeed.
fn generate(input: &Path, output: &Path, standard: Standard) -> Result<()> {
    let records = SourcesReader::open(input, standard)
        .and_then(|sources| sources.read())
        .with_context(|| format!("Failed to read records from {}", input.display()))?;

    let items = CitationFormatter::for_standard(standard)
        .format(records)
        .with_context(|| format!("Failed to format {standard} citations"))?;

    let count = items.len();
    Renderer::new(items.into_iter().map(|item| item.into_rendered()))
        .render(output, standard)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!(count, output = %output.display(), "Bibliography generated");
    println!(
        "{} {count} citation(s) -> {}",
        standard.to_string().cyan().bold(),
        output.display()
    );
    Ok(())
}
