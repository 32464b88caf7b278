//! mdox - Fast markup to DOCX converter

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use mdox::Result;

#[derive(Parser)]
#[command(name = "mdox")]
#[command(version, about = "Fast markup to DOCX converter", long_about = None)]
#[command(after_help = "EXAMPLES:
    mdox notes.md               Convert notes.md to notes.docx
    mdox notes.md out.docx      Convert to an explicit output path")]
struct Cli {
    /// Input markup file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output DOCX file (defaults to the input path with a .docx extension)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = cli
        .output
        .unwrap_or_else(|| cli.input.with_extension("docx"));

    match convert(&cli.input, &output, cli.quiet) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn convert(input: &Path, output: &Path, quiet: bool) -> Result<()> {
    mdox::convert_file(input, output)?;
    if !quiet {
        println!("created {}", output.display());
    }
    Ok(())
}
