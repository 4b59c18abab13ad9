use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use qb2est::config::ConversionConfig;
use qb2est::convert::{self, ConversionSummary};
use qb2est::{Result, ToolError};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_tracing(cli.verbose, cli.quiet)?;

    let mut config = match &cli.config {
        Some(path) => ConversionConfig::load(path)?,
        None => ConversionConfig::default(),
    };
    if let Some(sheet) = cli.sheet {
        config.sheet = sheet;
    }

    let input = match cli.input {
        Some(path) if path.exists() => path,
        Some(path) => return Err(ToolError::MissingInput(path)),
        None => prompt_for_input(&mut io::stdin().lock(), &mut io::stdout())?,
    };
    let output = cli
        .output
        .unwrap_or_else(|| convert::default_output_path(&input));

    println!("Processing...");
    let summary = convert::convert_workbook(&input, &output, &config, cli.xlsx_copy.as_deref())?;
    report(&output, &summary, cli.xlsx_copy.as_deref());
    Ok(())
}

fn init_tracing(verbose: u8, quiet: bool) -> Result<()> {
    let default_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "info",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("qb2est={default_level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}

/// Asks for the export file name until an existing path is entered.
fn prompt_for_input<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<PathBuf> {
    writeln!(
        output,
        "Please make sure that the QuickBooks export file is located in the same directory as this program."
    )?;
    writeln!(output, "Please enter the export file's filename (e.g. export.xlsx):")?;
    output.flush()?;

    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(ToolError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no export file name entered",
            )));
        }
        let candidate = PathBuf::from(line.trim());
        if candidate.is_file() {
            return Ok(candidate);
        }
        writeln!(output, "Filename does not exist. Please try again.")?;
        output.flush()?;
    }
}

fn report(output: &Path, summary: &ConversionSummary, xlsx_copy: Option<&Path>) {
    println!(
        "EST import file has been created and is now available as {} ({} of {} rows exported).",
        output.display(),
        summary.records_written,
        summary.rows_scanned
    );
    if let Some(path) = xlsx_copy {
        println!("EST import data also saved to {}.", path.display());
    }
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Convert a QuickBooks contact export into an EST 2.0 import file."
)]
struct Cli {
    /// QuickBooks export workbook (.xlsx). Prompted for when omitted.
    input: Option<PathBuf>,

    /// Import file to write. Defaults to the input path with a .txt extension.
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Worksheet holding the contacts.
    #[arg(long)]
    sheet: Option<String>,

    /// JSON file overriding the field translation and address settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also save the converted sheets to this Excel workbook.
    #[arg(long)]
    xlsx_copy: Option<PathBuf>,

    /// Increase log detail (-v debug, -vv trace).
    #[arg(long, short, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log errors.
    #[arg(long, short)]
    quiet: bool,
}
