//! CLI binary for tarmd.
//!
//! A thin shim over the library crate that maps subcommands and flags
//! to `ConversionConfig` and prints the produced paths.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tarmd::{to_html, to_pdf, ConversionConfig};
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Markdown to HTML (writes README.html in the current directory)
  tarmd html README.md

  # Markdown to HTML and PDF (writes README.html and README.pdf)
  tarmd pdf README.md

  # Apply a stylesheet to the PDF render
  tarmd pdf README.md --css print.css

ENVIRONMENT VARIABLES:
  TARMD_CSS          Default stylesheet for the pdf subcommand
  TARMD_WKHTMLTOPDF  Path to the wkhtmltopdf binary (default: found on PATH)

SETUP:
  The pdf subcommand needs wkhtmltopdf installed; the html subcommand
  has no external requirements.
"#;

/// Convert markdown documents to HTML and PDF.
#[derive(Parser, Debug)]
#[command(
    name = "tarmd",
    version,
    about = "Convert markdown documents to HTML and PDF",
    long_about = "Convert a markdown document to an HTML file, and optionally on to a PDF \
file rendered through wkhtmltopdf. Output files are written to the current working \
directory under the input's base name.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    #[command(subcommand)]
    command: CommandKind,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "TARMD_VERBOSE", global = true)]
    verbose: bool,

    /// Suppress all log output except errors.
    #[arg(short, long, env = "TARMD_QUIET", global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum CommandKind {
    /// Markdown to HTML.
    #[command(visible_alias = "h")]
    Html {
        /// Target markdown file.
        file: Option<PathBuf>,
    },

    /// Markdown to HTML, then HTML to PDF.
    #[command(visible_alias = "p")]
    Pdf {
        /// Target markdown file.
        file: Option<PathBuf>,

        /// Specific style sheet applied to the PDF render.
        #[arg(short = 'c', long = "css", env = "TARMD_CSS")]
        css: Option<PathBuf>,

        /// Name or path of the wkhtmltopdf binary.
        #[arg(long, env = "TARMD_WKHTMLTOPDF", default_value = "wkhtmltopdf")]
        engine: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(cli) {
        // The error message goes to stderr as-is, with no trailing newline.
        eprint!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        CommandKind::Html { file } => {
            let file = require_target(file)?;
            let html = to_html(&file, &ConversionConfig::default())?;
            println!("{}", html.display());
        }
        CommandKind::Pdf { file, css, engine } => {
            let file = require_target(file)?;
            let config = build_config(css, engine)?;

            // The HTML stage always runs first; its path is printed even
            // if the PDF stage fails afterwards, and the file stays on disk.
            let html = to_html(&file, &config)?;
            println!("{}", html.display());

            let pdf = to_pdf(&html, &config)?;
            println!("{}", pdf.display());
        }
    }
    Ok(())
}

/// Validate the target argument before touching the filesystem.
fn require_target(file: Option<PathBuf>) -> Result<PathBuf> {
    match file {
        Some(f) => Ok(f),
        None => bail!("Please input target markdown file"),
    }
}

/// Map CLI flags to `ConversionConfig`.
fn build_config(css: Option<PathBuf>, engine: PathBuf) -> Result<ConversionConfig> {
    let mut builder = ConversionConfig::builder().engine_binary(engine);
    if let Some(css) = css {
        builder = builder.css(css);
    }
    Ok(builder.build()?)
}
