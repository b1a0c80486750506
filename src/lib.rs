//! # tarmd
//!
//! Convert markdown documents to HTML, and optionally on to PDF.
//!
//! ## Why this crate?
//!
//! Writing meeting notes and reports in markdown is pleasant; sharing them
//! rarely is. tarmd chains two well-understood conversions (CommonMark to
//! HTML via `pulldown-cmark`, HTML to PDF via the `wkhtmltopdf` engine)
//! behind one command, with an optional stylesheet injected into the PDF
//! stage so the printed document does not have to look like a browser dump.
//!
//! ## Pipeline Overview
//!
//! ```text
//! markdown file
//!  │
//!  ├─ 1. Input     validate the path resolves to a readable file
//!  ├─ 2. Markdown  parse CommonMark and emit HTML bytes
//!  ├─ 3. Write     <stem>.html in the working directory
//!  ├─ 4. PDF       feed the HTML file to wkhtmltopdf   (pdf only)
//!  └─ 5. Write     <stem>.pdf in the working directory (pdf only)
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tarmd::{convert, ConversionConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConversionConfig::builder()
//!         .css("print.css")
//!         .build()?;
//!     let output = convert("notes.md", &config)?;
//!     println!("{}", output.html_path.display());
//!     if let Some(pdf) = output.pdf_path {
//!         println!("{}", pdf.display());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `tarmd` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only deps:
//! ```toml
//! tarmd = { version = "0.1", default-features = false }
//! ```
//!
//! ## External engine
//!
//! The PDF stage requires a `wkhtmltopdf` binary on `PATH` (or pointed at via
//! [`ConversionConfig::builder`]'s `engine_binary` / the `TARMD_WKHTMLTOPDF`
//! environment variable). The HTML stage has no external requirements.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder, PageOrientation};
pub use convert::{convert, to_html, to_pdf, ConversionOutput};
pub use error::TarmdError;
pub use pipeline::markdown::MarkdownEngine;
pub use pipeline::pdf::PdfEngine;
