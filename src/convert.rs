//! Conversion entry points.
//!
//! [`to_html`] and [`to_pdf`] are the two pipeline stages; [`convert`]
//! chains them. Each call is independent and stateless; the only side
//! effect is the output file(s) written, and an existing file at the
//! output path is overwritten. Writes are not atomic: a crash mid-write
//! can leave a partial file, which the next run simply regenerates.

use crate::config::ConversionConfig;
use crate::error::TarmdError;
use crate::pipeline::input;
use crate::pipeline::markdown::{CommonMarkEngine, MarkdownEngine};
use crate::pipeline::pdf::{PdfEngine, WkhtmltopdfEngine};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// The artifacts produced by a full [`convert`] run.
///
/// `pdf_path` is `None` when only the HTML stage ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOutput {
    pub html_path: PathBuf,
    pub pdf_path: Option<PathBuf>,
}

/// Convert a markdown file to an HTML file.
///
/// Reads the whole input, renders it through the configured
/// [`MarkdownEngine`] (built-in CommonMark by default), and writes
/// `<stem>.html` next to the working directory's other outputs.
///
/// # Returns
/// The path of the written HTML file: a bare filename unless
/// `config.output_dir` is set.
///
/// # Errors
/// * [`TarmdError::FileNotFound`] / [`TarmdError::PermissionDenied`] for
///   an unusable input path
/// * [`TarmdError::HtmlStage`] when the read or the write fails
pub fn to_html(
    markdown_path: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<PathBuf, TarmdError> {
    let markdown_path = markdown_path.as_ref();
    let resolved = input::resolve_input(markdown_path)?;

    let bytes = std::fs::read(&resolved).map_err(|e| TarmdError::HtmlStage {
        path: resolved.clone(),
        source: e,
    })?;

    let html = resolve_markdown_engine(config).render(&bytes);

    let out_path = output_path(config, input::derive_output_name(markdown_path, ".html"));
    std::fs::write(&out_path, &html).map_err(|e| TarmdError::HtmlStage {
        path: out_path.clone(),
        source: e,
    })?;

    info!(
        "Wrote {} ({} bytes of HTML)",
        out_path.display(),
        html.len()
    );
    Ok(out_path)
}

/// Convert an HTML file to a PDF file through the configured [`PdfEngine`].
///
/// The engine receives the HTML source path plus the page options from
/// `config` (orientation, footer, optional user stylesheet) and returns
/// the PDF bytes in memory; they are then written to `<stem>.pdf`.
///
/// # Errors
/// * [`TarmdError::EngineUnavailable`] when the engine cannot be started
/// * [`TarmdError::RenderFailed`] when the engine reports an error
/// * [`TarmdError::PdfStage`] when the output write fails
pub fn to_pdf(
    html_path: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<PathBuf, TarmdError> {
    let html_path = html_path.as_ref();

    let pdf = resolve_pdf_engine(config).render(html_path, config)?;

    let out_path = output_path(config, input::derive_output_name(html_path, ".pdf"));
    std::fs::write(&out_path, &pdf).map_err(|e| TarmdError::PdfStage {
        path: out_path.clone(),
        source: e,
    })?;

    info!("Wrote {} ({} bytes of PDF)", out_path.display(), pdf.len());
    Ok(out_path)
}

/// Run the full pipeline: markdown → HTML → PDF.
///
/// The HTML stage always runs (a pre-existing HTML file for the same
/// input is never reused) and its output stays on disk even when the
/// PDF stage fails afterwards.
pub fn convert(
    markdown_path: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionOutput, TarmdError> {
    let html_path = to_html(&markdown_path, config)?;
    let pdf_path = to_pdf(&html_path, config)?;
    Ok(ConversionOutput {
        html_path,
        pdf_path: Some(pdf_path),
    })
}

// ── Internal helpers ─────────────────────────────────────────────────────

/// Place a derived output name in the configured directory, or leave it
/// bare (relative to the working directory) when none is configured.
fn output_path(config: &ConversionConfig, name: PathBuf) -> PathBuf {
    match config.output_dir {
        Some(ref dir) => dir.join(name),
        None => name,
    }
}

fn resolve_markdown_engine(config: &ConversionConfig) -> Arc<dyn MarkdownEngine> {
    match config.markdown_engine {
        Some(ref engine) => Arc::clone(engine),
        None => Arc::new(CommonMarkEngine),
    }
}

fn resolve_pdf_engine(config: &ConversionConfig) -> Arc<dyn PdfEngine> {
    match config.pdf_engine {
        Some(ref engine) => Arc::clone(engine),
        None => Arc::new(WkhtmltopdfEngine),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_is_bare_without_output_dir() {
        let config = ConversionConfig::default();
        assert_eq!(
            output_path(&config, PathBuf::from("a.html")),
            PathBuf::from("a.html")
        );
    }

    #[test]
    fn output_path_joins_configured_dir() {
        let config = ConversionConfig::builder().output_dir("/tmp/out").build().unwrap();
        assert_eq!(
            output_path(&config, PathBuf::from("a.html")),
            PathBuf::from("/tmp/out/a.html")
        );
    }

    #[test]
    fn to_html_missing_input_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConversionConfig::builder()
            .output_dir(dir.path())
            .build()
            .unwrap();

        let err = to_html(dir.path().join("missing.md"), &config).unwrap_err();
        assert!(matches!(err, TarmdError::FileNotFound { .. }));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
