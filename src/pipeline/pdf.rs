//! PDF rendering: drive the external wkhtmltopdf engine.
//!
//! ## Why an external process?
//!
//! wkhtmltopdf embeds a full WebKit; linking it is impractical and every
//! comparable tool shells out instead. The engine reads the HTML file
//! itself (it accepts a path or URL), so only the option flags and the
//! source path cross the process boundary. The PDF bytes come back on
//! the child's stdout (output target `-`) so the pipeline holds the whole
//! document in memory before touching the output file.
//!
//! The call blocks with no timeout: the caller waits for the engine to
//! succeed or fail, and the only way to abort mid-render is to kill the
//! process.

use crate::config::ConversionConfig;
use crate::error::TarmdError;
use std::ffi::OsString;
use std::path::Path;
use std::process::Command;
use tracing::{debug, info};

/// Capability: render an HTML source with page options to PDF bytes.
pub trait PdfEngine: Send + Sync {
    fn render(&self, html_source: &Path, config: &ConversionConfig) -> Result<Vec<u8>, TarmdError>;
}

/// The built-in engine: spawn the `wkhtmltopdf` binary.
#[derive(Debug, Default)]
pub struct WkhtmltopdfEngine;

impl PdfEngine for WkhtmltopdfEngine {
    fn render(&self, html_source: &Path, config: &ConversionConfig) -> Result<Vec<u8>, TarmdError> {
        let args = build_engine_args(html_source, config);
        debug!(
            "Spawning {} with args: {:?}",
            config.engine_binary.display(),
            args
        );

        let output = Command::new(&config.engine_binary)
            .args(&args)
            .output()
            .map_err(|e| TarmdError::EngineUnavailable {
                binary: config.engine_binary.display().to_string(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(TarmdError::RenderFailed {
                detail: format!(
                    "{} exited with {}: {}",
                    config.engine_binary.display(),
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        info!("Engine produced {} bytes of PDF", output.stdout.len());
        Ok(output.stdout)
    }
}

/// Build the wkhtmltopdf argument list from the page options.
///
/// The source path comes second-to-last, followed by `-` to stream the
/// PDF to stdout. The stylesheet flag is emitted only when a stylesheet
/// is configured; absent means the document's own styles apply.
pub fn build_engine_args(html_source: &Path, config: &ConversionConfig) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        "--orientation".into(),
        config.orientation.as_engine_arg().into(),
    ];

    if let Some(ref footer) = config.footer_right {
        args.push("--footer-right".into());
        args.push(footer.into());
        args.push("--footer-font-size".into());
        args.push(config.footer_font_size.to_string().into());
    }

    if let Some(ref css) = config.css {
        args.push("--user-style-sheet".into());
        args.push(css.into());
    }

    args.push(html_source.into());
    args.push("-".into());
    args
}
