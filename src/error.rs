//! Error types for the tarmd library.
//!
//! Every failure aborts the whole conversion; there is no per-stage retry
//! and no partial-success reporting. If the PDF stage fails after the HTML
//! stage succeeded, the HTML file stays on disk (outputs are idempotently
//! regenerable) but the command as a whole is reported as failed.
//!
//! Each variant's `Display` carries the stage label the user sees
//! ("Failed create html file." / "Failed create pdf file.") while the
//! underlying cause is preserved via `#[source]` for diagnostics.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the tarmd library.
#[derive(Debug, Error)]
pub enum TarmdError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("File not found: '{path}'")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'")]
    PermissionDenied { path: PathBuf },

    // ── HTML stage ────────────────────────────────────────────────────────
    /// Reading the markdown input or writing the HTML output failed.
    #[error("Failed create html file. {source}")]
    HtmlStage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── PDF stage ─────────────────────────────────────────────────────────
    /// The rendering engine binary could not be started at all.
    #[error("Failed create pdf file. could not start '{binary}': {source}")]
    EngineUnavailable {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    /// The rendering engine ran but exited with an error.
    #[error("Failed create pdf file. {detail}")]
    RenderFailed { detail: String },

    /// Writing the PDF output file failed.
    #[error("Failed create pdf file. {source}")]
    PdfStage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_not_found_display() {
        let e = TarmdError::FileNotFound {
            path: PathBuf::from("missing.md"),
        };
        let msg = e.to_string();
        assert!(msg.contains("File not found"), "got: {msg}");
        assert!(msg.contains("missing.md"));
    }

    #[test]
    fn html_stage_display_has_stage_context() {
        let e = TarmdError::HtmlStage {
            path: PathBuf::from("notes.html"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        };
        let msg = e.to_string();
        assert!(msg.starts_with("Failed create html file."), "got: {msg}");
        assert!(msg.contains("disk full"));
    }

    #[test]
    fn pdf_stage_display_has_stage_context() {
        let e = TarmdError::RenderFailed {
            detail: "exit status: 1".into(),
        };
        assert!(e.to_string().starts_with("Failed create pdf file."));
    }

    #[test]
    fn engine_unavailable_names_the_binary() {
        let e = TarmdError::EngineUnavailable {
            binary: "wkhtmltopdf".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        let msg = e.to_string();
        assert!(msg.starts_with("Failed create pdf file."));
        assert!(msg.contains("wkhtmltopdf"));
    }

    #[test]
    fn source_is_preserved() {
        use std::error::Error as _;
        let e = TarmdError::PdfStage {
            path: PathBuf::from("notes.pdf"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(e.source().is_some());
    }
}
