//! Input resolution: validate a user-supplied path and derive output names.
//!
//! Output files always land in the working directory (or the configured
//! output directory) under the input's base name with the extension
//! swapped; the input's own directory never leaks into the output path.

use crate::error::TarmdError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Convert a possibly-relative path to an absolute one using the process's
/// current working directory. Falls back to the path unchanged if the
/// working directory itself cannot be determined.
pub fn resolve_absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}

/// Resolve an input path, validating existence and readability.
///
/// A stat error that is not "not found" is not treated as "exists":
/// permission-denied paths get their own error rather than sailing on
/// into a confusing read failure later.
pub fn resolve_input(path: &Path) -> Result<PathBuf, TarmdError> {
    let path = resolve_absolute(path);

    if !path.exists() {
        return Err(TarmdError::FileNotFound { path });
    }

    // Check read permission by attempting to open
    match std::fs::File::open(&path) {
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            return Err(TarmdError::PermissionDenied { path });
        }
        Err(_) => {
            return Err(TarmdError::FileNotFound { path });
        }
    }

    debug!("Resolved input: {}", path.display());
    Ok(path)
}

/// Derive an output filename from an input path: take the base name,
/// strip the final extension, append `extension`.
///
/// `notes.md` → `notes.html`; `archive.tar.gz` → `archive.tar.html`;
/// an extensionless name is used as-is. Directory components are
/// discarded; the result is a bare filename.
///
/// `extension` must include its leading dot.
pub fn derive_output_name(input: &Path, extension: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .unwrap_or_else(|| input.as_os_str());
    let mut name = stem.to_os_string();
    name.push(extension);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_strips_single_extension() {
        assert_eq!(
            derive_output_name(Path::new("notes.md"), ".html"),
            PathBuf::from("notes.html")
        );
    }

    #[test]
    fn derive_strips_only_final_extension() {
        assert_eq!(
            derive_output_name(Path::new("archive.tar.gz"), ".html"),
            PathBuf::from("archive.tar.html")
        );
    }

    #[test]
    fn derive_handles_extensionless_name() {
        assert_eq!(
            derive_output_name(Path::new("Makefile"), ".html"),
            PathBuf::from("Makefile.html")
        );
    }

    #[test]
    fn derive_discards_directory_components() {
        assert_eq!(
            derive_output_name(Path::new("/var/doc/report.md"), ".pdf"),
            PathBuf::from("report.pdf")
        );
    }

    #[test]
    fn derive_html_then_pdf_chain_keeps_stem() {
        let html = derive_output_name(Path::new("README.md"), ".html");
        assert_eq!(html, PathBuf::from("README.html"));
        assert_eq!(
            derive_output_name(&html, ".pdf"),
            PathBuf::from("README.pdf")
        );
    }

    #[test]
    fn resolve_input_missing_file() {
        let err = resolve_input(Path::new("definitely-not-here-xyz.md")).unwrap_err();
        assert!(matches!(err, TarmdError::FileNotFound { .. }));
        assert!(err.to_string().contains("File not found"));
    }

    #[test]
    fn resolve_input_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("in.md");
        std::fs::write(&file, "# hi\n").unwrap();
        let resolved = resolve_input(&file).unwrap();
        assert!(resolved.is_absolute());
    }

    #[test]
    fn resolve_absolute_keeps_absolute_paths() {
        let p = Path::new("/tmp/x.md");
        assert_eq!(resolve_absolute(p), PathBuf::from("/tmp/x.md"));
    }

    #[test]
    fn resolve_absolute_anchors_relative_paths() {
        let p = resolve_absolute(Path::new("x.md"));
        assert!(p.is_absolute());
        assert!(p.ends_with("x.md"));
    }
}
