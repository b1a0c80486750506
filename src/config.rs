//! Configuration types for markdown-to-HTML/PDF conversion.
//!
//! All conversion behaviour is controlled through [`ConversionConfig`], built
//! via its [`ConversionConfigBuilder`]. The defaults reproduce the tool's
//! stock output: landscape pages with a right-aligned page-number footer and
//! no stylesheet override.
//!
//! The two engine fields are the test seam: inject a mock
//! [`MarkdownEngine`](crate::pipeline::markdown::MarkdownEngine) or
//! [`PdfEngine`](crate::pipeline::pdf::PdfEngine) and the dispatcher logic
//! can be exercised without a wkhtmltopdf install.

use crate::pipeline::markdown::MarkdownEngine;
use crate::pipeline::pdf::PdfEngine;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Default name of the external HTML-to-PDF engine binary.
pub const DEFAULT_ENGINE_BINARY: &str = "wkhtmltopdf";

/// Page orientation passed to the PDF engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageOrientation {
    /// Taller than wide.
    Portrait,
    /// Wider than tall. (default; matches the tool's stock output)
    #[default]
    Landscape,
}

impl PageOrientation {
    /// The value wkhtmltopdf expects for its `--orientation` flag.
    pub fn as_engine_arg(&self) -> &'static str {
        match self {
            PageOrientation::Portrait => "Portrait",
            PageOrientation::Landscape => "Landscape",
        }
    }
}

/// Configuration for a single conversion run.
///
/// Built via [`ConversionConfig::builder()`] or using
/// [`ConversionConfig::default()`].
///
/// # Example
/// ```rust
/// use tarmd::ConversionConfig;
///
/// let config = ConversionConfig::builder()
///     .css("print.css")
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct ConversionConfig {
    /// User stylesheet applied by the PDF engine. Default: none.
    ///
    /// When set, the stylesheet overrides the document's own embedded or
    /// linked styles for the PDF render. When unset, no override flag is
    /// passed at all and the document styles itself.
    pub css: Option<PathBuf>,

    /// Page orientation for the PDF stage. Default: landscape.
    pub orientation: PageOrientation,

    /// Footer text rendered right-aligned on every PDF page. Default: `[page]`,
    /// which wkhtmltopdf substitutes with the current page number.
    ///
    /// Set to `None` to omit the footer entirely.
    pub footer_right: Option<String>,

    /// Footer font size in points. Default: 10.
    pub footer_font_size: u32,

    /// Name or path of the wkhtmltopdf binary. Default: `wkhtmltopdf`
    /// (resolved through `PATH`).
    pub engine_binary: PathBuf,

    /// Directory both output files are written to. Default: `None`,
    /// meaning the process's current working directory. Output names are
    /// always derived from the input's base name, never its directory.
    pub output_dir: Option<PathBuf>,

    /// Markdown renderer. `None` uses the built-in CommonMark engine.
    pub markdown_engine: Option<Arc<dyn MarkdownEngine>>,

    /// PDF renderer. `None` spawns `engine_binary` as an external process.
    pub pdf_engine: Option<Arc<dyn PdfEngine>>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            css: None,
            orientation: PageOrientation::default(),
            footer_right: Some("[page]".to_string()),
            footer_font_size: 10,
            engine_binary: PathBuf::from(DEFAULT_ENGINE_BINARY),
            output_dir: None,
            markdown_engine: None,
            pdf_engine: None,
        }
    }
}

impl fmt::Debug for ConversionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionConfig")
            .field("css", &self.css)
            .field("orientation", &self.orientation)
            .field("footer_right", &self.footer_right)
            .field("footer_font_size", &self.footer_font_size)
            .field("engine_binary", &self.engine_binary)
            .field("output_dir", &self.output_dir)
            .field(
                "markdown_engine",
                &self.markdown_engine.as_ref().map(|_| "<dyn MarkdownEngine>"),
            )
            .field("pdf_engine", &self.pdf_engine.as_ref().map(|_| "<dyn PdfEngine>"))
            .finish()
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn css(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.css = Some(path.into());
        self
    }

    pub fn orientation(mut self, orientation: PageOrientation) -> Self {
        self.config.orientation = orientation;
        self
    }

    pub fn footer_right(mut self, text: impl Into<String>) -> Self {
        self.config.footer_right = Some(text.into());
        self
    }

    pub fn no_footer(mut self) -> Self {
        self.config.footer_right = None;
        self
    }

    pub fn footer_font_size(mut self, pt: u32) -> Self {
        self.config.footer_font_size = pt.max(1);
        self
    }

    pub fn engine_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.config.engine_binary = binary.into();
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = Some(dir.into());
        self
    }

    pub fn markdown_engine(mut self, engine: Arc<dyn MarkdownEngine>) -> Self {
        self.config.markdown_engine = Some(engine);
        self
    }

    pub fn pdf_engine(mut self, engine: Arc<dyn PdfEngine>) -> Self {
        self.config.pdf_engine = Some(engine);
        self
    }

    /// Build the configuration.
    ///
    /// Infallible today; returns `Result` so future validation does not
    /// break the calling convention.
    pub fn build(self) -> Result<ConversionConfig, crate::error::TarmdError> {
        Ok(self.config)
    }
}
