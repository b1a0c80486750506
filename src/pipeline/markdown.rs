//! Markdown rendering: CommonMark bytes → HTML bytes.
//!
//! The parser is [`pulldown_cmark`] with its default dialect: no
//! extensions are enabled, so the output for a given input is stable
//! across runs (the idempotence the e2e tests rely on). The engine is a
//! trait so tests and embedders can substitute another renderer without
//! touching the dispatcher.

use pulldown_cmark::{html, Parser};
use tracing::debug;

/// Capability: render markdown bytes to HTML bytes.
///
/// Implementations must be deterministic; the pipeline makes no attempt
/// to cache or deduplicate output, it simply overwrites.
pub trait MarkdownEngine: Send + Sync {
    fn render(&self, markdown: &[u8]) -> Vec<u8>;
}

/// The built-in engine: pulldown-cmark, default CommonMark dialect.
#[derive(Debug, Default)]
pub struct CommonMarkEngine;

impl MarkdownEngine for CommonMarkEngine {
    fn render(&self, markdown: &[u8]) -> Vec<u8> {
        // Markdown is text by definition; invalid UTF-8 sequences are
        // replaced rather than rejected, matching how browsers treat
        // mis-encoded documents.
        let text = String::from_utf8_lossy(markdown);
        let parser = Parser::new(&text);

        let mut out = String::new();
        html::push_html(&mut out, parser);
        debug!("Rendered {} bytes of markdown → {} bytes of HTML", markdown.len(), out.len());

        out.into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_str(md: &str) -> String {
        String::from_utf8(CommonMarkEngine.render(md.as_bytes())).unwrap()
    }

    #[test]
    fn heading_becomes_h1() {
        let html = render_str("# Title\n");
        assert!(html.contains("<h1>Title</h1>"), "got: {html}");
    }

    #[test]
    fn paragraph_and_emphasis() {
        let html = render_str("plain *emph* text\n");
        assert!(html.contains("<p>"));
        assert!(html.contains("<em>emph</em>"));
    }

    #[test]
    fn empty_input_renders_empty() {
        assert!(CommonMarkEngine.render(b"").is_empty());
    }

    #[test]
    fn rendering_is_deterministic() {
        let md = b"# A\n\n- one\n- two\n\n```\ncode\n```\n";
        assert_eq!(CommonMarkEngine.render(md), CommonMarkEngine.render(md));
    }

    #[test]
    fn invalid_utf8_is_replaced_not_rejected() {
        let html = CommonMarkEngine.render(b"ok \xFF bytes\n");
        assert!(String::from_utf8(html).unwrap().contains("ok"));
    }
}
