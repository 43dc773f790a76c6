//! Whole-document conversion.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::catalog::{LinkConfig, VolumeAnnotator};
use crate::error::{Error, Result};
use crate::markdown::{LineRenderer, RenderConfig, reduce};
use crate::markup::tokenize;
use crate::util::decode_utf8;

/// Configuration for a [`Converter`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertConfig {
    /// Volume link templates.
    pub links: LinkConfig,
    /// Line classification options.
    pub render: RenderConfig,
}

impl ConvertConfig {
    pub fn with_links(mut self, links: LinkConfig) -> Self {
        self.links = links;
        self
    }

    pub fn with_render(mut self, render: RenderConfig) -> Self {
        self.render = render;
        self
    }
}

/// Converts catalog HTML to Markdown.
///
/// A converter only holds configuration. Each call to [`Converter::convert`]
/// starts from the supplement section with an empty buffer, so one converter
/// can process any number of documents.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    annotator: VolumeAnnotator,
    render: RenderConfig,
}

impl Converter {
    /// Create a converter with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with the specified configuration.
    pub fn with_config(config: ConvertConfig) -> Self {
        Self {
            annotator: VolumeAnnotator::new(&config.links),
            render: config.render,
        }
    }

    /// Convert an HTML document to Markdown.
    pub fn convert(&self, html: &str) -> String {
        let lines = reduce(tokenize(html));
        debug!("reduced document to {} lines", lines.len());
        LineRenderer::new(&self.annotator, &self.render).render(lines)
    }

    /// Convert `input` and write the result to `output`.
    ///
    /// The output file is only written once the whole document converted.
    pub fn convert_file(&self, input: &Path, output: &Path) -> Result<()> {
        let bytes = fs::read(input).map_err(|e| Error::io(input, e))?;
        let html = decode_utf8(&bytes).ok_or_else(|| Error::Decode {
            path: input.to_path_buf(),
        })?;
        debug!("read {} bytes from {}", bytes.len(), input.display());

        let markdown = self.convert(&html);

        fs::write(output, &markdown).map_err(|e| Error::io(output, e))?;
        info!("wrote {} bytes to {}", markdown.len(), output.display());
        Ok(())
    }
}

/// Convert an HTML document with the default configuration.
///
/// # Examples
///
/// ```
/// let md = siku_md::convert_html("<h2>經部</h2><div>第二一册</div>");
/// assert!(md.starts_with("## 經部\n\n第二一册 ([21]("));
/// assert!(md.contains("%E7%B6%93%E9%83%A8021"));
/// ```
pub fn convert_html(html: &str) -> String {
    Converter::new().convert(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state_per_document() {
        let converter = Converter::new();
        let first = converter.convert("<h2>經部</h2><div>第一册</div>");
        assert!(first.contains("%E7%B6%93%E9%83%A8001"));

        let second = converter.convert("<div>第一册</div>");
        assert!(second.contains("%E8%A3%9C%E7%B7%A801"));
        assert!(!second.contains("%E7%B6%93%E9%83%A8"));
    }

    #[test]
    fn test_config_base_url() {
        let links = LinkConfig::default().with_base_url("https://example.org/");
        let converter = Converter::with_config(ConvertConfig::default().with_links(links));
        let md = converter.convert("第一册");
        assert!(md.contains("(https://example.org/%E5%9B%9B"));
    }

    #[test]
    fn test_config_annotate_entries() {
        let converter = Converter::with_config(
            ConvertConfig::default()
                .with_render(RenderConfig::default().with_annotate_catalog_entries(true)),
        );
        let md = converter.convert("<a>四庫全書</a>第一册");
        assert!(md.starts_with("- **四庫全書**第一册 ([1]("));
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(convert_html(""), "");
        assert_eq!(convert_html("<html><body> </body></html>"), "");
    }
}
