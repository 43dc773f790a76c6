//! Volume link synthesis.
//!
//! Every scanned volume lives at a predictable file page:
//! `{base}{collection}{section label}{volume}{suffix}{extension}`, with the
//! collection, label and suffix percent-encoded. Named sections number their
//! volumes with three digits, the supplement with two.

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

use super::numeral::ChineseNumeral;
use super::section::SectionCategory;

pub const DEFAULT_BASE_URL: &str = "https://commons.wikimedia.org/wiki/File:";
pub const DEFAULT_COLLECTION: &str = "四庫全書存目叢書";
pub const DEFAULT_SUPPLEMENT_LABEL: &str = "補編";
pub const DEFAULT_VOLUME_SUFFIX: &str = "冊";
pub const DEFAULT_EXTENSION: &str = ".pdf";

/// Zero-padding width for volumes in a named section.
const SECTION_WIDTH: usize = 3;
/// Zero-padding width for supplement volumes.
const SUPPLEMENT_WIDTH: usize = 2;

/// Configuration for generated volume links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkConfig {
    /// URL prefix, used verbatim.
    pub base_url: String,
    /// Collection title, percent-encoded into the file name.
    pub collection: String,
    /// Label used when no named section is active.
    pub supplement_label: String,
    /// Text following the volume number, percent-encoded.
    pub volume_suffix: String,
    /// File extension, used verbatim.
    pub extension: String,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            supplement_label: DEFAULT_SUPPLEMENT_LABEL.to_string(),
            volume_suffix: DEFAULT_VOLUME_SUFFIX.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl LinkConfig {
    /// Replace the URL prefix.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

fn encode(text: &str) -> String {
    utf8_percent_encode(text, NON_ALPHANUMERIC).to_string()
}

/// Precomputed URL templates for each section.
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    /// URL prefix per named section, indexed by discriminant.
    section_prefixes: [String; 4],
    supplement_prefix: String,
    suffix: String,
}

impl Default for LinkBuilder {
    fn default() -> Self {
        Self::new(&LinkConfig::default())
    }
}

impl LinkBuilder {
    pub fn new(config: &LinkConfig) -> Self {
        let collection = format!("{}{}", config.base_url, encode(&config.collection));
        let section_prefixes =
            SectionCategory::SCAN_ORDER.map(|s| format!("{collection}{}", encode(&s.label())));
        Self {
            section_prefixes,
            supplement_prefix: format!("{collection}{}", encode(&config.supplement_label)),
            suffix: format!("{}{}", encode(&config.volume_suffix), config.extension),
        }
    }

    fn prefix(&self, section: Option<SectionCategory>) -> (&str, usize) {
        match section {
            Some(s) => (self.section_prefixes[s as usize].as_str(), SECTION_WIDTH),
            None => (self.supplement_prefix.as_str(), SUPPLEMENT_WIDTH),
        }
    }

    /// URL of one volume file.
    ///
    /// Non-numeric volume text is padded as text rather than rejected.
    pub fn url(&self, section: Option<SectionCategory>, volume: &ChineseNumeral) -> String {
        let (prefix, width) = self.prefix(section);
        let number = match volume.value() {
            Some(v) => format!("{v:0width$}"),
            None => format!("{:0>width$}", volume.display()),
        };
        format!("{prefix}{number}{}", self.suffix)
    }

    /// Markdown link for one volume: `[display](url)`.
    pub fn link(&self, section: Option<SectionCategory>, volume: &ChineseNumeral) -> String {
        format!("[{}]({})", volume.display(), self.url(section, volume))
    }

    /// Links for several volumes joined by `separator`.
    pub fn links(
        &self,
        section: Option<SectionCategory>,
        volumes: &[ChineseNumeral],
        separator: &str,
    ) -> String {
        volumes
            .iter()
            .map(|v| self.link(section, v))
            .collect::<Vec<_>>()
            .join(separator)
    }
}
