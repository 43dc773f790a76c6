//! Reduced lines → final Markdown.
//!
//! Each line is classified by an ordered chain of [`LineRule`]s. The first
//! rule that matches transforms the line and, by default, ends the chain.
//! The chain also drives the [`SectionTracker`]: a line that announces a
//! section updates it before the line's own volume references are linked,
//! and the section stays in force for all following lines.

use tracing::debug;

use crate::catalog::{SECTION_MARKER, SectionCategory, SectionTracker, VolumeAnnotator};

/// Variant glyph normalized on every line.
const VARIANT_GLYPH: &str = "坿";
/// Replacement for [`VARIANT_GLYPH`].
const STANDARD_GLYPH: &str = "附";

/// Volume unit, "册".
const VOLUME_UNIT: char = '册';
/// Ordinal prefix, "第".
const ORDINAL: char = '第';
/// "First" (as in the preface volume), "首".
const FIRST: char = '首';

/// Separator between output blocks.
const BLOCK_SEPARATOR: &str = "\n\n";

/// Options for line rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderConfig {
    /// Let catalog entry lines fall through to the volume and section rules
    /// after being bulleted. Off by default: an entry line is only bulleted.
    pub annotate_catalog_entries: bool,
}

impl RenderConfig {
    pub fn with_annotate_catalog_entries(mut self, enabled: bool) -> Self {
        self.annotate_catalog_entries = enabled;
        self
    }
}

/// Line classification rules, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRule {
    /// Starts with strong emphasis: rendered as a bullet.
    CatalogEntry,
    /// Contains `册` and `第` or `首`: section re-scanned if the line names
    /// one, then volume references linked.
    VolumeReference,
    /// Ends with `部`: section re-scanned, text unchanged.
    SectionAnnouncement,
}

impl LineRule {
    pub const ORDER: [LineRule; 3] = [
        LineRule::CatalogEntry,
        LineRule::VolumeReference,
        LineRule::SectionAnnouncement,
    ];

    /// Whether this rule applies to `line`.
    pub fn matches(self, line: &str) -> bool {
        match self {
            LineRule::CatalogEntry => line.starts_with("**") && !line.starts_with("## "),
            LineRule::VolumeReference => {
                line.contains(VOLUME_UNIT) && (line.contains(ORDINAL) || line.contains(FIRST))
            }
            LineRule::SectionAnnouncement => line.ends_with(SECTION_MARKER),
        }
    }
}

/// Renders reduced lines for one document.
///
/// Owns the section state, so a renderer must not be reused across
/// documents.
pub struct LineRenderer<'a> {
    annotator: &'a VolumeAnnotator,
    config: &'a RenderConfig,
    sections: SectionTracker,
}

impl<'a> LineRenderer<'a> {
    pub fn new(annotator: &'a VolumeAnnotator, config: &'a RenderConfig) -> Self {
        Self {
            annotator,
            config,
            sections: SectionTracker::new(),
        }
    }

    /// Section currently in force; `None` is the supplement.
    pub fn section(&self) -> Option<SectionCategory> {
        self.sections.current()
    }

    /// Render one line. Returns `None` for blank lines.
    pub fn render_line(&mut self, line: &str) -> Option<String> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let mut line = line.replace(VARIANT_GLYPH, STANDARD_GLYPH);
        for rule in LineRule::ORDER {
            if !rule.matches(&line) {
                continue;
            }
            line = self.apply(rule, line);
            if rule == LineRule::CatalogEntry && self.config.annotate_catalog_entries {
                continue;
            }
            break;
        }
        Some(line)
    }

    fn apply(&mut self, rule: LineRule, line: String) -> String {
        match rule {
            LineRule::CatalogEntry => format!("- {line}"),
            LineRule::VolumeReference => {
                if line.contains(SECTION_MARKER) {
                    self.sections.update(&line);
                }
                self.annotator
                    .annotate(&line, self.sections.current())
                    .into_owned()
            }
            LineRule::SectionAnnouncement => {
                self.sections.update(&line);
                line
            }
        }
    }

    /// Render all lines and join them into a document.
    pub fn render<I, S>(mut self, lines: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rendered: Vec<String> = lines
            .into_iter()
            .filter_map(|line| self.render_line(line.as_ref()))
            .collect();
        debug!(
            "rendered {} blocks, final section {:?}",
            rendered.len(),
            self.section()
        );
        rendered.join(BLOCK_SEPARATOR)
    }
}
