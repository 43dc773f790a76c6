//! Bibliographic section tracking.

use tracing::debug;

/// Glyph that closes a section name (`經部`, `史部`, ...).
pub const SECTION_MARKER: char = '部';

/// One of the four named divisions of the archive.
///
/// Volumes outside every named division belong to the supplement, which is
/// represented as the absence of a section (`Option<SectionCategory>::None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionCategory {
    /// 集部, collected works.
    Ji,
    /// 史部, histories.
    Shi,
    /// 經部, classics.
    Jing,
    /// 子部, masters.
    Zi,
}

impl SectionCategory {
    /// Sections in the order they are tested against a line.
    pub const SCAN_ORDER: [SectionCategory; 4] = [
        SectionCategory::Ji,
        SectionCategory::Shi,
        SectionCategory::Jing,
        SectionCategory::Zi,
    ];

    /// The glyph that names this section.
    pub fn glyph(self) -> char {
        match self {
            SectionCategory::Ji => '集',
            SectionCategory::Shi => '史',
            SectionCategory::Jing => '經',
            SectionCategory::Zi => '子',
        }
    }

    /// Full section label, e.g. `經部`.
    pub fn label(self) -> String {
        format!("{}{}", self.glyph(), SECTION_MARKER)
    }

    /// Find the first section (in scan order) whose label occurs in `line`.
    pub fn detect(line: &str) -> Option<SectionCategory> {
        Self::SCAN_ORDER
            .into_iter()
            .find(|section| line.contains(&section.label()))
    }
}

/// Tracks the section in force while lines are classified.
///
/// Starts in the supplement and changes only when a line announces a
/// section. A fresh tracker must be used for each document.
#[derive(Debug, Clone, Default)]
pub struct SectionTracker {
    current: Option<SectionCategory>,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently active section; `None` is the supplement.
    pub fn current(&self) -> Option<SectionCategory> {
        self.current
    }

    /// Re-scan `line` and set the section it names, or reset to the
    /// supplement if it names none.
    pub fn update(&mut self, line: &str) -> Option<SectionCategory> {
        let detected = SectionCategory::detect(line);
        if detected != self.current {
            debug!("section changed: {:?} -> {:?}", self.current, detected);
        }
        self.current = detected;
        detected
    }
}
