//! Volume reference annotation.
//!
//! A volume reference such as `第十至第十二册` is rewritten in place to carry
//! links to the scanned volumes: `第十至第十二册 ([10](…),[11](…),[12](…))`.
//!
//! Six phrasings are recognized. They are tried in [`VolumePattern::PRIORITY`]
//! order and only the first phrasing found in a line is rewritten; the more
//! general patterns at the end would otherwise swallow parts of the
//! compound ones (`第A册` matches inside every other phrasing).

use std::borrow::Cow;

use regex_lite::{Captures, Regex};
use tracing::trace;

use super::links::{LinkBuilder, LinkConfig};
use super::numeral::ChineseNumeral;
use super::patterns::{
    ADJACENT_PAIR_RE, BARE_RANGE_RE, DOUBLED_ORDINAL_RANGE_RE, INTERPUNCT_PAIR_RE, RANGE_RE,
    SINGLE_RE,
};
use super::section::SectionCategory;

/// The recognized volume phrasings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumePattern {
    /// `第A第B册` → two volumes, rendered `第A、第B册`.
    AdjacentPair,
    /// `第A至B册` → every volume from A to B.
    BareRange,
    /// `第A至第第B册` → every volume from A to B, rendered `第A至第B册`.
    DoubledOrdinalRange,
    /// `第A至第B册` → every volume from A to B.
    Range,
    /// `第A・第B册` → volumes A and B, links joined with `-`.
    InterpunctPair,
    /// `第A册` → one volume.
    Single,
}

impl VolumePattern {
    /// Order in which phrasings are tried.
    pub const PRIORITY: [VolumePattern; 6] = [
        VolumePattern::AdjacentPair,
        VolumePattern::BareRange,
        VolumePattern::DoubledOrdinalRange,
        VolumePattern::Range,
        VolumePattern::InterpunctPair,
        VolumePattern::Single,
    ];

    fn regex(self) -> &'static Regex {
        match self {
            VolumePattern::AdjacentPair => &ADJACENT_PAIR_RE,
            VolumePattern::BareRange => &BARE_RANGE_RE,
            VolumePattern::DoubledOrdinalRange => &DOUBLED_ORDINAL_RANGE_RE,
            VolumePattern::Range => &RANGE_RE,
            VolumePattern::InterpunctPair => &INTERPUNCT_PAIR_RE,
            VolumePattern::Single => &SINGLE_RE,
        }
    }

    /// Find the highest-priority phrasing present in `line`.
    pub fn detect(line: &str) -> Option<VolumePattern> {
        Self::PRIORITY
            .into_iter()
            .find(|pattern| pattern.regex().is_match(line))
    }

    /// Rewrite one match. Returns `None` to leave the match untouched.
    fn rewrite(
        self,
        caps: &Captures<'_>,
        section: Option<SectionCategory>,
        links: &LinkBuilder,
    ) -> Option<String> {
        let first = &caps[1];
        let second = caps.get(2).map_or("", |m| m.as_str());

        let rendered = match self {
            VolumePattern::AdjacentPair => {
                let volumes = [ChineseNumeral::parse(first), ChineseNumeral::parse(second)];
                format!(
                    "第{first}、第{second}册 ({})",
                    links.links(section, &volumes, ",")
                )
            }
            VolumePattern::BareRange => {
                let volumes = expand_range(first, second)?;
                format!(
                    "第{first}至{second}册 ({})",
                    links.links(section, &volumes, ",")
                )
            }
            VolumePattern::DoubledOrdinalRange | VolumePattern::Range => {
                let volumes = expand_range(first, second)?;
                format!(
                    "第{first}至第{second}册 ({})",
                    links.links(section, &volumes, ",")
                )
            }
            VolumePattern::InterpunctPair => {
                let volumes = [ChineseNumeral::parse(first), ChineseNumeral::parse(second)];
                format!(
                    "第{first}・第{second}册 ({})",
                    links.links(section, &volumes, "-")
                )
            }
            VolumePattern::Single => {
                let volume = ChineseNumeral::parse(first);
                format!("第{first}册 ({})", links.link(section, &volume))
            }
        };
        Some(rendered)
    }
}

/// Widest range that is expanded into links. The catalog numbers its volumes
/// in the low hundreds.
pub const MAX_RANGE_SPAN: u64 = 1000;

/// Every volume from `start` to `end` inclusive.
///
/// A reversed range yields no volumes. `None` if either end does not convert
/// to an integer or the range spans more than [`MAX_RANGE_SPAN`] volumes.
fn expand_range(start: &str, end: &str) -> Option<Vec<ChineseNumeral>> {
    let start = ChineseNumeral::parse(start).value()?;
    let end = ChineseNumeral::parse(end).value()?;
    if end.saturating_sub(start) >= MAX_RANGE_SPAN {
        trace!("range {start}..={end} exceeds {MAX_RANGE_SPAN} volumes, left as is");
        return None;
    }
    Some(
        (start..=end)
            .map(|n| ChineseNumeral::from_decimal(n.to_string()))
            .collect(),
    )
}

/// Rewrites volume references with links for the active section.
#[derive(Debug, Clone, Default)]
pub struct VolumeAnnotator {
    links: LinkBuilder,
}

impl VolumeAnnotator {
    pub fn new(config: &LinkConfig) -> Self {
        Self {
            links: LinkBuilder::new(config),
        }
    }

    /// Annotate every occurrence of the highest-priority phrasing in `line`.
    ///
    /// Lines without a recognized phrasing are returned unchanged.
    pub fn annotate<'a>(&self, line: &'a str, section: Option<SectionCategory>) -> Cow<'a, str> {
        let Some(pattern) = VolumePattern::detect(line) else {
            return Cow::Borrowed(line);
        };
        trace!("{pattern:?} in {line:?} (section {section:?})");

        pattern.regex().replace_all(line, |caps: &Captures<'_>| {
            pattern
                .rewrite(caps, section, &self.links)
                .unwrap_or_else(|| caps[0].to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Annotator with a short base URL and a bare collection so assertions
    /// stay readable.
    fn annotator() -> VolumeAnnotator {
        VolumeAnnotator::new(&LinkConfig {
            base_url: "u/".to_string(),
            collection: String::new(),
            supplement_label: "S".to_string(),
            volume_suffix: String::new(),
            extension: String::new(),
        })
    }

    const JING: &str = "%E7%B6%93%E9%83%A8";

    #[test]
    fn test_single_supplement() {
        assert_eq!(annotator().annotate("第一册", None), "第一册 ([1](u/S01))");
    }

    #[test]
    fn test_single_in_section() {
        assert_eq!(
            annotator().annotate("第二一册", Some(SectionCategory::Jing)),
            format!("第二一册 ([21](u/{JING}021))")
        );
    }

    #[test]
    fn test_adjacent_pair() {
        assert_eq!(
            annotator().annotate("第三第四册", None),
            "第三、第四册 ([3](u/S03),[4](u/S04))"
        );
    }

    #[test]
    fn test_bare_range() {
        assert_eq!(
            annotator().annotate("第一至三册", None),
            "第一至三册 ([1](u/S01),[2](u/S02),[3](u/S03))"
        );
    }

    #[test]
    fn test_doubled_ordinal_range_collapsed() {
        assert_eq!(
            annotator().annotate("第八至第第九册", None),
            "第八至第九册 ([8](u/S08),[9](u/S09))"
        );
    }

    #[test]
    fn test_range_with_both_ordinals() {
        assert_eq!(
            annotator().annotate("第十至第十二册", None),
            "第十至第十二册 ([10](u/S10),[11](u/S11),[12](u/S12))"
        );
    }

    #[test]
    fn test_interpunct_pair_is_not_expanded() {
        assert_eq!(
            annotator().annotate("第五・第八册", None),
            "第五・第八册 ([5](u/S05)-[8](u/S08))"
        );
    }

    #[test]
    fn test_reversed_range_is_empty() {
        assert_eq!(
            annotator().annotate("第三至第一册", None),
            "第三至第一册 ()"
        );
    }

    #[test]
    fn test_zero_glyph_accepted() {
        assert_eq!(
            annotator().annotate("第二〇至第二一册", None),
            "第二〇至第二一册 ([20](u/S20),[21](u/S21))"
        );
    }

    #[test]
    fn test_zero_glyph_in_pairs_and_ranges() {
        assert_eq!(
            annotator().annotate("第一〇第二〇册", None),
            "第一〇、第二〇册 ([10](u/S10),[20](u/S20))"
        );
        assert_eq!(
            annotator().annotate("第一九至二〇册", None),
            "第一九至二〇册 ([19](u/S19),[20](u/S20))"
        );
        assert_eq!(
            annotator().annotate("第一〇至第第一一册", None),
            "第一〇至第一一册 ([10](u/S10),[11](u/S11))"
        );
        assert_eq!(
            annotator().annotate("第三〇・第四〇册", None),
            "第三〇・第四〇册 ([30](u/S30)-[40](u/S40))"
        );
    }

    #[test]
    fn test_oversized_range_left_unchanged() {
        let line = "第一至一千千册";
        assert_eq!(annotator().annotate(line, None), line);
        assert_eq!(
            annotator().annotate("第一至千千千千千千册", None),
            "第一至千千千千千千册"
        );
    }

    #[test]
    fn test_range_at_span_limit() {
        let out = annotator().annotate("第一至九九九册", None);
        assert_eq!(out.matches("](").count(), 999);
        let out = annotator().annotate("第一至一〇〇一册", None);
        assert_eq!(out, "第一至一〇〇一册");
    }

    #[test]
    fn test_surrounding_text_kept() {
        assert_eq!(
            annotator().annotate("存目 第九册 影印", None),
            "存目 第九册 ([9](u/S09)) 影印"
        );
    }

    #[test]
    fn test_each_occurrence_uses_its_own_number() {
        assert_eq!(
            annotator().annotate("第一册 第二册", None),
            "第一册 ([1](u/S01)) 第二册 ([2](u/S02))"
        );
    }

    #[test]
    fn test_only_highest_priority_pattern_applied() {
        // The range wins; the trailing single volume is left alone.
        assert_eq!(
            annotator().annotate("第一至第二册 第五册", None),
            "第一至第二册 ([1](u/S01),[2](u/S02)) 第五册"
        );
    }

    #[test]
    fn test_no_match_borrowed() {
        let out = annotator().annotate("首一册", None);
        assert!(matches!(out, Cow::Borrowed("首一册")));
    }

    #[test]
    fn test_detect_priority() {
        assert_eq!(
            VolumePattern::detect("第一第二册"),
            Some(VolumePattern::AdjacentPair)
        );
        assert_eq!(
            VolumePattern::detect("第一至二册"),
            Some(VolumePattern::BareRange)
        );
        assert_eq!(
            VolumePattern::detect("第一至第第二册"),
            Some(VolumePattern::DoubledOrdinalRange)
        );
        assert_eq!(
            VolumePattern::detect("第一至第二册"),
            Some(VolumePattern::Range)
        );
        assert_eq!(
            VolumePattern::detect("第一・第二册"),
            Some(VolumePattern::InterpunctPair)
        );
        assert_eq!(VolumePattern::detect("第一册"), Some(VolumePattern::Single));
        assert_eq!(VolumePattern::detect("卷一"), None);
    }
}
