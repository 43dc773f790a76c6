//! Catalog-specific text enrichment.
//!
//! - [`numeral`]: Chinese numeral → decimal conversion tuned to volume numbers
//! - [`section`]: the four named divisions and the per-document tracker
//! - [`links`]: URL templates for scanned volume files
//! - [`volume`]: recognition and rewriting of volume references

mod links;
mod numeral;
mod patterns;
mod section;
mod volume;

pub use links::{
    DEFAULT_BASE_URL, DEFAULT_COLLECTION, DEFAULT_EXTENSION, DEFAULT_SUPPLEMENT_LABEL,
    DEFAULT_VOLUME_SUFFIX, LinkBuilder, LinkConfig,
};
pub use numeral::{ChineseNumeral, to_arabic};
pub use section::{SECTION_MARKER, SectionCategory, SectionTracker};
pub use volume::{MAX_RANGE_SPAN, VolumeAnnotator, VolumePattern};
