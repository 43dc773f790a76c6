//! Line-oriented Markdown generation from markup events.
//!
//! The conversion happens in two passes:
//!
//! - [`reducer`]: markup events → trimmed text lines, with headings and
//!   emphasis already marked up
//! - [`render`]: lines → Markdown blocks, bulleting catalog entries, tracking
//!   the active section and linking volume references
//!
//! ## Design Notes
//!
//! The catalog pages are not rendered with general HTML fidelity. Only the
//! handful of elements the catalog uses are recognized (`title`, `h2`, `a`,
//! `br`, `font size="-2"`, `ul`, `div`, `body`); everything else contributes
//! its text and nothing more. Output blocks are separated by a blank line so
//! headings and bullets never merge into one paragraph.

mod reducer;
mod render;

pub use reducer::{LineReducer, reduce};
pub use render::{LineRenderer, LineRule, RenderConfig};
