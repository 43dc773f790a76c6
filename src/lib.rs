//! # siku-md
//!
//! Converts the HTML index of the *Siku Quanshu Cunmu Congshu* (四庫全書存目叢書)
//! into Markdown, linking every volume reference to its scanned file.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use siku_md::Converter;
//!
//! Converter::new()
//!     .convert_file(Path::new("index.html"), Path::new("index.md"))
//!     .unwrap();
//! ```
//!
//! ## Pipeline
//!
//! 1. [`markup::tokenize`] turns HTML into a flat event stream.
//! 2. [`markdown::reduce`] folds events into lines, marking headings, link
//!    text (`**…**`) and small-font notes (`*…*`).
//! 3. [`markdown::LineRenderer`] classifies each line: catalog entries become
//!    bullets, section headings such as `經部` switch the active section, and
//!    volume references such as `第十至第十二册` gain links built from the
//!    active section's URL template.
//!
//! ```
//! use siku_md::convert_html;
//!
//! let md = convert_html("<div>第十至第十二册</div>");
//! assert!(md.starts_with("第十至第十二册 ([10]("));
//! assert_eq!(md.matches("](").count(), 3);
//! ```

pub mod catalog;
pub mod convert;
pub mod error;
pub mod markdown;
pub mod markup;
pub(crate) mod util;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use catalog::{LinkConfig, SectionCategory};
pub use convert::{ConvertConfig, Converter, convert_html};
pub use error::{Error, Result};
pub use markdown::RenderConfig;
pub use util::default_output_path;

