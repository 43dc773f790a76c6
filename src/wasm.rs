//! WASM bindings for browser-based catalog conversion.
//!
//! This module exposes the conversion to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::{ConvertConfig, Converter, LinkConfig, RenderConfig};

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

/// Convert catalog HTML to Markdown with the default link templates.
#[wasm_bindgen]
pub fn html_to_markdown(html: &str) -> String {
    crate::convert_html(html)
}

/// Convert catalog HTML to Markdown with a custom link prefix.
///
/// `annotate_entries` also links volume references on bulleted entries.
#[wasm_bindgen]
pub fn html_to_markdown_with(html: &str, base_url: &str, annotate_entries: bool) -> String {
    let config = ConvertConfig::default()
        .with_links(LinkConfig::default().with_base_url(base_url))
        .with_render(RenderConfig::default().with_annotate_catalog_entries(annotate_entries));
    Converter::with_config(config).convert(html)
}
