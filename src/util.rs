//! Small helpers for input decoding and path handling.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Decode bytes as UTF-8, stripping a leading byte order mark.
///
/// Returns `None` if the input contains malformed UTF-8. The catalog pages
/// are always UTF-8, so no legacy fallback is attempted.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(decode_utf8(b"\xEF\xBB\xBFabc").as_deref(), Some("abc"));
/// assert_eq!(decode_utf8(b"\xFF"), None);
/// ```
pub fn decode_utf8(bytes: &[u8]) -> Option<Cow<'_, str>> {
    let (result, malformed) = encoding_rs::UTF_8.decode_with_bom_removal(bytes);
    if malformed { None } else { Some(result) }
}

/// Derive the Markdown output path for an input file.
///
/// The extension is replaced with `md`; a path without an extension gains
/// one.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("md")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_plain_utf8() {
        assert_eq!(decode_utf8("第一册".as_bytes()).as_deref(), Some("第一册"));
    }

    #[test]
    fn test_decode_strips_bom() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice("經部".as_bytes());
        assert_eq!(decode_utf8(&bytes).as_deref(), Some("經部"));
    }

    #[test]
    fn test_decode_rejects_malformed() {
        assert!(decode_utf8(&[0x66, 0xFF, 0xFE]).is_none());
    }

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("data/index.html")),
            PathBuf::from("data/index.md")
        );
        assert_eq!(
            default_output_path(Path::new("catalog")),
            PathBuf::from("catalog.md")
        );
        assert_eq!(
            default_output_path(Path::new("archive.v2.htm")),
            PathBuf::from("archive.v2.md")
        );
    }
}
