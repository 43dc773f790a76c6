//! Cached regex patterns for volume references.
//!
//! Uses LazyLock to compile patterns once on first use. The numeral class
//! deliberately excludes `零`, which never appears in volume numbers on the
//! catalog pages (the conversion table still accepts it).

use regex_lite::Regex;
use std::sync::LazyLock;

/// Matches `第A第B册`, two adjacent volumes with no separator.
pub static ADJACENT_PAIR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"第([一二三四五六七八九十百千〇]+)第([一二三四五六七八九十百千〇]+)册").unwrap()
});

/// Matches `第A至B册`.
///
/// `第` is not in the numeral class, so `第A至第B册` can never match here.
pub static BARE_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"第([一二三四五六七八九十百千〇]+)至([一二三四五六七八九十百千〇]+)册").unwrap()
});

/// Matches `第A至第第B册`, a range with a doubled ordinal.
pub static DOUBLED_ORDINAL_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"第([一二三四五六七八九十百千〇]+)至第第([一二三四五六七八九十百千〇]+)册").unwrap()
});

/// Matches `第A至第B册`.
pub static RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"第([一二三四五六七八九十百千〇]+)至第([一二三四五六七八九十百千〇]+)册").unwrap()
});

/// Matches `第A・第B册`.
pub static INTERPUNCT_PAIR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"第([一二三四五六七八九十百千〇]+)・第([一二三四五六七八九十百千〇]+)册").unwrap()
});

/// Matches `第A册`.
pub static SINGLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"第([一二三四五六七八九十百千〇]+)册").unwrap());
