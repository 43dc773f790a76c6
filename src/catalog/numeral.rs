//! Chinese numeral conversion for catalog volume numbers.
//!
//! This is not a general numeral parser. The catalog writes volume numbers
//! either as bare digit strings (`二〇`, `一二三`) or with `十`/`百`/`千`
//! multipliers (`二十一`, `一百五`), and only those shapes are handled.

/// Value of a single numeral glyph, including the multipliers.
fn glyph_value(c: char) -> Option<u64> {
    Some(match c {
        '〇' | '零' => 0,
        '一' => 1,
        '二' => 2,
        '三' => 3,
        '四' => 4,
        '五' => 5,
        '六' => 6,
        '七' => 7,
        '八' => 8,
        '九' => 9,
        '十' => 10,
        '百' => 100,
        '千' => 1000,
        _ => return None,
    })
}

/// Value of a bare digit glyph (`〇`/`零` through `九`).
fn digit_value(c: char) -> Option<u64> {
    glyph_value(c).filter(|&v| v < 10)
}

/// Convert a Chinese numeral to its decimal representation.
///
/// Strings made only of digit glyphs are read positionally, so `二〇`
/// becomes `"20"` and `〇一` becomes `"01"`. Strings that contain `十`, `百`
/// or `千` are accumulated left to right. A single unknown glyph is returned
/// unchanged; unknown glyphs inside longer strings are skipped.
///
/// # Examples
///
/// ```
/// use siku_md::catalog::to_arabic;
///
/// assert_eq!(to_arabic("二十一"), "21");
/// assert_eq!(to_arabic("二一"), "21");
/// assert_eq!(to_arabic("一百二十"), "120");
/// ```
pub fn to_arabic(numeral: &str) -> String {
    let chars: Vec<char> = numeral.chars().collect();

    if chars.len() == 1 {
        return match glyph_value(chars[0]) {
            Some(v) => v.to_string(),
            None => numeral.to_string(),
        };
    }

    if chars.iter().all(|&c| digit_value(c).is_some()) {
        return chars
            .iter()
            .filter_map(|&c| digit_value(c))
            .map(|v| v.to_string())
            .collect();
    }

    accumulate(&chars).to_string()
}

/// Left-to-right accumulation for numerals containing multipliers.
fn accumulate(chars: &[char]) -> u64 {
    let mut result: u64 = 0;
    let mut i = 0;

    while i < chars.len() {
        let Some(val) = glyph_value(chars[i]) else {
            i += 1;
            continue;
        };

        match val {
            10 if i == 0 => result = result.saturating_add(10),
            10 | 100 | 1000 => {
                result = if result > 0 {
                    result.saturating_mul(val)
                } else {
                    val
                };
            }
            _ => match chars.get(i + 1).copied().and_then(glyph_value) {
                Some(mult @ (10 | 100 | 1000)) => {
                    result = result.saturating_add(val * mult);
                    i += 1;
                }
                _ => result = result.saturating_add(val),
            },
        }

        i += 1;
    }

    result
}

/// A converted volume number.
///
/// Keeps both the decimal text used for display and, when that text is an
/// integer, its numeric value for URL padding and range expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChineseNumeral {
    display: String,
    value: Option<u64>,
}

impl ChineseNumeral {
    /// Convert a numeral string.
    pub fn parse(numeral: &str) -> Self {
        Self::from_decimal(to_arabic(numeral))
    }

    /// Wrap an already-decimal string.
    pub fn from_decimal(display: String) -> Self {
        let value = display.parse().ok();
        Self { display, value }
    }

    /// Decimal text as produced by [`to_arabic`].
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Integer value, if the decimal text is numeric.
    pub fn value(&self) -> Option<u64> {
        self.value
    }
}
