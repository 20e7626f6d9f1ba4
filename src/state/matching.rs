//! Case-insensitive matching and integer coercion used by catalog queries
//!
//! Case folding is ordinal: both sides are lowercased with the Unicode
//! default mapping, then compared. No locale collation is involved.

/// True if `needle` occurs anywhere in `haystack`, ignoring case
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// True if both strings are equal after case folding
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Coerce user input to an integer the way lenient web clients expect
///
/// Leading whitespace is skipped and one optional sign is accepted. A `0x`
/// or `0X` prefix switches to hexadecimal. Then the longest run of digits
/// in that radix is parsed and trailing garbage is ignored, so `"1960abc"`
/// is 1960 and `"0x1"` is 1. Returns `None` when no digits are present or
/// the value does not fit; `None` matches no record.
pub fn coerce_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, rest) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let digits_len = rest.chars().take_while(|c| c.is_digit(radix)).count();
    if digits_len == 0 {
        return None;
    }

    let value = i64::from_str_radix(&rest[..digits_len], radix).ok()?;
    Some(if negative { -value } else { value })
}
