//! Helpers for examining emitted symbol names.
//!
//! Diagnostics and object-file tooling occasionally need to look back
//! into a name this crate produced: drop the label marker, split a
//! decorated name, or recover a selector encoding's payload. None of
//! these reconstruct declarations; they only invert the framing.

use crate::classify::DecorationKind;
use crate::LABEL_MARKER;

/// Whether the name begins with the label marker byte.
#[must_use]
pub fn has_label_marker(name: &str) -> bool {
    name.starts_with(LABEL_MARKER)
}

/// Drop a leading label marker, if present.
#[must_use]
pub fn strip_label_marker(name: &str) -> &str {
    name.strip_prefix(LABEL_MARKER).unwrap_or(name)
}

/// Split a calling-convention decorated name into its kind, base name,
/// and argument byte count.
///
/// Accepts names with or without the label marker; returns `None` for
/// names that do not carry a decoration.
#[must_use]
pub fn parse_decoration(name: &str) -> Option<(DecorationKind, &str, u32)> {
    let rest = strip_label_marker(name);
    let (kind, rest) = match rest.as_bytes().first()? {
        b'_' => (DecorationKind::StdCall, &rest[1..]),
        b'@' => (DecorationKind::FastCall, &rest[1..]),
        _ => return None,
    };
    // The base name may itself contain `@` (a fastcall-decorated C++
    // mangling); the byte count is everything after the last one.
    let at = rest.rfind('@')?;
    let bytes = rest[at + 1..].parse().ok()?;
    Some((kind, &rest[..at], bytes))
}

/// Recover the payload of a length-prefixed selector encoding.
///
/// Returns `None` unless the decimal prefix matches the payload's byte
/// length exactly.
#[must_use]
pub fn selector_payload(encoded: &str) -> Option<&str> {
    let digits = encoded.find(|c: char| !c.is_ascii_digit())?;
    if digits == 0 {
        return None;
    }
    let len: usize = encoded[..digits].parse().ok()?;
    let payload = &encoded[digits..];
    (payload.len() == len).then_some(payload)
}
