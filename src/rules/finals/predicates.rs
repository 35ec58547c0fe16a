use std::collections::HashSet;

use once_cell::sync::Lazy;

/// The canonical finals, longest first. Together with the null final (empty
/// string) these are the 13 sets.
pub const CANONICAL_FINALS: [&str; 12] = ["ong", "ang", "eng", "ai", "ei", "ao", "ou", "an", "en", "a", "o", "e"];

static CANONICAL_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| CANONICAL_FINALS.into_iter().collect());

/// Returns true when `s` is one of the canonical finals (exact match).
pub fn is_canonical_final(s: &str) -> bool {
    CANONICAL_SET.contains(s)
}

/// Returns true when `s` is a canonical final or the null final.
pub fn is_set_final(s: &str) -> bool {
    s.is_empty() || is_canonical_final(s)
}
