use std::collections::HashMap;

use once_cell::sync::Lazy;

bitflags::bitflags! {
    /// Per-consonant traits that steer the compound-initial resolver.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ConsonantTraits: u8 {
        /// zh, ch, sh: two-letter clusters consumed as one initial.
        const SIBILANT_CLUSTER = 1 << 0;
        /// j, q, x: always followed by i or ü (written u).
        const ALWAYS_COMPOUND  = 1 << 1;
        /// zh, ch, sh, r, z, c, s: a following "i" is syllabic, not a glide.
        const FAKE_I           = 1 << 2;
    }
}

/// Every consonant initial with its traits.
static CONSONANTS: Lazy<HashMap<&'static str, ConsonantTraits>> = Lazy::new(|| {
    let plain = ConsonantTraits::empty();
    let sibilant = ConsonantTraits::SIBILANT_CLUSTER | ConsonantTraits::FAKE_I;

    HashMap::from([
        ("b", plain),
        ("p", plain),
        ("m", plain),
        ("f", plain),
        ("d", plain),
        ("t", plain),
        ("n", plain),
        ("l", plain),
        ("g", plain),
        ("k", plain),
        ("h", plain),
        ("j", ConsonantTraits::ALWAYS_COMPOUND),
        ("q", ConsonantTraits::ALWAYS_COMPOUND),
        ("x", ConsonantTraits::ALWAYS_COMPOUND),
        ("zh", sibilant),
        ("ch", sibilant),
        ("sh", sibilant),
        ("r", ConsonantTraits::FAKE_I),
        ("z", ConsonantTraits::FAKE_I),
        ("c", ConsonantTraits::FAKE_I),
        ("s", ConsonantTraits::FAKE_I),
    ])
});

/// Traits of `consonant`; empty for anything that is not a consonant initial.
pub fn traits_of(consonant: &str) -> ConsonantTraits {
    CONSONANTS.get(consonant).copied().unwrap_or(ConsonantTraits::empty())
}

pub fn is_consonant(s: &str) -> bool {
    CONSONANTS.contains_key(s)
}
