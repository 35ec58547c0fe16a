//! Tone extraction.
//!
//! Pinyin marks tone with a diacritic on one vowel. Extraction replaces every
//! marked vowel with its bare form and records the tone; a syllable without a
//! mark is neutral (tone 5). Anything not in the table passes through, so the
//! function is total over arbitrary input.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::hmm::Tone;

/// Marked vowel -> (bare vowel, tone). Four tones over a, e, i, o, u, ü.
static TONE_MARKS: Lazy<HashMap<char, (char, Tone)>> = Lazy::new(|| {
    HashMap::from([
        ('ā', ('a', Tone::First)),
        ('á', ('a', Tone::Second)),
        ('ǎ', ('a', Tone::Third)),
        ('à', ('a', Tone::Fourth)),
        ('ē', ('e', Tone::First)),
        ('é', ('e', Tone::Second)),
        ('ě', ('e', Tone::Third)),
        ('è', ('e', Tone::Fourth)),
        ('ī', ('i', Tone::First)),
        ('í', ('i', Tone::Second)),
        ('ǐ', ('i', Tone::Third)),
        ('ì', ('i', Tone::Fourth)),
        ('ō', ('o', Tone::First)),
        ('ó', ('o', Tone::Second)),
        ('ǒ', ('o', Tone::Third)),
        ('ò', ('o', Tone::Fourth)),
        ('ū', ('u', Tone::First)),
        ('ú', ('u', Tone::Second)),
        ('ǔ', ('u', Tone::Third)),
        ('ù', ('u', Tone::Fourth)),
        ('ǖ', ('ü', Tone::First)),
        ('ǘ', ('ü', Tone::Second)),
        ('ǚ', ('ü', Tone::Third)),
        ('ǜ', ('ü', Tone::Fourth)),
    ])
});

/// Strip tone marks from `syllable` and return its tone.
///
/// If several marks are present the last one wins.
pub(crate) fn extract_tone(syllable: &str) -> (Tone, String) {
    let mut tone = Tone::Unknown;
    let mut stripped = String::with_capacity(syllable.len());

    for c in syllable.chars() {
        match TONE_MARKS.get(&c) {
            Some(&(base, t)) => {
                stripped.push(base);
                tone = t;
            }
            None => stripped.push(c),
        }
    }

    if tone == Tone::Unknown {
        tone = Tone::Neutral;
    }

    (tone, stripped)
}

/// Like [`extract_tone`], but a trailing ASCII digit 1-5 (`hao3`) is also
/// read as the tone and removed. Being last, the digit overrides any mark.
pub(crate) fn extract_tone_numbered(syllable: &str) -> (Tone, String) {
    let (tone, mut stripped) = extract_tone(syllable);

    let digit = stripped.chars().last().and_then(|c| c.to_digit(10)).and_then(|d| Tone::from_number(d as u8));
    match digit {
        Some(t) => {
            stripped.pop();
            (t, stripped)
        }
        None => (tone, stripped),
    }
}
