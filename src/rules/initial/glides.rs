//! Compound-initial resolution.
//!
//! After a consonant has been consumed, a following glide (i, u or ü) is moved
//! onto the initial side: `l` + `in` becomes the compound initial `li` with
//! residual `n`. Which glide may attach depends on the consonant:
//!
//! ```text
//! j/q/x   + u  -> ju/qu/xu   (ü written as u)
//! j/q/x   + i  -> ji/qi/xi
//! any     + ü|v -> cü
//! not fake-i + i -> ci       (zhi/chi/shi/ri/zi/ci/si keep the i)
//! not j/q/x  + u -> cu
//! otherwise      -> c alone, residual untouched
//! ```
//!
//! The table is ordered; the first rule whose guard accepts the consonant and
//! whose glide prefixes the remainder wins.

use super::consonants::{ConsonantTraits, traits_of};
use crate::Onset;

/// One glide-attachment rule.
pub(crate) struct GlideRule {
    pub name: &'static str,
    /// Which consonants the rule applies to.
    pub guard: fn(ConsonantTraits) -> bool,
    /// Written forms of the glide; the first one prefixing the remainder is consumed.
    pub glides: &'static [&'static str],
    /// Letter appended to the consonant to form the compound initial.
    pub marker: &'static str,
}

fn always_compound(t: ConsonantTraits) -> bool {
    t.contains(ConsonantTraits::ALWAYS_COMPOUND)
}

fn any_consonant(_: ConsonantTraits) -> bool {
    true
}

fn real_i(t: ConsonantTraits) -> bool {
    !t.contains(ConsonantTraits::FAKE_I)
}

fn free_u(t: ConsonantTraits) -> bool {
    !t.contains(ConsonantTraits::ALWAYS_COMPOUND)
}

pub(crate) static GLIDE_RULES: &[GlideRule] = &[
    GlideRule { name: "j/q/x + u (ü)", guard: always_compound, glides: &["u"], marker: "u" },
    GlideRule { name: "j/q/x + i", guard: always_compound, glides: &["i"], marker: "i" },
    GlideRule { name: "ü glide", guard: any_consonant, glides: &["ü", "v"], marker: "ü" },
    GlideRule { name: "i glide", guard: real_i, glides: &["i"], marker: "i" },
    GlideRule { name: "u glide", guard: free_u, glides: &["u"], marker: "u" },
];

/// Attach a glide from `rest` to `consonant` if one of [`GLIDE_RULES`] applies.
pub(crate) fn resolve_compound(consonant: &str, rest: &str) -> Onset {
    let traits = traits_of(consonant);

    for rule in GLIDE_RULES {
        if !(rule.guard)(traits) {
            continue;
        }
        if let Some(residual) = rule.glides.iter().find_map(|g| rest.strip_prefix(*g)) {
            return Onset {
                initial: format!("{consonant}{}", rule.marker),
                residual: residual.to_string(),
                glide: Some(rule.name),
            };
        }
    }

    Onset::new(consonant, rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(c: &str, rest: &str, initial: &str, residual: &str, glide: Option<&str>) {
        let o = resolve_compound(c, rest);
        assert_eq!(o.initial, initial, "{c} + {rest}");
        assert_eq!(o.residual, residual, "{c} + {rest}");
        assert_eq!(o.glide, glide, "{c} + {rest}");
    }

    #[test]
    fn jqx_take_u_before_i() {
        check("j", "uan", "ju", "an", Some("j/q/x + u (ü)"));
        check("x", "iao", "xi", "ao", Some("j/q/x + i"));
        check("q", "u", "qu", "", Some("j/q/x + u (ü)"));
    }

    #[test]
    fn umlaut_and_v_spelling() {
        check("n", "ü", "nü", "", Some("ü glide"));
        check("l", "ve", "lü", "e", Some("ü glide"));
    }

    #[test]
    fn fake_i_stays_in_the_remainder() {
        for c in ["zh", "ch", "sh", "r", "z", "c", "s"] {
            check(c, "i", c, "i", None);
        }
        check("b", "i", "bi", "", Some("i glide"));
    }

    #[test]
    fn u_glide_for_free_consonants() {
        check("zh", "uang", "zhu", "ang", Some("u glide"));
        check("g", "uo", "gu", "o", Some("u glide"));
    }

    #[test]
    fn plain_consonant_keeps_remainder() {
        check("h", "ao", "h", "ao", None);
        check("m", "", "m", "", None);
    }

    #[test]
    fn unknown_consonant_is_treated_as_plain() {
        check("?", "ia", "?i", "a", Some("i glide"));
    }
}
