use crate::rules::initial::consonants::is_consonant;
use crate::rules::initial::glides::resolve_compound;
use crate::{Onset, Rule};

// Rules are listed in precedence order; `get` returns them in that order and
// the classifier stops at the first one that produces an `Onset`.

/// `yu…`: its own null-initial class. Must run before the generic `y` rule.
fn rule_yu_prefix() -> Rule<Onset> {
    rule! {
        name: "yu null initial",
        pattern: re!(r"(?s)^yu(.*)$"),
        prod: |groups: &[String]| -> Option<Onset> {
            Some(Onset::new("yu", groups.get(1)?.as_str()))
        },
    }
}

/// `y…`: written glide for the i-family null initial. `yi` and `y` alone have
/// no final; otherwise one redundant `i` after the `y` is dropped.
fn rule_y_prefix() -> Rule<Onset> {
    rule! {
        name: "y null initial",
        pattern: re!(r"(?s)^yi?(.*)$"),
        prod: |groups: &[String]| -> Option<Onset> {
            Some(Onset::new("y", groups.get(1)?.as_str()))
        },
    }
}

/// `w…`: written glide for the u-family null initial, symmetric to `y`.
fn rule_w_prefix() -> Rule<Onset> {
    rule! {
        name: "w null initial",
        pattern: re!(r"(?s)^wu?(.*)$"),
        prod: |groups: &[String]| -> Option<Onset> {
            Some(Onset::new("w", groups.get(1)?.as_str()))
        },
    }
}

fn rule_sibilant_cluster() -> Rule<Onset> {
    rule! {
        name: "sibilant cluster (zh/ch/sh)",
        pattern: re!(r"(?s)^(zh|ch|sh)(.*)$"),
        prod: |groups: &[String]| -> Option<Onset> {
            Some(resolve_compound(groups.get(1)?, groups.get(2)?))
        },
    }
}

fn rule_single_consonant() -> Rule<Onset> {
    rule! {
        name: "single consonant",
        pattern: re!(r"(?s)^([bpmfdtnlgkhjqxrzcs])(.*)$"),
        prod: |groups: &[String]| -> Option<Onset> {
            let consonant = groups.get(1)?;
            if !is_consonant(consonant) {
                return None;
            }
            Some(resolve_compound(consonant, groups.get(2)?))
        },
    }
}

/// Anything else starts with a vowel: no initial, whole syllable is the final.
fn rule_null_initial() -> Rule<Onset> {
    rule! {
        name: "null initial",
        pattern: pred!(|_| true),
        prod: |groups: &[String]| -> Option<Onset> {
            Some(Onset::new("", groups.first()?.as_str()))
        },
    }
}

/// The initial classifier's rules in precedence order.
pub fn get() -> Vec<Rule<Onset>> {
    vec![
        rule_yu_prefix(),
        rule_y_prefix(),
        rule_w_prefix(),
        rule_sibilant_cluster(),
        rule_single_consonant(),
        rule_null_initial(),
    ]
}
