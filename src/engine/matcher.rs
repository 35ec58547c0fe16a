//! First-match rule application.
//!
//! Both classifier stages are an ordered list of [`Rule`]s. A rule fires when
//! its pattern matches and its production returns `Some`; the first rule that
//! fires decides the outcome and later rules are never consulted.
//!
//! ```text
//! input ──▶ rule[0] ──no──▶ rule[1] ──no──▶ ... ──▶ rule[n]
//!             │yes            │yes                    │yes
//!             └──────────────▶ (rule name, value) ◀───┘
//! ```
//!
//! Setting `HMM_DEBUG_RULES=1` prints every rule considered.

use crate::Rule;

pub(crate) fn debug_enabled() -> bool {
    std::env::var_os("HMM_DEBUG_RULES").is_some()
}

/// Apply `rules` to `input` in order and return the first rule that fires
/// together with its value.
pub(crate) fn first_match<'r, T: std::fmt::Debug>(
    stage: &str,
    rules: &'r [Rule<T>],
    input: &str,
) -> Option<(&'r Rule<T>, T)> {
    let debug = debug_enabled();

    for rule in rules {
        let Some(groups) = rule.pattern.groups(input) else {
            continue;
        };

        match (rule.production)(&groups) {
            Some(value) => {
                if debug {
                    eprintln!("[{stage}] input=\"{input}\" rule=\"{}\" value={value:?}", rule.name);
                }
                return Some((rule, value));
            }
            None => {
                if debug {
                    eprintln!("[{stage}:production_none] input=\"{input}\" rule=\"{}\" groups={groups:?}", rule.name);
                }
            }
        }
    }

    if debug {
        eprintln!("[{stage}:no_match] input=\"{input}\"");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> Vec<Rule<u32>> {
        vec![
            rule! {
                name: "digits",
                pattern: re!(r"^(\d+)$"),
                prod: |groups: &[String]| -> Option<u32> { groups.get(1)?.parse().ok() },
            },
            rule! {
                name: "refuses",
                pattern: pred!(|s| s.starts_with('x')),
                prod: |_groups: &[String]| -> Option<u32> { None },
            },
            rule! {
                name: "anything",
                pattern: pred!(|_| true),
                prod: |_groups: &[String]| -> Option<u32> { Some(0) },
            },
        ]
    }

    #[test]
    fn earlier_rules_win() {
        let rules = rules();
        let (rule, value) = first_match("test", &rules, "42").unwrap();
        assert_eq!((rule.name, value), ("digits", 42));
    }

    #[test]
    fn production_none_falls_through() {
        let rules = rules();
        let (rule, value) = first_match("test", &rules, "xyz").unwrap();
        assert_eq!((rule.name, value), ("anything", 0));
    }

    #[test]
    fn empty_table_matches_nothing() {
        let rules: Vec<Rule<u32>> = Vec::new();
        assert!(first_match("test", &rules, "42").is_none());
    }
}
