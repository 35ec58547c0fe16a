use crate::Rule;
use crate::rules::finals::predicates::is_canonical_final;

// Ordered: exact canonical match first, then the floating-vowel rewrites,
// then bare nasals, glide remnants, and finally the permissive fallback.

fn rule_canonical() -> Rule<String> {
    rule! {
        name: "canonical final",
        pattern: pred!(is_canonical_final),
        prod: |groups: &[String]| -> Option<String> {
            groups.first().cloned()
        },
    }
}

/// `-ing` hides a floating `e`: it belongs to the `eng` set.
fn rule_floating_e_ing() -> Rule<String> {
    rule! {
        name: "floating e (ing -> eng)",
        pattern: re!(r"(?s)ing$"),
        prod: |_groups: &[String]| -> Option<String> {
            Some("eng".to_string())
        },
    }
}

/// `-in` / `-un` hide a floating `e`: they belong to the `en` set.
fn rule_floating_e_in_un() -> Rule<String> {
    rule! {
        name: "floating e (in/un -> en)",
        pattern: re!(r"(?s)(?:in|un)$"),
        prod: |_groups: &[String]| -> Option<String> {
            Some("en".to_string())
        },
    }
}

fn rule_iong() -> Rule<String> {
    rule! {
        name: "iong -> ong",
        pattern: re!(r"(?s)iong$"),
        prod: |_groups: &[String]| -> Option<String> {
            Some("ong".to_string())
        },
    }
}

/// Bare nasal codas left behind after a glide was moved to the initial
/// (`lin` -> `li` + `n`, `ling` -> `li` + `ng`).
fn rule_bare_nasal() -> Rule<String> {
    rule! {
        name: "bare nasal (n/ng)",
        pattern: re!(r"^(n|ng)$"),
        prod: |groups: &[String]| -> Option<String> {
            match groups.get(1)?.as_str() {
                "n" => Some("en".to_string()),
                "ng" => Some("eng".to_string()),
                _ => None,
            }
        },
    }
}

/// Nothing left, or only the glide that already went to the initial.
fn rule_null_final() -> Rule<String> {
    rule! {
        name: "null final",
        pattern: re!(r"^(?:i|u|ü)?$"),
        prod: |_groups: &[String]| -> Option<String> {
            Some(String::new())
        },
    }
}

/// No rule applies: keep the residual as-is.
fn rule_fallback() -> Rule<String> {
    rule! {
        name: "residual fallback",
        pattern: pred!(|_| true),
        prod: |groups: &[String]| -> Option<String> {
            groups.first().cloned()
        },
    }
}

/// The final matcher's rules in precedence order.
pub fn get() -> Vec<Rule<String>> {
    vec![
        rule_canonical(),
        rule_floating_e_ing(),
        rule_floating_e_in_un(),
        rule_iong(),
        rule_bare_nasal(),
        rule_null_final(),
        rule_fallback(),
    ]
}
