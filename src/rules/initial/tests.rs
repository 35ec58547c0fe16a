use crate::rules::initial;
use crate::{Onset, Options, decompose, decompose_verbose};

fn classify(input: &str) -> (&'static str, Onset) {
    let rules = initial::rules::get();
    for rule in &rules {
        if let Some(onset) = rule.apply(input) {
            return (rule.name, onset);
        }
    }
    panic!("no initial rule matched {input:?}");
}

#[test]
fn rule_order_is_stable() {
    let names: Vec<&str> = initial::rules::get().iter().map(|r| r.name).collect();
    assert_eq!(
        names,
        vec![
            "yu null initial",
            "y null initial",
            "w null initial",
            "sibilant cluster (zh/ch/sh)",
            "single consonant",
            "null initial",
        ]
    );
}

#[test]
fn initial_examples_matching() {
    // Array of ((expected_initial, expected_final), input)
    let cases: Vec<((&str, &str), &str)> = vec![
        // plain consonants
        (("b", "a"), "ba"),
        (("h", "ao"), "hao"),
        (("g", "ong"), "gong"),
        (("k", "ou"), "kou"),
        (("m", "en"), "men"),
        (("f", "eng"), "feng"),
        (("d", "ei"), "dei"),
        (("t", "ang"), "tang"),
        (("zh", "ong"), "zhong"),
        (("ch", "ang"), "chang"),
        (("sh", "ei"), "shei"),
        (("r", "en"), "ren"),
        (("z", "ai"), "zai"),
        (("c", "ao"), "cao"),
        (("s", "e"), "se"),
        // i glide
        (("bi", ""), "bi"),
        (("li", "en"), "lin"),
        (("li", "eng"), "ling"),
        (("mi", "ao"), "miao"),
        (("di", "an"), "dian"),
        (("ti", "e"), "tie"),
        (("ni", "ang"), "niang"),
        // u glide
        (("bu", ""), "bu"),
        (("gu", "o"), "guo"),
        (("hu", "ai"), "huai"),
        (("zhu", "ang"), "zhuang"),
        (("shu", "a"), "shua"),
        (("ru", "an"), "ruan"),
        (("lu", "en"), "lun"),
        // ü glide, both spellings
        (("nü", ""), "nü"),
        (("lü", ""), "lv"),
        (("lü", "e"), "lüe"),
        (("nü", "e"), "nve"),
        // j/q/x always compound
        (("ju", ""), "ju"),
        (("qu", "an"), "quan"),
        (("xu", "e"), "xue"),
        (("ju", "en"), "jun"),
        (("ji", ""), "ji"),
        (("qi", "eng"), "qing"),
        (("xi", "ong"), "xiong"),
        (("ji", "a"), "jia"),
        // null initials
        (("y", ""), "yi"),
        (("y", ""), "y"),
        (("y", "ao"), "yao"),
        (("y", "en"), "yin"),
        (("y", "eng"), "ying"),
        (("y", "ong"), "yong"),
        (("y", "ou"), "you"),
        (("y", "an"), "yan"),
        (("yu", ""), "yu"),
        (("yu", "e"), "yue"),
        (("yu", "an"), "yuan"),
        (("yu", "en"), "yun"),
        (("w", ""), "wu"),
        (("w", ""), "w"),
        (("w", "ai"), "wai"),
        (("w", "o"), "wo"),
        (("w", "en"), "wen"),
        (("w", "eng"), "weng"),
        (("", "a"), "a"),
        (("", "ai"), "ai"),
        (("", "ang"), "ang"),
        (("", "ou"), "ou"),
        (("", "e"), "e"),
    ];

    for ((initial, final_), input) in cases {
        let parsed = decompose(input);
        assert_eq!(
            (parsed.initial.as_str(), parsed.final_.as_str()),
            (initial, final_),
            "input {input:?}"
        );
    }
}

#[test]
fn yu_wins_over_generic_y() {
    let (name, onset) = classify("yue");
    assert_eq!(name, "yu null initial");
    assert_eq!(onset, Onset::new("yu", "e"));
}

#[test]
fn y_drops_one_redundant_i() {
    assert_eq!(classify("yin").1, Onset::new("y", "n"));
    assert_eq!(classify("yi").1, Onset::new("y", ""));
    assert_eq!(classify("ya").1, Onset::new("y", "a"));
}

#[test]
fn w_drops_one_redundant_u() {
    assert_eq!(classify("wu").1, Onset::new("w", ""));
    assert_eq!(classify("wa").1, Onset::new("w", "a"));
}

#[test]
fn fake_i_syllables_keep_plain_initial() {
    for input in ["zhi", "chi", "shi", "ri", "zi", "ci", "si"] {
        let parsed = decompose(input);
        let consonant = input.trim_end_matches('i');
        assert_eq!(parsed.initial, consonant, "input {input:?}");
        assert_eq!(parsed.final_, "", "input {input:?}");
    }
}

#[test]
fn sibilant_cluster_takes_two_letters() {
    let (name, onset) = classify("shang");
    assert_eq!(name, "sibilant cluster (zh/ch/sh)");
    assert_eq!(onset.initial, "sh");
    assert_eq!(onset.glide, None);
}

#[test]
fn vowel_start_is_null_initial() {
    let (name, onset) = classify("ang");
    assert_eq!(name, "null initial");
    assert_eq!(onset, Onset::new("", "ang"));
}

#[test]
fn uppercase_input_is_folded() {
    let parsed = decompose("ZHUĀNG");
    assert_eq!(parsed.initial, "zhu");
    assert_eq!(parsed.final_, "ang");
    assert_eq!(parsed.tone.number(), 1);
    assert_eq!(parsed.full, "ZHUĀNG");
}

#[test]
fn verbose_trace_for_jqx() {
    let b = decompose_verbose("jué", &Options::default());
    assert_eq!(b.initial_rule, "single consonant");
    assert_eq!(b.glide_rule, Some("j/q/x + u (ü)"));
    assert_eq!(b.parsed.initial, "ju");
    assert_eq!(b.parsed.final_, "e");
}

#[test]
fn malformed_input_does_not_panic() {
    for input in ["", " ", "123", "x", "zh", "ü", "好", "shhhhhhhhhhh", "yyy\n", "qqqqqqqqqqqqqqqqqqqqqqqq"] {
        let parsed = decompose(input);
        assert_eq!(parsed.full, input);
    }
}
