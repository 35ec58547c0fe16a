//! The three-stage decomposition pipeline.
//!
//! ```text
//! "Lǐng" ──▶ lowercase ──▶ extract_tone ──▶ initial rules ──▶ final rules
//!             "lǐng"        (3, "ling")      li + "ng"         "eng"
//! ```
//!
//! Each stage is a pure function of its input; the rule tables are shared,
//! immutable and passed in through a [`RuleSet`].

use std::time::Instant;

use super::matcher::{debug_enabled, first_match};
use super::tone::{extract_tone, extract_tone_numbered};
use super::trace::{NO_RULE, RunResult, RunTrace};
use crate::hmm::ParsedSyllable;
use crate::{Onset, Options, Rule, rules};

/// Both ordered rule tables used by a run.
#[derive(Debug)]
pub(crate) struct RuleSet {
    pub initials: Vec<Rule<Onset>>,
    pub finals: Vec<Rule<String>>,
}

impl RuleSet {
    /// The built-in initial and final rules.
    pub fn new() -> Self {
        RuleSet { initials: rules::initial::rules::get(), finals: rules::finals::rules::get() }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Decomposes one syllable against a [`RuleSet`].
///
/// Usage: `Decomposer::new(input, &rules).run(&options)`.
#[derive(Debug)]
pub(crate) struct Decomposer<'a> {
    input: &'a str,
    rules: &'a RuleSet,
}

impl<'a> Decomposer<'a> {
    pub fn new(input: &'a str, rules: &'a RuleSet) -> Self {
        Decomposer { input, rules }
    }

    pub fn run(&self, options: &Options) -> ParsedSyllable {
        self.run_traced(options).parsed
    }

    /// Run the pipeline and keep the names of the rules that fired.
    pub fn run_traced(&self, options: &Options) -> RunResult {
        let start = Instant::now();

        // Marks are looked up after lower-casing so capitalised input keeps its tone.
        let lower = self.input.to_lowercase();
        let (tone, stripped) = if options.tone_numbers { extract_tone_numbered(&lower) } else { extract_tone(&lower) };

        if debug_enabled() {
            eprintln!("[tone] input=\"{}\" stripped=\"{stripped}\" tone={tone}", self.input);
        }

        let (initial_rule, onset) = match first_match("initial", &self.rules.initials, &stripped) {
            Some((rule, onset)) => (rule.name, onset),
            None => (NO_RULE, Onset::new("", stripped.as_str())),
        };

        let (final_rule, final_) = match first_match("final", &self.rules.finals, &onset.residual) {
            Some((rule, final_)) => (rule.name, final_),
            None => (NO_RULE, onset.residual.clone()),
        };

        let parsed = ParsedSyllable { full: self.input.to_string(), initial: onset.initial, final_, tone };

        let trace = RunTrace {
            stripped,
            initial_rule,
            glide_rule: onset.glide,
            residual: onset.residual,
            final_rule,
            total: start.elapsed(),
        };

        RunResult { parsed, trace }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tone;

    #[test]
    fn trace_names_each_stage() {
        let rules = RuleSet::new();
        let run = Decomposer::new("lǐng", &rules).run_traced(&Options::default());

        assert_eq!(run.parsed.initial, "li");
        assert_eq!(run.parsed.final_, "eng");
        assert_eq!(run.parsed.tone, Tone::Third);
        assert_eq!(run.trace.stripped, "ling");
        assert_eq!(run.trace.initial_rule, "single consonant");
        assert_eq!(run.trace.glide_rule, Some("i glide"));
        assert_eq!(run.trace.residual, "ng");
        assert_eq!(run.trace.final_rule, "bare nasal (n/ng)");
    }

    #[test]
    fn empty_rule_set_degrades_to_identity() {
        let rules = RuleSet { initials: Vec::new(), finals: Vec::new() };
        let run = Decomposer::new("hǎo", &rules).run_traced(&Options::default());

        assert_eq!(run.parsed.initial, "");
        assert_eq!(run.parsed.final_, "hao");
        assert_eq!(run.trace.initial_rule, NO_RULE);
        assert_eq!(run.trace.final_rule, NO_RULE);
    }

    #[test]
    fn capitalised_input_keeps_full_untouched() {
        let rules = RuleSet::new();
        let parsed = Decomposer::new("Zhōng", &rules).run(&Options::default());

        assert_eq!(parsed.full, "Zhōng");
        assert_eq!(parsed.initial, "zh");
        assert_eq!(parsed.final_, "ong");
        assert_eq!(parsed.tone, Tone::First);
    }
}
