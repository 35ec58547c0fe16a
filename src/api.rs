use crate::engine::{self, RunTrace};
use crate::hmm::ParsedSyllable;
use crate::readings::ReadingSource;
use crate::rules::finals::predicates::is_set_final;
use once_cell::sync::Lazy;
use std::time::Duration;

static DEFAULT_RULES: Lazy<engine::RuleSet> = Lazy::new(engine::RuleSet::new);

/// Options that affect decomposition.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Also read a trailing ASCII tone digit 1-5 (`hao3`). Off by default, in
    /// which case an unmarked syllable is always neutral.
    pub tone_numbers: bool,
}

/// A decomposition together with the rules that produced it.
///
/// Returned by [`decompose_verbose`]; meant for debugging classifications.
#[derive(Debug, Clone)]
pub struct Breakdown {
    pub parsed: ParsedSyllable,
    /// Lower-cased input with tone marks removed.
    pub stripped: String,
    pub initial_rule: &'static str,
    pub glide_rule: Option<&'static str>,
    /// What was left for the final matcher after the initial was taken.
    pub residual: String,
    pub final_rule: &'static str,
    /// False when the final fell outside the 13 sets (only the residual
    /// fallback can do that).
    pub canonical: bool,
    pub elapsed: Duration,
}

/// Decompose `syllable` with default [`Options`].
///
/// # Example
/// ```
/// use hmm_phonology::{Tone, decompose};
///
/// let s = decompose("hǎo");
/// assert_eq!((s.initial.as_str(), s.final_.as_str(), s.tone), ("h", "ao", Tone::Third));
/// ```
pub fn decompose(syllable: &str) -> ParsedSyllable {
    decompose_with(syllable, &Options::default())
}

pub fn decompose_with(syllable: &str, options: &Options) -> ParsedSyllable {
    engine::Decomposer::new(syllable, &DEFAULT_RULES).run(options)
}

/// Decompose `syllable` and report which rule decided each stage.
pub fn decompose_verbose(syllable: &str, options: &Options) -> Breakdown {
    let run = engine::Decomposer::new(syllable, &DEFAULT_RULES).run_traced(options);
    breakdown_from(run.parsed, run.trace)
}

/// Decompose every reading of `ch` supplied by `source`, in source order.
pub fn decompose_char<S: ReadingSource + ?Sized>(source: &S, ch: char) -> Vec<ParsedSyllable> {
    source.readings(ch).iter().map(|reading| decompose(reading)).collect()
}

/// [`decompose_char`] for each character of `text`, skipping whitespace.
pub fn decompose_word<S: ReadingSource + ?Sized>(source: &S, text: &str) -> Vec<(char, Vec<ParsedSyllable>)> {
    text.chars().filter(|c| !c.is_whitespace()).map(|ch| (ch, decompose_char(source, ch))).collect()
}

fn breakdown_from(parsed: ParsedSyllable, trace: RunTrace) -> Breakdown {
    let canonical = is_set_final(&parsed.final_);
    Breakdown {
        parsed,
        stripped: trace.stripped,
        initial_rule: trace.initial_rule,
        glide_rule: trace.glide_rule,
        residual: trace.residual,
        final_rule: trace.final_rule,
        canonical,
        elapsed: trace.total,
    }
}
