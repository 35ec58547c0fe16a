use regex::Regex;

#[macro_use]
mod macros;
mod api;
mod engine;
mod hmm;
mod ids;
mod readings;
mod rules;

pub use api::{Breakdown, Options, decompose, decompose_char, decompose_verbose, decompose_with, decompose_word};
pub use hmm::{ActorCategory, ParsedSyllable, SceneKey, Tone};
pub use ids::{actor_category, actor_id, display_final, display_initial, set_id};
pub use readings::{ReadingSource, ReadingTable};

// --- Internal types ---------------------------------------------------------

/// Result of the initial classifier: the initial class, the residual handed
/// to the final matcher, and the name of the glide rule that fired (if any).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Onset {
    pub initial: String,
    pub residual: String,
    pub glide: Option<&'static str>,
}

impl Onset {
    pub fn new(initial: impl Into<String>, residual: impl Into<String>) -> Self {
        Onset { initial: initial.into(), residual: residual.into(), glide: None }
    }
}

// Pattern items used by rules: either a Regex matched against the syllable,
// or a Predicate over the whole syllable.
#[derive(Debug)]
pub(crate) enum Pattern {
    /// Match a regular expression against the (lower-cased) input. The
    /// `Regex` is stored as a static reference (created via the `regex!`
    /// helper macro in `src/macros.rs`).
    Regex(&'static Regex),

    /// Match the whole input with a predicate function.
    Predicate(fn(&str) -> bool),
}

impl Pattern {
    /// Match `input` and return the capture groups handed to a production.
    ///
    /// Index 0 is always the whole match; for regex patterns the following
    /// entries are the capture groups in order (unmatched groups are empty).
    pub fn groups(&self, input: &str) -> Option<Vec<String>> {
        match self {
            Pattern::Regex(re) => {
                let caps = re.captures(input)?;
                Some(caps.iter().map(|m| m.map(|m| m.as_str().to_string()).unwrap_or_default()).collect())
            }
            Pattern::Predicate(p) => p(input).then(|| vec![input.to_string()]),
        }
    }
}

pub(crate) type Production<T> = Box<dyn Fn(&[String]) -> Option<T> + Send + Sync>;

/// A classification rule: a name, a `pattern` and a `production` that
/// receives the matched groups and optionally returns a value.
///
/// Rules live in ordered tables; the first rule whose pattern matches and
/// whose production returns `Some` wins.
pub(crate) struct Rule<T> {
    pub name: &'static str,
    pub pattern: Pattern,
    pub production: Production<T>,
}

impl<T> std::fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("pattern", &self.pattern)
            .field("production", &"<function>")
            .finish()
    }
}

impl<T> Rule<T> {
    /// Apply the rule to `input`, returning the production's value on a match.
    #[allow(dead_code)]
    pub fn apply(&self, input: &str) -> Option<T> {
        let groups = self.pattern.groups(input)?;
        (self.production)(&groups)
    }
}
