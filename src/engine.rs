//! Decomposition engine.
//!
//! Turns one pinyin syllable into initial, final and tone. The engine is a
//! straight pipeline over two ordered rule tables; it keeps no state between
//! calls, so any number of callers can share one [`RuleSet`].
//!
//! ## How the parts work together
//!
//! ```text
//! rules::initial::rules::get ─┐
//! rules::finals::rules::get  ─┴─ RuleSet::new        (decomposer.rs)
//!                                    │
//! input ── lowercase ── extract_tone ┤                (tone.rs)
//!                                    v
//!                      first_match(initial rules)     (matcher.rs)
//!                        - null initials (yu/y/w)
//!                        - zh/ch/sh, single consonants
//!                          └─ resolve_compound        (rules/initial/glides.rs)
//!                                    │ residual
//!                                    v
//!                      first_match(final rules)       (matcher.rs)
//!                                    │
//!                                    v
//!                         ParsedSyllable + RunTrace   (trace.rs)
//! ```
//!
//! ## Responsibilities by module
//!
//! - `tone.rs`: tone-mark table and extraction (plus numbered tones).
//! - `matcher.rs`: first-match application of an ordered rule table.
//! - `decomposer.rs`: wires the stages together.
//! - `trace.rs`: which rule fired per stage, and timing.
//!
//! ## Adding rules
//!
//! Rules live under `src/rules/**`. Position in the `get()` list is the
//! precedence; insert new rules where they must win over later ones.
//!
//! ## Debugging
//!
//! Set `HMM_DEBUG_RULES=1` to print a line per stage naming the rule that fired.

#[path = "engine/decomposer.rs"]
mod decomposer;
#[path = "engine/matcher.rs"]
mod matcher;
#[path = "engine/tone.rs"]
mod tone;
#[path = "engine/trace.rs"]
mod trace;

pub(crate) use decomposer::{Decomposer, RuleSet};
pub(crate) use trace::RunTrace;
