//! Identifier mapping: initials and finals to the keys used by actor and set
//! tables.

use crate::hmm::ActorCategory;

const NULL_ID: &str = "null";
const NULL_DISPLAY: &str = "Ø (null)";

/// Actor id for an initial: `"null"` for the null initial, otherwise the
/// initial with `ü` spelled `v`.
pub fn actor_id(initial: &str) -> String {
    if initial.is_empty() {
        return NULL_ID.to_string();
    }
    initial.replace('ü', "v")
}

/// Set id for a final: `"null"` for the null final, otherwise the final.
pub fn set_id(final_: &str) -> String {
    if final_.is_empty() {
        return NULL_ID.to_string();
    }
    final_.to_string()
}

/// Actor family of an initial produced by the classifier.
pub fn actor_category(initial: &str) -> ActorCategory {
    match initial {
        "" => ActorCategory::Null,
        "y" => ActorCategory::Female,
        "w" => ActorCategory::Fictional,
        "yu" | "ju" | "qu" | "xu" => ActorCategory::GodLeader,
        _ if initial.contains('ü') => ActorCategory::GodLeader,
        // Single letters and zh/ch/sh never carry a glide.
        _ if initial.chars().count() == 1 || matches!(initial, "zh" | "ch" | "sh") => ActorCategory::Male,
        _ if initial.ends_with('i') => ActorCategory::Female,
        _ if initial.ends_with('u') => ActorCategory::Fictional,
        _ => ActorCategory::Male,
    }
}

pub fn display_initial(initial: &str) -> &str {
    if initial.is_empty() { NULL_DISPLAY } else { initial }
}

pub fn display_final(final_: &str) -> &str {
    if final_.is_empty() { NULL_DISPLAY } else { final_ }
}
