//! Stage gates.
//!
//! Plain predicates over a [`Profile`]. The wizard consults them before
//! moving forward, and a presentation layer can consult the same functions
//! to decide whether a "continue" control should be enabled.

use crate::types::Profile;

/// Stage 1 -> 2
pub fn education_selected(profile: &Profile) -> bool {
    profile.education_level.is_some()
}

/// Stage 2 -> 3
pub fn skills_selected(profile: &Profile) -> bool {
    !profile.skills.is_empty()
}

/// Stage 3 -> 4
pub fn preferences_selected(profile: &Profile) -> bool {
    profile.interest_area.is_some() && profile.timeline.is_some()
}

/// Human-readable names of the fields a gate is still waiting for
pub fn missing_preferences(profile: &Profile) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if profile.interest_area.is_none() {
        missing.push("interest area");
    }
    if profile.timeline.is_none() {
        missing.push("timeline");
    }
    missing
}
