//! Text rendering of wizard state and recommendations, shared by the
//! terminal UI and the plain line mode.

use career_core::{Choice, Profile, Recommendation, Stage, WizardState};
use std::fmt::Write;

/// "Step 1 of 4 - Education Background (25%)", used as the gauge label
pub fn format_progress(state: &WizardState) -> String {
    format!(
        "Step {} of {} - {} ({}%)",
        state.stage.number(),
        Stage::COUNT,
        state.stage.title(),
        state.progress_percent()
    )
}

fn or_unset<T: Choice>(value: Option<T>) -> &'static str {
    value.map(|v| v.label()).unwrap_or("(not set)")
}

pub fn format_profile(profile: &Profile) -> String {
    let skills: Vec<&str> = profile.skills.iter().map(|s| s.label()).collect();
    let mut out = String::new();
    let _ = writeln!(out, "Education:  {}", or_unset(profile.education_level));
    let _ = writeln!(
        out,
        "Skills:     {}",
        if skills.is_empty() {
            "(none)".to_string()
        } else {
            skills.join(", ")
        }
    );
    let _ = writeln!(out, "Interest:   {}", or_unset(profile.interest_area));
    let _ = writeln!(out, "Timeline:   {}", or_unset(profile.timeline));
    let _ = writeln!(out, "Location:   {}", or_unset(profile.location));
    if let Some(salary) = &profile.salary_expectation {
        let _ = writeln!(out, "Salary:     {}", salary);
    }
    out
}

pub fn format_recommendation(rank: usize, rec: &Recommendation) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}. {} ({}% match)", rank, rec.label, rec.match_score);
    let _ = writeln!(out, "   {}", rec.rationale);
    let _ = writeln!(out, "   Salary Range: {}", rec.compensation_band);
    let _ = writeln!(out, "   Job Growth:   {}", rec.growth_outlook);
    let _ = writeln!(out, "   Next Steps:");
    for (i, step) in rec.action_steps.iter().enumerate() {
        let _ = writeln!(out, "     {}) {}", i + 1, step);
    }
    let _ = writeln!(
        out,
        "   Recommended Training: {}",
        rec.training_paths.join(", ")
    );
    out
}

pub fn format_recommendations(recs: &[Recommendation]) -> String {
    recs.iter()
        .enumerate()
        .map(|(i, rec)| format_recommendation(i + 1, rec))
        .collect::<Vec<_>>()
        .join("\n")
}
