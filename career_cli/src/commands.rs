//! Non-interactive commands.

use anyhow::{bail, Result};
use career_core::{
    gates, CareerWizard, Choice, EducationLevel, InterestArea, Location, RuleCatalog, Skill,
    Stage, Timeline, WizardState,
};
use std::fmt::Write;

/// Answers for a one-shot run through the wizard
#[derive(Debug, Clone)]
pub struct RecommendRequest {
    pub education: EducationLevel,
    pub skills: Vec<Skill>,
    pub interest: InterestArea,
    pub timeline: Timeline,
    pub location: Option<Location>,
    pub salary_expectation: Option<String>,
}

/// Feed `request` through every stage of `wizard`. Any stage that refuses to
/// advance is reported as an error naming what is missing.
pub fn run_recommend<'a>(
    wizard: &'a mut CareerWizard,
    request: &RecommendRequest,
) -> Result<&'a WizardState> {
    wizard.reset();

    wizard.set_education(request.education);
    wizard.advance();

    for skill in &request.skills {
        if !wizard.profile().has_skill(*skill) {
            wizard.toggle_skill(*skill);
        }
    }
    wizard.advance();
    if wizard.stage() != Stage::Preferences {
        bail!("At least one skill is required (use --skill)");
    }

    wizard.set_interest(request.interest);
    wizard.set_timeline(request.timeline);
    if let Some(location) = request.location {
        wizard.set_location(location);
    }
    if let Some(salary) = &request.salary_expectation {
        wizard.set_salary_expectation(salary);
    }

    wizard.submit();
    if wizard.stage() != Stage::Results {
        let missing = gates::missing_preferences(wizard.profile());
        if missing.is_empty() {
            bail!("Submission refused by the current wizard policy");
        }
        bail!("Missing preferences: {}", missing.join(", "));
    }

    Ok(wizard.state())
}

/// Pretty JSON of the wizard state, as printed by `recommend --json`
pub fn state_json(state: &WizardState) -> Result<String> {
    Ok(serde_json::to_string_pretty(state)?)
}

fn list_choices<T: Choice>(out: &mut String, title: &str) {
    let _ = writeln!(out, "{}:", title);
    for choice in T::ALL {
        let _ = writeln!(out, "  {:<24} {}", choice.slug(), choice.label());
    }
    out.push('\n');
}

/// Listing of every accepted value and rule
pub fn format_catalog(catalog: &RuleCatalog) -> String {
    let mut out = String::new();
    list_choices::<EducationLevel>(&mut out, "Education levels");
    list_choices::<Skill>(&mut out, "Skills");
    list_choices::<InterestArea>(&mut out, "Interest areas");
    list_choices::<Timeline>(&mut out, "Timelines");
    list_choices::<Location>(&mut out, "Locations");

    let _ = writeln!(out, "Rules:");
    for rule in &catalog.rules {
        let _ = writeln!(out, "  {:>3}  {}", rule.recommendation.match_score, rule.label());
    }
    let _ = writeln!(
        out,
        "  {:>3}  {} (fallback)",
        catalog.fallback.match_score, catalog.fallback.label
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use career_core::CollectorConfig;

    fn request(skills: Vec<Skill>) -> RecommendRequest {
        RecommendRequest {
            education: EducationLevel::Bachelors,
            skills,
            interest: InterestArea::InformationTechnology,
            timeline: Timeline::Immediate,
            location: Some(Location::Bangalore),
            salary_expectation: None,
        }
    }

    #[test]
    fn test_run_recommend_reaches_results() {
        let mut wizard = CareerWizard::default();
        let state = run_recommend(&mut wizard, &request(vec![Skill::ComputerIt])).unwrap();

        assert_eq!(state.stage, Stage::Results);
        assert_eq!(state.recommendations[0].label, "Software Developer");
        assert_eq!(state.profile.location, Some(Location::Bangalore));
    }

    #[test]
    fn test_duplicate_skill_flags_are_not_toggled_off() {
        let mut wizard = CareerWizard::default();
        let state = run_recommend(
            &mut wizard,
            &request(vec![Skill::ComputerIt, Skill::ComputerIt]),
        )
        .unwrap();
        assert!(state.profile.has_skill(Skill::ComputerIt));
    }

    #[test]
    fn test_run_recommend_without_skills_fails() {
        let mut wizard = CareerWizard::default();
        let err = run_recommend(&mut wizard, &request(vec![])).unwrap_err();
        assert!(err.to_string().contains("skill"));
        assert_eq!(wizard.stage(), Stage::Skills);
    }

    #[test]
    fn test_run_recommend_resets_previous_session() {
        let mut wizard = CareerWizard::new(CollectorConfig::default(), Default::default());
        run_recommend(&mut wizard, &request(vec![Skill::HealthcareMedical])).unwrap();
        let state = run_recommend(&mut wizard, &request(vec![Skill::Language])).unwrap();
        assert!(!state.profile.has_skill(Skill::HealthcareMedical));
    }

    #[test]
    fn test_state_json_carries_stage_and_recommendations() {
        let mut wizard = CareerWizard::default();
        let mut req = request(vec![Skill::DigitalMarketing, Skill::ComputerIt]);
        req.salary_expectation = Some("8 LPA".to_string());
        let state = run_recommend(&mut wizard, &req).unwrap();

        let text = state_json(state).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["stage"], "results");
        assert_eq!(json["profile"]["salary_expectation"], "8 LPA");

        let recs = json["recommendations"].as_array().unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0]["label"], "Software Developer");
        assert_eq!(recs[0]["match_score"], 92);
        assert_eq!(recs[1]["label"], "Digital Marketing Specialist");

        let back: WizardState = serde_json::from_str(&text).unwrap();
        assert_eq!(&back, state);
    }

    #[test]
    fn test_format_catalog_lists_everything() {
        let text = format_catalog(&RuleCatalog::builtin());
        assert!(text.contains("computer_it"));
        assert!(text.contains("Open to relocate"));
        assert!(text.contains(" 92  Software Developer"));
        assert!(text.contains(" 75  Sales Executive (fallback)"));
    }
}
