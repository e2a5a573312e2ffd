//! Scripted plain-mode sessions against in-memory input and output

use career_cli::interactive::run_interactive;
use career_core::{CareerWizard, EducationLevel, InterestArea, Skill, Stage, Timeline, WizardState};
use std::io::Cursor;

fn run_script(wizard: &mut CareerWizard, script: &str) -> String {
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut output = Vec::new();
    run_interactive(wizard, &mut input, &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_full_session_reaches_recommendations() {
    let mut wizard = CareerWizard::default();
    let output = run_script(&mut wizard, "4\n2\nc\n1\n1\n2\nimmediate\ns\nq\n");

    assert_eq!(wizard.stage(), Stage::Results);
    assert_eq!(wizard.profile().education_level, Some(EducationLevel::Bachelors));
    assert!(wizard.profile().has_skill(Skill::ComputerIt));
    assert_eq!(wizard.profile().interest_area, Some(InterestArea::InformationTechnology));
    assert_eq!(wizard.profile().timeline, Some(Timeline::Immediate));

    assert!(output.contains("Step 4 of 4 - Recommendations"));
    assert!(output.contains("1. Software Developer (92% match)"));
    assert!(output.ends_with("Goodbye.\n"));
}

#[test]
fn test_education_gate_blocks_empty_answer() {
    let mut wizard = CareerWizard::default();
    let output = run_script(&mut wizard, "\n");

    assert_eq!(wizard.stage(), Stage::Education);
    assert!(output.contains("Select your education level to continue."));
}

#[test]
fn test_skills_gate_blocks_continue() {
    let mut wizard = CareerWizard::default();
    let output = run_script(&mut wizard, "1\nc\n");

    assert_eq!(wizard.stage(), Stage::Skills);
    assert!(output.contains("Select at least one skill to continue."));
}

#[test]
fn test_submit_lists_missing_preferences() {
    let mut wizard = CareerWizard::default();
    let output = run_script(&mut wizard, "1\n3\nc\ns\n");

    assert_eq!(wizard.stage(), Stage::Preferences);
    assert!(output.contains("Still needed: interest area, timeline"));
}

#[test]
fn test_back_navigation_keeps_answers() {
    let mut wizard = CareerWizard::default();
    run_script(&mut wizard, "1\n3\nc\nb\nb\n");

    assert_eq!(wizard.stage(), Stage::Education);
    assert!(wizard.profile().has_skill(Skill::SalesMarketing));
    assert_eq!(wizard.profile().education_level, Some(EducationLevel::TenthPass));
}

#[test]
fn test_start_over_resets_state() {
    let mut wizard = CareerWizard::default();
    let output = run_script(&mut wizard, "2\n5\nc\n1\nagriculture\n2\n4\ns\nr\n");

    assert!(output.contains("Sales Executive (75% match)"));
    assert_eq!(wizard.state(), &WizardState::default());
}

#[test]
fn test_invalid_selection_is_reported() {
    let mut wizard = CareerWizard::default();
    let output = run_script(&mut wizard, "42\nq\n");

    assert!(output.contains("Please choose 1-8."));
    assert_eq!(wizard.stage(), Stage::Education);
}
