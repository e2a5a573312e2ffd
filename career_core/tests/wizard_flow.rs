//! End-to-end wizard runs through the public API

use career_core::{
    evaluate, CareerWizard, Choice, EducationLevel, InterestArea, Location, Profile,
    RuleCatalog, Skill, Stage, Timeline, WizardState,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn complete_wizard(skills: &[Skill], interest: InterestArea, timeline: Timeline) -> CareerWizard {
    let mut wizard = CareerWizard::default();
    wizard.set_education(EducationLevel::Bachelors);
    wizard.advance();
    for skill in skills {
        wizard.toggle_skill(*skill);
    }
    wizard.advance();
    wizard.set_interest(interest);
    wizard.set_timeline(timeline);
    wizard.submit();
    wizard
}

#[test]
fn test_it_profile_scenario() {
    init_logging();
    let wizard = complete_wizard(
        &[Skill::ComputerIt],
        InterestArea::InformationTechnology,
        Timeline::Immediate,
    );

    assert_eq!(wizard.stage(), Stage::Results);
    let recs = wizard.recommendations();
    let dev = recs
        .iter()
        .position(|r| r.label == "Software Developer")
        .expect("software developer recommended");
    assert!((75..=95).contains(&recs[dev].match_score));
    assert!(recs[..dev].iter().all(|r| r.match_score >= recs[dev].match_score));

    let fallback = RuleCatalog::builtin().fallback;
    assert!(!recs.contains(&fallback));
}

#[test]
fn test_unmatched_profile_gets_only_fallback() {
    init_logging();
    let mut profile = Profile::new();
    profile.interest_area = Some(InterestArea::Agriculture);
    profile.timeline = Some(Timeline::Long);

    let recs = evaluate(&profile);
    assert_eq!(recs, vec![RuleCatalog::builtin().fallback]);
}

#[test]
fn test_guard_enforcement_on_every_stage() {
    let mut wizard = CareerWizard::default();
    for _ in 0..3 {
        wizard.advance();
    }
    assert_eq!(wizard.stage(), Stage::Education);

    wizard.set_education(EducationLevel::TwelfthPass);
    wizard.advance();
    wizard.advance();
    assert_eq!(wizard.stage(), Stage::Skills);

    wizard.toggle_skill(Skill::CustomerService);
    wizard.advance();
    wizard.set_timeline(Timeline::Short);
    wizard.advance();
    assert_eq!(wizard.stage(), Stage::Preferences);

    wizard.set_interest(InterestArea::Retail);
    wizard.advance();
    assert_eq!(wizard.stage(), Stage::Results);
}

#[test]
fn test_reset_from_every_stage() {
    for stop_at in 1..=4u8 {
        let mut wizard = CareerWizard::default();
        wizard.set_education(EducationLevel::PhdResearch);
        wizard.set_location(Location::Chennai);
        if stop_at > 1 {
            wizard.advance();
            wizard.toggle_skill(Skill::DataAnalysis);
        }
        if stop_at > 2 {
            wizard.advance();
            wizard.set_interest(InterestArea::Education);
            wizard.set_timeline(Timeline::Medium);
        }
        if stop_at > 3 {
            wizard.submit();
        }
        assert_eq!(wizard.stage().number(), stop_at);

        let state = wizard.reset().clone();
        assert_eq!(state, WizardState::default());
        assert_eq!(state.stage, Stage::Education);
    }
}

#[test]
fn test_every_single_skill_profile_is_answered() {
    for skill in Skill::ALL {
        let wizard = complete_wizard(&[*skill], InterestArea::Media, Timeline::Immediate);
        let recs = wizard.recommendations();
        assert!(!recs.is_empty(), "{}", skill);
        assert!(recs.windows(2).all(|w| w[0].match_score >= w[1].match_score));
    }
}

#[test]
fn test_state_serializes_for_presentation() {
    let wizard = complete_wizard(
        &[Skill::TeachingTraining],
        InterestArea::Education,
        Timeline::Short,
    );
    let json = serde_json::to_value(wizard.state()).unwrap();

    assert_eq!(json["stage"], "results");
    assert_eq!(json["profile"]["interest_area"], "Education & Training");
    assert_eq!(json["recommendations"][0]["label"], "Educational Professional");
    assert_eq!(json["recommendations"][0]["match_score"], 85);
    assert_eq!(json["can_advance"], false);
}
