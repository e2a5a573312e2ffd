//! Career Wizard
//!
//! A four-stage state machine that collects a [`Profile`] and, on the final
//! submission, hands it to the [`RecommendationEngine`].
//!
//! Blocked transitions are not errors. When a gate is unmet the wizard
//! simply stays where it is; callers that want to explain why should
//! read [`WizardState::can_advance`] or the predicates in [`crate::gates`].

use crate::choices::{EducationLevel, InterestArea, Location, Skill, Timeline};
use crate::engine::RecommendationEngine;
use crate::gates;
use crate::types::{Profile, Recommendation};
use serde::{Deserialize, Serialize};

// ============================================================
// STAGES
// ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Education,
    Skills,
    Preferences,
    Results,
}

impl Stage {
    pub const COUNT: u8 = 4;

    /// 1-based stage number
    pub fn number(&self) -> u8 {
        match self {
            Stage::Education => 1,
            Stage::Skills => 2,
            Stage::Preferences => 3,
            Stage::Results => 4,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Stage::Education => "Education Background",
            Stage::Skills => "Skills & Experience",
            Stage::Preferences => "Career Preferences",
            Stage::Results => "Recommendations",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Stage::Education => "Tell us about your educational qualification",
            Stage::Skills => "What skills have you developed?",
            Stage::Preferences => "What type of career interests you?",
            Stage::Results => {
                "Based on the Indian job market, here are your best career matches"
            }
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Stage::Results)
    }
}

// ============================================================
// STATE
// ============================================================

/// Everything a presentation layer needs to render the wizard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    pub stage: Stage,
    pub profile: Profile,
    /// Empty until the results stage is reached
    pub recommendations: Vec<Recommendation>,
    /// Whether the forward trigger of the current stage would move, with
    /// the collector's submission policy applied. Refreshed after every
    /// wizard operation.
    pub can_advance: bool,
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            stage: Stage::Education,
            profile: Profile::default(),
            recommendations: Vec::new(),
            can_advance: false,
        }
    }
}

impl WizardState {
    /// 25, 50, 75 or 100
    pub fn progress_percent(&self) -> u8 {
        (u16::from(self.stage.number()) * 100 / u16::from(Stage::COUNT)) as u8
    }
}

/// Policy knobs for the collector
#[derive(Debug, Clone, Default)]
pub struct CollectorConfig {
    /// Also require a non-empty skill set at final submission
    pub require_skills_on_submit: bool,
}

// ============================================================
// WIZARD
// ============================================================

/// Drives a single [`WizardState`] through the stages
#[derive(Debug, Clone, Default)]
pub struct CareerWizard {
    state: WizardState,
    config: CollectorConfig,
    engine: RecommendationEngine,
}

impl CareerWizard {
    pub fn new(config: CollectorConfig, engine: RecommendationEngine) -> Self {
        Self {
            state: WizardState::default(),
            config,
            engine,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn stage(&self) -> Stage {
        self.state.stage
    }

    pub fn profile(&self) -> &Profile {
        &self.state.profile
    }

    pub fn recommendations(&self) -> &[Recommendation] {
        &self.state.recommendations
    }

    pub fn engine(&self) -> &RecommendationEngine {
        &self.engine
    }

    /// Forward trigger allowed right now (includes submission policy)
    pub fn can_advance(&self) -> bool {
        self.state.can_advance
    }

    fn stage_gate(&self) -> bool {
        let profile = &self.state.profile;
        match self.state.stage {
            Stage::Education => gates::education_selected(profile),
            Stage::Skills => gates::skills_selected(profile),
            Stage::Preferences => {
                gates::preferences_selected(profile)
                    && (!self.config.require_skills_on_submit || gates::skills_selected(profile))
            }
            Stage::Results => false,
        }
    }

    fn refresh_gate(&mut self) {
        self.state.can_advance = self.stage_gate();
    }

    // ------------------------------------------------------------
    // Field updates (refused once results are shown)
    // ------------------------------------------------------------

    fn edit_profile<F: FnOnce(&mut Profile)>(&mut self, field: &str, f: F) -> &WizardState {
        if self.state.stage.is_terminal() {
            log::debug!("[wizard] Ignoring {} update on results stage", field);
        } else {
            f(&mut self.state.profile);
            self.refresh_gate();
        }
        &self.state
    }

    pub fn set_education(&mut self, level: EducationLevel) -> &WizardState {
        self.edit_profile("education", |p| p.education_level = Some(level))
    }

    pub fn toggle_skill(&mut self, skill: Skill) -> &WizardState {
        self.edit_profile("skill", |p| {
            p.skills.toggle(skill);
        })
    }

    pub fn set_interest(&mut self, area: InterestArea) -> &WizardState {
        self.edit_profile("interest", |p| p.interest_area = Some(area))
    }

    pub fn set_timeline(&mut self, timeline: Timeline) -> &WizardState {
        self.edit_profile("timeline", |p| p.timeline = Some(timeline))
    }

    pub fn set_location(&mut self, location: Location) -> &WizardState {
        self.edit_profile("location", |p| p.location = Some(location))
    }

    pub fn set_salary_expectation(&mut self, expectation: &str) -> &WizardState {
        let value = expectation.trim();
        self.edit_profile("salary expectation", |p| {
            p.salary_expectation = if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            };
        })
    }

    // ------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------

    /// Move forward if the current gate allows it. On the preferences
    /// stage this is the same as [`CareerWizard::submit`].
    pub fn advance(&mut self) -> &WizardState {
        match self.state.stage {
            Stage::Education if self.stage_gate() => self.move_to(Stage::Skills),
            Stage::Skills if self.stage_gate() => self.move_to(Stage::Preferences),
            Stage::Preferences => return self.submit(),
            stage => log::debug!("[wizard] Advance refused on stage {}", stage.number()),
        }
        &self.state
    }

    pub fn back(&mut self) -> &WizardState {
        match self.state.stage {
            Stage::Skills => self.move_to(Stage::Education),
            Stage::Preferences => self.move_to(Stage::Skills),
            stage => log::debug!("[wizard] Back refused on stage {}", stage.number()),
        }
        &self.state
    }

    /// Run the engine and show results. Only valid on the preferences stage.
    pub fn submit(&mut self) -> &WizardState {
        if self.state.stage != Stage::Preferences || !self.stage_gate() {
            log::debug!(
                "[wizard] Submit refused on stage {}",
                self.state.stage.number()
            );
            return &self.state;
        }

        self.state.recommendations = self.engine.evaluate(&self.state.profile);
        self.move_to(Stage::Results);
        &self.state
    }

    /// Clear the profile and recommendations and return to the first stage
    pub fn reset(&mut self) -> &WizardState {
        log::info!("[wizard] Starting over");
        self.state = WizardState::default();
        self.refresh_gate();
        &self.state
    }

    fn move_to(&mut self, stage: Stage) {
        log::info!(
            "[wizard] Stage {} -> {} ({})",
            self.state.stage.number(),
            stage.number(),
            stage.title()
        );
        self.state.stage = stage;
        self.refresh_gate();
    }
}
