//! Career Wizard Types
//!
//! The profile accumulated across wizard stages and the recommendation
//! records produced from it.

use crate::choices::{EducationLevel, InterestArea, Location, Skill, Timeline};
use crate::gates;
use crate::skills::SkillSet;
use serde::{Deserialize, Serialize};

// ============================================================
// PROFILE
// ============================================================

/// Everything the user has told the wizard so far
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Highest qualification; gates stage 1 -> 2
    pub education_level: Option<EducationLevel>,
    /// Ticked skills; non-empty gates stage 2 -> 3
    pub skills: SkillSet,
    pub interest_area: Option<InterestArea>,
    pub timeline: Option<Timeline>,
    /// Optional, never gates progression
    pub location: Option<Location>,
    /// Free-form expectation, never gates progression
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_expectation: Option<String>,
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a profile with the given skills already ticked
    pub fn with_skills(skills: &[Skill]) -> Self {
        Self {
            skills: skills.iter().copied().collect(),
            ..Default::default()
        }
    }

    pub fn has_skill(&self, skill: Skill) -> bool {
        self.skills.contains(skill)
    }

    /// True once every progression gate is satisfied
    pub fn is_complete(&self) -> bool {
        gates::education_selected(self)
            && gates::skills_selected(self)
            && gates::preferences_selected(self)
    }
}

// ============================================================
// RECOMMENDATION
// ============================================================

/// One scored career path suggested for a profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Name of the recommended path
    pub label: String,
    /// 0..=100
    pub match_score: u8,
    /// Why this profile triggered the match
    pub rationale: String,
    /// Next actions, earliest first
    pub action_steps: Vec<String>,
    pub compensation_band: String,
    pub growth_outlook: String,
    /// Unordered training tags
    pub training_paths: Vec<String>,
}

impl Recommendation {
    /// Scores above 100 are kept as given; `RuleCatalog::validate` rejects them.
    pub fn new(label: &str, match_score: u8) -> Self {
        Self {
            label: label.to_string(),
            match_score,
            rationale: String::new(),
            action_steps: Vec::new(),
            compensation_band: String::new(),
            growth_outlook: String::new(),
            training_paths: Vec::new(),
        }
    }

    pub fn with_rationale(mut self, rationale: &str) -> Self {
        self.rationale = rationale.to_string();
        self
    }

    pub fn with_action_steps(mut self, steps: &[&str]) -> Self {
        self.action_steps = steps.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_compensation(mut self, band: &str) -> Self {
        self.compensation_band = band.to_string();
        self
    }

    pub fn with_growth(mut self, outlook: &str) -> Self {
        self.growth_outlook = outlook.to_string();
        self
    }

    pub fn with_training(mut self, paths: &[&str]) -> Self {
        self.training_paths = paths.iter().map(|s| s.to_string()).collect();
        self
    }
}
