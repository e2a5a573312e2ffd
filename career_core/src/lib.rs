//! Career Guidance Core
//!
//! A guided profiling wizard with a rule-based recommendation engine:
//! - Wizard: four stages with gated forward transitions
//! - Engine: every matching rule fires, ranked by score, never empty
//! - Catalog: rules as data, built in or loaded from YAML

pub mod catalog;
pub mod choices;
pub mod engine;
pub mod gates;
pub mod skills;
pub mod types;
pub mod wizard;

pub use catalog::{load_catalog, CatalogError, RuleCatalog, RuleDefinition, RuleTrigger};
pub use choices::{
    parse_choice, Choice, EducationLevel, InterestArea, Location, ParseChoiceError, Skill,
    Timeline,
};
pub use engine::{evaluate, EngineConfig, EngineReport, RecommendationEngine};
pub use skills::SkillSet;
pub use types::{Profile, Recommendation};
pub use wizard::{CareerWizard, CollectorConfig, Stage, WizardState};

pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_version() {
        assert_eq!(get_version(), "0.1.0");
    }
}
