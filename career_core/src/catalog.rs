//! Rule Catalog
//!
//! The recommendation rules are plain data: an ordered list of
//! (trigger, payload) records plus one fallback payload. The built-in
//! catalog covers the main career categories of the Indian job market;
//! alternative catalogs can be loaded from YAML.

use crate::choices::{InterestArea, Skill};
use crate::types::{Profile, Recommendation};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Upper bound on ordered next steps per rule
pub const MAX_ACTION_STEPS: usize = 5;

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid rule '{rule}': {reason}")]
    Invalid { rule: String, reason: String },
}

// ============================================================
// RULE DEFINITIONS
// ============================================================

/// Signals that make a rule fire. Either signal is enough.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTrigger {
    #[serde(default)]
    pub any_skill: Vec<Skill>,
    #[serde(default)]
    pub any_interest: Vec<InterestArea>,
}

impl RuleTrigger {
    pub fn skills(skills: &[Skill]) -> Self {
        Self {
            any_skill: skills.to_vec(),
            any_interest: Vec::new(),
        }
    }

    pub fn interests(interests: &[InterestArea]) -> Self {
        Self {
            any_skill: Vec::new(),
            any_interest: interests.to_vec(),
        }
    }

    pub fn or_skills(mut self, skills: &[Skill]) -> Self {
        self.any_skill.extend_from_slice(skills);
        self
    }

    pub fn or_interests(mut self, interests: &[InterestArea]) -> Self {
        self.any_interest.extend_from_slice(interests);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.any_skill.is_empty() && self.any_interest.is_empty()
    }

    pub fn matches(&self, profile: &Profile) -> bool {
        let skill_hit = profile.skills.contains_any(&self.any_skill);
        let interest_hit = profile
            .interest_area
            .map(|area| self.any_interest.contains(&area))
            .unwrap_or(false);
        skill_hit || interest_hit
    }
}

/// A trigger with the fixed recommendation it emits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDefinition {
    pub trigger: RuleTrigger,
    #[serde(flatten)]
    pub recommendation: Recommendation,
}

impl RuleDefinition {
    pub fn new(trigger: RuleTrigger, recommendation: Recommendation) -> Self {
        Self {
            trigger,
            recommendation,
        }
    }

    pub fn label(&self) -> &str {
        &self.recommendation.label
    }
}

/// Ordered rules plus the payload used when nothing matches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleCatalog {
    pub rules: Vec<RuleDefinition>,
    pub fallback: Recommendation,
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RuleCatalog {
    /// The built-in career catalog
    pub fn builtin() -> Self {
        Self {
            rules: builtin_rules(),
            fallback: builtin_fallback(),
        }
    }

    /// Parse and validate a catalog from YAML text
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let catalog: RuleCatalog = serde_yaml::from_str(yaml)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn to_yaml_string(&self) -> Result<String, CatalogError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.label()).collect()
    }

    /// Check every rule and the fallback
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for rule in &self.rules {
            validate_payload(&rule.recommendation)?;
            if rule.trigger.is_empty() {
                return Err(invalid(rule.label(), "trigger lists no skills and no interests"));
            }
            if !seen.insert(rule.label().to_string()) {
                return Err(invalid(rule.label(), "duplicate rule label"));
            }
        }
        validate_payload(&self.fallback)
    }
}

/// Load a catalog from a YAML file
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<RuleCatalog, CatalogError> {
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);
    let catalog: RuleCatalog = serde_yaml::from_reader(reader)?;
    catalog.validate()?;
    log::info!(
        "[catalog] Loaded {} rules from {}",
        catalog.rules.len(),
        path.as_ref().display()
    );
    Ok(catalog)
}

fn invalid(rule: &str, reason: &str) -> CatalogError {
    CatalogError::Invalid {
        rule: rule.to_string(),
        reason: reason.to_string(),
    }
}

fn validate_payload(rec: &Recommendation) -> Result<(), CatalogError> {
    let name = if rec.label.trim().is_empty() {
        "<unnamed>"
    } else {
        rec.label.as_str()
    };

    if rec.label.trim().is_empty() {
        return Err(invalid(name, "label is empty"));
    }
    if rec.match_score > 100 {
        return Err(invalid(name, "match_score must be within 0..=100"));
    }
    if rec.action_steps.is_empty() || rec.action_steps.len() > MAX_ACTION_STEPS {
        return Err(invalid(
            name,
            &format!("expected 1..={} action steps", MAX_ACTION_STEPS),
        ));
    }
    if rec.training_paths.is_empty() {
        return Err(invalid(name, "at least one training path is required"));
    }
    let unique: HashSet<&str> = rec.training_paths.iter().map(String::as_str).collect();
    if unique.len() != rec.training_paths.len() {
        return Err(invalid(name, "duplicate training path"));
    }
    Ok(())
}

// ============================================================
// BUILT-IN CATALOG
// ============================================================

fn builtin_rules() -> Vec<RuleDefinition> {
    vec![
        RuleDefinition::new(
            RuleTrigger::skills(&[Skill::ComputerIt])
                .or_interests(&[InterestArea::InformationTechnology]),
            Recommendation::new("Software Developer", 92)
                .with_rationale("Strong IT skills align with India's booming tech industry")
                .with_action_steps(&[
                    "Learn programming languages (Python, Java, JavaScript)",
                    "Build portfolio projects on GitHub",
                    "Apply to IT companies in Bangalore, Hyderabad, Pune",
                ])
                .with_compensation("₹3-8 lakhs per annum")
                .with_growth("High (25% growth projected)")
                .with_training(&[
                    "Programming Bootcamp",
                    "AWS/Cloud Certification",
                    "Full Stack Development",
                ]),
        ),
        RuleDefinition::new(
            RuleTrigger::skills(&[Skill::DigitalMarketing, Skill::SalesMarketing]),
            Recommendation::new("Digital Marketing Specialist", 89)
                .with_rationale("Digital marketing is expanding rapidly in Indian businesses")
                .with_action_steps(&[
                    "Get Google Ads and Analytics certification",
                    "Create social media campaigns portfolio",
                    "Apply to digital agencies or startups",
                ])
                .with_compensation("₹2.5-6 lakhs per annum")
                .with_growth("High (30% growth projected)")
                .with_training(&[
                    "Google Digital Marketing Course",
                    "Facebook Blueprint",
                    "SEO Certification",
                ]),
        ),
        RuleDefinition::new(
            RuleTrigger::interests(&[InterestArea::Banking])
                .or_skills(&[Skill::FinancialPlanning]),
            Recommendation::new("Banking Professional", 86)
                .with_rationale("India's banking sector offers stable career opportunities")
                .with_action_steps(&[
                    "Prepare for IBPS or SBI bank exams",
                    "Complete banking certification courses",
                    "Apply to public and private sector banks",
                ])
                .with_compensation("₹3-7 lakhs per annum")
                .with_growth("Moderate (8% growth projected)")
                .with_training(&[
                    "JAIIB/CAIIB Certification",
                    "Banking Operations Course",
                    "Financial Planning Certification",
                ]),
        ),
        RuleDefinition::new(
            RuleTrigger::interests(&[InterestArea::Education])
                .or_skills(&[Skill::TeachingTraining]),
            Recommendation::new("Educational Professional", 85)
                .with_rationale(
                    "Education sector in India has diverse opportunities from teaching to EdTech",
                )
                .with_action_steps(&[
                    "Complete B.Ed or teaching certification",
                    "Apply to schools, colleges, or EdTech companies",
                    "Consider online tutoring platforms",
                ])
                .with_compensation("₹2-5 lakhs per annum")
                .with_growth("Moderate (12% growth projected)")
                .with_training(&[
                    "B.Ed Degree",
                    "Teaching Methodology Course",
                    "Subject Matter Expertise",
                ]),
        ),
        RuleDefinition::new(
            RuleTrigger::interests(&[InterestArea::Government]),
            Recommendation::new("Civil Services/Government Jobs", 88)
                .with_rationale("Government jobs offer job security and social impact in India")
                .with_action_steps(&[
                    "Prepare for UPSC, SSC, or state PSC exams",
                    "Join coaching institutes or online platforms",
                    "Focus on current affairs and general knowledge",
                ])
                .with_compensation("₹3.5-15 lakhs per annum")
                .with_growth("Stable with regular promotions")
                .with_training(&[
                    "UPSC Preparation",
                    "Current Affairs",
                    "Public Administration",
                ]),
        ),
        RuleDefinition::new(
            RuleTrigger::interests(&[InterestArea::Healthcare])
                .or_skills(&[Skill::HealthcareMedical]),
            Recommendation::new("Healthcare Professional", 90)
                .with_rationale(
                    "Healthcare sector is growing rapidly with government focus on health",
                )
                .with_action_steps(&[
                    "Complete medical/nursing/paramedical courses",
                    "Get relevant certifications and licenses",
                    "Apply to hospitals, clinics, or healthcare startups",
                ])
                .with_compensation("₹2.5-12 lakhs per annum")
                .with_growth("High (20% growth projected)")
                .with_training(&[
                    "Medical/Nursing Degree",
                    "Specialized Certifications",
                    "Healthcare Management",
                ]),
        ),
        RuleDefinition::new(
            RuleTrigger::interests(&[InterestArea::Business]),
            Recommendation::new("Business Development/Entrepreneur", 84)
                .with_rationale("India's startup ecosystem and business environment is thriving")
                .with_action_steps(&[
                    "Develop business plan and market research",
                    "Apply to incubators like NASSCOM or TiE",
                    "Consider MBA or business development roles",
                ])
                .with_compensation("₹3-10+ lakhs per annum")
                .with_growth("High with unlimited potential")
                .with_training(&[
                    "Business Development Course",
                    "Startup Incubation",
                    "Financial Management",
                ]),
        ),
    ]
}

fn builtin_fallback() -> Recommendation {
    Recommendation::new("Sales Executive", 75)
        .with_rationale("Sales is a great entry point with high growth potential in Indian market")
        .with_action_steps(&[
            "Develop communication and persuasion skills",
            "Apply to FMCG, telecom, or insurance companies",
            "Focus on relationship building and target achievement",
        ])
        .with_compensation("₹2-4 lakhs per annum + incentives")
        .with_growth("High (15% growth projected)")
        .with_training(&[
            "Sales Training",
            "Customer Relationship Management",
            "Product Knowledge",
        ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SMALL_CATALOG: &str = r#"
rules:
  - label: Data Analyst
    match_score: 88
    trigger:
      any_skill: [data_analysis]
    rationale: Data skills are in demand
    action_steps:
      - Learn SQL
      - Build a dashboard portfolio
    compensation_band: 4-9 lakhs
    growth_outlook: High
    training_paths: [SQL Course, BI Tools]
fallback:
  label: Customer Support Associate
  match_score: 70
  rationale: A dependable entry point
  action_steps: [Apply to BPO companies]
  compensation_band: 2-3 lakhs
  growth_outlook: Moderate
  training_paths: [Communication Course]
"#;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = RuleCatalog::builtin();
        catalog.validate().unwrap();
        assert_eq!(catalog.rules.len(), 7);
        assert_eq!(catalog.fallback.label, "Sales Executive");
        assert_eq!(catalog.fallback.match_score, 75);
    }

    #[test]
    fn test_builtin_payload_shape() {
        let catalog = RuleCatalog::builtin();
        for rule in &catalog.rules {
            let rec = &rule.recommendation;
            assert!((75..=95).contains(&rec.match_score), "{}", rec.label);
            assert!((2..=3).contains(&rec.action_steps.len()), "{}", rec.label);
            assert!((2..=4).contains(&rec.training_paths.len()), "{}", rec.label);
            assert!(!rule.trigger.is_empty());
        }
    }

    #[test]
    fn test_trigger_is_logical_or() {
        let trigger = RuleTrigger::skills(&[Skill::ComputerIt])
            .or_interests(&[InterestArea::InformationTechnology]);

        let by_skill = Profile::with_skills(&[Skill::ComputerIt]);
        assert!(trigger.matches(&by_skill));

        let mut by_interest = Profile::new();
        by_interest.interest_area = Some(InterestArea::InformationTechnology);
        assert!(trigger.matches(&by_interest));

        let mut neither = Profile::with_skills(&[Skill::Language]);
        neither.interest_area = Some(InterestArea::Tourism);
        assert!(!trigger.matches(&neither));
    }

    #[test]
    fn test_from_yaml_str() {
        let catalog = RuleCatalog::from_yaml_str(SMALL_CATALOG).unwrap();
        assert_eq!(catalog.labels(), vec!["Data Analyst"]);
        assert_eq!(catalog.rules[0].trigger.any_skill, vec![Skill::DataAnalysis]);
        assert!(catalog.rules[0].trigger.any_interest.is_empty());
        assert_eq!(catalog.fallback.match_score, 70);
    }

    #[test]
    fn test_load_catalog_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SMALL_CATALOG.as_bytes()).unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.rules.len(), 1);
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let result = load_catalog("/nonexistent/catalog.yaml");
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }

    #[test]
    fn test_builtin_yaml_roundtrip() {
        let builtin = RuleCatalog::builtin();
        let yaml = builtin.to_yaml_string().unwrap();
        let parsed = RuleCatalog::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed, builtin);
    }

    #[test]
    fn test_rejects_empty_trigger() {
        let yaml = SMALL_CATALOG.replace("any_skill: [data_analysis]", "any_skill: []");
        let err = RuleCatalog::from_yaml_str(&yaml).unwrap_err();
        match err {
            CatalogError::Invalid { rule, reason } => {
                assert_eq!(rule, "Data Analyst");
                assert!(reason.contains("trigger"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_rejects_score_above_100() {
        let yaml = SMALL_CATALOG.replace("match_score: 88", "match_score: 101");
        assert!(matches!(
            RuleCatalog::from_yaml_str(&yaml),
            Err(CatalogError::Invalid { .. })
        ));
    }

    #[test]
    fn test_rejects_built_rule_scoring_above_100() {
        let mut catalog = RuleCatalog::builtin();
        let rec = Recommendation::new("Overconfident Analyst", 120)
            .with_action_steps(&["Learn SQL"])
            .with_training(&["SQL Course"]);
        assert_eq!(rec.match_score, 120);

        catalog.fallback = rec;
        let err = catalog.validate().unwrap_err();
        match err {
            CatalogError::Invalid { rule, reason } => {
                assert_eq!(rule, "Overconfident Analyst");
                assert!(reason.contains("0..=100"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_skill() {
        let yaml = SMALL_CATALOG.replace("data_analysis", "juggling");
        assert!(matches!(
            RuleCatalog::from_yaml_str(&yaml),
            Err(CatalogError::Yaml(_))
        ));
    }

    #[test]
    fn test_rejects_duplicate_labels() {
        let mut catalog = RuleCatalog::builtin();
        let copy = catalog.rules[0].clone();
        catalog.rules.push(copy);
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate rule label"));
    }

    #[test]
    fn test_rejects_fallback_without_steps() {
        let mut catalog = RuleCatalog::builtin();
        catalog.fallback.action_steps.clear();
        assert!(catalog.validate().is_err());
    }
}
