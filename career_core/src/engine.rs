//! Recommendation Engine
//!
//! Turns a finished profile into a ranked list of career recommendations.
//!
//! RULES:
//! - Evaluation is read-only: the profile is never modified
//! - Every rule is checked independently; all matching rules emit
//! - The output is never empty (fallback when nothing matches)
//! - Ranking is a stable sort by score, so ties keep catalog order

use crate::catalog::RuleCatalog;
use crate::types::{Profile, Recommendation};
use serde::{Deserialize, Serialize};

/// Configuration for the engine
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Keep only the top N after ranking. `Some(0)` is treated as 1.
    pub max_recommendations: Option<usize>,
}

impl EngineConfig {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            max_recommendations: Some(limit),
        }
    }
}

/// Recommendations together with how they were reached
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineReport {
    pub recommendations: Vec<Recommendation>,
    pub rules_considered: usize,
    /// Labels of matching rules, in catalog order
    pub rules_matched: Vec<String>,
    pub used_fallback: bool,
}

/// The rule-based recommendation engine
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    config: EngineConfig,
    catalog: RuleCatalog,
}

impl RecommendationEngine {
    pub fn new(config: EngineConfig, catalog: RuleCatalog) -> Self {
        Self { config, catalog }
    }

    /// Engine over the built-in catalog
    pub fn with_config(config: EngineConfig) -> Self {
        Self::new(config, RuleCatalog::builtin())
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Ranked recommendations for `profile`
    pub fn evaluate(&self, profile: &Profile) -> Vec<Recommendation> {
        self.evaluate_with_report(profile).recommendations
    }

    pub fn evaluate_with_report(&self, profile: &Profile) -> EngineReport {
        let mut recommendations = Vec::new();
        let mut rules_matched = Vec::new();

        for rule in &self.catalog.rules {
            if rule.trigger.matches(profile) {
                log::debug!(
                    "[engine] Rule matched: {} ({})",
                    rule.label(),
                    rule.recommendation.match_score
                );
                rules_matched.push(rule.label().to_string());
                recommendations.push(rule.recommendation.clone());
            }
        }

        let used_fallback = recommendations.is_empty();
        if used_fallback {
            log::debug!(
                "[engine] No rule matched, using fallback: {}",
                self.catalog.fallback.label
            );
            recommendations.push(self.catalog.fallback.clone());
        }

        // Vec::sort_by is stable
        recommendations.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        if let Some(limit) = self.config.max_recommendations {
            recommendations.truncate(limit.max(1));
        }

        log::info!(
            "[engine] {} recommendations from {} rules ({} matched)",
            recommendations.len(),
            self.catalog.rules.len(),
            rules_matched.len()
        );

        EngineReport {
            recommendations,
            rules_considered: self.catalog.rules.len(),
            rules_matched,
            used_fallback,
        }
    }
}

/// Evaluate `profile` against the built-in catalog
pub fn evaluate(profile: &Profile) -> Vec<Recommendation> {
    RecommendationEngine::default().evaluate(profile)
}
