//! Runtime configuration for the wizard front end.

use anyhow::{Context, Result};
use career_core::{
    load_catalog, CareerWizard, CollectorConfig, EngineConfig, RecommendationEngine, RuleCatalog,
};
use std::path::{Path, PathBuf};

/// Environment variable naming an alternative rule catalog
pub const CATALOG_ENV: &str = "CAREER_WIZARD_CATALOG";

#[derive(Debug, Clone, Default)]
pub struct WizardSettings {
    /// Explicit `--catalog` path; wins over the environment
    pub catalog_path: Option<PathBuf>,
    pub max_recommendations: Option<usize>,
    pub require_skills_on_submit: bool,
}

/// Pick the catalog path: an explicit path wins, then a non-blank
/// environment value, otherwise none (built-in catalog).
pub fn resolve_catalog_path(explicit: Option<&Path>, env_value: Option<&str>) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(|| {
        env_value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    })
}

/// Load the catalog at `path`, or the built-in one when there is none
pub fn catalog_from(path: Option<&Path>) -> Result<RuleCatalog> {
    match path {
        Some(path) => load_catalog(path)
            .with_context(|| format!("Failed to load rule catalog {}", path.display())),
        None => {
            log::debug!("[config] Using built-in rule catalog");
            Ok(RuleCatalog::builtin())
        }
    }
}

impl WizardSettings {
    /// Path of the catalog to load, if any
    pub fn resolved_catalog_path(&self) -> Option<PathBuf> {
        let env_value = std::env::var(CATALOG_ENV).ok();
        resolve_catalog_path(self.catalog_path.as_deref(), env_value.as_deref())
    }

    pub fn load_catalog(&self) -> Result<RuleCatalog> {
        catalog_from(self.resolved_catalog_path().as_deref())
    }

    pub fn build_engine(&self) -> Result<RecommendationEngine> {
        let config = EngineConfig {
            max_recommendations: self.max_recommendations,
        };
        Ok(RecommendationEngine::new(config, self.load_catalog()?))
    }

    pub fn build_wizard(&self) -> Result<CareerWizard> {
        let config = CollectorConfig {
            require_skills_on_submit: self.require_skills_on_submit,
        };
        Ok(CareerWizard::new(config, self.build_engine()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const ONE_RULE_CATALOG: &str = r#"
rules:
  - trigger:
      any_skill: [language]
    label: Translator
    match_score: 81
    rationale: Language skills
    action_steps: [Build a portfolio]
    compensation_band: 3-6 lakhs
    growth_outlook: Medium
    training_paths: [Translation Certificate]
fallback:
  label: Generalist
  match_score: 60
  rationale: Broad profile
  action_steps: [Explore options]
  compensation_band: 2-4 lakhs
  growth_outlook: Medium
  training_paths: [Career Counselling]
"#;

    fn catalog_file(yaml: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_settings_use_builtin_catalog() {
        assert_eq!(resolve_catalog_path(None, None), None);
        assert_eq!(catalog_from(None).unwrap(), RuleCatalog::builtin());
    }

    #[test]
    fn test_env_catalog_is_used_without_flag() {
        let file = catalog_file(ONE_RULE_CATALOG);
        let env_value = file.path().display().to_string();

        let path = resolve_catalog_path(None, Some(env_value.as_str())).unwrap();
        assert_eq!(path, file.path());
        let catalog = catalog_from(Some(path.as_path())).unwrap();
        assert_eq!(catalog.labels(), vec!["Translator"]);
        assert_eq!(catalog.fallback.label, "Generalist");
    }

    #[test]
    fn test_explicit_path_wins_over_env() {
        let explicit = catalog_file(ONE_RULE_CATALOG);
        let path = resolve_catalog_path(Some(explicit.path()), Some("/nonexistent/env.yaml"));
        assert_eq!(path.as_deref(), Some(explicit.path()));
        assert_eq!(catalog_from(path.as_deref()).unwrap().rules.len(), 1);
    }

    #[test]
    fn test_blank_env_value_is_ignored() {
        assert_eq!(resolve_catalog_path(None, Some("   ")), None);
        assert_eq!(resolve_catalog_path(None, Some("")), None);
    }

    #[test]
    fn test_explicit_catalog_path() {
        let mut file = NamedTempFile::new().unwrap();
        let yaml = RuleCatalog::builtin().to_yaml_string().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let settings = WizardSettings {
            catalog_path: Some(file.path().to_path_buf()),
            max_recommendations: Some(1),
            ..Default::default()
        };
        let engine = settings.build_engine().unwrap();
        assert_eq!(engine.catalog().rules.len(), 7);
        assert_eq!(engine.config().max_recommendations, Some(1));
    }

    #[test]
    fn test_missing_catalog_is_an_error() {
        let settings = WizardSettings {
            catalog_path: Some(PathBuf::from("/nonexistent/rules.yaml")),
            ..Default::default()
        };
        let err = settings.build_wizard().unwrap_err();
        assert!(err.to_string().contains("Failed to load rule catalog"));
    }
}
