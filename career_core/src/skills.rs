//! Toggle set of skills ticked on the skills stage.

use crate::choices::Skill;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Set of selected skills, iterated in catalog order.
///
/// Membership is the only thing that matters: toggling a skill twice
/// leaves the set unchanged and duplicates cannot exist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillSet {
    selected: BTreeSet<Skill>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove the skill if present, otherwise add it.
    /// Returns whether the skill is selected afterwards.
    pub fn toggle(&mut self, skill: Skill) -> bool {
        if self.selected.contains(&skill) {
            self.selected.remove(&skill);
            false
        } else {
            self.selected.insert(skill);
            true
        }
    }

    pub fn insert(&mut self, skill: Skill) -> bool {
        self.selected.insert(skill)
    }

    pub fn remove(&mut self, skill: Skill) -> bool {
        self.selected.remove(&skill)
    }

    pub fn contains(&self, skill: Skill) -> bool {
        self.selected.contains(&skill)
    }

    /// True if any of `skills` is selected
    pub fn contains_any(&self, skills: &[Skill]) -> bool {
        skills.iter().any(|s| self.selected.contains(s))
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Skill> + '_ {
        self.selected.iter().copied()
    }
}

impl FromIterator<Skill> for SkillSet {
    fn from_iter<I: IntoIterator<Item = Skill>>(iter: I) -> Self {
        Self {
            selected: iter.into_iter().collect(),
        }
    }
}

impl Extend<Skill> for SkillSet {
    fn extend<I: IntoIterator<Item = Skill>>(&mut self, iter: I) {
        self.selected.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_skill_set() {
        let set = SkillSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_toggle_selection() {
        let mut set = SkillSet::new();

        assert!(set.toggle(Skill::DataAnalysis));
        assert!(set.contains(Skill::DataAnalysis));
        assert_eq!(set.len(), 1);

        assert!(!set.toggle(Skill::DataAnalysis));
        assert!(!set.contains(Skill::DataAnalysis));
        assert!(set.is_empty());
    }

    #[test]
    fn test_double_toggle_restores_original() {
        let mut set: SkillSet = [Skill::Communication, Skill::Language].into_iter().collect();
        let original = set.clone();

        set.toggle(Skill::ContentWriting);
        set.toggle(Skill::ContentWriting);
        assert_eq!(set, original);

        set.toggle(Skill::Language);
        set.toggle(Skill::Language);
        assert_eq!(set, original);
    }

    #[test]
    fn test_insert_is_deduplicated() {
        let mut set = SkillSet::new();
        assert!(set.insert(Skill::CreativeDesign));
        assert!(!set.insert(Skill::CreativeDesign));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_iteration_follows_catalog_order() {
        let set: SkillSet = [Skill::ContentWriting, Skill::Communication, Skill::DataAnalysis]
            .into_iter()
            .collect();
        let order: Vec<Skill> = set.iter().collect();
        assert_eq!(
            order,
            vec![Skill::Communication, Skill::DataAnalysis, Skill::ContentWriting]
        );
    }

    #[test]
    fn test_contains_any() {
        let set: SkillSet = [Skill::FinancialPlanning].into_iter().collect();
        assert!(set.contains_any(&[Skill::ComputerIt, Skill::FinancialPlanning]));
        assert!(!set.contains_any(&[Skill::ComputerIt]));
        assert!(!set.contains_any(&[]));
    }
}
