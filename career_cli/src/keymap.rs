//! Keybindings and help text for the wizard TUI

use career_core::Stage;
use crossterm::event::{KeyCode, KeyModifiers};

pub struct KeyMap;

impl KeyMap {
    /// Help entries for the keys that do something on `stage`
    pub fn help_text(stage: Stage) -> Vec<(&'static str, &'static str)> {
        match stage {
            Stage::Education => vec![
                ("j/↓ k/↑", "Move"),
                ("Space", "Select"),
                ("Enter", "Select and continue"),
                ("c", "Continue"),
                ("q/Esc", "Quit"),
            ],
            Stage::Skills => vec![
                ("j/↓ k/↑", "Move"),
                ("Space", "Toggle skill"),
                ("c/Enter", "Continue"),
                ("b", "Back"),
                ("q/Esc", "Quit"),
            ],
            Stage::Preferences => vec![
                ("Tab/←/→", "Switch field"),
                ("j/↓ k/↑", "Move"),
                ("Space/Enter", "Choose"),
                ("s/c", "Get recommendations"),
                ("b", "Back"),
                ("q/Esc", "Quit"),
            ],
            Stage::Results => vec![
                ("j/↓ k/↑", "Scroll"),
                ("r", "Start over"),
                ("q/Esc", "Quit"),
            ],
        }
    }

    /// Check if key is quit
    pub fn is_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
        if modifiers.contains(KeyModifiers::CONTROL) {
            return matches!(code, KeyCode::Char('c'));
        }
        matches!(code, KeyCode::Char('q') | KeyCode::Esc)
    }

    /// Check if key is down
    pub fn is_down(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('j') | KeyCode::Down)
    }

    /// Check if key is up
    pub fn is_up(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('k') | KeyCode::Up)
    }

    /// Check if key is confirm
    pub fn is_confirm(code: KeyCode) -> bool {
        matches!(code, KeyCode::Enter)
    }

    /// Check if key is space (for toggling checkboxes)
    pub fn is_space(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char(' '))
    }

    /// Check if key is continue
    pub fn is_continue(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('c'))
    }

    /// Check if key is submit
    pub fn is_submit(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('s') | KeyCode::Char('c'))
    }

    /// Check if key is back
    pub fn is_back(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('b') | KeyCode::Backspace)
    }

    /// Check if key is start over
    pub fn is_restart(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('r'))
    }

    /// Check if key moves to the next preference field
    pub fn is_next_field(code: KeyCode) -> bool {
        matches!(code, KeyCode::Tab | KeyCode::Right | KeyCode::Char('l'))
    }

    /// Check if key moves to the previous preference field
    pub fn is_prev_field(code: KeyCode) -> bool {
        matches!(code, KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_c_quits_but_plain_c_does_not() {
        assert!(KeyMap::is_quit(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!KeyMap::is_quit(KeyCode::Char('c'), KeyModifiers::NONE));
        assert!(KeyMap::is_quit(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(KeyMap::is_quit(KeyCode::Esc, KeyModifiers::NONE));
        assert!(KeyMap::is_continue(KeyCode::Char('c')));
    }

    #[test]
    fn test_every_stage_has_help() {
        for stage in [Stage::Education, Stage::Skills, Stage::Preferences, Stage::Results] {
            let help = KeyMap::help_text(stage);
            assert!(help.iter().any(|(_, action)| *action == "Quit"));
        }
    }
}
