//! Ratatui front end for the career wizard.
//!
//! [`AppState`] turns key events into wizard operations and [`WizardScreen`]
//! draws the current [`WizardState`]: a progress gauge, the stage's list and
//! a status bar showing whether the stage can be left.

use crate::keymap::KeyMap;
use crate::render;
use anyhow::Result;
use career_core::{
    gates, CareerWizard, Choice, EducationLevel, InterestArea, Location, Skill, Stage, Timeline,
    WizardState,
};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Gauge, List, ListItem, ListState, Paragraph, StatefulWidget, Widget, Wrap,
    },
    Terminal,
};
use std::io;
use std::time::Duration;

const ACCENT: Color = Color::Rgb(45, 212, 191);

// ============================================================
// APP STATE
// ============================================================

/// Focused column on the preferences stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceField {
    Interest,
    Timeline,
    Location,
}

impl PreferenceField {
    pub fn next(self) -> Self {
        match self {
            PreferenceField::Interest => PreferenceField::Timeline,
            PreferenceField::Timeline => PreferenceField::Location,
            PreferenceField::Location => PreferenceField::Interest,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            PreferenceField::Interest => PreferenceField::Location,
            PreferenceField::Timeline => PreferenceField::Interest,
            PreferenceField::Location => PreferenceField::Timeline,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PreferenceField::Interest => "Career Interest Area",
            PreferenceField::Timeline => "Job Search Timeline",
            PreferenceField::Location => "Preferred Work Location",
        }
    }

    fn slot(self) -> usize {
        match self {
            PreferenceField::Interest => 0,
            PreferenceField::Timeline => 1,
            PreferenceField::Location => 2,
        }
    }

    fn len(self) -> usize {
        match self {
            PreferenceField::Interest => InterestArea::ALL.len(),
            PreferenceField::Timeline => Timeline::ALL.len(),
            PreferenceField::Location => Location::ALL.len(),
        }
    }
}

pub struct AppState {
    pub wizard: CareerWizard,
    pub education_cursor: usize,
    pub skill_cursor: usize,
    pub field: PreferenceField,
    /// One cursor per preference column
    pub field_cursors: [usize; 3],
    pub results_scroll: u16,
    /// Feedback for the last key, cleared on the next one
    pub last_action: String,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(wizard: CareerWizard) -> Self {
        let mut app = Self {
            wizard,
            education_cursor: 0,
            skill_cursor: 0,
            field: PreferenceField::Interest,
            field_cursors: [0; 3],
            results_scroll: 0,
            last_action: String::new(),
            should_quit: false,
        };
        app.sync_cursors();
        app
    }

    pub fn state(&self) -> &WizardState {
        self.wizard.state()
    }

    /// Point every cursor at the stored answer, or the top of its list
    fn sync_cursors(&mut self) {
        let profile = self.wizard.profile();
        self.education_cursor = profile.education_level.map(|e| e.index()).unwrap_or(0);
        self.skill_cursor = 0;
        self.field = PreferenceField::Interest;
        self.field_cursors = [
            profile.interest_area.map(|v| v.index()).unwrap_or(0),
            profile.timeline.map(|v| v.index()).unwrap_or(0),
            profile.location.map(|v| v.index()).unwrap_or(0),
        ];
        self.results_scroll = 0;
    }

    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if KeyMap::is_quit(code, modifiers) {
            self.should_quit = true;
            return;
        }

        self.last_action.clear();
        match self.wizard.stage() {
            Stage::Education => self.handle_education_key(code),
            Stage::Skills => self.handle_skills_key(code),
            Stage::Preferences => self.handle_preferences_key(code),
            Stage::Results => self.handle_results_key(code),
        }
    }

    fn handle_education_key(&mut self, code: KeyCode) {
        if KeyMap::is_down(code) || KeyMap::is_up(code) {
            move_cursor(
                &mut self.education_cursor,
                EducationLevel::ALL.len(),
                KeyMap::is_down(code),
            );
        } else if KeyMap::is_space(code) || KeyMap::is_confirm(code) {
            if let Some(level) = EducationLevel::ALL.get(self.education_cursor) {
                self.wizard.set_education(*level);
            }
            if KeyMap::is_confirm(code) {
                self.continue_stage();
            }
        } else if KeyMap::is_continue(code) {
            self.continue_stage();
        }
    }

    fn handle_skills_key(&mut self, code: KeyCode) {
        if KeyMap::is_down(code) || KeyMap::is_up(code) {
            move_cursor(&mut self.skill_cursor, Skill::ALL.len(), KeyMap::is_down(code));
        } else if KeyMap::is_space(code) {
            if let Some(skill) = Skill::ALL.get(self.skill_cursor) {
                self.wizard.toggle_skill(*skill);
            }
        } else if KeyMap::is_confirm(code) || KeyMap::is_continue(code) {
            self.continue_stage();
        } else if KeyMap::is_back(code) {
            self.wizard.back();
        }
    }

    fn handle_preferences_key(&mut self, code: KeyCode) {
        if KeyMap::is_next_field(code) {
            self.field = self.field.next();
        } else if KeyMap::is_prev_field(code) {
            self.field = self.field.prev();
        } else if KeyMap::is_down(code) || KeyMap::is_up(code) {
            let len = self.field.len();
            move_cursor(
                &mut self.field_cursors[self.field.slot()],
                len,
                KeyMap::is_down(code),
            );
        } else if KeyMap::is_space(code) || KeyMap::is_confirm(code) {
            self.choose_focused();
        } else if KeyMap::is_submit(code) {
            self.continue_stage();
            if self.wizard.stage() == Stage::Results {
                self.results_scroll = 0;
            }
        } else if KeyMap::is_back(code) {
            self.wizard.back();
        }
    }

    fn handle_results_key(&mut self, code: KeyCode) {
        if KeyMap::is_down(code) {
            self.results_scroll = self.results_scroll.saturating_add(1);
        } else if KeyMap::is_up(code) {
            self.results_scroll = self.results_scroll.saturating_sub(1);
        } else if KeyMap::is_restart(code) {
            self.wizard.reset();
            self.sync_cursors();
            self.last_action = "Started over".to_string();
        }
    }

    fn choose_focused(&mut self) {
        let cursor = self.field_cursors[self.field.slot()];
        match self.field {
            PreferenceField::Interest => {
                if let Some(area) = InterestArea::ALL.get(cursor) {
                    self.wizard.set_interest(*area);
                }
            }
            PreferenceField::Timeline => {
                if let Some(timeline) = Timeline::ALL.get(cursor) {
                    self.wizard.set_timeline(*timeline);
                }
            }
            PreferenceField::Location => {
                if let Some(location) = Location::ALL.get(cursor) {
                    self.wizard.set_location(*location);
                }
            }
        }
    }

    /// Forward trigger; explains the refusal when the gate is closed
    fn continue_stage(&mut self) {
        if !self.wizard.can_advance() {
            self.last_action = self.blocked_reason();
        }
        self.wizard.advance();
    }

    fn blocked_reason(&self) -> String {
        match self.wizard.stage() {
            Stage::Education => "Select your education level to continue.".to_string(),
            Stage::Skills => "Select at least one skill to continue.".to_string(),
            Stage::Preferences => {
                let missing = gates::missing_preferences(self.wizard.profile());
                if missing.is_empty() {
                    "Select at least one skill before submitting.".to_string()
                } else {
                    format!("Still needed: {}", missing.join(", "))
                }
            }
            Stage::Results => "Press r to start over.".to_string(),
        }
    }

    /// Text of the first status bar line
    pub fn status_line(&self) -> String {
        if !self.last_action.is_empty() {
            return self.last_action.clone();
        }
        let state = self.state();
        match (state.stage, state.can_advance) {
            (Stage::Results, _) => format!(
                "{} career matches for your profile",
                state.recommendations.len()
            ),
            (Stage::Preferences, true) => "Ready - press s for recommendations".to_string(),
            (_, true) => "Ready - press c to continue".to_string(),
            (_, false) => self.blocked_reason(),
        }
    }
}

fn move_cursor(cursor: &mut usize, len: usize, down: bool) {
    if down {
        if *cursor + 1 < len {
            *cursor += 1;
        }
    } else {
        *cursor = cursor.saturating_sub(1);
    }
}

// ============================================================
// SCREEN
// ============================================================

pub struct WizardScreen<'a> {
    app: &'a AppState,
}

impl<'a> WizardScreen<'a> {
    pub fn new(app: &'a AppState) -> Self {
        Self { app }
    }
}

impl<'a> Widget for WizardScreen<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(4),
            ])
            .split(area);

        self.render_progress(chunks[0], buf);
        Paragraph::new(Line::from(Span::styled(
            self.app.wizard.stage().description(),
            Style::default().add_modifier(Modifier::ITALIC),
        )))
        .render(chunks[1], buf);

        match self.app.wizard.stage() {
            Stage::Education => self.render_education(chunks[2], buf),
            Stage::Skills => self.render_skills(chunks[2], buf),
            Stage::Preferences => self.render_preferences(chunks[2], buf),
            Stage::Results => self.render_results(chunks[2], buf),
        }

        self.render_status_bar(chunks[3], buf);
    }
}

impl<'a> WizardScreen<'a> {
    fn render_progress(&self, area: Rect, buf: &mut Buffer) {
        let state = self.app.state();
        Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Career Guidance Assistant "),
            )
            .gauge_style(Style::default().fg(ACCENT).bg(Color::Black))
            .percent(u16::from(state.progress_percent()))
            .label(render::format_progress(state))
            .render(area, buf);
    }

    fn render_education(&self, area: Rect, buf: &mut Buffer) {
        let current = self.app.wizard.profile().education_level;
        let list = choice_list(current).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT))
                .title(" Highest Educational Qualification "),
        );
        let mut list_state = ListState::default().with_selected(Some(self.app.education_cursor));
        StatefulWidget::render(list, area, buf, &mut list_state);
    }

    fn render_skills(&self, area: Rect, buf: &mut Buffer) {
        let skills = &self.app.wizard.profile().skills;
        let items: Vec<ListItem> = Skill::ALL
            .iter()
            .map(|skill| {
                let (mark, style) = if skills.contains(*skill) {
                    ("[x]", Style::default().fg(Color::Green))
                } else {
                    ("[ ]", Style::default())
                };
                ListItem::new(Line::from(vec![
                    Span::styled(mark, style),
                    Span::raw(" "),
                    Span::raw(skill.label()),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(ACCENT))
                    .title(format!(
                        " Select your skills, choose all that apply ({} selected) ",
                        skills.len()
                    )),
            )
            .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");
        let mut list_state = ListState::default().with_selected(Some(self.app.skill_cursor));
        StatefulWidget::render(list, area, buf, &mut list_state);
    }

    fn render_preferences(&self, area: Rect, buf: &mut Buffer) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Percentage(30),
                Constraint::Percentage(30),
            ])
            .split(area);

        let profile = self.app.wizard.profile();
        let fields = [
            (PreferenceField::Interest, choice_list(profile.interest_area)),
            (PreferenceField::Timeline, choice_list(profile.timeline)),
            (PreferenceField::Location, choice_list(profile.location)),
        ];

        for ((field, list), column) in fields.into_iter().zip(columns.iter()) {
            let focused = field == self.app.field;
            let border_style = if focused {
                Style::default().fg(ACCENT)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let list = list.block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(format!(" {} ", field.title())),
            );
            let cursor = self.app.field_cursors[field.slot()];
            let mut list_state = ListState::default().with_selected(focused.then_some(cursor));
            StatefulWidget::render(list, *column, buf, &mut list_state);
        }
    }

    fn render_results(&self, area: Rect, buf: &mut Buffer) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(area);

        let border_style = Style::default().fg(Color::DarkGray);
        Paragraph::new(render::format_profile(self.app.wizard.profile()))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(" Your Profile "),
            )
            .wrap(Wrap { trim: false })
            .render(columns[0], buf);

        Paragraph::new(render::format_recommendations(
            self.app.wizard.recommendations(),
        ))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT))
                .title(" Your Career Matches "),
        )
        .wrap(Wrap { trim: false })
        .scroll((self.app.results_scroll, 0))
        .render(columns[1], buf);
    }

    fn render_status_bar(&self, area: Rect, buf: &mut Buffer) {
        let status_style = if self.app.state().can_advance {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Yellow)
        };

        let mut keys = Vec::new();
        for (key, action) in KeyMap::help_text(self.app.wizard.stage()) {
            keys.push(Span::styled(
                key,
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ));
            keys.push(Span::raw(format!(" {}  ", action)));
        }

        let lines = vec![
            Line::from(Span::styled(self.app.status_line(), status_style)),
            Line::from(keys),
        ];
        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

/// Single-choice list with the stored answer marked `(*)`
fn choice_list<T: Choice>(current: Option<T>) -> List<'static> {
    let items: Vec<ListItem> = T::ALL
        .iter()
        .map(|choice| {
            let marker = if Some(*choice) == current { "(*)" } else { "( )" };
            ListItem::new(format!("{} {}", marker, choice.label()))
        })
        .collect();

    List::new(items)
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ")
}

// ============================================================
// TERMINAL LOOP
// ============================================================

pub fn run_tui(wizard: CareerWizard) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppState::new(wizard);
    let result = event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut AppState) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| {
            let size = f.area();
            f.render_widget(WizardScreen::new(app), size);
        })?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code, key.modifiers);
                }
            }
        }
    }
    log::info!("[ui] Wizard closed on stage {}", app.wizard.stage().number());
    Ok(())
}
