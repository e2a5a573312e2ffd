//! Line-driven wizard session, used by `wizard --plain` and when stdin is
//! not a terminal.
//!
//! Reads one command per line from any `BufRead` and writes prompts to any
//! `Write`, so sessions can be scripted in tests. End of input quits.

use crate::render;
use anyhow::Result;
use career_core::{
    gates, CareerWizard, Choice, EducationLevel, InterestArea, Location, Skill, Stage, Timeline,
};
use std::io::{BufRead, Write};

/// Outcome of a sub-prompt
enum Answer<T> {
    Picked(T),
    Cancelled,
    Quit,
}

fn read_command<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Accept a 1-based index, a slug or a label
pub fn pick<T: Choice>(text: &str) -> Option<T> {
    if let Ok(n) = text.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| T::ALL.get(i)).copied();
    }
    career_core::parse_choice(text).ok()
}

fn print_choices<T: Choice, W: Write>(out: &mut W, current: Option<T>) -> Result<()> {
    for (i, choice) in T::ALL.iter().enumerate() {
        let marker = if Some(*choice) == current { "*" } else { " " };
        writeln!(out, " {}{:>2}) {}", marker, i + 1, choice.label())?;
    }
    Ok(())
}

fn choose<T: Choice, R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
    current: Option<T>,
) -> Result<Answer<T>> {
    loop {
        writeln!(out, "{}", prompt)?;
        print_choices(out, current)?;
        writeln!(out, "Enter a number (empty to cancel, q to quit):")?;
        out.flush()?;

        let Some(cmd) = read_command(input)? else {
            return Ok(Answer::Quit);
        };
        match cmd.as_str() {
            "" => return Ok(Answer::Cancelled),
            "q" => return Ok(Answer::Quit),
            text => match pick::<T>(text) {
                Some(choice) => return Ok(Answer::Picked(choice)),
                None => writeln!(out, "Please choose 1-{}.", T::ALL.len())?,
            },
        }
    }
}

/// Run until the user quits or input ends
pub fn run_interactive<R: BufRead, W: Write>(
    wizard: &mut CareerWizard,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "Career Guidance Assistant")?;
    writeln!(
        out,
        "Personalized career recommendations based on the Indian job market and your profile"
    )?;

    loop {
        let state = wizard.state();
        writeln!(out)?;
        writeln!(out, "{}", render::format_progress(state))?;
        writeln!(out, "{}", state.stage.description())?;

        let keep_going = match wizard.stage() {
            Stage::Education => education_stage(wizard, input, out)?,
            Stage::Skills => skills_stage(wizard, input, out)?,
            Stage::Preferences => preferences_stage(wizard, input, out)?,
            Stage::Results => results_stage(wizard, input, out)?,
        };
        if !keep_going {
            writeln!(out, "Goodbye.")?;
            return Ok(());
        }
    }
}

fn education_stage<R: BufRead, W: Write>(
    wizard: &mut CareerWizard,
    input: &mut R,
    out: &mut W,
) -> Result<bool> {
    let current = wizard.profile().education_level;
    match choose::<EducationLevel, _, _>(input, out, "Highest Educational Qualification", current)? {
        Answer::Picked(level) => {
            wizard.set_education(level);
            wizard.advance();
        }
        Answer::Cancelled => {
            if !wizard.can_advance() {
                writeln!(out, "Select your education level to continue.")?;
            }
            wizard.advance();
        }
        Answer::Quit => return Ok(false),
    }
    Ok(true)
}

fn skills_stage<R: BufRead, W: Write>(
    wizard: &mut CareerWizard,
    input: &mut R,
    out: &mut W,
) -> Result<bool> {
    writeln!(out, "Select your skills (choose all that apply)")?;
    for (i, skill) in Skill::ALL.iter().enumerate() {
        let mark = if wizard.profile().has_skill(*skill) { "x" } else { " " };
        writeln!(out, " [{}] {:>2}) {}", mark, i + 1, skill.label())?;
    }
    writeln!(out, "Enter a number to toggle, c to continue, b to go back, q to quit:")?;
    out.flush()?;

    let Some(cmd) = read_command(input)? else {
        return Ok(false);
    };
    match cmd.as_str() {
        "q" => return Ok(false),
        "b" => {
            wizard.back();
        }
        "c" | "" => {
            if !gates::skills_selected(wizard.profile()) {
                writeln!(out, "Select at least one skill to continue.")?;
            }
            wizard.advance();
        }
        text => match pick::<Skill>(text) {
            Some(skill) => {
                wizard.toggle_skill(skill);
            }
            None => writeln!(out, "Unknown skill '{}'.", text)?,
        },
    }
    Ok(true)
}

fn preferences_stage<R: BufRead, W: Write>(
    wizard: &mut CareerWizard,
    input: &mut R,
    out: &mut W,
) -> Result<bool> {
    let profile = wizard.profile();
    writeln!(out, " 1) Career Interest Area:   {}", label_or_unset(profile.interest_area))?;
    writeln!(out, " 2) Job Search Timeline:    {}", label_or_unset(profile.timeline))?;
    writeln!(out, " 3) Preferred Work Location: {}", label_or_unset(profile.location))?;
    writeln!(out, "Enter 1-3 to edit, s to get recommendations, b to go back, q to quit:")?;
    out.flush()?;

    let Some(cmd) = read_command(input)? else {
        return Ok(false);
    };
    let answered = match cmd.as_str() {
        "q" => return Ok(false),
        "b" => {
            wizard.back();
            true
        }
        "s" | "" => {
            let missing = gates::missing_preferences(wizard.profile());
            if !missing.is_empty() {
                writeln!(out, "Still needed: {}", missing.join(", "))?;
            } else if !wizard.can_advance() {
                writeln!(out, "Select at least one skill before submitting.")?;
            }
            wizard.submit();
            true
        }
        "1" => {
            let current = wizard.profile().interest_area;
            match choose::<InterestArea, _, _>(input, out, "Career Interest Area", current)? {
                Answer::Picked(area) => {
                    wizard.set_interest(area);
                    true
                }
                Answer::Cancelled => true,
                Answer::Quit => false,
            }
        }
        "2" => {
            let current = wizard.profile().timeline;
            match choose::<Timeline, _, _>(input, out, "Job Search Timeline", current)? {
                Answer::Picked(timeline) => {
                    wizard.set_timeline(timeline);
                    true
                }
                Answer::Cancelled => true,
                Answer::Quit => false,
            }
        }
        "3" => {
            let current = wizard.profile().location;
            match choose::<Location, _, _>(input, out, "Preferred Work Location", current)? {
                Answer::Picked(location) => {
                    wizard.set_location(location);
                    true
                }
                Answer::Cancelled => true,
                Answer::Quit => false,
            }
        }
        other => {
            writeln!(out, "Unknown option '{}'.", other)?;
            true
        }
    };
    Ok(answered)
}

fn results_stage<R: BufRead, W: Write>(
    wizard: &mut CareerWizard,
    input: &mut R,
    out: &mut W,
) -> Result<bool> {
    writeln!(out)?;
    write!(out, "{}", render::format_recommendations(wizard.recommendations()))?;
    writeln!(out)?;
    writeln!(out, "Enter r to start over, q to quit:")?;
    out.flush()?;

    loop {
        let Some(cmd) = read_command(input)? else {
            return Ok(false);
        };
        match cmd.as_str() {
            "r" => {
                wizard.reset();
                return Ok(true);
            }
            "q" => return Ok(false),
            _ => writeln!(out, "Enter r to start over, q to quit:")?,
        }
    }
}

fn label_or_unset<T: Choice>(value: Option<T>) -> &'static str {
    value.map(|v| v.label()).unwrap_or("(not set)")
}
