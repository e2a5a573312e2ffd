//! Career Wizard - terminal front end
//!
//! Provides the interactive wizard, one-shot recommendations and a catalog listing.

use anyhow::Result;
use career_cli::{commands, config::WizardSettings, interactive, render, ui};
use career_core::{EducationLevel, InterestArea, Location, Skill, Timeline};
use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "career-wizard")]
#[command(about = "Career Guidance Assistant - profile wizard and recommendations", long_about = None)]
struct Cli {
    /// Rule catalog YAML (defaults to $CAREER_WIZARD_CATALOG, then the built-in catalog)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Keep only the top N recommendations
    #[arg(long, global = true)]
    limit: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through the wizard interactively
    Wizard {
        /// Refuse submission while no skill is selected
        #[arg(long)]
        require_skills: bool,
        /// Line-driven prompts instead of the full-screen UI (implied when stdin is not a terminal)
        #[arg(long)]
        plain: bool,
    },
    /// Answer every stage from flags and print recommendations
    Recommend {
        /// Education level (slug or label)
        #[arg(short, long)]
        education: EducationLevel,
        /// Skill (repeatable)
        #[arg(short, long = "skill")]
        skills: Vec<Skill>,
        /// Career interest area
        #[arg(short, long)]
        interest: InterestArea,
        /// immediate, short, medium or long
        #[arg(short, long)]
        timeline: Timeline,
        /// Preferred work location
        #[arg(short, long)]
        location: Option<Location>,
        /// Free-form salary expectation
        #[arg(long)]
        salary: Option<String>,
        /// Print the wizard state as JSON
        #[arg(long)]
        json: bool,
    },
    /// List accepted values and rules
    Catalog {
        /// Dump the active rule catalog as YAML
        #[arg(long)]
        yaml: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));

    let cli = Cli::parse();
    let mut settings = WizardSettings {
        catalog_path: cli.catalog,
        max_recommendations: cli.limit,
        require_skills_on_submit: false,
    };

    match cli.command {
        Commands::Wizard {
            require_skills,
            plain,
        } => {
            settings.require_skills_on_submit = require_skills;
            let mut wizard = settings.build_wizard()?;
            let stdin = std::io::stdin();
            if plain || !stdin.is_terminal() {
                let stdout = std::io::stdout();
                interactive::run_interactive(&mut wizard, &mut stdin.lock(), &mut stdout.lock())?;
            } else {
                ui::run_tui(wizard)?;
            }
        }
        Commands::Recommend {
            education,
            skills,
            interest,
            timeline,
            location,
            salary,
            json,
        } => {
            let mut wizard = settings.build_wizard()?;
            let request = commands::RecommendRequest {
                education,
                skills,
                interest,
                timeline,
                location,
                salary_expectation: salary,
            };
            let state = commands::run_recommend(&mut wizard, &request)?;
            if json {
                println!("{}", commands::state_json(state)?);
            } else {
                print!("{}", render::format_profile(&state.profile));
                println!();
                print!("{}", render::format_recommendations(&state.recommendations));
            }
        }
        Commands::Catalog { yaml } => {
            let catalog = settings.load_catalog()?;
            if yaml {
                print!("{}", catalog.to_yaml_string()?);
            } else {
                print!("{}", commands::format_catalog(&catalog));
            }
        }
    }

    Ok(())
}
