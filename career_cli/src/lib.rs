//! Career Wizard CLI
//!
//! Terminal front end for `career_core`: a ratatui wizard, a plain
//! line-driven session for pipes, a scripted one-shot recommender and a
//! catalog listing.

pub mod commands;
pub mod config;
pub mod interactive;
pub mod keymap;
pub mod render;
pub mod ui;
