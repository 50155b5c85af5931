//! # Rendering Module
//!
//! Turns a rolled [`Schedule`] into output: the chat announcement, or JSON
//! for bots that post it themselves.

pub mod announcement;

pub use announcement::*;

use crate::{RollerResult, Schedule};

/// Output formats the schedule can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Announcement text ready to paste into chat
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Renders a schedule in the requested format.
pub fn render(schedule: &Schedule, format: OutputFormat) -> RollerResult<String> {
    match format {
        OutputFormat::Text => Ok(render_announcement(schedule)),
        OutputFormat::Json => render_json(schedule),
    }
}

/// Renders a schedule as pretty-printed JSON, newline terminated.
pub fn render_json(schedule: &Schedule) -> RollerResult<String> {
    let mut json = serde_json::to_string_pretty(schedule)?;
    json.push('\n');
    Ok(json)
}
