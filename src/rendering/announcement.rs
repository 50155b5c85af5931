//! # Announcement Text
//!
//! Formats a [`Schedule`] as the chat announcement posted to the guild.

use crate::{config, Difficulty, Schedule, Selection};

/// Heading line carrying the event date.
pub fn header_line(schedule: &Schedule) -> String {
    format!(
        "**— Guild Dungeons {} —**",
        schedule.event_date.format("%Y-%m-%d")
    )
}

/// Section label for a tier, singular when it holds one selection.
///
/// # Examples
///
/// ```
/// use dungeon_roller::{tier_label, Difficulty};
///
/// assert_eq!(tier_label(Difficulty::Easy, 1), "Easy dungeon:");
/// assert_eq!(tier_label(Difficulty::Hard, 2), "Hard dungeons:");
/// ```
pub fn tier_label(difficulty: Difficulty, count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{} dungeon{}:", difficulty.label(), plural)
}

/// Renders the full announcement.
///
/// Tiers without selections are left out. Easy and medium sections are
/// followed by a blank line; the hard section closes the message.
pub fn render_announcement(schedule: &Schedule) -> String {
    let mut lines: Vec<String> = vec![
        header_line(schedule),
        config::GATHERING_NOTICE.to_string(),
        String::new(),
    ];

    for difficulty in Difficulty::ALL {
        let selections = schedule.tier(difficulty);
        if selections.is_empty() {
            continue;
        }

        lines.push(tier_label(difficulty, selections.len()));
        lines.extend(selections.iter().map(selection_line));
        if difficulty != Difficulty::Hard {
            lines.push(String::new());
        }
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn selection_line(selection: &Selection) -> String {
    format!("{}{}", config::SELECTION_INDENT, selection)
}
