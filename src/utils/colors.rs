//! Terminal styles for week cells.

use crate::models::WeekStatus;
use ansi_term::{Colour, Style};

/// Past weeks are filled dark, the current week light, future weeks plain.
pub fn style_for_status(status: WeekStatus) -> Style {
    match status {
        WeekStatus::Past => Style::new().on(Colour::Fixed(240)).fg(Colour::White),
        WeekStatus::Current => Style::new().on(Colour::Fixed(252)).fg(Colour::Fixed(240)).bold(),
        WeekStatus::Future => Style::new().fg(Colour::Fixed(244)),
    }
}

/// Weeks carrying a note are outlined in blue.
pub fn note_marker_style() -> Style {
    Colour::Blue.bold()
}

/// Colour used for an operation name in the internal log.
pub fn colour_for_operation(op: &str) -> Colour {
    match op {
        "note_save" => Colour::Green,
        "note_clear" => Colour::Yellow,
        "init" => Colour::RGB(255, 153, 51),
        "migration_applied" => Colour::Purple,
        _ => Colour::White,
    }
}
