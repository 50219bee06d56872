use crate::cli::commands::Session;
use crate::core::grid::{WeekCell, YearGrid};
use crate::errors::AppResult;
use crate::models::WeekStatus;
use crate::utils::colors::{note_marker_style, style_for_status};
use ansi_term::Style;

/// Handle the `show` command: print the year as rows of seven weeks.
pub fn handle(session: &Session) -> AppResult<()> {
    let store = session.open_store()?;
    let grid = YearGrid::build(session.year, session.week_start, session.today, store.notes());

    println!("{} {}", Style::new().bold().paint("Yeeks"), session.year);
    println!("Your year in weeks (weeks start on {})\n", session.week_start);

    for row in grid.rows() {
        let line: Vec<String> = row.iter().map(render_cell).collect();
        println!("{}", line.join(" "));
    }

    println!();
    match grid.current() {
        Some(cell) => println!(
            "Current week: {} ({})",
            cell.interval.week_number,
            cell.interval.label()
        ),
        None => println!("{} is not the current year.", session.year),
    }
    println!(
        "Past: {} | Current: {} | Future: {} | Notes: {}",
        grid.count(WeekStatus::Past),
        grid.count(WeekStatus::Current),
        grid.count(WeekStatus::Future),
        grid.cells.iter().filter(|c| c.has_note).count()
    );

    Ok(())
}

fn render_cell(cell: &WeekCell) -> String {
    let body = style_for_status(cell.status).paint(format!(" {:>2} ", cell.interval.week_number));
    if cell.has_note {
        format!("{}{}{}", note_marker_style().paint("["), body, note_marker_style().paint("]"))
    } else {
        format!(" {} ", body)
    }
}
