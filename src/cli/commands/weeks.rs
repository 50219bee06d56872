use crate::cli::commands::Session;
use crate::core::notes::get;
use crate::core::partition::classify;
use crate::errors::AppResult;
use crate::utils::colors::style_for_status;

/// Handle the `weeks` command: one line per week.
pub fn list(session: &Session) -> AppResult<()> {
    let store = session.open_store()?;

    println!("Weeks of {} (start on {}):", session.year, session.week_start);
    for w in session.weeks() {
        let status = classify(&w, session.today);
        let marker = match get(store.notes(), w.week_number) {
            Some(n) if n.has_content() => "📝",
            _ => "",
        };
        println!(
            "{:>2}  {:<11}  {}  {}",
            w.week_number,
            w.label(),
            style_for_status(status).paint(format!("{:<7}", status.as_str())),
            marker
        );
    }

    Ok(())
}

/// Handle the `week <N>` command: details and note of a single week.
pub fn show(session: &Session, week_number: u32) -> AppResult<()> {
    let week = session.week(week_number)?;
    let store = session.open_store()?;
    let status = classify(&week, session.today);

    println!("Week {} of {}", week.week_number, session.year);
    println!("Range:  {} → {}", week.display_start, week.display_end);
    if week.is_partial() {
        println!(
            "Full:   {} → {} ({} of 7 days in {})",
            week.raw_start,
            week.raw_end,
            week.len_days(),
            session.year
        );
    }
    println!("Status: {}", status);

    match get(store.notes(), week_number) {
        Some(note) => {
            println!("Note ({}):", note.last_modified.to_rfc3339());
            if note.has_content() {
                println!("{}", note.content);
            } else {
                println!("(empty)");
            }
        }
        None => println!("No note."),
    }

    Ok(())
}
