use crate::cli::commands::Session;
use crate::cli::parser::NoteAction;
use crate::core::editor::NoteEditor;
use crate::core::notes::get;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::io::{self, BufRead};
use std::thread;
use std::time::Instant;

pub fn handle(action: &NoteAction, session: &Session) -> AppResult<()> {
    match action {
        NoteAction::Get { week } => get_note(session, *week),
        NoteAction::Set { week, text } => set_note(session, *week, text, "note_save"),
        NoteAction::Clear { week } => set_note(session, *week, "", "note_clear"),
        NoteAction::Edit { week } => edit_note(session, *week),
        NoteAction::List => list_notes(session),
    }
}

fn get_note(session: &Session, week: u32) -> AppResult<()> {
    session.week(week)?;
    let store = session.open_store()?;

    match get(store.notes(), week) {
        Some(note) => println!("{}", note.content),
        None => info(format!("No note for week {} of {}", week, session.year)),
    }
    Ok(())
}

fn set_note(session: &Session, week: u32, text: &str, operation: &str) -> AppResult<()> {
    let interval = session.week(week)?;
    let mut store = session.open_store()?;

    let note = store.save(session.year, week, text);

    session.audit(
        operation,
        &format!("{}/{}", session.year, week),
        &format!("{} chars", note.content.chars().count()),
    );
    success(format!(
        "Saved note for week {} of {} ({})",
        week,
        session.year,
        interval.label()
    ));
    Ok(())
}

/// Feed stdin lines into a debounced editor. Every line extends the draft;
/// the note is written once input has been quiet for the configured period.
fn edit_note(session: &Session, week: u32) -> AppResult<()> {
    session.week(week)?;
    let store = session.open_store()?;
    let mut editor = NoteEditor::new(store, session.cfg.quiet_period());

    let mut draft = editor
        .open(session.year, week)
        .map(|n| n.content.clone())
        .unwrap_or_default();
    let mut saves = 0;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if !draft.is_empty() {
            draft.push('\n');
        }
        draft.push_str(&line);

        editor.edit(draft.as_str(), Instant::now());
        if editor.tick(Instant::now()).is_some() {
            saves += 1;
        }
    }

    // input closed: let the last edit settle before closing the editor
    if let Some(left) = editor.due_in(Instant::now()) {
        thread::sleep(left);
        if editor.tick(Instant::now()).is_some() {
            saves += 1;
        }
    }
    editor.close();

    if saves > 0 {
        session.audit(
            "note_save",
            &format!("{}/{}", session.year, week),
            &format!("{} chars via edit", draft.chars().count()),
        );
        success(format!("Saved note for week {} of {}", week, session.year));
    } else {
        info(format!("Note for week {} of {} unchanged", week, session.year));
    }
    Ok(())
}

fn list_notes(session: &Session) -> AppResult<()> {
    let store = session.open_store()?;
    let weeks = session.weeks();

    let visible: Vec<_> = store
        .notes()
        .iter()
        .filter(|(_, n)| n.has_content())
        .collect();

    if visible.is_empty() {
        info(format!("No notes for {}", session.year));
        return Ok(());
    }

    for (week, note) in visible {
        let label = weeks
            .get((*week as usize).saturating_sub(1))
            .map(|w| w.label())
            .unwrap_or_default();
        let first_line = note.content.lines().next().unwrap_or_default();
        println!("Week {:>2} ({:<11}) {}", week, label, first_line);
    }
    Ok(())
}
