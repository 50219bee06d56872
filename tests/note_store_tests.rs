use chrono::{TimeZone, Utc};
use rusqlite::params;
use tempfile::TempDir;
use yeeks::{NoteStore, SqliteBackend, Year, get};

fn year(y: i32) -> Year {
    Year::new(y).expect("valid year")
}

fn open(dir: &TempDir) -> NoteStore<SqliteBackend> {
    let path = dir.path().join("notes.sqlite");
    NoteStore::new(SqliteBackend::open(&path.to_string_lossy()).expect("open db"))
}

#[test]
fn notes_survive_reopening_the_database() {
    let dir = TempDir::new().unwrap();
    let ts = Utc.with_ymd_and_hms(2025, 1, 3, 9, 30, 0).unwrap();

    {
        let mut store = open(&dir);
        store.load(year(2025));
        store.save_at(year(2025), 1, "x", ts);
    }

    let mut store = open(&dir);
    let notes = store.load(year(2025));
    let note = get(notes, 1).expect("note persisted");
    assert_eq!(note.content, "x");
    assert_eq!(note.last_modified, ts);
}

#[test]
fn switching_years_reloads_original_notes() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);

    store.load(year(2025));
    store.save(year(2025), 1, "a");
    store.save(year(2025), 2, "b");
    let before = store.notes().clone();

    store.load(year(2024));
    assert!(store.notes().is_empty());
    store.save(year(2024), 1, "other year");

    let after = store.load(year(2025)).clone();
    assert_eq!(after, before);
}

#[test]
fn malformed_row_loads_as_empty_and_is_repaired_on_save() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);

    store
        .backend()
        .pool()
        .conn
        .execute(
            "INSERT INTO notes (year, payload, updated_at) VALUES (?1, ?2, ?3)",
            params![2025, "[1, 2, 3]", "2025-01-01T00:00:00Z"],
        )
        .unwrap();

    assert!(store.load(year(2025)).is_empty());

    store.save(year(2025), 7, "fresh start");

    let mut reopened = open(&dir);
    assert_eq!(
        get(reopened.load(year(2025)), 7).map(|n| n.content.as_str()),
        Some("fresh start")
    );
}

#[test]
fn payload_is_keyed_by_week_with_camel_case_fields() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);
    store.load(year(2025));
    store.save(year(2025), 12, "hello");

    let payload: String = store
        .backend()
        .pool()
        .conn
        .query_row("SELECT payload FROM notes WHERE year = 2025", [], |row| {
            row.get(0)
        })
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
    assert_eq!(value["12"]["content"], "hello");
    assert!(value["12"]["lastModified"].is_string());
}
