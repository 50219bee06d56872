use crate::cli::commands::Session;
use crate::cli::parser::Commands;
use crate::db::initialize::init_db;
use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::colour_for_operation;

const MAX_OP_WIDTH: usize = 40;

pub fn handle(cmd: &Commands, session: &Session) -> AppResult<()> {
    if !matches!(cmd, Commands::Log { print: true }) {
        return Ok(());
    }
    if session.memory {
        println!("No internal log in memory mode.");
        return Ok(());
    }

    let pool = DbPool::new(&session.db_path().to_string_lossy())?;
    init_db(&pool.conn)?;
    let entries = load_log(&pool.conn)?;

    if entries.is_empty() {
        println!("📜 Internal log is empty.");
        return Ok(());
    }

    let op_w = entries
        .iter()
        .map(|e| op_target(&e.operation, &e.target).chars().count())
        .max()
        .unwrap_or(10)
        .min(MAX_OP_WIDTH);
    let id_w = entries
        .iter()
        .map(|e| e.id.to_string().len())
        .max()
        .unwrap_or(1);
    let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

    println!("📜 Internal log:\n");

    for e in &entries {
        let label = op_target(&e.operation, &e.target);
        let visible: String = if label.chars().count() > MAX_OP_WIDTH {
            let mut s: String = label.chars().take(MAX_OP_WIDTH - 3).collect();
            s.push_str("...");
            s
        } else {
            label
        };
        let padding = " ".repeat(op_w.saturating_sub(visible.chars().count()));

        // only the operation word is coloured
        let coloured = match visible.split_once(' ') {
            Some((op, rest)) => format!("{} {}", colour_for_operation(&e.operation).paint(op), rest),
            None => colour_for_operation(&e.operation).paint(visible.as_str()).to_string(),
        };

        println!(
            "{:>id_w$}: {:<date_w$} | {}{} => {}",
            e.id,
            e.date,
            coloured,
            padding,
            e.message,
            id_w = id_w,
            date_w = date_w
        );
    }

    Ok(())
}

fn op_target(operation: &str, target: &str) -> String {
    if target.is_empty() {
        operation.to_string()
    } else {
        format!("{operation} ({target})")
    }
}
