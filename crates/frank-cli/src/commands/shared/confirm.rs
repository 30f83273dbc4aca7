use std::io::{BufRead, Write};

use frank_core::enums::Table;
use frank_core::responses::DeleteResponse;

use crate::ui;

/// Ask before deleting unless `--yes` was given.
///
/// Without a terminal to answer on, the delete is refused rather than
/// assumed.
pub fn confirm_delete(table: Table, id: &str, yes: bool) -> anyhow::Result<bool> {
    if yes {
        return Ok(true);
    }
    if !ui::prefs().interactive {
        anyhow::bail!("refusing to delete {table} row {id} without --yes (no terminal to confirm)");
    }

    let mut stderr = std::io::stderr().lock();
    write!(stderr, "Delete {table} row {id}? [y/N] ")?;
    stderr.flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

/// The response printed when the prompt is declined.
#[must_use]
pub fn declined(table: Table, id: &str) -> DeleteResponse {
    DeleteResponse {
        table,
        id: id.to_string(),
        deleted: false,
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
