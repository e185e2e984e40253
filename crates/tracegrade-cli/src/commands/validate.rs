//! The `tracegrade validate` command.

use std::path::PathBuf;

use anyhow::Result;

use tracegrade_core::parser;

pub fn execute(attempts_path: PathBuf) -> Result<()> {
    let batches = parser::load_attempts(&attempts_path)?;

    let mut total_warnings = 0;

    for batch in &batches {
        println!("Batch: {} ({} attempts)", batch.name, batch.attempts.len());

        let warnings = parser::validate_attempt_batch(batch);
        for w in &warnings {
            let prefix = w
                .attempt_id
                .as_ref()
                .map(|id| format!("  [{id}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All attempt batches valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
