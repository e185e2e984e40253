//! The `tracegrade syllables` command.

use anyhow::Result;

use tracegrade_core::is_token_sequence_match;

pub fn execute(selected: Vec<String>, expected: Vec<String>, target: String) -> Result<()> {
    anyhow::ensure!(!target.trim().is_empty(), "target word must not be empty");

    let matched = is_token_sequence_match(&selected, &expected, &target);

    println!("Selected: {}", selected.join(" + "));
    println!("Match: {}", if matched { "yes" } else { "no" });

    Ok(())
}
