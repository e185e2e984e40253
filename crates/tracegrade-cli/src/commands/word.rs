//! The `tracegrade word` command.

use std::path::PathBuf;

use anyhow::Result;

use tracegrade_core::config::load_config_from;
use tracegrade_core::{edit_distance, is_word_match_with, normalize_token, word_similarity};

pub fn execute(spoken: String, target: String, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let heard = normalize_token(&spoken);
    let expected = normalize_token(&target);
    let matched = is_word_match_with(&spoken, &target, &config.lexical);

    println!("Heard: '{heard}'  Target: '{expected}'");
    println!(
        "Edit distance: {} (closeness {:.2})",
        edit_distance(&heard, &expected),
        word_similarity(&spoken, &target)
    );
    println!("Match: {}", if matched { "yes" } else { "no" });

    Ok(())
}
