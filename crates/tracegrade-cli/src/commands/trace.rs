//! The `tracegrade trace` command.

use std::path::PathBuf;

use anyhow::Result;

use tracegrade_core::config::load_config_from;
use tracegrade_core::point::parse_points;
use tracegrade_core::compare_with;

pub fn execute(reference: String, student: String, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let reference =
        parse_points(&reference).map_err(|e| anyhow::anyhow!("invalid --reference: {e}"))?;
    let student = parse_points(&student).map_err(|e| anyhow::anyhow!("invalid --student: {e}"))?;

    let similarity = compare_with(&reference, &student, &config.curve);
    let tier = similarity.tier();
    let point = similarity.earns_point(config.curve.pass_threshold);

    println!("Similarity: {similarity}/100");
    println!("Feedback: {}", tier.message());
    println!("Point awarded: {}", if point { "yes" } else { "no" });

    Ok(())
}
