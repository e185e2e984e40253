//! The `tracegrade grade` command.

use std::path::PathBuf;

use anyhow::Result;

use tracegrade_core::config::load_config_from;
use tracegrade_core::parser;
use tracegrade_core::report::GradeReport;
use tracegrade_core::Evaluator;

pub fn execute(
    attempts_path: PathBuf,
    format: String,
    output: Option<PathBuf>,
    fail_below: Option<u32>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    anyhow::ensure!(
        matches!(format.as_str(), "table" | "json" | "markdown" | "md"),
        "unknown format '{format}', expected table, json or markdown"
    );

    let config = load_config_from(config_path.as_deref())?;
    let evaluator = Evaluator::new(config)?;
    tracing::debug!(config = ?evaluator.config(), "evaluator ready");

    let batches = parser::load_attempts(&attempts_path)?;
    anyhow::ensure!(
        !batches.is_empty(),
        "no attempt batches found in {}",
        attempts_path.display()
    );

    let reports: Vec<GradeReport> = batches.iter().map(|b| evaluator.grade_batch(b)).collect();

    match format.as_str() {
        "json" => {
            if let [report] = reports.as_slice() {
                println!("{}", serde_json::to_string_pretty(report)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            }
        }
        "markdown" | "md" => {
            for report in &reports {
                println!("{}", report.to_markdown());
            }
        }
        _ => {
            for report in &reports {
                print_table(report);
            }
        }
    }

    if let Some(output) = &output {
        save_reports(&reports, output)?;
    }

    if let Some(min_points) = fail_below {
        let short: Vec<&GradeReport> = reports
            .iter()
            .filter(|r| r.summary.points < min_points)
            .collect();
        if !short.is_empty() {
            for r in &short {
                eprintln!(
                    "Batch '{}' scored {} point(s), below {min_points}",
                    r.batch.id, r.summary.points
                );
            }
            std::process::exit(1);
        }
    }

    Ok(())
}

fn save_reports(reports: &[GradeReport], output: &std::path::Path) -> Result<()> {
    if let [report] = reports {
        if output.extension().is_some_and(|ext| ext == "json") {
            report.save_json(output)?;
            eprintln!("Report saved to: {}", output.display());
            return Ok(());
        }
    }

    let timestamp = file_stamp(reports);
    for report in reports {
        let path = output.join(format!("{}-{timestamp}.json", report.batch.id));
        report.save_json(&path)?;
        eprintln!("Report saved to: {}", path.display());
    }
    Ok(())
}

/// File stamp taken from the first report's creation time.
fn file_stamp(reports: &[GradeReport]) -> String {
    reports
        .first()
        .map(|r| r.created_at.format("%Y-%m-%dT%H%M%S").to_string())
        .unwrap_or_default()
}

fn print_table(report: &GradeReport) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Attempt", "Kind", "Score", "Feedback", "Points"]);

    for o in &report.outcomes {
        let score = match (o.similarity, o.edit_distance) {
            (Some(s), _) => format!("{s}/100"),
            (None, Some(d)) => format!("{d} edit(s)"),
            (None, None) => "-".to_string(),
        };
        let feedback = match o.tier {
            Some(tier) => tier.message().to_string(),
            None if o.passed => "Correct!".to_string(),
            None => "Try again!".to_string(),
        };
        table.add_row(vec![
            Cell::new(&o.attempt_id),
            Cell::new(o.kind),
            Cell::new(score),
            Cell::new(feedback),
            Cell::new(o.points),
        ]);
    }

    println!("Batch: {} ({} attempts)", report.batch.name, report.batch.attempt_count);
    println!("{table}");

    let summary = &report.summary;
    let mut line = format!(
        "Points: {}  Accepted: {}/{}",
        summary.points, summary.passed, summary.attempts
    );
    if let Some(mean) = summary.mean_similarity {
        line.push_str(&format!("  Mean trace similarity: {mean:.1}"));
    }
    println!("{line}\n");
}
