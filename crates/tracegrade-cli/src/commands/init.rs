//! The `tracegrade init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("tracegrade.toml").exists() {
        println!("tracegrade.toml already exists, skipping.");
    } else {
        std::fs::write("tracegrade.toml", SAMPLE_CONFIG)?;
        println!("Created tracegrade.toml");
    }

    std::fs::create_dir_all("attempt-sets")?;
    let example_path = std::path::Path::new("attempt-sets/example.toml");
    if example_path.exists() {
        println!("attempt-sets/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_BATCH)?;
        println!("Created attempt-sets/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Adjust thresholds in tracegrade.toml");
    println!("  2. Run: tracegrade validate --attempts attempt-sets/example.toml");
    println!("  3. Run: tracegrade grade --attempts attempt-sets/example.toml");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# tracegrade configuration

[curve]
# Points both strokes are resampled to before comparison.
sample_count = 50
# Strokes with fewer points: "interpolate" (upsample) or "preserve".
short_stroke = "interpolate"
# Accept strokes traced in the opposite direction.
allow_reversed = false
# Similarity (0-100) needed to award a point.
pass_threshold = 80

[lexical]
# Closeness a near-miss word must exceed.
similarity_threshold = 0.75
"#;

const EXAMPLE_BATCH: &str = r#"[batch]
id = "example"
name = "Example Attempts"
description = "One attempt of each kind to get started"

[[attempts]]
id = "letter-l"
kind = "trace"
reference = [[0, 0], [0, 50], [0, 100], [30, 100], [60, 100]]
student = [[3, 2], [2, 52], [4, 99], [33, 101], [61, 98]]

[[attempts]]
id = "sunset-spoken"
kind = "word"
spoken = "the sunset"
target = "sun-set"

[[attempts]]
id = "sunset-tiles"
kind = "syllables"
selected = ["sun", "set"]
expected = ["sun", "set"]
target = "sunset"
"#;
