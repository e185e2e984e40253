//! tracegrade CLI — grade traced strokes and spoken words from the command line.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "tracegrade",
    version,
    about = "Grade traced strokes and spoken words against reference answers"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grade an attempt batch file or directory
    Grade {
        /// Path to a .toml/.json attempt batch or a directory of them
        #[arg(long)]
        attempts: PathBuf,

        /// Output format: table, json, markdown
        #[arg(long, default_value = "table")]
        format: String,

        /// Also save the JSON report to this file (one batch) or directory
        #[arg(long)]
        output: Option<PathBuf>,

        /// Exit code 1 if any batch scores fewer points than this
        #[arg(long)]
        fail_below: Option<u32>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Score one traced stroke against a reference
    Trace {
        /// Reference stroke as space-separated "x,y" pairs
        #[arg(long, allow_hyphen_values = true)]
        reference: String,

        /// Student stroke as space-separated "x,y" pairs
        #[arg(long, allow_hyphen_values = true)]
        student: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check a spoken or typed word against a target
    Word {
        /// Recognized or typed text
        #[arg(long)]
        spoken: String,

        /// Target word
        #[arg(long)]
        target: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check syllable tiles assembled into a word
    Syllables {
        /// Selected syllables, comma-separated, in order
        #[arg(long, value_delimiter = ',')]
        selected: Vec<String>,

        /// Expected syllables, comma-separated, in order
        #[arg(long, value_delimiter = ',')]
        expected: Vec<String>,

        /// Full target word
        #[arg(long)]
        target: String,
    },

    /// Validate attempt batch files
    Validate {
        /// Path to attempt batch file or directory
        #[arg(long)]
        attempts: PathBuf,
    },

    /// Create starter config and example attempt batch
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("tracegrade=info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Grade {
            attempts,
            format,
            output,
            fail_below,
            config,
        } => commands::grade::execute(attempts, format, output, fail_below, config),
        Commands::Trace {
            reference,
            student,
            config,
        } => commands::trace::execute(reference, student, config),
        Commands::Word {
            spoken,
            target,
            config,
        } => commands::word::execute(spoken, target, config),
        Commands::Syllables {
            selected,
            expected,
            target,
        } => commands::syllables::execute(selected, expected, target),
        Commands::Validate { attempts } => commands::validate::execute(attempts),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
