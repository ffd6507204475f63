//! bt-inspect - look at behavior tree snapshots from the command line.
//!
//! - `bt-inspect print <file>` - indented dump from the root
//! - `bt-inspect check <file>` - structural validation
//! - `bt-inspect diff <a> <b>` - structural drift between two snapshots
//! - `bt-inspect find <file> <name>` - show one node by instance name
//! - `bt-inspect convert <in> <out>` - rewrite a snapshot as JSON or YAML
//! - `bt-inspect models` - list known node models

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use bt_inspect::{commands, load_tree, read_snapshot, write_snapshot, InspectConfig, Outcome};
use bt_model::UidGenerator;

#[derive(Parser)]
#[command(name = "bt-inspect")]
#[command(about = "Inspect behavior tree snapshots", version)]
struct Cli {
    /// Project root directory (where .bt/config.yaml lives)
    #[arg(short, long, global = true)]
    project: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the tree depth-first from its root
    Print { file: PathBuf },

    /// Validate tree structure
    Check {
        file: PathBuf,

        /// Fail on ambiguous roots and broken linkage
        #[arg(long)]
        strict: bool,
    },

    /// Compare the structure of two snapshots
    Diff { left: PathBuf, right: PathBuf },

    /// Show a node by instance name
    Find { file: PathBuf, name: String },

    /// Rewrite a snapshot in the format implied by the output extension
    Convert { input: PathBuf, output: PathBuf },

    /// List builtin and project node models
    Models,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let project_root = match cli.project {
        Some(p) => p,
        None => std::env::current_dir().context("Failed to get current directory")?,
    };
    let config = InspectConfig::load_from_project(&project_root)?;
    let uids = UidGenerator::starting_at(config.uid_start);

    let outcome = match cli.command {
        Commands::Print { file } => {
            commands::print_tree(&load_tree(&file, &uids)?, config.indent)
        }
        Commands::Check { file, strict } => {
            commands::check_tree(&load_tree(&file, &uids)?, strict || config.strict)
        }
        Commands::Diff { left, right } => {
            let left = load_tree(&left, &uids)?;
            let right = load_tree(&right, &uids)?;
            commands::diff_trees(&left, &right)
        }
        Commands::Find { file, name } => commands::find_node(&load_tree(&file, &uids)?, &name),
        Commands::Convert { input, output } => convert(&input, &output)?,
        Commands::Models => commands::list_models(&config.registry()),
    };

    print!("{}", outcome.output);
    Ok(if outcome.failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn convert(input: &Path, output: &Path) -> Result<Outcome> {
    let snapshot = read_snapshot(input)?;
    let nodes = snapshot.nodes.len();
    write_snapshot(output, &snapshot)?;
    info!(nodes, "wrote {}", output.display());
    Ok(Outcome {
        output: String::new(),
        failed: false,
    })
}
