//! Workspace build tasks.
//!
//! ```text
//! cargo run -p scroll-stage-xtask -- schema --out options.schema.json
//! cargo run -p scroll-stage-xtask -- preset --out preset.toml
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use scroll_stage::options::Options;

#[derive(Parser, Debug)]
#[command(name = "xtask", about = "Build tasks for the scroll-stage workspace")]
struct Cli {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand, Debug)]
enum Task {
    /// Write the JSON schema of the tunable options.
    Schema {
        /// Output file (stdout when omitted).
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Write the default options as a TOML preset.
    Preset {
        /// Output file (stdout when omitted).
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn emit(out: Option<&Path>, content: &str) -> Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("creating {}", parent.display())
                })?;
            }
            std::fs::write(path, content)
                .with_context(|| format!("writing {}", path.display()))
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.task {
        Task::Schema { out } => {
            let schema = serde_json::to_string_pretty(&Options::json_schema())
                .context("serializing options schema")?;
            emit(out.as_deref(), &schema)
        }
        Task::Preset { out } => {
            let preset = Options::default().to_toml_string()?;
            emit(out.as_deref(), &preset)
        }
    }
}
