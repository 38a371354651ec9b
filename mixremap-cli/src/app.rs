use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// mixremap - mapping-driven source remapping for JVM-style codebases
#[derive(Debug, Parser)]
#[command(name = "mixremap", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Remap a batch of units over the stdin/stdout line protocol.
    Batch {
        /// Path to the mapping file; omit for an identity run.
        #[arg(short, long)]
        mappings: Option<PathBuf>,

        /// Swap the direction of the mapping table after parsing.
        #[arg(long)]
        invert: bool,

        /// Front-end command resolving the staged units to a JSON model.
        #[arg(short, long, value_name = "COMMAND")]
        resolver: String,
    },

    /// Parse a mapping file and report what it contains.
    Check {
        /// Path to the mapping file.
        #[arg(value_name = "FILE")]
        mappings: PathBuf,
    },

    /// Parse a mapping file and re-emit it with the direction swapped.
    Invert {
        /// Path to the mapping file.
        #[arg(value_name = "FILE")]
        mappings: PathBuf,

        /// Write the inverted table here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
