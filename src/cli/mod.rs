//! CLI Module
//!
//! Headless command-line driver for scripted paint sessions.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Layerpaint - layered paint canvas
#[derive(Parser, Debug)]
#[command(name = "layerpaint")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the available layers
    #[command(name = "layers")]
    Layers,

    /// Run a scripted session of paint operations
    ///
    /// Operations: "paint X Y LAYER", "erase X Y LAYER", "special",
    /// "undo", "redo", "brush+", "brush-"
    #[command(name = "run")]
    Run {
        /// Draw style: SET, ADD or SEQUENCE (overrides the config file)
        #[arg(short, long)]
        style: Option<String>,

        /// Grid width (overrides the config file)
        #[arg(long)]
        width: Option<usize>,

        /// Grid height (overrides the config file)
        #[arg(long)]
        height: Option<usize>,

        /// JSON config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Cell to report the colour of, as X,Y
        #[arg(short, long)]
        probe: Option<String>,

        /// Animation timestamp the probe is resolved at
        #[arg(short, long, default_value_t = 0)]
        timestamp: u64,

        /// Replay the session on a blank grid afterwards
        #[arg(short, long)]
        replay: bool,

        /// Operations to run, in order
        ops: Vec<String>,
    },
}
