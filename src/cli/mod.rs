// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the toolscout command-line interface.
//!
//! Three subcommands: `search` to run a query the way a UI surface would,
//! `inspect` to list what a catalog file declares, and `distance` to check
//! what the fuzzy tier thinks of two words.

pub mod display;

use clap::{Parser, Subcommand, ValueEnum};
use toolscout::Surface;

#[derive(Parser)]
#[command(
    name = "toolscout",
    about = "Typo-tolerant search over a catalog of utility tools",
    version
)]
pub struct Cli {
    /// Log engine diagnostics to stderr (overrides TOOLSCOUT_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a catalog file and display grouped results
    Search {
        /// Path to catalog JSON file
        catalog: String,

        /// Search query
        query: String,

        /// Which surface's matching strategy to use
        #[arg(short, long, value_enum, default_value_t = SurfaceArg::Overlay)]
        surface: SurfaceArg,

        /// Path to match config JSON (thresholds for the fuzzy tier)
        #[arg(short, long)]
        config: Option<String>,

        /// Print the result as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Show which tier accepted each entry (overlay only)
        #[arg(long)]
        explain: bool,
    },

    /// Inspect a catalog file: categories, counts and ids
    Inspect {
        /// Path to catalog JSON file
        catalog: String,
    },

    /// Edit distance and similarity between two words
    Distance {
        a: String,
        b: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SurfaceArg {
    Overlay,
    Sidebar,
}

impl From<SurfaceArg> for Surface {
    fn from(arg: SurfaceArg) -> Self {
        match arg {
            SurfaceArg::Overlay => Surface::Overlay,
            SurfaceArg::Sidebar => Surface::Sidebar,
        }
    }
}
