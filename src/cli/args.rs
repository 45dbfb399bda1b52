use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "uniscan", version, about = "Unity project dataset inventory")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Discover Unity projects under ROOT and write the summary table
    Scan {
        /// Root directory containing the Unity projects
        root: PathBuf,
        /// Rule set file (JSON); overrides uniscan.toml
        #[arg(long, value_name = "FILE")]
        rules: Option<PathBuf>,
        /// Report destination; overrides uniscan.toml
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Count .meta sidecar files in the file total
        #[arg(long)]
        include_meta: bool,
        /// List discovered projects while scanning
        #[arg(long, short)]
        verbose: bool,
    },
    /// Print the major-engine-version distribution of a report
    Versions {
        /// Report CSV produced by `uniscan scan`
        report: PathBuf,
    },
    /// Print descriptive statistics for the numeric report columns
    Stats {
        /// Report CSV produced by `uniscan scan`
        report: PathBuf,
    },
}

/// Arguments for the scan command (used by handlers)
#[derive(Debug, Clone, Default)]
pub struct ScanArgs {
    pub root: PathBuf,
    pub rules: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub include_meta: bool,
    pub verbose: bool,
}
