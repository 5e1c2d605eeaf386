use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "The abfeprep developers",
    version,
    about = "abfeprep CLI - Prepare folder trees and submission scripts for batches of alchemical binding free-energy (ABFE/HREX) simulations.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all console log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to this file in addition to the console output
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        default_value = "setup_abfe.log"
    )]
    pub log_file: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prepare ABFE folders and submission scripts for a batch of ligands.
    Setup(SetupArgs),
}

/// Arguments for the `setup` subcommand.
#[derive(Args, Debug)]
pub struct SetupArgs {
    // --- Core Arguments ---
    /// Base directory containing the ligand folders.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub base_path: PathBuf,

    /// Ligand folder names to prepare.
    #[arg(short, long, required = true, num_args = 1.., value_name = "NAME")]
    pub ligands: Vec<String>,

    /// Path to the submission-script template.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub template_script: PathBuf,

    /// Path to the continuation submission-script template.
    #[arg(short = 'c', long, required = true, value_name = "PATH")]
    pub contd_script: PathBuf,

    // --- Overrides ---
    /// Override the number of replicates to set up per ligand.
    #[arg(short, long, value_name = "INT")]
    pub num_replicates: Option<usize>,

    /// Override the number of nodes requested in the submission scripts.
    #[arg(short = 'a', long, value_name = "INT")]
    pub archer_nodes: Option<u32>,

    /// Override the name of the equilibrated plain-MD folder inside each
    /// ligand directory.
    #[arg(long, value_name = "NAME")]
    pub vanilla_folder: Option<String>,

    /// Path to an optional configuration file in TOML format.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
