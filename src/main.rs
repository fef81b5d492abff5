//! Factory Prof CLI
//!
//! Reports where a test suite spends its time building factories and
//! writes a flamegraph document of the factory stacks.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use factory_prof::commands::{
    display_schema, display_version, execute_report, validate_args, validate_profile_file,
    ReportArgs,
};

/// Factory Prof - test-factory overhead reports
#[derive(Parser, Debug)]
#[command(name = "factory-prof")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Summarize a snapshot and write the flamegraph document
    Report {
        /// Snapshot JSON written by the test-run instrumentation
        #[arg(short, long)]
        input: PathBuf,

        /// TOML configuration file
        #[arg(short, long, env = "FACTORY_PROF_CONFIG")]
        config: Option<PathBuf>,

        /// Output path for the flamegraph document
        #[arg(short, long, env = "FACTORY_PROF_OUTPUT")]
        output: Option<PathBuf>,

        /// Output path for an SVG flamegraph (optional)
        #[arg(long)]
        svg: Option<PathBuf>,

        /// Number of factories in the table and hotspot report
        #[arg(long)]
        top_factories: Option<usize>,

        /// Number of locations listed per factory
        #[arg(long)]
        top_locations: Option<usize>,

        /// Viewer program opened on the document
        #[arg(long, env = "FACTORY_PROF_VIEWER")]
        viewer: Option<String>,

        /// Do not launch the viewer
        #[arg(long)]
        no_launch: bool,
    },

    /// Validate a flamegraph document
    Validate {
        /// Path to the document JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Report {
            input,
            config,
            output,
            svg,
            top_factories,
            top_locations,
            viewer,
            no_launch,
        } => {
            let args = ReportArgs {
                input,
                config,
                output,
                svg,
                top_factories,
                top_locations,
                viewer,
                no_launch,
            };

            // Validate args first
            validate_args(&args)?;

            execute_report(args)?;
        }

        Commands::Validate { file } => {
            validate_profile_file(&file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
