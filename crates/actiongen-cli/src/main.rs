mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "actiongen",
    about = "Generate a closed-set action registry (enum, one type per action, aggregate list) from a descriptor table",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from actiongen.yaml or .git/)
    #[arg(long, global = true, env = "ACTIONGEN_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default actiongen.yaml holding the built-in actions
    Init,

    /// Clear the output directory and regenerate every artifact
    Generate {
        /// Target language: cpp or rust (overrides the config)
        #[arg(long)]
        target: Option<String>,

        /// Output directory relative to the root (overrides the config)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Render and report without touching the filesystem
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the expanded action table
    List,

    /// Validate the action table and config without generating
    Check,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root, cli.json),
        Commands::Generate {
            target,
            out,
            dry_run,
        } => cmd::generate::run(&root, target.as_deref(), out, dry_run, cli.json),
        Commands::List => cmd::list::run(&root, cli.json),
        Commands::Check => cmd::check::run(&root, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
