mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{
    catalog::CatalogSubcommand, export::ExportSubcommand, provider::ProviderSubcommand,
    solution::SolutionSubcommand,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "solcat",
    about = "Solution catalog toolchain — scan, aggregate, validate, and export metadata",
    version,
    propagate_version = true
)]
struct Cli {
    /// Catalog root (default: auto-detect from catalog.yaml, providers/, or .git/)
    #[arg(long, global = true, env = "SOLCAT_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a catalog repository in the current directory
    Init,

    /// Walk the providers tree and list discovered solutions
    Scan,

    /// Generate the master, per-provider, and per-category catalogs
    Generate {
        /// Write generated catalogs under this directory instead of the root
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Count solutions by provider, category, status, complexity, and tag
    Stats,

    /// Export the scanned aggregate to JSON or CSV
    Export {
        #[command(subcommand)]
        subcommand: ExportSubcommand,
    },

    /// Validate every metadata file against the JSON Schema
    Validate {
        /// Schema file (default: schema/metadata.schema.json)
        #[arg(long)]
        schema: Option<PathBuf>,
    },

    /// Author and inspect individual solutions
    Solution {
        #[command(subcommand)]
        subcommand: SolutionSubcommand,
    },

    /// Inspect providers
    Provider {
        #[command(subcommand)]
        subcommand: ProviderSubcommand,
    },

    /// Inspect generated catalogs
    Catalog {
        #[command(subcommand)]
        subcommand: CatalogSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let root_path = cli.root.as_deref();
    let root = root::resolve_root(root_path);

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root),
        Commands::Scan => cmd::scan::run(&root, cli.json),
        Commands::Generate { output } => cmd::generate::run(&root, output.as_deref(), cli.json),
        Commands::Stats => cmd::stats::run(&root, cli.json),
        Commands::Export { subcommand } => cmd::export::run(&root, subcommand, cli.json),
        Commands::Validate { schema } => cmd::validate::run(&root, schema.as_deref(), cli.json),
        Commands::Solution { subcommand } => cmd::solution::run(&root, subcommand, cli.json),
        Commands::Provider { subcommand } => cmd::provider::run(&root, subcommand, cli.json),
        Commands::Catalog { subcommand } => cmd::catalog::run(&root, subcommand, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
