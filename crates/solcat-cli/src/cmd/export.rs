use crate::output::print_json;
use anyhow::Context;
use clap::Subcommand;
use solcat_core::{config::Config, export, scanner};
use std::path::{Path, PathBuf};

#[derive(Subcommand)]
pub enum ExportSubcommand {
    /// Write exports/solutions.json
    Json {
        /// Output file (default: exports/solutions.json)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Write exports/solutions.csv
    Csv {
        /// Output file (default: exports/solutions.csv)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

pub fn run(root: &Path, subcmd: ExportSubcommand, json: bool) -> anyhow::Result<()> {
    let config = Config::load_or_default(root).context("failed to load catalog.yaml")?;
    let report = scanner::scan(root, &config).context("failed to scan providers tree")?;

    let out = match subcmd {
        ExportSubcommand::Json { output } => {
            let out = output
                .unwrap_or_else(|| root.join(&config.exports_dir).join("solutions.json"));
            export::write_json(&report, &out)
                .with_context(|| format!("failed to write {}", out.display()))?;
            out
        }
        ExportSubcommand::Csv { output } => {
            let out = output
                .unwrap_or_else(|| root.join(&config.exports_dir).join("solutions.csv"));
            export::write_csv(&report, &out)
                .with_context(|| format!("failed to write {}", out.display()))?;
            out
        }
    };

    if json {
        print_json(&serde_json::json!({
            "solution_count": report.solution_count(),
            "written": out,
        }))?;
    } else {
        println!(
            "Exported {} solution(s) to {}",
            report.solution_count(),
            out.display()
        );
    }
    Ok(())
}
