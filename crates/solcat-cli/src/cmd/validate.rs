use crate::output::print_json;
use anyhow::{bail, Context};
use solcat_core::{config::Config, schema};
use std::path::Path;

pub fn run(root: &Path, schema_file: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let config = Config::load_or_default(root).context("failed to load catalog.yaml")?;

    for warning in config.validate() {
        tracing::warn!("catalog.yaml: {}", warning.message);
    }

    let report = schema::validate_tree(root, &config, schema_file)
        .context("failed to validate metadata files")?;

    if json {
        print_json(&report)?;
    } else if report.is_clean() {
        println!("Validated {} file(s): all clean.", report.checked);
    } else {
        println!(
            "Validated {} file(s), {} finding(s):",
            report.checked,
            report.findings.len()
        );
        for finding in &report.findings {
            println!("  {} — {}", finding.path.display(), finding.message);
        }
    }

    if !report.is_clean() {
        bail!("{} validation finding(s)", report.findings.len());
    }
    Ok(())
}
