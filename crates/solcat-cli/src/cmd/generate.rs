use crate::output::print_json;
use anyhow::Context;
use solcat_core::{catalog::MasterCatalog, config::Config, scanner};
use std::path::Path;

pub fn run(root: &Path, output: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let config = Config::load_or_default(root).context("failed to load catalog.yaml")?;
    let report = scanner::scan(root, &config).context("failed to scan providers tree")?;

    let catalog = MasterCatalog::build(&report);
    let out_root = output.unwrap_or(root);
    let written = catalog
        .write_all(out_root, &config)
        .context("failed to write catalogs")?;

    if json {
        print_json(&serde_json::json!({
            "solution_count": catalog.solution_count,
            "provider_count": catalog.provider_count,
            "category_count": catalog.category_count,
            "written": written,
            "skipped": report.skipped,
        }))?;
        return Ok(());
    }

    println!(
        "Generated catalogs for {} solution(s), {} provider(s), {} categories:",
        catalog.solution_count, catalog.provider_count, catalog.category_count
    );
    for path in &written {
        println!("  wrote: {}", path.display());
    }
    if !report.skipped.is_empty() {
        println!("\nSkipped {} malformed file(s); run 'solcat scan' for details.", report.skipped.len());
    }

    Ok(())
}
