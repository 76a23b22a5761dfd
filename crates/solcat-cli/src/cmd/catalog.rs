use crate::output::{print_json, print_table};
use anyhow::Context;
use clap::Subcommand;
use solcat_core::catalog::MasterCatalog;
use std::path::Path;

#[derive(Subcommand)]
pub enum CatalogSubcommand {
    /// Summarize the generated CATALOG.yml
    Show,
}

pub fn run(root: &Path, subcmd: CatalogSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        CatalogSubcommand::Show => show(root, json),
    }
}

fn show(root: &Path, json: bool) -> anyhow::Result<()> {
    let catalog = MasterCatalog::load(root).context("failed to load master catalog")?;

    if json {
        print_json(&catalog)?;
        return Ok(());
    }

    println!(
        "Master catalog generated {}",
        catalog.generated_at.format("%Y-%m-%d %H:%M UTC")
    );
    println!(
        "{} solution(s), {} provider(s), {} categories\n",
        catalog.solution_count, catalog.provider_count, catalog.category_count
    );

    let rows: Vec<Vec<String>> = catalog
        .providers
        .values()
        .map(|p| {
            vec![
                p.provider.clone(),
                p.solution_count.to_string(),
                p.categories.len().to_string(),
            ]
        })
        .collect();
    print_table(&["PROVIDER", "SOLUTIONS", "CATEGORIES"], rows);
    Ok(())
}
