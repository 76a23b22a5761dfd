use crate::output::{print_json, print_table};
use anyhow::Context;
use clap::Subcommand;
use solcat_core::{config::Config, scanner, CatalogError};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Subcommand)]
pub enum ProviderSubcommand {
    /// List providers with solution counts
    List,
    /// Show one provider's categories and solutions
    Show { slug: String },
}

pub fn run(root: &Path, subcmd: ProviderSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ProviderSubcommand::List => list(root, json),
        ProviderSubcommand::Show { slug } => show(root, &slug, json),
    }
}

fn list(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = Config::load_or_default(root).context("failed to load catalog.yaml")?;
    let report = scanner::scan(root, &config).context("failed to scan providers tree")?;

    let mut counts: BTreeMap<&str, (usize, BTreeMap<&str, usize>)> = BTreeMap::new();
    for record in &report.records {
        let entry = counts.entry(record.provider.as_str()).or_default();
        entry.0 += 1;
        *entry.1.entry(record.category.as_str()).or_insert(0) += 1;
    }

    if json {
        let providers: Vec<_> = counts
            .iter()
            .map(|(provider, (total, categories))| {
                serde_json::json!({
                    "provider": provider,
                    "solution_count": total,
                    "categories": categories,
                })
            })
            .collect();
        print_json(&providers)?;
        return Ok(());
    }

    if counts.is_empty() {
        println!("No providers found.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = counts
        .iter()
        .map(|(provider, (total, categories))| {
            vec![
                provider.to_string(),
                total.to_string(),
                categories.len().to_string(),
            ]
        })
        .collect();
    print_table(&["PROVIDER", "SOLUTIONS", "CATEGORIES"], rows);
    Ok(())
}

fn show(root: &Path, slug: &str, json: bool) -> anyhow::Result<()> {
    let config = Config::load_or_default(root).context("failed to load catalog.yaml")?;
    let report = scanner::scan(root, &config).context("failed to scan providers tree")?;

    let records: Vec<_> = report
        .records
        .iter()
        .filter(|r| r.provider == slug)
        .collect();
    if records.is_empty() {
        return Err(CatalogError::ProviderNotFound(slug.to_string()).into());
    }

    if json {
        let solutions: Vec<_> = records
            .iter()
            .map(|r| {
                serde_json::json!({
                    "category": r.category,
                    "solution": r.slug,
                    "name": r.meta.solution_name,
                    "status": r.meta.status.to_string(),
                })
            })
            .collect();
        print_json(&serde_json::json!({
            "provider": slug,
            "solution_count": records.len(),
            "solutions": solutions,
        }))?;
        return Ok(());
    }

    println!("Provider: {slug} — {} solution(s)\n", records.len());
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            vec![
                r.category.clone(),
                r.slug.clone(),
                r.meta.status.to_string(),
                r.meta.solution_name.clone(),
            ]
        })
        .collect();
    print_table(&["CATEGORY", "SOLUTION", "STATUS", "NAME"], rows);
    Ok(())
}
