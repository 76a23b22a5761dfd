use crate::output::{print_json, print_table};
use anyhow::Context;
use solcat_core::{config::Config, scanner, stats::CatalogStats};
use std::collections::BTreeMap;
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = Config::load_or_default(root).context("failed to load catalog.yaml")?;
    let report = scanner::scan(root, &config).context("failed to scan providers tree")?;
    let stats = CatalogStats::from_report(&report);

    if json {
        print_json(&stats)?;
        return Ok(());
    }

    println!(
        "{} solution(s), {} provider(s), {} categories\n",
        stats.solution_count, stats.provider_count, stats.category_count
    );

    section("By provider", &stats.by_provider);
    section("By category", &stats.by_category);
    section("By status", &stats.by_status);
    section("By complexity", &stats.by_complexity);
    section("By tag", &stats.by_tag);

    Ok(())
}

fn section(title: &str, counts: &BTreeMap<String, usize>) {
    if counts.is_empty() {
        return;
    }
    println!("{title}:");
    let rows: Vec<Vec<String>> = counts
        .iter()
        .map(|(k, v)| vec![k.clone(), v.to_string()])
        .collect();
    print_table(&["KEY", "COUNT"], rows);
    println!();
}
