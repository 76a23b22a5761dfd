use crate::output::{print_json, print_table};
use anyhow::Context;
use solcat_core::{config::Config, scanner};
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = Config::load_or_default(root).context("failed to load catalog.yaml")?;
    let report = scanner::scan(root, &config).context("failed to scan providers tree")?;

    if json {
        let solutions: Vec<_> = report
            .records
            .iter()
            .map(|r| {
                serde_json::json!({
                    "provider": r.provider,
                    "category": r.category,
                    "solution": r.slug,
                    "name": r.meta.solution_name,
                    "version": r.meta.version,
                    "status": r.meta.status.to_string(),
                })
            })
            .collect();
        print_json(&serde_json::json!({
            "solution_count": report.solution_count(),
            "provider_count": report.provider_count(),
            "category_count": report.category_count(),
            "solutions": solutions,
            "skipped": report.skipped,
        }))?;
        return Ok(());
    }

    if report.records.is_empty() {
        println!("No solutions found.");
    } else {
        let rows: Vec<Vec<String>> = report
            .records
            .iter()
            .map(|r| {
                vec![
                    r.provider.clone(),
                    r.category.clone(),
                    r.slug.clone(),
                    r.meta.status.to_string(),
                    r.meta.version.clone(),
                    r.meta.solution_name.clone(),
                ]
            })
            .collect();
        print_table(
            &["PROVIDER", "CATEGORY", "SOLUTION", "STATUS", "VERSION", "NAME"],
            rows,
        );
        println!(
            "\n{} solution(s) across {} provider(s)",
            report.solution_count(),
            report.provider_count()
        );
    }

    if !report.skipped.is_empty() {
        println!("\nSkipped {} file(s):", report.skipped.len());
        for s in &report.skipped {
            println!("  {} — {}", s.path.display(), s.reason);
        }
    }

    Ok(())
}
