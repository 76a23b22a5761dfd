use crate::output::{print_json, print_table};
use anyhow::Context;
use clap::Subcommand;
use solcat_core::{config::Config, scanner, solution::SolutionMeta};
use std::path::Path;

#[derive(Subcommand)]
pub enum SolutionSubcommand {
    /// Author a new solution metadata skeleton
    New {
        provider: String,
        category: String,
        slug: String,
        /// Display name (default: slug with hyphens replaced by spaces)
        #[arg(long)]
        name: Option<String>,
        /// Optional one-liner description
        #[arg(long)]
        description: Option<String>,
    },
    /// List discovered solutions
    List {
        /// Restrict to one provider
        #[arg(long)]
        provider: Option<String>,
        /// Restrict to one category
        #[arg(long)]
        category: Option<String>,
    },
    /// Show one solution's metadata
    Show {
        provider: String,
        category: String,
        slug: String,
    },
}

pub fn run(root: &Path, subcmd: SolutionSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        SolutionSubcommand::New {
            provider,
            category,
            slug,
            name,
            description,
        } => new(root, &provider, &category, &slug, name.as_deref(), description, json),
        SolutionSubcommand::List { provider, category } => {
            list(root, provider.as_deref(), category.as_deref(), json)
        }
        SolutionSubcommand::Show {
            provider,
            category,
            slug,
        } => show(root, &provider, &category, &slug, json),
    }
}

fn new(
    root: &Path,
    provider: &str,
    category: &str,
    slug: &str,
    name: Option<&str>,
    description: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let config = Config::load_or_default(root).context("failed to load catalog.yaml")?;
    let (meta, path) =
        SolutionMeta::create(root, &config, provider, category, slug, name, description)
            .with_context(|| format!("failed to create solution '{provider}/{category}/{slug}'"))?;

    if json {
        print_json(&meta)?;
    } else {
        println!("Created solution: {provider}/{category}/{slug} — {}", meta.solution_name);
        println!("  wrote: {}", path.display());
    }
    Ok(())
}

fn list(
    root: &Path,
    provider: Option<&str>,
    category: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let config = Config::load_or_default(root).context("failed to load catalog.yaml")?;
    let report = scanner::scan(root, &config).context("failed to scan providers tree")?;

    let records: Vec<_> = report
        .records
        .iter()
        .filter(|r| provider.map_or(true, |p| r.provider == p))
        .filter(|r| category.map_or(true, |c| r.category == c))
        .collect();

    if json {
        let summaries: Vec<_> = records
            .iter()
            .map(|r| {
                serde_json::json!({
                    "provider": r.provider,
                    "category": r.category,
                    "solution": r.slug,
                    "name": r.meta.solution_name,
                    "status": r.meta.status.to_string(),
                })
            })
            .collect();
        print_json(&summaries)?;
        return Ok(());
    }

    if records.is_empty() {
        println!("No solutions found.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            vec![
                r.provider.clone(),
                r.category.clone(),
                r.slug.clone(),
                r.meta.status.to_string(),
                r.meta.solution_name.clone(),
            ]
        })
        .collect();
    print_table(&["PROVIDER", "CATEGORY", "SOLUTION", "STATUS", "NAME"], rows);
    Ok(())
}

fn show(root: &Path, provider: &str, category: &str, slug: &str, json: bool) -> anyhow::Result<()> {
    let config = Config::load_or_default(root).context("failed to load catalog.yaml")?;
    let meta = SolutionMeta::load_at(root, &config, provider, category, slug)
        .with_context(|| format!("solution '{provider}/{category}/{slug}' not found"))?;

    if json {
        print_json(&meta)?;
        return Ok(());
    }

    println!("Solution: {provider}/{category}/{slug} — {}", meta.solution_name);
    if let Some(ref desc) = meta.description {
        println!("Desc:       {desc}");
    }
    println!("Version:    {}", meta.version);
    println!("Status:     {}", meta.status);
    if let Some(complexity) = meta.complexity {
        println!("Complexity: {complexity}");
    }
    if !meta.tags.is_empty() {
        println!("Tags:       {}", meta.tags.join(", "));
    }
    if !meta.maintainers.is_empty() {
        println!("Maintainers: {}", meta.maintainers.join(", "));
    }
    Ok(())
}
