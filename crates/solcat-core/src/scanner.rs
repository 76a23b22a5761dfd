use crate::config::Config;
use crate::error::{CatalogError, Result};
use crate::paths;
use crate::solution::SolutionMeta;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// One discovered solution, keyed by its position in the providers tree.
#[derive(Debug, Clone)]
pub struct SolutionRecord {
    pub provider: String,
    pub category: String,
    pub slug: String,
    pub path: PathBuf,
    pub meta: SolutionMeta,
}

/// A metadata file that could not be loaded. Skips never abort a scan;
/// they are reported so authors can fix the offending file.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct ScanReport {
    pub records: Vec<SolutionRecord>,
    pub skipped: Vec<SkippedFile>,
}

impl ScanReport {
    pub fn solution_count(&self) -> usize {
        self.records.len()
    }

    pub fn provider_count(&self) -> usize {
        self.records
            .iter()
            .map(|r| r.provider.as_str())
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Distinct category names across all providers.
    pub fn category_count(&self) -> usize {
        self.records
            .iter()
            .map(|r| r.category.as_str())
            .collect::<BTreeSet<_>>()
            .len()
    }
}

// ---------------------------------------------------------------------------
// Scan
// ---------------------------------------------------------------------------

/// Walk `providers/<provider>/<category>/<solution>/metadata.yml` into a
/// report. Malformed files are logged and recorded as skips; a missing
/// providers directory means this is not a catalog repository.
pub fn scan(root: &Path, config: &Config) -> Result<ScanReport> {
    let providers_root = root.join(&config.providers_dir);
    if !providers_root.is_dir() {
        return Err(CatalogError::NotInitialized);
    }

    let mut report = ScanReport::default();

    for provider in sorted_subdirs(&providers_root)? {
        let provider_slug = dir_name(&provider);
        if !paths::is_valid_slug(&provider_slug) {
            skip(&mut report, &provider, "invalid provider slug");
            continue;
        }

        for category in sorted_subdirs(&provider)? {
            let category_slug = dir_name(&category);
            if !paths::is_valid_slug(&category_slug) {
                skip(&mut report, &category, "invalid category slug");
                continue;
            }

            for solution in sorted_subdirs(&category)? {
                let slug = dir_name(&solution);
                if !paths::is_valid_slug(&slug) {
                    skip(&mut report, &solution, "invalid solution slug");
                    continue;
                }

                let metadata = solution.join(paths::METADATA_FILE);
                if !metadata.exists() {
                    skip(&mut report, &solution, "missing metadata.yml");
                    continue;
                }

                match SolutionMeta::load(&metadata) {
                    Ok(meta) => report.records.push(SolutionRecord {
                        provider: provider_slug.clone(),
                        category: category_slug.clone(),
                        slug,
                        path: metadata,
                        meta,
                    }),
                    Err(e) => skip(&mut report, &metadata, &e.to_string()),
                }
            }
        }
    }

    report
        .records
        .sort_by(|a, b| (&a.provider, &a.category, &a.slug).cmp(&(&b.provider, &b.category, &b.slug)));
    Ok(report)
}

fn sorted_subdirs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut subdirs = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            subdirs.push(entry.path());
        }
    }
    subdirs.sort();
    Ok(subdirs)
}

fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn skip(report: &mut ScanReport, path: &Path, reason: &str) {
    tracing::warn!("skipping {}: {}", path.display(), reason);
    report.skipped.push(SkippedFile {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    });
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
