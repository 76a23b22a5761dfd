use crate::config::Config;
use crate::error::{CatalogError, Result};
use crate::io;
use crate::paths;
use crate::scanner::{ScanReport, SolutionRecord};
use crate::types::{Complexity, Status};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// SolutionEntry
// ---------------------------------------------------------------------------

/// Flattened view of one solution as it appears in generated catalogs and
/// exports. Position fields come from the tree, not the metadata file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionEntry {
    pub solution: String,
    pub provider: String,
    pub category: String,
    pub name: String,
    pub version: String,
    pub status: Status,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity: Option<Complexity>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub maintainers: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SolutionEntry {
    pub fn from_record(record: &SolutionRecord) -> Self {
        Self {
            solution: record.slug.clone(),
            provider: record.provider.clone(),
            category: record.category.clone(),
            name: record.meta.solution_name.clone(),
            version: record.meta.version.clone(),
            status: record.meta.status,
            complexity: record.meta.complexity,
            tags: record.meta.tags.clone(),
            maintainers: record.meta.maintainers.clone(),
            description: record.meta.description.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// CategoryCatalog / ProviderCatalog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCatalog {
    pub category: String,
    pub solution_count: usize,
    pub solutions: Vec<SolutionEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderCatalog {
    pub provider: String,
    pub solution_count: usize,
    pub categories: BTreeMap<String, CategoryCatalog>,
}

// ---------------------------------------------------------------------------
// MasterCatalog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MasterCatalog {
    #[serde(default = "default_version")]
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub solution_count: usize,
    pub provider_count: usize,
    pub category_count: usize,
    pub providers: BTreeMap<String, ProviderCatalog>,
}

fn default_version() -> u32 {
    1
}

impl MasterCatalog {
    /// Aggregate a scan into the nested provider → category → solution shape.
    pub fn build(report: &ScanReport) -> Self {
        let mut providers: BTreeMap<String, ProviderCatalog> = BTreeMap::new();

        for record in &report.records {
            let provider = providers
                .entry(record.provider.clone())
                .or_insert_with(|| ProviderCatalog {
                    provider: record.provider.clone(),
                    solution_count: 0,
                    categories: BTreeMap::new(),
                });
            provider.solution_count += 1;

            let category = provider
                .categories
                .entry(record.category.clone())
                .or_insert_with(|| CategoryCatalog {
                    category: record.category.clone(),
                    solution_count: 0,
                    solutions: Vec::new(),
                });
            category.solution_count += 1;
            category.solutions.push(SolutionEntry::from_record(record));
        }

        Self {
            version: 1,
            generated_at: Utc::now(),
            solution_count: report.solution_count(),
            provider_count: report.provider_count(),
            category_count: report.category_count(),
            providers,
        }
    }

    /// Merge every provider's categories into cross-provider category
    /// catalogs, the granularity behind `catalogs/categories/*.yml`.
    pub fn category_rollup(&self) -> BTreeMap<String, CategoryCatalog> {
        let mut rollup: BTreeMap<String, CategoryCatalog> = BTreeMap::new();
        for provider in self.providers.values() {
            for category in provider.categories.values() {
                let merged = rollup
                    .entry(category.category.clone())
                    .or_insert_with(|| CategoryCatalog {
                        category: category.category.clone(),
                        solution_count: 0,
                        solutions: Vec::new(),
                    });
                merged.solution_count += category.solution_count;
                merged.solutions.extend(category.solutions.iter().cloned());
            }
        }
        rollup
    }

    /// Flat list of every entry, in provider/category/solution order.
    pub fn entries(&self) -> Vec<&SolutionEntry> {
        self.providers
            .values()
            .flat_map(|p| p.categories.values())
            .flat_map(|c| c.solutions.iter())
            .collect()
    }

    // ---------------------------------------------------------------------------
    // Persistence
    // ---------------------------------------------------------------------------

    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::master_catalog_path(root);
        if !path.exists() {
            return Err(CatalogError::CatalogNotFound(path.display().to_string()));
        }
        let data = std::fs::read_to_string(&path)?;
        let catalog: MasterCatalog = serde_yaml::from_str(&data)?;
        Ok(catalog)
    }

    /// Write `CATALOG.yml` plus the per-provider and per-category documents
    /// under the configured catalogs directory. Returns the written paths.
    pub fn write_all(&self, out_root: &Path, config: &Config) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();

        let master = paths::master_catalog_path(out_root);
        io::atomic_write(&master, serde_yaml::to_string(self)?.as_bytes())?;
        written.push(master);

        let catalogs_root = out_root.join(&config.catalogs_dir);
        for provider in self.providers.values() {
            let path = catalogs_root
                .join("providers")
                .join(format!("{}.yml", provider.provider));
            io::atomic_write(&path, serde_yaml::to_string(provider)?.as_bytes())?;
            written.push(path);
        }

        for category in self.category_rollup().values() {
            let path = catalogs_root
                .join("categories")
                .join(format!("{}.yml", category.category));
            io::atomic_write(&path, serde_yaml::to_string(category)?.as_bytes())?;
            written.push(path);
        }

        Ok(written)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
