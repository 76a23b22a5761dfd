use crate::config::Config;
use crate::error::{CatalogError, Result};
use crate::io;
use crate::paths;
use crate::types::{Complexity, Status};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// SolutionMeta
// ---------------------------------------------------------------------------

/// The `metadata.yml` descriptor of a single solution template.
///
/// Only `solution_name` is required; everything else carries a serde default
/// so hand-authored files stay minimal. `provider` and `category` are
/// optional self-declarations — the directory position is the source of
/// truth, and `solcat validate` flags any disagreement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionMeta {
    pub solution_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default = "default_version")]
    pub version: String,

    #[serde(default)]
    pub status: Status,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity: Option<Complexity>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub maintainers: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_version() -> String {
    "0.1.0".to_string()
}

impl SolutionMeta {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            solution_name: name.into(),
            description: None,
            version: default_version(),
            status: Status::Draft,
            complexity: None,
            tags: Vec::new(),
            maintainers: Vec::new(),
            provider: None,
            category: None,
            created_at: None,
            updated_at: None,
        }
    }

    // ---------------------------------------------------------------------------
    // Persistence
    // ---------------------------------------------------------------------------

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CatalogError::SolutionNotFound(path.display().to_string()));
        }
        let data = std::fs::read_to_string(path)?;
        let meta: SolutionMeta = serde_yaml::from_str(&data)?;
        Ok(meta)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let data = serde_yaml::to_string(self)?;
        io::atomic_write(path, data.as_bytes())
    }

    /// Author a new solution skeleton under the providers tree.
    /// Refuses to overwrite an existing solution.
    pub fn create(
        root: &Path,
        config: &Config,
        provider: &str,
        category: &str,
        slug: &str,
        name: Option<&str>,
        description: Option<String>,
    ) -> Result<(Self, PathBuf)> {
        paths::validate_slug(provider)?;
        paths::validate_slug(category)?;
        paths::validate_slug(slug)?;

        let path = metadata_path(root, config, provider, category, slug);
        if path.exists() {
            return Err(CatalogError::SolutionExists(format!(
                "{provider}/{category}/{slug}"
            )));
        }

        let now = Utc::now();
        let mut meta = Self::new(name.map(str::to_string).unwrap_or_else(|| slug.replace('-', " ")));
        meta.description = description;
        meta.provider = Some(provider.to_string());
        meta.category = Some(category.to_string());
        meta.created_at = Some(now);
        meta.updated_at = Some(now);
        meta.save(&path)?;
        Ok((meta, path))
    }

    /// Load a solution by its tree position.
    pub fn load_at(
        root: &Path,
        config: &Config,
        provider: &str,
        category: &str,
        slug: &str,
    ) -> Result<Self> {
        let path = metadata_path(root, config, provider, category, slug);
        if !path.exists() {
            return Err(CatalogError::SolutionNotFound(format!(
                "{provider}/{category}/{slug}"
            )));
        }
        Self::load(&path)
    }
}

/// Metadata path honoring a configured providers directory.
pub fn metadata_path(
    root: &Path,
    config: &Config,
    provider: &str,
    category: &str,
    slug: &str,
) -> PathBuf {
    root.join(&config.providers_dir)
        .join(provider)
        .join(category)
        .join(slug)
        .join(paths::METADATA_FILE)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
