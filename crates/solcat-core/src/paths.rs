use crate::error::{CatalogError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const PROVIDERS_DIR: &str = "providers";
pub const CATALOGS_DIR: &str = "catalogs";
pub const PROVIDER_CATALOGS_DIR: &str = "catalogs/providers";
pub const CATEGORY_CATALOGS_DIR: &str = "catalogs/categories";
pub const EXPORTS_DIR: &str = "exports";
pub const SCHEMA_DIR: &str = "schema";

pub const CONFIG_FILE: &str = "catalog.yaml";
pub const MASTER_CATALOG_FILE: &str = "CATALOG.yml";
pub const METADATA_FILE: &str = "metadata.yml";
pub const SCHEMA_FILE: &str = "schema/metadata.schema.json";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn master_catalog_path(root: &Path) -> PathBuf {
    root.join(MASTER_CATALOG_FILE)
}

pub fn schema_path(root: &Path) -> PathBuf {
    root.join(SCHEMA_FILE)
}

// ---------------------------------------------------------------------------
// Slug validation
// ---------------------------------------------------------------------------

static SLUG_RE: OnceLock<Regex> = OnceLock::new();

fn slug_re() -> &'static Regex {
    SLUG_RE.get_or_init(|| Regex::new(r"^[a-z0-9][a-z0-9\-]*[a-z0-9]$|^[a-z0-9]$").unwrap())
}

/// Provider, category, and solution directory names all share the same rule.
pub fn validate_slug(slug: &str) -> Result<()> {
    if slug.is_empty() || slug.len() > 64 || !slug_re().is_match(slug) {
        return Err(CatalogError::InvalidSlug(slug.to_string()));
    }
    Ok(())
}

pub fn is_valid_slug(slug: &str) -> bool {
    validate_slug(slug).is_ok()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
