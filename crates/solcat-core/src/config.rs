use crate::error::Result;
use crate::io;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Catalog repository configuration, stored at `catalog.yaml` in the root.
///
/// The file is optional: a bare `providers/` tree is scannable with the
/// defaults, so a missing config falls back to `Config::new` instead of
/// failing the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Directory holding the `provider/category/solution` tree.
    #[serde(default = "default_providers_dir")]
    pub providers_dir: String,

    /// Directory receiving per-provider and per-category catalogs.
    #[serde(default = "default_catalogs_dir")]
    pub catalogs_dir: String,

    /// Directory receiving JSON/CSV exports.
    #[serde(default = "default_exports_dir")]
    pub exports_dir: String,

    /// JSON Schema used by `solcat validate`.
    #[serde(default = "default_schema")]
    pub schema: String,
}

fn default_providers_dir() -> String {
    paths::PROVIDERS_DIR.to_string()
}

fn default_catalogs_dir() -> String {
    paths::CATALOGS_DIR.to_string()
}

fn default_exports_dir() -> String {
    paths::EXPORTS_DIR.to_string()
}

fn default_schema() -> String {
    paths::SCHEMA_FILE.to_string()
}

impl Config {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            providers_dir: default_providers_dir(),
            catalogs_dir: default_catalogs_dir(),
            exports_dir: default_exports_dir(),
            schema: default_schema(),
        }
    }

    // ---------------------------------------------------------------------------
    // Persistence
    // ---------------------------------------------------------------------------

    /// Load `catalog.yaml`, falling back to defaults named after the root
    /// directory when the file does not exist.
    pub fn load_or_default(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            let name = root
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "catalog".to_string());
            return Ok(Self::new(name));
        }
        let data = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&data)?;
        Ok(config)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        io::atomic_write(&path, data.as_bytes())
    }

    // ---------------------------------------------------------------------------
    // Validation
    // ---------------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.name.trim().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "catalog name is empty".to_string(),
            });
        }

        for (field, value) in [
            ("providers_dir", &self.providers_dir),
            ("catalogs_dir", &self.catalogs_dir),
            ("exports_dir", &self.exports_dir),
            ("schema", &self.schema),
        ] {
            if value.trim().is_empty() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: format!("{field} is empty"),
                });
            } else if Path::new(value).is_absolute() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!("{field} is absolute; expected a path relative to the root"),
                });
            }
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
