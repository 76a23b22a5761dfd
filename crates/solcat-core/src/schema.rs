use crate::config::Config;
use crate::error::{CatalogError, Result};
use crate::scanner;
use jsonschema::JSONSchema;
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Default contract for `metadata.yml`, written by `solcat init` and kept
/// editable by catalog maintainers.
pub const DEFAULT_METADATA_SCHEMA: &str = r#"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "title": "Solution metadata",
  "type": "object",
  "required": ["solution_name"],
  "additionalProperties": false,
  "properties": {
    "solution_name": { "type": "string", "minLength": 1 },
    "description": { "type": "string" },
    "version": { "type": "string" },
    "status": {
      "type": "string",
      "enum": ["draft", "review", "active", "deprecated", "retired"]
    },
    "complexity": { "type": "string", "enum": ["low", "medium", "high"] },
    "tags": { "type": "array", "items": { "type": "string" } },
    "maintainers": { "type": "array", "items": { "type": "string" } },
    "provider": { "type": "string" },
    "category": { "type": "string" },
    "created_at": { "type": "string" },
    "updated_at": { "type": "string" }
  }
}
"#;

// ---------------------------------------------------------------------------
// ValidationReport
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct ValidationFinding {
    pub path: PathBuf,
    pub message: String,
}

#[derive(Debug, Default, Serialize)]
pub struct ValidationReport {
    /// Number of metadata files examined, loadable or not.
    pub checked: usize,
    pub findings: Vec<ValidationFinding>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tree validation
// ---------------------------------------------------------------------------

/// Validate every metadata file against the JSON Schema, and cross-check
/// declared `provider`/`category` fields against the file's directory
/// position. A missing schema file fails before any file is examined.
pub fn validate_tree(
    root: &Path,
    config: &Config,
    schema_override: Option<&Path>,
) -> Result<ValidationReport> {
    let schema_file = schema_override
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.join(&config.schema));
    if !schema_file.exists() {
        return Err(CatalogError::SchemaNotFound(
            schema_file.display().to_string(),
        ));
    }

    let schema_data = std::fs::read_to_string(&schema_file)?;
    let schema_value: Value = serde_json::from_str(&schema_data)?;
    let compiled = JSONSchema::compile(&schema_value)
        .map_err(|e| CatalogError::SchemaCompile(e.to_string()))?;

    let scan = scanner::scan(root, config)?;
    let mut report = ValidationReport {
        checked: scan.records.len() + scan.skipped.len(),
        findings: Vec::new(),
    };

    for skipped in &scan.skipped {
        report.findings.push(ValidationFinding {
            path: skipped.path.clone(),
            message: skipped.reason.clone(),
        });
    }

    for record in &scan.records {
        let data = std::fs::read_to_string(&record.path)?;
        let instance: Value = match serde_yaml::from_str(&data) {
            Ok(v) => v,
            Err(e) => {
                report.findings.push(ValidationFinding {
                    path: record.path.clone(),
                    message: e.to_string(),
                });
                continue;
            }
        };

        if let Err(errors) = compiled.validate(&instance) {
            for err in errors {
                let location = err.instance_path.to_string();
                let message = if location.is_empty() {
                    err.to_string()
                } else {
                    format!("{location}: {err}")
                };
                report.findings.push(ValidationFinding {
                    path: record.path.clone(),
                    message,
                });
            }
        }

        if let Some(declared) = record.meta.provider.as_deref() {
            if declared != record.provider {
                report.findings.push(ValidationFinding {
                    path: record.path.clone(),
                    message: format!(
                        "declared provider '{declared}' does not match directory '{}'",
                        record.provider
                    ),
                });
            }
        }
        if let Some(declared) = record.meta.category.as_deref() {
            if declared != record.category {
                report.findings.push(ValidationFinding {
                    path: record.path.clone(),
                    message: format!(
                        "declared category '{declared}' does not match directory '{}'",
                        record.category
                    ),
                });
            }
        }
    }

    Ok(report)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
