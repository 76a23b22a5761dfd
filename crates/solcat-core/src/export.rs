use crate::catalog::SolutionEntry;
use crate::error::{CatalogError, Result};
use crate::io;
use crate::scanner::ScanReport;
use std::path::Path;

pub const CSV_HEADERS: [&str; 10] = [
    "provider",
    "category",
    "solution",
    "name",
    "version",
    "status",
    "complexity",
    "tags",
    "maintainers",
    "description",
];

/// Serialize the scanned aggregate as a flat JSON array.
pub fn write_json(report: &ScanReport, path: &Path) -> Result<()> {
    let entries: Vec<SolutionEntry> = report.records.iter().map(SolutionEntry::from_record).collect();
    let mut data = serde_json::to_vec_pretty(&entries)?;
    data.push(b'\n');
    io::atomic_write(path, &data)
}

/// Serialize the scanned aggregate as CSV, one row per solution.
/// List fields are joined with `;` so the row stays one cell per column.
pub fn write_csv(report: &ScanReport, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADERS)?;

    for record in &report.records {
        let meta = &record.meta;
        let tags = meta.tags.join(";");
        let maintainers = meta.maintainers.join(";");
        writer.write_record([
            record.provider.as_str(),
            record.category.as_str(),
            record.slug.as_str(),
            meta.solution_name.as_str(),
            meta.version.as_str(),
            meta.status.as_str(),
            meta.complexity.map(|c| c.as_str()).unwrap_or(""),
            tags.as_str(),
            maintainers.as_str(),
            meta.description.as_deref().unwrap_or(""),
        ])?;
    }

    let data = writer
        .into_inner()
        .map_err(|e| CatalogError::Io(e.into_error()))?;
    io::atomic_write(path, &data)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
