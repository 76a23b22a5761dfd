use crate::scanner::ScanReport;
use serde::Serialize;
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// CatalogStats
// ---------------------------------------------------------------------------

/// Count breakdowns over a scan. BTreeMap keys keep the output stable
/// between runs.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CatalogStats {
    pub solution_count: usize,
    pub provider_count: usize,
    pub category_count: usize,
    pub by_provider: BTreeMap<String, usize>,
    pub by_category: BTreeMap<String, usize>,
    pub by_status: BTreeMap<String, usize>,
    pub by_complexity: BTreeMap<String, usize>,
    pub by_tag: BTreeMap<String, usize>,
}

impl CatalogStats {
    pub fn from_report(report: &ScanReport) -> Self {
        let mut stats = Self {
            solution_count: report.solution_count(),
            provider_count: report.provider_count(),
            category_count: report.category_count(),
            ..Self::default()
        };

        for record in &report.records {
            bump(&mut stats.by_provider, &record.provider);
            bump(&mut stats.by_category, &record.category);
            bump(&mut stats.by_status, record.meta.status.as_str());
            let complexity = record
                .meta
                .complexity
                .map(|c| c.as_str())
                .unwrap_or("unspecified");
            bump(&mut stats.by_complexity, complexity);
            for tag in &record.meta.tags {
                bump(&mut stats.by_tag, tag);
            }
        }

        stats
    }
}

fn bump(map: &mut BTreeMap<String, usize>, key: &str) {
    *map.entry(key.to_string()).or_insert(0) += 1;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
