use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use simple_ei::config::RegionDataConfig;
use simple_ei::eligibility::{LookupError, PostalCode, RegionLookup, RegionRequirement};
use simple_ei::error::AppError;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Region directory backed by a prefix table keyed by one to three leading
/// postal characters; the longest matching prefix wins.
pub(crate) struct InMemoryRegionDirectory {
    regions: HashMap<String, RegionRequirement>,
}

impl InMemoryRegionDirectory {
    pub(crate) fn new(regions: HashMap<String, RegionRequirement>) -> Self {
        Self { regions }
    }
}

impl RegionLookup for InMemoryRegionDirectory {
    fn region_for(&self, postal_code: &PostalCode) -> Result<RegionRequirement, LookupError> {
        let fsa = postal_code.forward_sortation_area();
        // Longest prefix wins: full FSA, then two characters, then the letter.
        for len in (1..=fsa.len()).rev() {
            if let Some(requirement) = self.regions.get(&fsa[..len]) {
                return Ok(requirement.clone());
            }
        }
        Err(LookupError::RegionNotFound(postal_code.as_str().to_string()))
    }
}

fn region(
    name: &str,
    unemployment_rate: f64,
    insured_hours: f64,
    weeks: (u32, u32),
) -> RegionRequirement {
    RegionRequirement {
        region_name: Some(name.to_string()),
        unemployment_rate_percent: Some(unemployment_rate),
        insured_hours_required: Some(insured_hours),
        min_weeks_payable: Some(weeks.0),
        max_weeks_payable: Some(weeks.1),
    }
}

/// Bundled directory used when no `APP_REGION_DATA` file is configured. Its
/// entries are letter-level; finer prefixes usually arrive via the data file.
pub(crate) fn default_region_directory() -> InMemoryRegionDirectory {
    let mut regions = HashMap::new();
    regions.insert("A".to_string(), region("St. John's", 7.9, 630.0, (14, 45)));
    regions.insert("B".to_string(), region("Halifax", 6.4, 665.0, (14, 45)));
    regions.insert("H".to_string(), region("Montréal", 6.3, 665.0, (14, 45)));
    regions.insert("K".to_string(), region("Ottawa", 5.8, 700.0, (14, 45)));
    regions.insert("M".to_string(), region("Toronto", 6.1, 700.0, (14, 45)));
    regions.insert("R".to_string(), region("Winnipeg", 5.6, 665.0, (14, 45)));
    regions.insert("S".to_string(), region("Regina", 5.5, 665.0, (14, 45)));
    regions.insert("T".to_string(), region("Calgary", 6.8, 665.0, (14, 45)));
    regions.insert("V".to_string(), region("Vancouver", 5.2, 665.0, (14, 45)));
    regions.insert(
        "X".to_string(),
        region("Northwest Territories", 9.9, 630.0, (14, 45)),
    );
    InMemoryRegionDirectory::new(regions)
}

/// Load the directory from the configured JSON file, or fall back to the bundled
/// table. The file is a map of postal prefix to region record.
pub(crate) fn load_region_directory(
    config: &RegionDataConfig,
) -> Result<InMemoryRegionDirectory, AppError> {
    match &config.path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            let regions: HashMap<String, RegionRequirement> = serde_json::from_str(&raw)?;
            Ok(InMemoryRegionDirectory::new(regions))
        }
        None => Ok(default_region_directory()),
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
