use crate::types::coverage::CoverageMetric;

pub fn to_json(metric: &CoverageMetric) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(metric)
}
