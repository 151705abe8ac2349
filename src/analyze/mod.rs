pub mod level;
pub mod rate;

use crate::clover::{self, tree::RoxmlParser, tree::XmlParser};
use crate::error::{CoverageError, Result};
use crate::types::coverage::{CategoryMetric, CoverageMetric, RawCounters, Thresholds};
use std::path::Path;

pub fn analyze(path: &Path, thresholds: &Thresholds) -> Result<CoverageMetric> {
    analyze_with(path, thresholds, &RoxmlParser)
}

pub fn analyze_with(
    path: &Path,
    thresholds: &Thresholds,
    parser: &dyn XmlParser,
) -> Result<CoverageMetric> {
    let tree = clover::load(path, parser)?;
    let counters = clover::metrics::extract_raw_counters(&tree).map_err(|source| {
        CoverageError::MetricExtraction {
            path: path.display().to_string(),
            source,
        }
    })?;
    tracing::debug!(?counters, "extracted clover counters");

    let metric = build_metric(&counters, thresholds);
    tracing::info!(
        lines = metric.lines.rate,
        level = %metric.level,
        "classified coverage"
    );
    Ok(metric)
}

pub fn build_metric(counters: &RawCounters, thresholds: &Thresholds) -> CoverageMetric {
    let statements = CategoryMetric::new(counters.covered_elements, counters.elements);
    let lines = CategoryMetric::new(counters.covered_statements, counters.statements);
    let methods = CategoryMetric::new(counters.covered_methods, counters.methods);
    let branches = CategoryMetric::new(counters.covered_conditionals, counters.conditionals);

    CoverageMetric {
        statements,
        lines,
        methods,
        branches,
        level: level::classify(lines.rate, thresholds),
    }
}
