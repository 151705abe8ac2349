use super::tree::XmlElement;
use crate::error::MetricError;
use crate::types::coverage::RawCounters;

pub fn extract_raw_counters(tree: &XmlElement) -> Result<RawCounters, MetricError> {
    if tree.name != "coverage" {
        return Err(MetricError::MissingNode("coverage"));
    }
    let project = tree
        .first_child("project")
        .ok_or(MetricError::MissingNode("project"))?;
    let metrics = project
        .first_child("metrics")
        .ok_or(MetricError::MissingNode("metrics"))?;

    let counters = RawCounters {
        elements: counter(metrics, "elements")?,
        covered_elements: counter(metrics, "coveredelements")?,
        statements: counter(metrics, "statements")?,
        covered_statements: counter(metrics, "coveredstatements")?,
        methods: counter(metrics, "methods")?,
        covered_methods: counter(metrics, "coveredmethods")?,
        conditionals: counter(metrics, "conditionals")?,
        covered_conditionals: counter(metrics, "coveredconditionals")?,
    };

    check_pair(counters.covered_elements, counters.elements, "coveredelements", "elements")?;
    check_pair(
        counters.covered_statements,
        counters.statements,
        "coveredstatements",
        "statements",
    )?;
    check_pair(counters.covered_methods, counters.methods, "coveredmethods", "methods")?;
    check_pair(
        counters.covered_conditionals,
        counters.conditionals,
        "coveredconditionals",
        "conditionals",
    )?;

    Ok(counters)
}

fn counter(metrics: &XmlElement, name: &'static str) -> Result<u64, MetricError> {
    let raw = metrics
        .attribute(name)
        .ok_or(MetricError::MissingAttribute(name))?;
    raw.trim()
        .parse::<u64>()
        .map_err(|_| MetricError::InvalidAttribute {
            name,
            value: raw.to_string(),
        })
}

fn check_pair(
    covered: u64,
    total: u64,
    covered_name: &'static str,
    total_name: &'static str,
) -> Result<(), MetricError> {
    if covered > total {
        return Err(MetricError::CoveredExceedsTotal {
            covered: covered_name,
            total: total_name,
        });
    }
    Ok(())
}
