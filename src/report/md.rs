use crate::analyze::rate::format_rate;
use crate::types::coverage::{CategoryMetric, CoverageMetric};

pub const BADGE_BASE_URL: &str = "https://img.shields.io/static/v1";
const FULL_COVERAGE_MARKER: &str = " :confetti_ball:";

pub fn to_markdown(metric: &CoverageMetric, title: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("## {title}"));
    if metric.lines.rate == 100.0 {
        output.push_str(FULL_COVERAGE_MARKER);
    }
    output.push_str("\n\n");
    output.push_str(&format!(
        "|  Totals | ![Coverage]({}) |\n",
        badge_url(metric)
    ));
    output.push_str("| :-- | :-- |\n");
    output.push_str(&format!(
        "| Statements: | {} |\n",
        category_cell(&metric.statements)
    ));
    output.push_str(&format!("| Methods: | {} |\n", category_cell(&metric.methods)));
    output
}

pub fn badge_url(metric: &CoverageMetric) -> String {
    format!(
        "{BADGE_BASE_URL}?label=coverage&message={}%25&color={}",
        metric.lines.rate.round() as u64,
        metric.level
    )
}

fn category_cell(category: &CategoryMetric) -> String {
    format!(
        "{}% ( {} / {} )",
        format_rate(category.rate),
        category.covered,
        category.total
    )
}
