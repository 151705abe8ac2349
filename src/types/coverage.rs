use serde::Serialize;
use std::fmt;

pub type Rate = f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawCounters {
    pub elements: u64,
    pub covered_elements: u64,
    pub statements: u64,
    pub covered_statements: u64,
    pub methods: u64,
    pub covered_methods: u64,
    pub conditionals: u64,
    pub covered_conditionals: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryMetric {
    pub total: u64,
    pub covered: u64,
    pub rate: Rate,
}

impl CategoryMetric {
    pub fn new(covered: u64, total: u64) -> Self {
        Self {
            total,
            covered,
            rate: crate::analyze::rate::rate(covered, total),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Red,
    Yellow,
    Green,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Green => "green",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub alert: Rate,
    pub warning: Rate,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            alert: 50.0,
            warning: 90.0,
        }
    }
}

/// Classified coverage of a whole project.
///
/// Clover's `elements` feed `statements` and Clover's `statements` feed
/// `lines`; the level is derived from `lines` alone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoverageMetric {
    pub statements: CategoryMetric,
    pub lines: CategoryMetric,
    pub methods: CategoryMetric,
    pub branches: CategoryMetric,
    pub level: Level,
}
