use crate::types::coverage::Rate;

/// Percentage of `covered` over `total`, rounded half away from zero to two
/// decimals. An empty category has a rate of zero.
pub fn rate(covered: u64, total: u64) -> Rate {
    if total == 0 {
        return 0.0;
    }
    round2(covered as f64 / total as f64 * 100.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn format_rate(rate: Rate) -> String {
    format!("{rate}")
}
