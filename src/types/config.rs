use crate::error::CoverageError;
use crate::types::coverage::Thresholds;
use serde::Deserialize;

pub const DEFAULT_CONTEXT: &str = "Coverage Report";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReporterConfig {
    pub thresholds: Option<ThresholdsConfig>,
    pub status: Option<StatusConfig>,
    pub comment: Option<CommentConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThresholdsConfig {
    pub alert: Option<f64>,
    pub warning: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusConfig {
    pub context: Option<String>,
    pub target_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentConfig {
    pub context: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportSettings {
    pub thresholds: Thresholds,
    pub target_url: String,
    pub status_context: String,
    pub comment_context: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            target_url: String::new(),
            status_context: DEFAULT_CONTEXT.to_string(),
            comment_context: DEFAULT_CONTEXT.to_string(),
        }
    }
}

impl ReporterConfig {
    pub fn thresholds(&self) -> Thresholds {
        let defaults = Thresholds::default();
        match &self.thresholds {
            Some(thresholds) => Thresholds {
                alert: thresholds.alert.unwrap_or(defaults.alert),
                warning: thresholds.warning.unwrap_or(defaults.warning),
            },
            None => defaults,
        }
    }

    pub fn status_context(&self) -> Option<&str> {
        self.status
            .as_ref()
            .and_then(|status| status.context.as_deref())
    }

    pub fn target_url(&self) -> Option<&str> {
        self.status
            .as_ref()
            .and_then(|status| status.target_url.as_deref())
    }

    pub fn comment_context(&self) -> Option<&str> {
        self.comment
            .as_ref()
            .and_then(|comment| comment.context.as_deref())
    }

    pub fn validate(&self) -> Result<(), CoverageError> {
        if let Some(thresholds) = &self.thresholds {
            if let Some(alert) = thresholds.alert {
                validate_threshold("thresholds.alert", alert)?;
            }
            if let Some(warning) = thresholds.warning {
                validate_threshold("thresholds.warning", warning)?;
            }
        }
        Ok(())
    }
}

pub fn validate_threshold(name: &str, value: f64) -> Result<(), CoverageError> {
    if !(0.0..=100.0).contains(&value) {
        return Err(CoverageError::ConfigParse(format!(
            "{name} must be between 0 and 100 (found {value})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> ReporterConfig {
        toml::from_str(input).expect("config should parse")
    }

    #[test]
    fn thresholds_fall_back_to_defaults_per_field() {
        let cfg = parse(
            r#"
[thresholds]
warning = 80.0
"#,
        );
        let thresholds = cfg.thresholds();
        assert_eq!(thresholds.alert, 50.0);
        assert_eq!(thresholds.warning, 80.0);
    }

    #[test]
    fn empty_config_uses_default_thresholds() {
        let cfg = parse("");
        assert_eq!(cfg.thresholds(), Thresholds::default());
        assert!(cfg.status_context().is_none());
        assert!(cfg.comment_context().is_none());
    }

    #[test]
    fn status_and_comment_sections_are_exposed() {
        let cfg = parse(
            r#"
[status]
context = "ci/coverage"
target_url = "https://ci.example/build/7"

[comment]
context = "Unit coverage"
"#,
        );
        assert_eq!(cfg.status_context(), Some("ci/coverage"));
        assert_eq!(cfg.target_url(), Some("https://ci.example/build/7"));
        assert_eq!(cfg.comment_context(), Some("Unit coverage"));
    }

    #[test]
    fn validate_rejects_threshold_out_of_range() {
        let cfg = parse(
            r#"
[thresholds]
alert = 120.0
"#,
        );
        let err = cfg.validate().expect_err("out of range alert should fail");
        assert!(err.to_string().contains("thresholds.alert"));
    }

    #[test]
    fn validate_accepts_inverted_thresholds() {
        let cfg = parse(
            r#"
[thresholds]
alert = 95.0
warning = 60.0
"#,
        );
        assert!(cfg.validate().is_ok());
    }
}
