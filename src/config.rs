use crate::error::{CoverageError, Result};
use crate::types::config::{validate_threshold, ReportSettings, ReporterConfig, DEFAULT_CONTEXT};
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "clover-status.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".clover-status/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/clover-status/config.toml";

#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub threshold_alert: Option<f64>,
    pub threshold_warning: Option<f64>,
    pub target_url: Option<String>,
    pub status_context: Option<String>,
    pub comment_context: Option<String>,
}

pub fn load_config(root: &Path) -> Result<Option<ReporterConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<ReporterConfig>> {
    let repo_path = root.join(DEFAULT_CONFIG_FILE);
    if !repo_path.exists() {
        let local_path = root.join(DEFAULT_LOCAL_FILE);
        for skipped in global_path
            .into_iter()
            .chain(std::iter::once(local_path.as_path()))
            .filter(|path| path.exists())
        {
            tracing::debug!(
                path = %skipped.display(),
                "ignoring config layer without {}",
                DEFAULT_CONFIG_FILE
            );
        }
        return Ok(None);
    }

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &repo_path)?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg: ReporterConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| CoverageError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

pub fn resolve_settings(
    config: Option<&ReporterConfig>,
    overrides: &SettingsOverrides,
) -> Result<ReportSettings> {
    let mut thresholds = config
        .map(ReporterConfig::thresholds)
        .unwrap_or_default();
    if let Some(alert) = overrides.threshold_alert {
        validate_threshold("--threshold-alert", alert)?;
        thresholds.alert = alert;
    }
    if let Some(warning) = overrides.threshold_warning {
        validate_threshold("--threshold-warning", warning)?;
        thresholds.warning = warning;
    }
    if thresholds.alert >= thresholds.warning {
        tracing::warn!(
            alert = thresholds.alert,
            warning = thresholds.warning,
            "alert threshold is not below warning threshold; yellow level is unreachable"
        );
    }

    let pick = |flag: &Option<String>, file: Option<&str>, default: &str| {
        flag.clone()
            .or_else(|| file.map(str::to_string))
            .unwrap_or_else(|| default.to_string())
    };

    Ok(ReportSettings {
        thresholds,
        target_url: pick(
            &overrides.target_url,
            config.and_then(ReporterConfig::target_url),
            "",
        ),
        status_context: pick(
            &overrides.status_context,
            config.and_then(ReporterConfig::status_context),
            DEFAULT_CONTEXT,
        ),
        comment_context: pick(
            &overrides.comment_context,
            config.and_then(ReporterConfig::comment_context),
            DEFAULT_CONTEXT,
        ),
    })
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| CoverageError::ConfigParse(format!("{}: {}", path.display(), e)))?;
    toml::from_str(&content)
        .map_err(|e| CoverageError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
