pub mod json;
pub mod md;
pub mod status;

use crate::error::CoverageError;
use crate::types::config::ReportSettings;
use crate::types::coverage::CoverageMetric;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
    Status,
    Comment,
}

pub fn render(
    metric: &CoverageMetric,
    format: OutputFormat,
    settings: &ReportSettings,
) -> Result<String, CoverageError> {
    match format {
        OutputFormat::Json => json::to_json(metric).map_err(CoverageError::Json),
        OutputFormat::Md => Ok(md::to_markdown(metric, &settings.comment_context)),
        OutputFormat::Status => {
            let payload =
                status::to_status_payload(metric, &settings.target_url, &settings.status_context);
            serde_json::to_string_pretty(&payload).map_err(CoverageError::Json)
        }
        OutputFormat::Comment => {
            let payload =
                status::to_comment_payload(md::to_markdown(metric, &settings.comment_context));
            serde_json::to_string_pretty(&payload).map_err(CoverageError::Json)
        }
    }
}
