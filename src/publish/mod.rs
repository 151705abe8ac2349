pub mod writer;

use crate::error::Result;
use crate::report::{md, status};
use crate::types::config::ReportSettings;
use crate::types::coverage::CoverageMetric;
use crate::types::status::{CommentPayload, StatusPayload};

/// Receiver of the rendered call bodies. Implementations decide transport.
pub trait StatusSink {
    fn create_status(&mut self, payload: &StatusPayload) -> Result<()>;
    fn create_comment(&mut self, payload: &CommentPayload) -> Result<()>;
}

#[derive(Debug, Clone, Copy)]
pub struct PublishOptions {
    pub status: bool,
    pub comment: bool,
}

impl Default for PublishOptions {
    fn default() -> Self {
        Self {
            status: true,
            comment: true,
        }
    }
}

pub fn publish(
    metric: &CoverageMetric,
    settings: &ReportSettings,
    options: &PublishOptions,
    sink: &mut dyn StatusSink,
) -> Result<()> {
    if options.status {
        let payload =
            status::to_status_payload(metric, &settings.target_url, &settings.status_context);
        tracing::debug!(state = ?payload.state, "publishing status");
        sink.create_status(&payload)?;
    } else {
        tracing::debug!("status publishing disabled");
    }

    if options.comment {
        let payload =
            status::to_comment_payload(md::to_markdown(metric, &settings.comment_context));
        tracing::debug!(bytes = payload.body.len(), "publishing comment");
        sink.create_comment(&payload)?;
    } else {
        tracing::debug!("comment publishing disabled");
    }

    Ok(())
}
