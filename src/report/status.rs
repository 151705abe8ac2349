use crate::analyze::rate::format_rate;
use crate::types::coverage::{CoverageMetric, Level};
use crate::types::status::{CommentPayload, State, StatusPayload};

pub fn to_status_payload(metric: &CoverageMetric, target_url: &str, context: &str) -> StatusPayload {
    let lines = format_rate(metric.lines.rate);
    let (state, description) = match metric.level {
        Level::Red => (State::Failure, format!("Error: Too low coverage - {lines}%")),
        Level::Yellow => (State::Success, format!("Warning: low coverage - {lines}%")),
        Level::Green => (State::Success, format!("Success: Coverage - {lines}%")),
    };

    StatusPayload {
        state,
        description,
        target_url: target_url.to_string(),
        context: context.to_string(),
    }
}

pub fn to_comment_payload(markdown: String) -> CommentPayload {
    CommentPayload { body: markdown }
}
