use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoverageError {
    #[error("cannot read coverage report {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed coverage report {path}: {message}")]
    Parse { path: String, message: String },

    #[error("metric extraction failed for {path}: {source}")]
    MetricExtraction {
        path: String,
        #[source]
        source: MetricError,
    },

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("output write error: {0}")]
    Write(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetricError {
    #[error("missing <{0}> element")]
    MissingNode(&'static str),

    #[error("missing metrics attribute `{0}`")]
    MissingAttribute(&'static str),

    #[error("metrics attribute `{name}` is not a non-negative integer: {value:?}")]
    InvalidAttribute { name: &'static str, value: String },

    #[error("`{covered}` exceeds `{total}` in metrics")]
    CoveredExceedsTotal {
        covered: &'static str,
        total: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, CoverageError>;
