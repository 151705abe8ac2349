use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    Failure,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusPayload {
    pub state: State,
    pub description: String,
    pub target_url: String,
    pub context: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentPayload {
    pub body: String,
}
