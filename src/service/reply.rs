use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum ReplyBody {
    Empty,
    Text(String),
    Json(Value),
}

/// Outcome of a service operation, ready to be written as an HTTP response.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: StatusCode,
    pub body: ReplyBody,
}

impl Reply {
    pub fn empty() -> Self {
        Self { status: StatusCode::OK, body: ReplyBody::Empty }
    }

    /// A single text line; the trailing newline is added here.
    pub fn line(status: StatusCode, message: impl Into<String>) -> Self {
        let mut text = message.into();
        text.push('\n');
        Self { status, body: ReplyBody::Text(text) }
    }

    pub fn json(status: StatusCode, value: Value) -> Self {
        Self { status, body: ReplyBody::Json(value) }
    }

    pub fn bad_request() -> Self {
        Self::line(StatusCode::BAD_REQUEST, "Error: Bad Request")
    }

    /// Appends `next` to this reply. The status already chosen here wins, the
    /// same way a response header cannot change once the body has started.
    pub fn then(self, next: Reply) -> Self {
        let body = match (self.body, next.body) {
            (ReplyBody::Empty, other) => other,
            (own, ReplyBody::Empty) => own,
            (ReplyBody::Text(mut own), ReplyBody::Text(more)) => {
                own.push_str(&more);
                ReplyBody::Text(own)
            }
            (own, _) => own,
        };
        Self { status: self.status, body }
    }

    #[cfg(test)]
    pub fn text(&self) -> &str {
        match &self.body {
            ReplyBody::Text(text) => text,
            _ => "",
        }
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        match self.body {
            ReplyBody::Empty => self.status.into_response(),
            ReplyBody::Text(text) => (self.status, text).into_response(),
            ReplyBody::Json(value) => (self.status, Json(value)).into_response(),
        }
    }
}

/// Double-quoted, escaped rendering of a title for error messages.
pub fn quoted(title: &str) -> String {
    format!("{title:?}")
}
