//! JSON bodies exchanged on `POST /ask`.

use serde::{Deserialize, Serialize};

/// Path of the ask endpoint.
pub const ASK_PATH: &str = "/ask";

/// Request body for `POST /ask`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    /// The user's question, already trimmed by the widget.
    pub message: String,
}

/// Response body for `POST /ask`.
///
/// The widget reads this loosely (see [`crate::widget::reply_text`]); the
/// server always fills `response`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResponse {
    pub response: String,
}
