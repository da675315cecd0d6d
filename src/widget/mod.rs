//! The chat widget.
//!
//! A [`ChatWidget`] is mounted on three collaborators injected at
//! construction: a [`MessageContainer`] that displays the conversation, a
//! [`TextInput`] the user types into, and an [`AskTransport`] that carries one
//! `POST /ask` per submission.
//!
//! # Flow
//!
//! 1. A submit event fires; the handler reads and trims the input.
//! 2. Empty input is ignored. Otherwise the user message is appended, the
//!    input cleared and the question sent.
//! 3. The reply (or the failure) becomes exactly one bot message.
//!
//! Submissions are never serialized: several may be in flight at once and
//! their replies are appended in completion order.
//!
//! # Example
//!
//! ```rust,no_run
//! use faq_chat::widget::{ChatWidget, HeadlessContainer, HeadlessInput, HttpTransport};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let widget = ChatWidget::new(
//!     HeadlessContainer::default(),
//!     HeadlessInput::default(),
//!     HttpTransport::new("http://127.0.0.1:5000")?,
//! );
//! widget.submit("  How do I reset my password?  ").await;
//! assert_eq!(widget.container().len(), 2);
//! # Ok(())
//! # }
//! ```

mod dom;
mod headless;
mod message;
mod transport;

use std::pin::pin;

use futures::future::LocalBoxFuture;
use futures::stream::FuturesUnordered;
use futures::{FutureExt, Stream, StreamExt};
use serde_json::Value;

use crate::error::WidgetError;

pub use dom::{MessageContainer, SubmitEvent, TextInput};
pub use headless::{HeadlessContainer, HeadlessInput};
pub use message::{Message, MessageNode, Origin};
pub use transport::{AskTransport, HttpTransport};

/// Shown when the reply carries no usable `response` field.
pub const NO_RESPONSE_TEXT: &str = "Sorry, no response.";

/// Shown when the request or the JSON decoding fails.
pub const ERROR_TEXT: &str = "Error connecting to server.";

/// Chat widget bound to its container, input and transport.
#[derive(Debug)]
pub struct ChatWidget<C, I, T> {
    container: C,
    input: I,
    transport: T,
}

impl<C, I, T> ChatWidget<C, I, T>
where
    C: MessageContainer,
    I: TextInput,
    T: AskTransport,
{
    pub fn new(container: C, input: I, transport: T) -> Self {
        Self {
            container,
            input,
            transport,
        }
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Submit `text` and wait for its reply to be rendered.
    ///
    /// Whitespace-only text is a no-op: nothing is appended, nothing is sent
    /// and the input is left as it is.
    pub async fn submit(&self, text: &str) {
        if let Some(reply) = self.begin_submit(text) {
            reply.await;
        }
    }

    /// The "on submit" handler: reads the input element and submits its value.
    ///
    /// The user message is appended and the input cleared before this returns;
    /// the returned future renders the reply. `None` when the input was blank.
    pub fn handle_submit(&self) -> Option<LocalBoxFuture<'_, ()>> {
        let value = self.input.value();
        self.begin_submit(&value)
    }

    /// Register against `form` and handle every submit event it raises.
    ///
    /// Submissions run concurrently on the current task; a new event is
    /// accepted while earlier requests are still in flight. Returns once the
    /// form has closed and every pending reply has been rendered.
    pub async fn run<F>(&self, form: F)
    where
        F: Stream<Item = SubmitEvent>,
    {
        let mut form = pin!(form);
        let mut in_flight = FuturesUnordered::new();
        let mut form_open = true;

        while form_open || !in_flight.is_empty() {
            tokio::select! {
                event = form.next(), if form_open => match event {
                    Some(SubmitEvent) => {
                        if let Some(reply) = self.handle_submit() {
                            in_flight.push(reply);
                        }
                    }
                    None => {
                        tracing::debug!(pending = in_flight.len(), "Chat form closed");
                        form_open = false;
                    }
                },
                Some(()) = in_flight.next(), if !in_flight.is_empty() => {}
            }
        }
    }

    /// Synchronous half of a submission: validate, append, clear, then hand
    /// back the pending reply.
    fn begin_submit(&self, text: &str) -> Option<LocalBoxFuture<'_, ()>> {
        let question = text.trim();
        if question.is_empty() {
            return None;
        }
        let question = question.to_string();

        self.append(Message::user(question.clone()));
        self.input.set_value("");

        Some(
            async move {
                let outcome = self.transport.ask(&question).await;
                if let Err(e) = &outcome {
                    tracing::debug!(error = %e, "Ask request failed");
                }
                self.append(Message::bot(reply_text(&outcome)));
            }
            .boxed_local(),
        )
    }

    fn append(&self, message: Message) {
        self.container.append_child(message.render());
        self.container
            .set_scroll_top(self.container.scroll_height());
    }
}

/// Text of the bot message for a reply outcome.
///
/// The `response` field is used when it is truthy: absent, `null`, `false`,
/// `0` and `""` all fall back to [`NO_RESPONSE_TEXT`]. Non-string truthy
/// values are shown as JSON. A `null` body or any error yields [`ERROR_TEXT`].
pub fn reply_text(outcome: &Result<Value, WidgetError>) -> String {
    match outcome {
        Err(_) | Ok(Value::Null) => ERROR_TEXT.to_string(),
        Ok(Value::Object(body)) => body
            .get("response")
            .and_then(truthy_text)
            .unwrap_or_else(|| NO_RESPONSE_TEXT.to_string()),
        Ok(_) => NO_RESPONSE_TEXT.to_string(),
    }
}

fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) => (!s.is_empty()).then(|| s.clone()),
        Value::Number(n) => (n.as_f64() != Some(0.0)).then(|| n.to_string()),
        other => Some(other.to_string()),
    }
}
