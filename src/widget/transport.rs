//! Network side of the widget: one `POST /ask` per submission.

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use crate::error::WidgetError;
use crate::wire::{ASK_PATH, AskRequest};

/// Sends a question and returns the decoded JSON body of the reply.
///
/// Implementations must not retry and must not inspect the HTTP status: any
/// body that parses as JSON is handed back as-is.
#[async_trait]
pub trait AskTransport: Send + Sync {
    async fn ask(&self, message: &str) -> Result<Value, WidgetError>;
}

/// HTTP transport posting JSON to `<base>/ask`.
///
/// # Example
///
/// ```rust,no_run
/// use faq_chat::widget::{AskTransport, HttpTransport};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let transport = HttpTransport::new("http://127.0.0.1:5000")?;
/// let body = transport.ask("How do I reset my password?").await?;
/// println!("{body}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    endpoint: Url,
    http: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport for the server at `base_url`.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, WidgetError> {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Create a transport with a custom reqwest client.
    pub fn with_client(
        base_url: impl AsRef<str>,
        http: reqwest::Client,
    ) -> Result<Self, WidgetError> {
        let endpoint = Url::parse(base_url.as_ref())?.join(ASK_PATH)?;
        Ok(Self { endpoint, http })
    }

    /// Full URL requests are posted to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl AskTransport for HttpTransport {
    async fn ask(&self, message: &str) -> Result<Value, WidgetError> {
        let req = AskRequest {
            message: message.to_string(),
        };
        // `.json()` sets `Content-Type: application/json`.
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&req)
            .send()
            .await?;

        tracing::debug!(
            endpoint = %self.endpoint,
            status = response.status().as_u16(),
            "Ask response received"
        );

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
