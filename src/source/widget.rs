use crate::types::constants::DEFAULT_TIMEOUT;
use crate::types::{PresenceError, Result, WidgetPayload};
use async_trait::async_trait;
use std::time::Duration;
use url::Url;

/// A remote service exposing a live presence count.
///
/// The refresher only ever talks to this trait; swapping the transport
/// (or faking it in tests) never touches the polling logic.
#[async_trait]
pub trait PresenceSource: Send + Sync {
    /// Fetches the current widget document.
    async fn fetch_widget(&self) -> Result<WidgetPayload>;
}

/// Polls the public guild widget endpoint over HTTP.
///
/// The guild must have the widget feature enabled server-side; a disabled
/// widget answers with a non-2xx status, which surfaces as
/// [`PresenceError::SourceUnavailable`].
pub struct WidgetSource {
    endpoint: String,
    guild_id: String,
    http: reqwest::Client,
}

impl WidgetSource {
    /// Creates a source for one guild.
    ///
    /// # Errors
    ///
    /// Returns [`PresenceError::UrlParse`] if the endpoint and guild id do
    /// not combine into a valid URL, or [`PresenceError::SourceUnavailable`]
    /// if the HTTP client cannot be initialized.
    pub fn new(endpoint: impl Into<String>, guild_id: impl Into<String>) -> Result<Self> {
        let endpoint = endpoint.into();
        let guild_id = guild_id.into();

        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(DEFAULT_TIMEOUT))
            .build()
            .map_err(|e| {
                PresenceError::SourceUnavailable(format!("HTTP client init failed: {}", e))
            })?;

        let source = Self {
            endpoint,
            guild_id,
            http,
        };
        // Reject a bad endpoint at construction, not on the first poll
        source.widget_url()?;
        Ok(source)
    }

    /// Widget URL for the configured guild.
    pub fn widget_url(&self) -> Result<String> {
        let url = Url::parse(&format!(
            "{}/guilds/{}/widget.json",
            self.endpoint.trim_end_matches('/'),
            self.guild_id
        ))?;
        Ok(url.to_string())
    }
}

#[async_trait]
impl PresenceSource for WidgetSource {
    async fn fetch_widget(&self) -> Result<WidgetPayload> {
        let url = self.widget_url()?;

        let response = self.http.get(&url).send().await.map_err(|e| {
            PresenceError::SourceUnavailable(format!("widget request failed: {}", e))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PresenceError::SourceUnavailable(format!(
                "widget request for guild '{}' returned status: {}",
                self.guild_id, status
            )));
        }

        let body = response.text().await.map_err(|e| {
            PresenceError::SourceUnavailable(format!("widget body read failed: {}", e))
        })?;

        let payload = parse_widget_body(&body)?;
        tracing::debug!(
            "fetched widget for guild {}: {} online",
            self.guild_id,
            payload.presence_count
        );
        Ok(payload)
    }
}

/// Parses a widget response body into a payload.
pub fn parse_widget_body(body: &str) -> Result<WidgetPayload> {
    Ok(serde_json::from_str(body)?)
}
