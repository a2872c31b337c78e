//! HTTP client for a remote entity recognition service
//!
//! Talks to a sidecar NER service (the statistical model runs out of
//! process) over a small JSON API: `POST {base_url}/analyze` with the text
//! and language, answered with a list of entity candidates.

use super::models::{ModelEntity, NerRequest, NerResponse};
use super::EntitySource;
use crate::config::NerConfig;
use crate::domain::{EntitySourceError, Result};
use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use reqwest::{header::AUTHORIZATION, Client, ClientBuilder};
use secrecy::ExposeSecret;
use std::time::Duration;

/// Remote entity recognition client
///
/// # Example
///
/// ```no_run
/// use veil::adapters::ner::{EntitySource, RemoteNerClient};
/// use veil::config::NerConfig;
///
/// # async fn example() -> veil::domain::Result<()> {
/// let config = NerConfig {
///     enabled: true,
///     base_url: "http://localhost:5005".to_string(),
///     ..Default::default()
/// };
/// let client = RemoteNerClient::new(config)?;
/// let entities = client.recognize("Jan Visser woont in Utrecht", "nl").await?;
/// # Ok(())
/// # }
/// ```
pub struct RemoteNerClient {
    base_url: String,
    client: Client,
    config: NerConfig,
}

impl RemoteNerClient {
    /// Create a new client from configuration
    pub fn new(config: NerConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| EntitySourceError::ConnectionFailed(e.to_string()))?;

        let base_url = config.base_url.trim_end_matches('/').to_string();

        Ok(Self {
            base_url,
            client,
            config,
        })
    }

    /// Base URL of the entity recognition service
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn auth_header(&self) -> Option<String> {
        let username = self.config.username.as_ref()?;
        let password = self.config.password.as_ref()?;
        let credentials = format!("{}:{}", username, password.expose_secret());
        Some(format!(
            "Basic {}",
            general_purpose::STANDARD.encode(credentials)
        ))
    }
}

#[async_trait]
impl EntitySource for RemoteNerClient {
    fn name(&self) -> &str {
        "remote_ner"
    }

    async fn recognize(&self, text: &str, language: &str) -> Result<Vec<ModelEntity>> {
        let url = format!("{}/analyze", self.base_url);

        let mut request = self
            .client
            .post(&url)
            .json(&NerRequest { text, language });

        if let Some(header) = self.auth_header() {
            request = request.header(AUTHORIZATION, header);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                EntitySourceError::Timeout(e.to_string())
            } else {
                EntitySourceError::ConnectionFailed(e.to_string())
            }
        })?;

        let status = response.status();
        if status.is_server_error() {
            let message = response.text().await.unwrap_or_default();
            return Err(EntitySourceError::ServerError {
                status: status.as_u16(),
                message,
            }
            .into());
        }
        if status.is_client_error() {
            let message = response.text().await.unwrap_or_default();
            return Err(EntitySourceError::ClientError {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let payload: NerResponse = response
            .json()
            .await
            .map_err(|e| EntitySourceError::InvalidResponse(e.to_string()))?;

        tracing::debug!(
            url = %url,
            entities = payload.entities.len(),
            "Entity source responded"
        );

        Ok(payload.entities)
    }
}
