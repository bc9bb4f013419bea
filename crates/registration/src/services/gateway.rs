//! Outbound calls to the authentication service.

use std::sync::Arc;

use async_trait::async_trait;
use catalog_config::AuthServiceConfig;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::{debug, info};

use crate::types::{RegistrationRequest, TransportError};

/// A completed HTTP exchange with whatever status the service returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayResponse {
    pub status: u16,
    pub body: String,
}

impl GatewayResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a registration to the authentication service.
///
/// Implementations make exactly one attempt per call. Any status code counts
/// as a completed exchange; only failures to complete it are errors.
#[async_trait]
pub trait RegistrationGateway: Send + Sync {
    async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<GatewayResponse, TransportError>;
}

#[async_trait]
impl<T: RegistrationGateway + ?Sized> RegistrationGateway for Arc<T> {
    async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<GatewayResponse, TransportError> {
        (**self).register(request).await
    }
}

/// `reqwest`-backed gateway that POSTs JSON to the registration endpoint.
#[derive(Debug, Clone)]
pub struct HttpRegistrationGateway {
    client: Client,
    register_url: String,
}

impl HttpRegistrationGateway {
    /// Build a client from configuration. Cookies are kept across requests
    /// when `include_credentials` is set.
    pub fn new(config: &AuthServiceConfig) -> Result<Self, TransportError> {
        let mut builder = Client::builder().cookie_store(config.include_credentials);
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder.build()?;
        Ok(Self::from_client(client, config.register_url()))
    }

    pub fn from_client(client: Client, register_url: impl Into<String>) -> Self {
        Self {
            client,
            register_url: register_url.into(),
        }
    }

    pub fn register_url(&self) -> &str {
        &self.register_url
    }
}

#[async_trait]
impl RegistrationGateway for HttpRegistrationGateway {
    async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<GatewayResponse, TransportError> {
        info!(
            url = %self.register_url,
            user_type_id = request.user_type_id(),
            "submitting registration"
        );

        let response = self
            .client
            .post(&self.register_url)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status().as_u16();
        // A body that cannot be read means the exchange never completed.
        let body = response.text().await?;

        debug!(status, body_len = body.len(), "registration response received");
        Ok(GatewayResponse { status, body })
    }
}
