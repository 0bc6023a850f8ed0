pub mod payload;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::{error::ApiError, model::Query};

pub use payload::{Envelope, Payload};

/// Anything that can turn a mood query into a backend payload.
#[async_trait]
pub trait Recommender: Send + Sync {
    async fn recommend(&self, query: &Query) -> Result<Payload, ApiError>;
}

pub struct ApiService {
    client: Client,
    endpoint: String,
}

impl ApiService {
    pub fn new(base_url: &str) -> color_eyre::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: format!("{}/hit_me", base_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Recommender for ApiService {
    async fn recommend(&self, query: &Query) -> Result<Payload, ApiError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(query)
            .send()
            .await?
            .error_for_status()?;

        debug!(status = %response.status(), "recommendation response received");

        let body = response.bytes().await?;
        Ok(Payload::decode(&body))
    }
}
