//! Deal source backed by a remote JSON endpoint.
//!
//! The endpoint is queried with `GET <endpoint>?destination=<name>` and must
//! answer with a JSON array of deals in their wire form. The underlying
//! client carries a request timeout; that timeout is the only bound on how
//! long a lookup may take.

use std::time::Duration;

use async_trait::async_trait;
use common::{ActivityDeal, Destination, FlightDeal, HotelDeal};
use serde::de::DeserializeOwned;

use crate::activity::ActivityFinder;
use crate::error::{FinderError, Result};
use crate::flight::FlightFinder;
use crate::hotel::HotelFinder;

/// Remote deal source. Configure one instance per category endpoint.
#[derive(Debug, Clone)]
pub struct HttpDealSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpDealSource {
    /// Creates a source with its own client and request timeout.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self::with_client(Self::build_client(timeout)?, endpoint))
    }

    /// Builds a client whose requests time out after `timeout`.
    ///
    /// Clones of the client share one connection pool; hand clones to
    /// [`HttpDealSource::with_client`] to have several sources share it.
    pub fn build_client(timeout: Duration) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FinderError::Transport(e.to_string()))
    }

    /// Creates a source that shares an existing client.
    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Returns the endpoint this source queries.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn fetch<T: DeserializeOwned>(&self, destination: &Destination) -> Result<Vec<T>> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("destination", destination.as_str())])
            .send()
            .await
            .map_err(|e| FinderError::Transport(e.to_string()))?;

        let status = response.status();
        tracing::debug!(endpoint = %self.endpoint, %destination, %status, "deal source answered");
        if !status.is_success() {
            return Err(FinderError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| FinderError::Decode(e.to_string()))
    }
}

#[async_trait]
impl FlightFinder for HttpDealSource {
    async fn find(&self, destination: &Destination) -> Result<Vec<FlightDeal>> {
        self.fetch(destination).await
    }
}

#[async_trait]
impl HotelFinder for HttpDealSource {
    async fn find(&self, destination: &Destination) -> Result<Vec<HotelDeal>> {
        self.fetch(destination).await
    }
}

#[async_trait]
impl ActivityFinder for HttpDealSource {
    async fn find(&self, destination: &Destination) -> Result<Vec<ActivityDeal>> {
        self.fetch(destination).await
    }
}
