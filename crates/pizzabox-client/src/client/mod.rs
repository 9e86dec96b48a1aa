//! HTTP client for the ordering and tracker services.

mod order;
mod track;

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::endpoints::Endpoints;
use crate::error::PizzaError;
use crate::types::{Address, Menu, Store, StoresResponse};

#[cfg(test)]
use order::check_priced_order;

const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Client for the ordering and tracker services.
///
/// Holds one connection pool and the endpoint set. Calls carry no state
/// between them, so a single client can be shared across tasks. Use
/// [`PizzaClient::new`] for production or [`PizzaClient::with_endpoints`]
/// to point at a mock server in tests.
#[derive(Debug, Clone)]
pub struct PizzaClient {
    client: Client,
    endpoints: Endpoints,
}

impl PizzaClient {
    /// Creates a client pointed at the production services.
    ///
    /// # Errors
    ///
    /// Returns [`PizzaError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, PizzaError> {
        Self::with_endpoints(timeout_secs, user_agent, Endpoints::production()?)
    }

    /// Creates a client with a custom endpoint set.
    ///
    /// # Errors
    ///
    /// Returns [`PizzaError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_endpoints(
        timeout_secs: u64,
        user_agent: &str,
        endpoints: Endpoints,
    ) -> Result<Self, PizzaError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client, endpoints })
    }

    #[must_use]
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Finds the store nearest to `address` that delivers to it.
    ///
    /// Only `street` and `postal_code` are sent.
    ///
    /// # Errors
    ///
    /// - [`PizzaError::EmptyResult`] if the locator returns no stores.
    /// - [`PizzaError::Http`], [`PizzaError::UnexpectedStatus`], or
    ///   [`PizzaError::Deserialize`] if the request or decode fails.
    pub async fn find_nearest_store(&self, address: &Address) -> Result<Store, PizzaError> {
        let mut url = self.endpoints.store_locator()?;
        url.query_pairs_mut()
            .append_pair("s", &address.street)
            .append_pair("c", &address.postal_code)
            .append_pair("type", "Delivery");

        tracing::debug!(%url, "locating nearest store");
        let request = self.client.get(url);
        let response: StoresResponse = send_json(request, "store locator").await?;

        let Some(store) = response.stores.into_iter().next() else {
            tracing::warn!(
                street = %address.street,
                postal_code = %address.postal_code,
                "store locator returned no stores"
            );
            return Err(PizzaError::EmptyResult {
                context: "stores".to_owned(),
            });
        };

        tracing::debug!(store_id = %store.store_id, "nearest store found");
        Ok(store)
    }

    /// Fetches the structured menu of one store.
    ///
    /// # Errors
    ///
    /// - [`PizzaError::InvalidInput`] if `store_id` is empty; nothing is sent.
    /// - [`PizzaError::Http`], [`PizzaError::UnexpectedStatus`], or
    ///   [`PizzaError::Deserialize`] if the request or decode fails.
    pub async fn get_store_menu(&self, store_id: &str) -> Result<Menu, PizzaError> {
        if store_id.trim().is_empty() {
            return Err(PizzaError::InvalidInput(
                "store id must not be empty".to_owned(),
            ));
        }

        let mut url = self.endpoints.store_menu(store_id)?;
        url.query_pairs_mut()
            .append_pair("lang", "en")
            .append_pair("structured", "true");

        tracing::debug!(%url, store_id, "fetching store menu");
        send_json(self.client.get(url), &format!("menu for store {store_id}")).await
    }
}

/// Sends `request`, rejects non-2xx statuses, and decodes the body as `T`.
///
/// The body is read as text first so a decode failure reports `context`
/// instead of a bare `reqwest` error.
async fn send_json<T: DeserializeOwned>(
    request: RequestBuilder,
    context: &str,
) -> Result<T, PizzaError> {
    let response = request.send().await?;
    let status = response.status();

    if !status.is_success() {
        return Err(PizzaError::UnexpectedStatus {
            status: status.as_u16(),
            url: response.url().to_string(),
        });
    }

    let body = response.text().await?;
    serde_json::from_str::<T>(&body).map_err(|e| PizzaError::Deserialize {
        context: context.to_owned(),
        source: e,
    })
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
