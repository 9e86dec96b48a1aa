use reqwest::{RequestBuilder, Url};

use super::{send_json, PizzaClient};
use crate::error::PizzaError;
use crate::types::{TrackInfo, TrackerStatus};

const MARKET_HEADER: &str = "DPZ-Market";
const LANGUAGE_HEADER: &str = "DPZ-Language";
const MARKET: &str = "UNITED_STATES";
const LANGUAGE: &str = "en";

impl PizzaClient {
    /// Looks up the orders placed under `phone` and returns the tracker path
    /// of the first one.
    ///
    /// # Errors
    ///
    /// - [`PizzaError::EmptyResult`] if no order is found for the number.
    /// - [`PizzaError::Http`], [`PizzaError::UnexpectedStatus`], or
    ///   [`PizzaError::Deserialize`] if the request or decode fails.
    pub async fn get_tracking_url(&self, phone: &str) -> Result<String, PizzaError> {
        let mut url = self.endpoints.tracker_orders()?;
        url.query_pairs_mut().append_pair("phonenumber", phone);

        tracing::debug!(%url, "looking up orders by phone number");
        // A `null` body counts as no orders.
        let infos: Option<Vec<TrackInfo>> =
            send_json(self.tracker_get(url), "tracked orders").await?;

        let Some(info) = infos.into_iter().flatten().next() else {
            tracing::warn!("tracker returned no orders for phone number");
            return Err(PizzaError::EmptyResult {
                context: "tracked orders".to_owned(),
            });
        };

        Ok(info.actions.track)
    }

    /// Fetches the tracker status at `path`, typically the value returned by
    /// [`PizzaClient::get_tracking_url`].
    ///
    /// # Errors
    ///
    /// Returns [`PizzaError::InvalidUrl`] if `path` cannot be resolved against
    /// the tracker base, or [`PizzaError::Http`],
    /// [`PizzaError::UnexpectedStatus`], or [`PizzaError::Deserialize`] if
    /// the request or decode fails.
    pub async fn track(&self, path: &str) -> Result<TrackerStatus, PizzaError> {
        let url = self.endpoints.tracker_path(path)?;
        tracing::debug!(%url, "fetching tracker status");
        send_json(self.tracker_get(url), "tracker status").await
    }

    fn tracker_get(&self, url: Url) -> RequestBuilder {
        self.client
            .get(url)
            .header(MARKET_HEADER, MARKET)
            .header(LANGUAGE_HEADER, LANGUAGE)
    }
}
