use reqwest::header::{CONTENT_TYPE, REFERER};
use serde::Serialize;

use super::{send_json, PizzaClient};
use crate::error::PizzaError;
use crate::types::{Order, OrderRequest, PRICED_STATUS};

/// Borrowing twin of [`OrderRequest`] so sending an order never clones it.
#[derive(Serialize)]
struct OrderEnvelope<'a> {
    #[serde(rename = "Order")]
    order: &'a Order,
}

impl PizzaClient {
    /// Prices `order` without placing it and returns the customer total.
    ///
    /// # Errors
    ///
    /// - [`PizzaError::ProductMismatch`] if the service returned no line
    ///   items or a different number than were submitted.
    /// - [`PizzaError::Validation`] if the priced order's status is not
    ///   [`PRICED_STATUS`].
    /// - [`PizzaError::Http`], [`PizzaError::UnexpectedStatus`], or
    ///   [`PizzaError::Deserialize`] if the request or decode fails.
    pub async fn validate_order(&self, order: &Order) -> Result<f64, PizzaError> {
        let url = self.endpoints.price_order()?;
        tracing::debug!(
            %url,
            store_id = %order.store_id,
            products = order.products.len(),
            "pricing order"
        );

        let request = self.client.post(url).json(&OrderEnvelope { order });
        let priced: OrderRequest = send_json(request, "price-order response").await?;

        check_priced_order(order.products.len(), &priced.order)
    }

    /// Places `order` and returns the order document the service sent back.
    ///
    /// The returned status is not inspected; callers decide what counts as
    /// a successful placement.
    ///
    /// # Errors
    ///
    /// Returns [`PizzaError::Http`], [`PizzaError::UnexpectedStatus`], or
    /// [`PizzaError::Deserialize`] if the request or decode fails.
    pub async fn place_order(&self, order: &Order) -> Result<Order, PizzaError> {
        let url = self.endpoints.place_order()?;
        tracing::debug!(%url, store_id = %order.store_id, "placing order");

        let request = self
            .client
            .post(url)
            .header(REFERER, self.endpoints.referer())
            .header(CONTENT_TYPE, "application/json")
            .json(&OrderEnvelope { order });
        let placed: OrderRequest = send_json(request, "place-order response").await?;

        tracing::debug!(
            order_id = %placed.order.order_id,
            status = placed.order.status,
            "order placed"
        );
        Ok(placed.order)
    }
}

/// Interprets a priced order: line-item count first, then status, then price.
pub(super) fn check_priced_order(submitted: usize, priced: &Order) -> Result<f64, PizzaError> {
    let returned = priced.products.len();
    if returned == 0 || returned != submitted {
        tracing::warn!(submitted, returned, "priced order is missing line items");
        return Err(PizzaError::ProductMismatch {
            submitted,
            returned,
        });
    }

    if priced.status != PRICED_STATUS {
        let codes: Vec<String> = priced.failure_codes().map(str::to_owned).collect();
        tracing::warn!(status = priced.status, ?codes, "order failed validation");
        return Err(PizzaError::Validation {
            status: priced.status,
            codes,
        });
    }

    Ok(priced.customer_price())
}
