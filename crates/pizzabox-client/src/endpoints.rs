//! Endpoint set for the ordering (`power`) and tracker services.

use reqwest::Url;

use crate::error::PizzaError;

pub const DEFAULT_ORDER_BASE_URL: &str = "https://order.dominos.com";
pub const DEFAULT_TRACKER_BASE_URL: &str =
    "https://tracker.dominos.com/tracker-presentation-service";
pub const DEFAULT_REFERER_URL: &str = "https://order.dominos.com/en/pages/order/";

const STORE_LOCATOR_PATH: &str = "power/store-locator";
const PRICE_ORDER_PATH: &str = "power/price-order";
const PLACE_ORDER_PATH: &str = "power/place-order";
const TRACKER_ORDERS_PATH: &str = "v2/orders";

/// Base URLs every request is resolved against.
///
/// Both bases are stored with exactly one trailing slash so relative joins
/// append to the base path instead of replacing its last segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    order_base: Url,
    tracker_base: Url,
    referer: String,
}

impl Endpoints {
    /// # Errors
    ///
    /// Returns [`PizzaError::InvalidUrl`] if either base is not an absolute
    /// `http`/`https` URL.
    pub fn new(order_base: &str, tracker_base: &str, referer: &str) -> Result<Self, PizzaError> {
        Ok(Self {
            order_base: parse_base(order_base)?,
            tracker_base: parse_base(tracker_base)?,
            referer: referer.to_owned(),
        })
    }

    /// The public production services.
    ///
    /// # Errors
    ///
    /// Never in practice; the signature matches [`Endpoints::new`].
    pub fn production() -> Result<Self, PizzaError> {
        Self::new(
            DEFAULT_ORDER_BASE_URL,
            DEFAULT_TRACKER_BASE_URL,
            DEFAULT_REFERER_URL,
        )
    }

    #[must_use]
    pub fn referer(&self) -> &str {
        &self.referer
    }

    pub(crate) fn store_locator(&self) -> Result<Url, PizzaError> {
        join(&self.order_base, STORE_LOCATOR_PATH)
    }

    /// `power/store/{store_id}/menu`, with the id encoded as a single path segment.
    pub(crate) fn store_menu(&self, store_id: &str) -> Result<Url, PizzaError> {
        let mut url = self.order_base.clone();
        url.path_segments_mut()
            .map_err(|()| PizzaError::InvalidUrl {
                url: self.order_base.to_string(),
                reason: "base URL cannot carry a path".to_owned(),
            })?
            .pop_if_empty()
            .extend(["power", "store", store_id, "menu"]);
        Ok(url)
    }

    pub(crate) fn price_order(&self) -> Result<Url, PizzaError> {
        join(&self.order_base, PRICE_ORDER_PATH)
    }

    pub(crate) fn place_order(&self) -> Result<Url, PizzaError> {
        join(&self.order_base, PLACE_ORDER_PATH)
    }

    pub(crate) fn tracker_orders(&self) -> Result<Url, PizzaError> {
        join(&self.tracker_base, TRACKER_ORDERS_PATH)
    }

    /// Resolves a track-action path returned by the tracker.
    ///
    /// Absolute URLs are used as-is, `/`-rooted paths replace the base path,
    /// relative paths are appended to the tracker base. An empty path falls
    /// back to the `v2/orders` endpoint.
    pub(crate) fn tracker_path(&self, path: &str) -> Result<Url, PizzaError> {
        let path = path.trim();
        if path.is_empty() {
            return self.tracker_orders();
        }
        join(&self.tracker_base, path)
    }
}

fn parse_base(raw: &str) -> Result<Url, PizzaError> {
    let normalised = format!("{}/", raw.trim().trim_end_matches('/'));
    let url = Url::parse(&normalised).map_err(|e| PizzaError::InvalidUrl {
        url: raw.to_owned(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(PizzaError::InvalidUrl {
            url: raw.to_owned(),
            reason: "expected an absolute http(s) URL".to_owned(),
        });
    }

    Ok(url)
}

fn join(base: &Url, path: &str) -> Result<Url, PizzaError> {
    base.join(path).map_err(|e| PizzaError::InvalidUrl {
        url: format!("{base}{path}"),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints() -> Endpoints {
        Endpoints::new(
            "https://order.example.com",
            "https://tracker.example.com/tracker-presentation-service/",
            "https://order.example.com/en/pages/order/",
        )
        .expect("valid endpoints")
    }

    #[test]
    fn production_endpoints_resolve() {
        let prod = Endpoints::production().unwrap();
        assert_eq!(
            prod.store_locator().unwrap().as_str(),
            "https://order.dominos.com/power/store-locator"
        );
        assert_eq!(
            prod.tracker_orders().unwrap().as_str(),
            "https://tracker.dominos.com/tracker-presentation-service/v2/orders"
        );
        assert_eq!(prod.referer(), "https://order.dominos.com/en/pages/order/");
    }

    #[test]
    fn order_endpoints() {
        let e = endpoints();
        assert_eq!(
            e.price_order().unwrap().as_str(),
            "https://order.example.com/power/price-order"
        );
        assert_eq!(
            e.place_order().unwrap().as_str(),
            "https://order.example.com/power/place-order"
        );
    }

    #[test]
    fn base_path_is_preserved() {
        let e = Endpoints::new("http://127.0.0.1:9000/mock", "http://127.0.0.1:9000/t", "r")
            .unwrap();
        assert_eq!(
            e.store_locator().unwrap().as_str(),
            "http://127.0.0.1:9000/mock/power/store-locator"
        );
        assert_eq!(
            e.store_menu("7229").unwrap().as_str(),
            "http://127.0.0.1:9000/mock/power/store/7229/menu"
        );
    }

    #[test]
    fn store_menu_encodes_store_id() {
        let url = endpoints().store_menu("72/29 x").unwrap();
        assert_eq!(
            url.as_str(),
            "https://order.example.com/power/store/72%2F29%20x/menu"
        );
    }

    #[test]
    fn tracker_path_resolution() {
        let e = endpoints();
        assert_eq!(
            e.tracker_path("").unwrap().as_str(),
            "https://tracker.example.com/tracker-presentation-service/v2/orders"
        );
        assert_eq!(
            e.tracker_path("v2/orders/stores/7229/orders/1").unwrap().as_str(),
            "https://tracker.example.com/tracker-presentation-service/v2/orders/stores/7229/orders/1"
        );
        assert_eq!(
            e.tracker_path("/orderstorage/GetTrackerData?StoreID=7229").unwrap().as_str(),
            "https://tracker.example.com/orderstorage/GetTrackerData?StoreID=7229"
        );
        assert_eq!(
            e.tracker_path("https://elsewhere.example.com/status").unwrap().as_str(),
            "https://elsewhere.example.com/status"
        );
    }

    #[test]
    fn rejects_non_http_bases() {
        for bad in ["not a url", "ftp://order.example.com", "mailto:someone@example.com"] {
            let result = Endpoints::new(bad, DEFAULT_TRACKER_BASE_URL, DEFAULT_REFERER_URL);
            assert!(
                matches!(result, Err(PizzaError::InvalidUrl { .. })),
                "{bad} should be rejected, got: {result:?}"
            );
        }
    }
}
