#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// Whole-request timeout applied to every call against the ordering API.
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Override for the ordering service base (`/power/...` endpoints).
    /// `None` means the client's production endpoint.
    pub order_base_url: Option<String>,
    /// Override for the tracker service base; `v2/orders` is resolved against it.
    pub tracker_base_url: Option<String>,
    /// Override for the `Referer` header sent when placing an order.
    pub referer_url: Option<String>,
}
