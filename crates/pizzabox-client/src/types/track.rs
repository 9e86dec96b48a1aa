use serde::{Deserialize, Serialize};

use super::null_default;

/// One order found by a phone-number lookup on the tracker.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TrackInfo {
    #[serde(rename = "StoreID", deserialize_with = "null_default")]
    pub store_id: String,
    #[serde(rename = "OrderID", deserialize_with = "null_default")]
    pub order_id: String,
    #[serde(deserialize_with = "null_default")]
    pub order_description: String,
    #[serde(deserialize_with = "null_default")]
    pub order_take_complete_time: String,
    /// Null for ASAP orders; the scheduled time otherwise.
    pub advanced_order_time: serde_json::Value,
    #[serde(deserialize_with = "null_default")]
    pub actions: TrackActions,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TrackActions {
    /// Path of the tracker-status document for this order.
    #[serde(deserialize_with = "null_default")]
    pub track: String,
}

/// Progress snapshot of a single order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TrackerStatus {
    #[serde(deserialize_with = "null_default")]
    pub store_as_of_time: String,
    #[serde(rename = "StoreID", deserialize_with = "null_default")]
    pub store_id: String,
    #[serde(rename = "OrderID", deserialize_with = "null_default")]
    pub order_id: String,
    #[serde(rename = "PulseOrderGuid", deserialize_with = "null_default")]
    pub pulse_order_guid: String,
    #[serde(deserialize_with = "null_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_default")]
    pub service_method: String,
    #[serde(deserialize_with = "null_default")]
    pub order_description: String,
    #[serde(deserialize_with = "null_default")]
    pub order_take_complete_time: String,
    #[serde(deserialize_with = "null_default")]
    pub take_time_secs: i64,
    #[serde(deserialize_with = "null_default")]
    pub order_source_code: String,
    #[serde(deserialize_with = "null_default")]
    pub order_status: String,
    #[serde(deserialize_with = "null_default")]
    pub start_time: String,
    #[serde(deserialize_with = "null_default")]
    pub make_time_secs: i64,
    #[serde(deserialize_with = "null_default")]
    pub oven_time: String,
    #[serde(deserialize_with = "null_default")]
    pub oven_time_secs: i64,
    #[serde(deserialize_with = "null_default")]
    pub rack_time: String,
    #[serde(deserialize_with = "null_default")]
    pub rack_time_secs: i64,
    #[serde(deserialize_with = "null_default")]
    pub route_time: String,
    #[serde(rename = "DriverID", deserialize_with = "null_default")]
    pub driver_id: String,
    #[serde(deserialize_with = "null_default")]
    pub driver_name: String,
    #[serde(deserialize_with = "null_default")]
    pub order_delivery_time_secs: i64,
    #[serde(deserialize_with = "null_default")]
    pub delivery_time: String,
    #[serde(deserialize_with = "null_default")]
    pub order_key: String,
    #[serde(rename = "ManagerID", deserialize_with = "null_default")]
    pub manager_id: String,
    #[serde(deserialize_with = "null_default")]
    pub manager_name: String,
}
