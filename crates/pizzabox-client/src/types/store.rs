use serde::{Deserialize, Serialize};

use super::null_default;

/// A delivery address.
///
/// Sent as the store-locator query and embedded in every order. The service
/// only needs `Street` and `PostalCode` to resolve a store; the remaining
/// fields are echoed back in the locator response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Address {
    #[serde(deserialize_with = "null_default")]
    pub street: String,
    #[serde(deserialize_with = "null_default")]
    pub street_number: String,
    #[serde(deserialize_with = "null_default")]
    pub street_name: String,
    #[serde(deserialize_with = "null_default")]
    pub unit_type: String,
    #[serde(deserialize_with = "null_default")]
    pub unit_number: String,
    #[serde(deserialize_with = "null_default")]
    pub city: String,
    #[serde(deserialize_with = "null_default")]
    pub region: String,
    #[serde(deserialize_with = "null_default")]
    pub postal_code: String,
}

impl Address {
    /// Creates an address with the two fields the store locator requires.
    #[must_use]
    pub fn new(street: impl Into<String>, postal_code: impl Into<String>) -> Self {
        Self {
            street: street.into(),
            postal_code: postal_code.into(),
            ..Self::default()
        }
    }

    /// Sets the unit, e.g. `("Apartment", "4B")`.
    #[must_use]
    pub fn with_unit(mut self, unit_type: impl Into<String>, unit_number: impl Into<String>) -> Self {
        self.unit_type = unit_type.into();
        self.unit_number = unit_number.into();
        self
    }

    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }
}

/// Carryout/delivery availability reported under `ServiceIsOpen`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OpenStatus {
    #[serde(deserialize_with = "null_default")]
    pub carryout: bool,
    #[serde(deserialize_with = "null_default")]
    pub delivery: bool,
}

/// One candidate store from the store locator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Store {
    #[serde(rename = "StoreID", deserialize_with = "null_default")]
    pub store_id: String,
    #[serde(rename = "IsDeliveryStore", deserialize_with = "null_default")]
    pub is_delivery_store: bool,
    #[serde(rename = "IsOpen", deserialize_with = "null_default")]
    pub is_open: bool,
    #[serde(rename = "ServiceIsOpen")]
    pub open_status: Option<OpenStatus>,
}

/// Response body of `GET /power/store-locator`. Stores are ordered nearest first.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StoresResponse {
    #[serde(rename = "Status", deserialize_with = "null_default")]
    pub status: i32,
    #[serde(rename = "Stores", deserialize_with = "null_default")]
    pub stores: Vec<Store>,
    #[serde(rename = "Address")]
    pub requested_address: Option<Address>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_serializes_with_remote_field_names() {
        let address = Address::new("111 SW 5th Ave", "97204")
            .with_unit("Suite", "200")
            .with_city("Portland")
            .with_region("OR");
        let json = serde_json::to_value(&address).unwrap();

        assert_eq!(json["Street"], "111 SW 5th Ave");
        assert_eq!(json["PostalCode"], "97204");
        assert_eq!(json["UnitType"], "Suite");
        assert_eq!(json["UnitNumber"], "200");
        assert_eq!(json["City"], "Portland");
        assert_eq!(json["Region"], "OR");
        assert_eq!(json["StreetNumber"], "");
    }

    #[test]
    fn stores_response_decodes_service_shape() {
        let body = r#"{
            "Status": 0,
            "Stores": [
                {"StoreID": "7229", "IsDeliveryStore": true, "IsOpen": true,
                 "ServiceIsOpen": {"Carryout": true, "Delivery": false},
                 "MinDistance": 0.4}
            ],
            "Address": {"Street": "111 SW 5TH AVE", "PostalCode": "97204"}
        }"#;
        let parsed: StoresResponse = serde_json::from_str(body).unwrap();

        assert_eq!(parsed.stores.len(), 1);
        let store = &parsed.stores[0];
        assert_eq!(store.store_id, "7229");
        assert!(store.is_delivery_store);
        assert_eq!(
            store.open_status,
            Some(OpenStatus {
                carryout: true,
                delivery: false
            })
        );
        assert_eq!(
            parsed.requested_address.map(|a| a.street),
            Some("111 SW 5TH AVE".to_string())
        );
    }

    #[test]
    fn stores_response_treats_null_as_empty() {
        let body = r#"{
            "Status": 0,
            "Stores": null,
            "Address": {"Street": "1 NOWHERE RD", "City": null, "PostalCode": "00000"}
        }"#;
        let parsed: StoresResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.stores.is_empty());
        assert_eq!(parsed.requested_address.map(|a| a.city), Some(String::new()));

        let store: Store =
            serde_json::from_str(r#"{"StoreID": "7229", "IsOpen": null, "ServiceIsOpen": null}"#)
                .unwrap();
        assert_eq!(store.store_id, "7229");
        assert!(!store.is_open);
        assert!(store.open_status.is_none());
    }

    #[test]
    fn stores_response_tolerates_missing_store_list() {
        let parsed: StoresResponse = serde_json::from_str(r#"{"Status": -1}"#).unwrap();
        assert_eq!(parsed.status, -1);
        assert!(parsed.stores.is_empty());
    }
}
