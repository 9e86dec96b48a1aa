//! Structured store menu returned by `GET /power/store/{id}/menu`.
//!
//! All collections are keyed by the service's item code. `BTreeMap` keeps
//! iteration order stable, so lookups that scan a collection always pick
//! the same entry for the same menu.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{null_default, FreeForm};

/// Image code the service attaches to its online-only 50%-off coupon.
pub const FIFTY_PERCENT_IMAGE_CODE: &str = "OLO50";

/// Category name -> item code -> item, as used for flavors, sizes, and toppings.
pub type ObjectMap = BTreeMap<String, BTreeMap<String, ObjectInfo>>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Menu {
    #[serde(rename = "Misc", deserialize_with = "null_default")]
    pub meta: MenuMeta,
    #[serde(rename = "Flavors", deserialize_with = "null_default")]
    pub flavors: ObjectMap,
    #[serde(rename = "Products", deserialize_with = "null_default")]
    pub products: BTreeMap<String, Product>,
    #[serde(rename = "Sizes", deserialize_with = "null_default")]
    pub sizes: ObjectMap,
    #[serde(rename = "Toppings", deserialize_with = "null_default")]
    pub toppings: ObjectMap,
    #[serde(rename = "Variants", deserialize_with = "null_default")]
    pub variants: BTreeMap<String, Variant>,
    #[serde(rename = "Coupons", deserialize_with = "null_default")]
    pub coupons: BTreeMap<String, ObjectInfo>,
}

impl Menu {
    /// Returns the code of the 50%-off coupon (image code `OLO50`), if the
    /// store is currently offering it.
    ///
    /// This is the only coupon lookup the client supports; anything else has
    /// to be found by scanning [`Menu::coupons`] directly.
    #[must_use]
    pub fn fifty_percent_coupon_code(&self) -> Option<&str> {
        self.coupons
            .values()
            .find(|coupon| coupon.image_code == FIFTY_PERCENT_IMAGE_CODE)
            .map(|coupon| coupon.code.as_str())
    }

    #[must_use]
    pub fn product(&self, code: &str) -> Option<&Product> {
        self.products.get(code)
    }

    /// Looks up an orderable variant (e.g. `14SCREEN`) by code.
    #[must_use]
    pub fn variant(&self, code: &str) -> Option<&Variant> {
        self.variants.get(code)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MenuMeta {
    #[serde(deserialize_with = "null_default")]
    pub status: i32,
    #[serde(rename = "StoreID", deserialize_with = "null_default")]
    pub store_id: String,
    #[serde(deserialize_with = "null_default")]
    pub business_date: String,
    #[serde(deserialize_with = "null_default")]
    pub store_as_of_time: String,
    #[serde(deserialize_with = "null_default")]
    pub language_code: String,
    #[serde(deserialize_with = "null_default")]
    pub version: String,
    #[serde(deserialize_with = "null_default")]
    pub expires_on: String,
}

/// Generic menu entry: coupons, flavors, sizes, toppings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ObjectInfo {
    #[serde(deserialize_with = "null_default")]
    pub code: String,
    #[serde(deserialize_with = "null_default")]
    pub image_code: String,
    #[serde(deserialize_with = "null_default")]
    pub description: String,
    #[serde(deserialize_with = "null_default")]
    pub local: bool,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub sort_seq: String,
    #[serde(deserialize_with = "null_default")]
    pub tags: FreeForm,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Product {
    #[serde(deserialize_with = "null_default")]
    pub available_toppings: String,
    #[serde(deserialize_with = "null_default")]
    pub available_sides: String,
    #[serde(deserialize_with = "null_default")]
    pub code: String,
    #[serde(deserialize_with = "null_default")]
    pub default_toppings: String,
    #[serde(deserialize_with = "null_default")]
    pub default_sides: String,
    #[serde(deserialize_with = "null_default")]
    pub description: String,
    #[serde(deserialize_with = "null_default")]
    pub image_code: String,
    #[serde(deserialize_with = "null_default")]
    pub local: bool,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub product_type: String,
    #[serde(deserialize_with = "null_default")]
    pub tags: FreeForm,
    /// Codes of the orderable variants of this product.
    #[serde(deserialize_with = "null_default")]
    pub variants: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Variant {
    #[serde(deserialize_with = "null_default")]
    pub code: String,
    #[serde(deserialize_with = "null_default")]
    pub flavor_code: String,
    #[serde(deserialize_with = "null_default")]
    pub image_code: String,
    #[serde(deserialize_with = "null_default")]
    pub local: bool,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    /// Decimal string, e.g. `"13.99"`.
    #[serde(deserialize_with = "null_default")]
    pub price: String,
    #[serde(deserialize_with = "null_default")]
    pub product_code: String,
    #[serde(deserialize_with = "null_default")]
    pub size_code: String,
    #[serde(deserialize_with = "null_default")]
    pub tags: FreeForm,
    #[serde(deserialize_with = "null_default")]
    pub allowed_cooking_instructions: String,
    #[serde(deserialize_with = "null_default")]
    pub default_cooking_instructions: String,
    #[serde(deserialize_with = "null_default")]
    pub prepared: bool,
}
