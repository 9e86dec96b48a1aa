//! Wire types for the ordering and tracker services.
//!
//! Every field name reproduces the remote JSON exactly, including its
//! inconsistent casing (`StoreID`, `PulseOrderGuid`, `metaData`,
//! `descriptions`). Request-side fields mirror the service's omit-when-empty
//! contract: empty strings, zero numbers, `false` flags, and empty
//! collections are left out of the serialized document.
//!
//! Objects whose schema the service owns (`Tags`, `Partners`, `metaData`)
//! are kept as [`FreeForm`] maps of loosely-typed JSON values.

use serde::{Deserialize, Deserializer};

mod menu;
mod order;
mod store;
mod track;

pub use menu::{Menu, MenuMeta, ObjectInfo, ObjectMap, Product, Variant, FIFTY_PERCENT_IMAGE_CODE};
pub use order::{
    Amounts, CouponCode, Description, Order, OrderProduct, OrderRequest, Payment, ProductOption,
    StatusItem, AUTO_ADDED_ORDER_ID, CUSTOMER_AMOUNT_KEY, PRICED_STATUS,
};
pub use store::{Address, OpenStatus, Store, StoresResponse};
pub use track::{TrackActions, TrackInfo, TrackerStatus};

/// String-keyed JSON object whose values may be any JSON type.
pub type FreeForm = serde_json::Map<String, serde_json::Value>;

/// Decodes an explicit JSON `null` as the field's default.
///
/// `#[serde(default)]` only covers a missing key; the service also sends
/// `null` for fields it has no value for.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// `skip_serializing_if` helper for scalar fields: omits `""`, `0`, `false`.
pub(crate) fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}
