//! The order document sent to the pricing and placement endpoints.
//!
//! The same [`Order`] type is used in both directions: callers build one with
//! [`Order::new`] and the builder methods, and the service echoes it back with
//! `OrderID`, `Amounts`, `Status`, and `StatusItems` filled in.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{is_default, null_default, Address, FreeForm};

/// Order `Status` the pricing endpoint reports for a valid order.
pub const PRICED_STATUS: i32 = 1;

/// Informational status item attached to most priced orders. Never a failure.
pub const AUTO_ADDED_ORDER_ID: &str = "AutoAddedOrderId";

/// Key of the total the customer pays in [`Order::amounts`].
pub const CUSTOMER_AMOUNT_KEY: &str = "Customer";

const MARKET: &str = "UNITED_STATES";
const CURRENCY: &str = "USD";
const LANGUAGE_CODE: &str = "en";
const ORDER_CHANNEL: &str = "OLO";
const ORDER_METHOD: &str = "Web";
const SERVICE_METHOD: &str = "Delivery";
const SOURCE_ORGANIZATION_URI: &str = "order.dominos.com";
const VERSION: &str = "1.0";

/// Amount name (`Customer`, `Tax`, `Menu`, ...) -> value.
pub type Amounts = BTreeMap<String, f64>;

/// Portion (`"1/1"`, `"1/2"`, `"2/2"`) -> amount (`"0"`, `"1"`, `"1.5"`).
pub type ProductOption = BTreeMap<String, String>;

/// Request and response envelope for pricing and placement: `{"Order": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    #[serde(rename = "Order")]
    pub order: Order,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouponCode {
    #[serde(rename = "Code", default, deserialize_with = "null_default")]
    pub code: String,
}

/// One line item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderProduct {
    #[serde(rename = "ID", default, skip_serializing_if = "is_default", deserialize_with = "null_default")]
    pub id: i64,
    #[serde(default, skip_serializing_if = "is_default", deserialize_with = "null_default")]
    pub code: String,
    #[serde(default, skip_serializing_if = "is_default", deserialize_with = "null_default")]
    pub qty: u32,
    #[serde(default, skip_serializing_if = "is_default", deserialize_with = "null_default")]
    pub category_code: String,
    #[serde(default, skip_serializing_if = "is_default", deserialize_with = "null_default")]
    pub flavor_code: String,
    #[serde(default, skip_serializing_if = "is_default", deserialize_with = "null_default")]
    pub status: i32,
    #[serde(rename = "LikeProductID", default, skip_serializing_if = "is_default", deserialize_with = "null_default")]
    pub like_product_id: i64,
    #[serde(default, skip_serializing_if = "is_default", deserialize_with = "null_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "is_default", deserialize_with = "null_default")]
    pub is_new: bool,
    #[serde(default, skip_serializing_if = "is_default", deserialize_with = "null_default")]
    pub needs_customization: bool,
    #[serde(default, skip_serializing_if = "is_default", deserialize_with = "null_default")]
    pub auto_remove: bool,
    #[serde(default, skip_serializing_if = "is_default", deserialize_with = "null_default")]
    pub fulfilled: bool,
    /// Topping or sauce code -> portion coverage.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty", deserialize_with = "null_default")]
    pub options: BTreeMap<String, ProductOption>,
    #[serde(default, skip_serializing_if = "FreeForm::is_empty", deserialize_with = "null_default")]
    pub tags: FreeForm,
    #[serde(rename = "descriptions", default, skip_serializing_if = "Vec::is_empty", deserialize_with = "null_default")]
    pub descriptions: Vec<Description>,
}

impl OrderProduct {
    #[must_use]
    pub fn new(code: impl Into<String>, qty: u32) -> Self {
        Self {
            code: code.into(),
            qty,
            ..Self::default()
        }
    }

    /// Sets the coverage of one topping, e.g. `("P", "1/1", "1.5")` for extra
    /// pepperoni on the whole pizza.
    #[must_use]
    pub fn with_option(
        mut self,
        topping: impl Into<String>,
        portion: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        self.options
            .entry(topping.into())
            .or_default()
            .insert(portion.into(), amount.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, portion_code: impl Into<String>, value: impl Into<String>) -> Self {
        self.descriptions.push(Description {
            portion_code: portion_code.into(),
            value: value.into(),
        });
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Description {
    #[serde(deserialize_with = "null_default")]
    pub portion_code: String,
    #[serde(deserialize_with = "null_default")]
    pub value: String,
}

#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Payment {
    #[serde(rename = "Type", default, deserialize_with = "null_default")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "is_default", deserialize_with = "null_default")]
    pub amount: f64,
    #[serde(default, skip_serializing_if = "is_default", deserialize_with = "null_default")]
    pub card_type: String,
    #[serde(default, skip_serializing_if = "is_default", deserialize_with = "null_default")]
    pub number: String,
    #[serde(default, skip_serializing_if = "is_default", deserialize_with = "null_default")]
    pub expiration: String,
    #[serde(default, skip_serializing_if = "is_default", deserialize_with = "null_default")]
    pub security_code: String,
    #[serde(default, skip_serializing_if = "is_default", deserialize_with = "null_default")]
    pub postal_code: String,
}

impl std::fmt::Debug for Payment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Payment")
            .field("kind", &self.kind)
            .field("amount", &self.amount)
            .field("card_type", &self.card_type)
            .field("number", &redact(&self.number))
            .field("expiration", &self.expiration)
            .field("security_code", &redact(&self.security_code))
            .field("postal_code", &self.postal_code)
            .finish()
    }
}

fn redact(value: &str) -> &'static str {
    if value.is_empty() {
        ""
    } else {
        "[redacted]"
    }
}

/// A status item from a priced or placed order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusItem {
    #[serde(rename = "Code", default, deserialize_with = "null_default")]
    pub code: String,
    /// Everything else the service attached (`Message`, `PulseCode`, ...).
    #[serde(flatten)]
    pub extra: FreeForm,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Order {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Vec::is_empty", deserialize_with = "null_default")]
    pub coupons: Vec<CouponCode>,
    #[serde(rename = "CustomerID", default, skip_serializing_if = "is_default", deserialize_with = "null_default")]
    pub customer_id: String,
    #[serde(default, skip_serializing_if = "is_default", deserialize_with = "null_default")]
    pub email: String,
    #[serde(default, skip_serializing_if = "is_default", deserialize_with = "null_default")]
    pub extension: String,
    #[serde(default, skip_serializing_if = "is_default", deserialize_with = "null_default")]
    pub first_name: String,
    #[serde(default, skip_serializing_if = "is_default", deserialize_with = "null_default")]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "is_default", deserialize_with = "null_default")]
    language_code: String,
    #[serde(default, skip_serializing_if = "is_default", deserialize_with = "null_default")]
    order_channel: String,
    #[serde(rename = "OrderID", default, skip_serializing_if = "is_default", deserialize_with = "null_default")]
    pub order_id: String,
    #[serde(default, skip_serializing_if = "is_default", deserialize_with = "null_default")]
    order_method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_taker: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty", deserialize_with = "null_default")]
    pub payments: Vec<Payment>,
    #[serde(default, skip_serializing_if = "is_default", deserialize_with = "null_default")]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty", deserialize_with = "null_default")]
    pub products: Vec<OrderProduct>,
    #[serde(default, skip_serializing_if = "is_default", deserialize_with = "null_default")]
    market: String,
    #[serde(default, skip_serializing_if = "is_default", deserialize_with = "null_default")]
    currency: String,
    #[serde(default, skip_serializing_if = "is_default", deserialize_with = "null_default")]
    service_method: String,
    #[serde(rename = "SourceOrganizationURI", default, skip_serializing_if = "is_default", deserialize_with = "null_default")]
    source_organization_uri: String,
    #[serde(rename = "StoreID", default, skip_serializing_if = "is_default", deserialize_with = "null_default")]
    pub store_id: String,
    #[serde(default, skip_serializing_if = "FreeForm::is_empty", deserialize_with = "null_default")]
    pub tags: FreeForm,
    #[serde(default, skip_serializing_if = "is_default", deserialize_with = "null_default")]
    version: String,
    #[serde(default, skip_serializing_if = "is_default", deserialize_with = "null_default")]
    no_combine: bool,
    #[serde(default, skip_serializing_if = "FreeForm::is_empty", deserialize_with = "null_default")]
    pub partners: FreeForm,
    #[serde(default, skip_serializing_if = "is_default", deserialize_with = "null_default")]
    new_user: bool,
    #[serde(rename = "metaData", default, skip_serializing_if = "FreeForm::is_empty", deserialize_with = "null_default")]
    pub meta_data: FreeForm,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty", deserialize_with = "null_default")]
    pub amounts: Amounts,
    #[serde(default, skip_serializing_if = "is_default", deserialize_with = "null_default")]
    pub business_date: String,
    #[serde(default, skip_serializing_if = "is_default", deserialize_with = "null_default")]
    pub estimated_wait_minutes: String,
    #[serde(default, skip_serializing_if = "is_default", deserialize_with = "null_default")]
    pub price_order_time: String,
    #[serde(default, skip_serializing_if = "is_default", deserialize_with = "null_default")]
    pub status: i32,
    #[serde(default, skip_serializing_if = "Vec::is_empty", deserialize_with = "null_default")]
    pub status_items: Vec<StatusItem>,
}

impl Order {
    /// Creates an empty delivery order carrying the fixed identity the
    /// service expects from a web client (US market, `OLO` channel, `Web`
    /// method, `Delivery` service, version `1.0`, new user, no combining).
    #[must_use]
    pub fn new() -> Self {
        Self {
            address: None,
            coupons: Vec::new(),
            customer_id: String::new(),
            email: String::new(),
            extension: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            language_code: LANGUAGE_CODE.to_string(),
            order_channel: ORDER_CHANNEL.to_string(),
            order_id: String::new(),
            order_method: ORDER_METHOD.to_string(),
            order_taker: None,
            payments: Vec::new(),
            phone: String::new(),
            products: Vec::new(),
            market: MARKET.to_string(),
            currency: CURRENCY.to_string(),
            service_method: SERVICE_METHOD.to_string(),
            source_organization_uri: SOURCE_ORGANIZATION_URI.to_string(),
            store_id: String::new(),
            tags: FreeForm::new(),
            version: VERSION.to_string(),
            no_combine: true,
            partners: FreeForm::new(),
            new_user: true,
            meta_data: FreeForm::new(),
            amounts: Amounts::new(),
            business_date: String::new(),
            estimated_wait_minutes: String::new(),
            price_order_time: String::new(),
            status: 0,
            status_items: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    #[must_use]
    pub fn with_store_id(mut self, store_id: impl Into<String>) -> Self {
        self.store_id = store_id.into();
        self
    }

    #[must_use]
    pub fn with_customer_info(
        mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self.email = email.into();
        self
    }

    #[must_use]
    pub fn with_phone_number(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    #[must_use]
    pub fn with_product(mut self, product: OrderProduct) -> Self {
        self.add_product(product);
        self
    }

    #[must_use]
    pub fn with_coupon(mut self, code: &str) -> Self {
        self.add_coupon(code);
        self
    }

    pub fn add_product(&mut self, product: OrderProduct) {
        self.products.push(product);
    }

    /// Adds a coupon code. Empty codes are ignored so the result of a failed
    /// coupon lookup can be passed straight through.
    pub fn add_coupon(&mut self, code: &str) {
        if !code.is_empty() {
            self.coupons.push(CouponCode {
                code: code.to_string(),
            });
        }
    }

    pub fn add_payment(&mut self, payment: Payment) {
        self.payments.push(payment);
    }

    /// The `Customer` total from [`Order::amounts`]; `0.0` when the service
    /// did not report one.
    #[must_use]
    pub fn customer_price(&self) -> f64 {
        self.amounts
            .get(CUSTOMER_AMOUNT_KEY)
            .copied()
            .unwrap_or_default()
    }

    /// Status item codes that describe a problem, in response order.
    pub fn failure_codes(&self) -> impl Iterator<Item = &str> {
        self.status_items
            .iter()
            .map(|item| item.code.as_str())
            .filter(|code| *code != AUTO_ADDED_ORDER_ID)
    }

    #[must_use]
    pub fn market(&self) -> &str {
        &self.market
    }

    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    #[must_use]
    pub fn language_code(&self) -> &str {
        &self.language_code
    }

    #[must_use]
    pub fn order_channel(&self) -> &str {
        &self.order_channel
    }

    #[must_use]
    pub fn order_method(&self) -> &str {
        &self.order_method
    }

    #[must_use]
    pub fn service_method(&self) -> &str {
        &self.service_method
    }

    #[must_use]
    pub fn source_organization_uri(&self) -> &str {
        &self.source_organization_uri
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    #[must_use]
    pub fn no_combine(&self) -> bool {
        self.no_combine
    }

    #[must_use]
    pub fn new_user(&self) -> bool {
        self.new_user
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "order_test.rs"]
mod tests;
