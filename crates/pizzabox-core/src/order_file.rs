//! YAML order files: a delivery address, line items, and optional customer
//! details that the CLI turns into an API order.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::ConfigError;

#[derive(Debug, Clone, Deserialize)]
pub struct ShippingAddress {
    pub street: String,
    pub postal_code: String,
    pub unit_type: Option<String>,
    pub unit_number: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductSpec {
    pub code: String,
    #[serde(default = "default_qty")]
    pub qty: u32,
    /// Topping code -> portion (`"1/1"`, `"1/2"`, ...) -> amount.
    #[serde(default)]
    pub options: BTreeMap<String, BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CustomerSpec {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderFile {
    pub address: ShippingAddress,
    pub products: Vec<ProductSpec>,
    #[serde(default)]
    pub customer: Option<CustomerSpec>,
    #[serde(default)]
    pub coupons: Vec<String>,
    /// Look up the store's 50%-off coupon and add it when present.
    #[serde(default)]
    pub apply_fifty_percent_coupon: bool,
}

fn default_qty() -> u32 {
    1
}

/// Load and validate an order file from disk.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_order_file(path: &Path) -> Result<OrderFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::OrderFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_order_file(&content)
}

/// Parse and validate order file YAML that is already in memory.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML is malformed or fails validation.
pub fn parse_order_file(content: &str) -> Result<OrderFile, ConfigError> {
    let order_file: OrderFile = serde_yaml::from_str(content)?;
    validate_order_file(&order_file)?;
    Ok(order_file)
}

fn validate_order_file(order_file: &OrderFile) -> Result<(), ConfigError> {
    if order_file.address.street.trim().is_empty() {
        return Err(ConfigError::Validation(
            "address.street must be non-empty".to_string(),
        ));
    }
    if order_file.address.postal_code.trim().is_empty() {
        return Err(ConfigError::Validation(
            "address.postal_code must be non-empty".to_string(),
        ));
    }
    if order_file.products.is_empty() {
        return Err(ConfigError::Validation(
            "at least one product is required".to_string(),
        ));
    }

    for (idx, product) in order_file.products.iter().enumerate() {
        if product.code.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "products[{idx}] has an empty code"
            )));
        }
        if product.qty == 0 {
            return Err(ConfigError::Validation(format!(
                "product '{}' has qty 0; must be at least 1",
                product.code
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "order_file_test.rs"]
mod tests;
