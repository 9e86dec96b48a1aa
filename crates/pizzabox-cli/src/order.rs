//! Turns an order file or command-line flags into an API order.

use std::path::Path;

use pizzabox_client::{Address, Order, OrderProduct};
use pizzabox_core::{OrderFile, ShippingAddress};

/// Everything needed to build an [`Order`] except the store, which is only
/// known after the store lookup.
#[derive(Debug, Clone)]
pub(crate) struct OrderDraft {
    pub(crate) address: Address,
    pub(crate) products: Vec<OrderProduct>,
    pub(crate) customer: Option<Customer>,
    pub(crate) coupons: Vec<String>,
    pub(crate) apply_fifty_percent_coupon: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Customer {
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) email: String,
    pub(crate) phone: Option<String>,
}

impl OrderDraft {
    pub(crate) fn from_file(path: &Path) -> anyhow::Result<Self> {
        let file = pizzabox_core::load_order_file(path)?;
        tracing::debug!(path = %path.display(), products = file.products.len(), "loaded order file");
        Ok(Self::from(file))
    }

    /// Builds a draft from `--street`, `--postal-code`, and `--product` flags.
    /// Each code becomes one unit with default toppings.
    pub(crate) fn from_args(
        street: String,
        postal_code: String,
        product_codes: &[String],
        apply_fifty_percent_coupon: bool,
    ) -> anyhow::Result<Self> {
        if street.trim().is_empty() || postal_code.trim().is_empty() {
            anyhow::bail!("--street and --postal-code must not be empty");
        }
        if product_codes.is_empty() {
            anyhow::bail!("at least one --product is required");
        }
        if let Some(idx) = product_codes.iter().position(|c| c.trim().is_empty()) {
            anyhow::bail!("--product #{} is empty", idx + 1);
        }

        Ok(Self {
            address: Address::new(street, postal_code),
            products: product_codes
                .iter()
                .map(|code| OrderProduct::new(code.trim(), 1))
                .collect(),
            customer: None,
            coupons: Vec::new(),
            apply_fifty_percent_coupon,
        })
    }

    /// Assembles the order for `store_id`. `fifty_percent_coupon` is added
    /// after the draft's own coupons; `None` adds nothing.
    pub(crate) fn into_order(self, store_id: &str, fifty_percent_coupon: Option<&str>) -> Order {
        let mut order = Order::new()
            .with_address(self.address)
            .with_store_id(store_id);

        if let Some(customer) = self.customer {
            order = order.with_customer_info(customer.first_name, customer.last_name, customer.email);
            if let Some(phone) = customer.phone {
                order = order.with_phone_number(phone);
            }
        }

        for product in self.products {
            order.add_product(product);
        }
        for code in &self.coupons {
            order.add_coupon(code);
        }
        if let Some(code) = fifty_percent_coupon {
            order.add_coupon(code);
        }

        order
    }
}

impl From<OrderFile> for OrderDraft {
    fn from(file: OrderFile) -> Self {
        let products = file
            .products
            .into_iter()
            .map(|item| {
                let mut product = OrderProduct::new(item.code, item.qty);
                product.options = item.options;
                product
            })
            .collect();

        Self {
            address: shipping_address(file.address),
            products,
            customer: file.customer.map(|c| Customer {
                first_name: c.first_name,
                last_name: c.last_name,
                email: c.email,
                phone: c.phone,
            }),
            coupons: file.coupons,
            apply_fifty_percent_coupon: file.apply_fifty_percent_coupon,
        }
    }
}

fn shipping_address(address: ShippingAddress) -> Address {
    let mut out = Address::new(address.street, address.postal_code);
    if let (Some(unit_type), Some(unit_number)) = (address.unit_type, address.unit_number) {
        out = out.with_unit(unit_type, unit_number);
    }
    if let Some(city) = address.city {
        out = out.with_city(city);
    }
    if let Some(region) = address.region {
        out = out.with_region(region);
    }
    out
}
