use pizzabox_client::endpoints::{
    DEFAULT_ORDER_BASE_URL, DEFAULT_REFERER_URL, DEFAULT_TRACKER_BASE_URL,
};
use pizzabox_client::{Endpoints, Order, PizzaClient};
use pizzabox_core::AppConfig;

use crate::order::OrderDraft;

/// Builds the client, using production endpoints for any URL the
/// configuration does not override.
pub(crate) fn build_client(config: &AppConfig) -> anyhow::Result<PizzaClient> {
    let endpoints = Endpoints::new(
        config
            .order_base_url
            .as_deref()
            .unwrap_or(DEFAULT_ORDER_BASE_URL),
        config
            .tracker_base_url
            .as_deref()
            .unwrap_or(DEFAULT_TRACKER_BASE_URL),
        config.referer_url.as_deref().unwrap_or(DEFAULT_REFERER_URL),
    )?;
    Ok(PizzaClient::with_endpoints(
        config.request_timeout_secs,
        &config.user_agent,
        endpoints,
    )?)
}

/// Print the store that delivers to the given address.
pub(crate) async fn run_store(
    client: &PizzaClient,
    street: &str,
    postal_code: &str,
) -> anyhow::Result<()> {
    let address = pizzabox_client::Address::new(street, postal_code);
    let store = client.find_nearest_store(&address).await?;

    let (carryout, delivery) = store
        .open_status
        .map_or((false, false), |s| (s.carryout, s.delivery));
    println!("{:<10}{:<8}{:<10}DELIVERY", "STORE", "OPEN", "CARRYOUT");
    println!(
        "{:<10}{:<8}{:<10}{}",
        store.store_id,
        yes_no(store.is_open),
        yes_no(carryout),
        yes_no(delivery)
    );

    Ok(())
}

/// Print a store's menu summary.
pub(crate) async fn run_menu(client: &PizzaClient, store_id: &str) -> anyhow::Result<()> {
    let menu = client.get_store_menu(store_id).await?;

    println!("Store: {}", menu.meta.store_id);
    println!("Business date: {}", menu.meta.business_date);
    println!("Menu version: {}", menu.meta.version);
    println!(
        "{} products, {} variants, {} coupons",
        menu.products.len(),
        menu.variants.len(),
        menu.coupons.len()
    );
    match menu.fifty_percent_coupon_code() {
        Some(code) => println!("50% off coupon: {code}"),
        None => println!("50% off coupon: not offered"),
    }

    Ok(())
}

/// Resolve the store, build the order, and price it.
pub(crate) async fn run_price(client: &PizzaClient, draft: OrderDraft) -> anyhow::Result<()> {
    let order = prepare_order(client, draft).await?;
    let price = client.validate_order(&order).await?;
    println!("Store {}: ${price:.2}", order.store_id);
    Ok(())
}

/// Price the order and, only with `confirm`, place it.
pub(crate) async fn run_place(
    client: &PizzaClient,
    draft: OrderDraft,
    confirm: bool,
) -> anyhow::Result<()> {
    let order = prepare_order(client, draft).await?;
    let price = client.validate_order(&order).await?;
    println!("Store {}: ${price:.2}", order.store_id);

    if !confirm {
        println!("not placing the order; re-run with --confirm to place it");
        return Ok(());
    }

    let placed = client.place_order(&order).await?;
    println!("Order ID: {}", placed.order_id);
    println!("Status: {}", placed.status);
    if !placed.estimated_wait_minutes.is_empty() {
        println!("Estimated wait: {} minutes", placed.estimated_wait_minutes);
    }
    for item in &placed.status_items {
        println!("  {}", item.code);
    }

    Ok(())
}

/// Print the tracker status of the latest order placed under `phone`.
pub(crate) async fn run_track(client: &PizzaClient, phone: &str) -> anyhow::Result<()> {
    let path = client.get_tracking_url(phone).await?;
    let status = client.track(&path).await?;

    println!("Order {} at store {}", status.order_id, status.store_id);
    println!("Status: {}", status.order_status);
    if !status.driver_name.is_empty() {
        println!("Driver: {}", status.driver_name);
    }
    if !status.delivery_time.is_empty() {
        println!("Delivered: {}", status.delivery_time);
    }

    Ok(())
}

async fn prepare_order(client: &PizzaClient, draft: OrderDraft) -> anyhow::Result<Order> {
    let store = client.find_nearest_store(&draft.address).await?;
    tracing::info!(store_id = %store.store_id, "using nearest store");

    if !draft.apply_fifty_percent_coupon {
        return Ok(draft.into_order(&store.store_id, None));
    }

    let menu = client.get_store_menu(&store.store_id).await?;
    let coupon = menu.fifty_percent_coupon_code();
    if coupon.is_none() {
        tracing::warn!(store_id = %store.store_id, "store has no 50% off coupon");
    }
    Ok(draft.into_order(&store.store_id, coupon))
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
