//! Client for the pizza ordering (`power`) and tracker web services.
//!
//! Every operation on [`PizzaClient`] is a single HTTP request whose JSON
//! response is decoded into the types in [`types`]. Nothing is retried.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod types;

pub use client::PizzaClient;
pub use endpoints::Endpoints;
pub use error::PizzaError;
pub use types::{
    Address, Menu, OpenStatus, Order, OrderProduct, OrderRequest, Payment, StatusItem, Store,
    StoresResponse, TrackInfo, TrackerStatus,
};
