//! Rust client for the item store service.

mod client;

pub use client::{ClientError, Item, ItemsClient};
