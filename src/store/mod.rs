//! In-memory item storage subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP handler
//!     → key.rs (path segment normalised into ItemKey)
//!     → service.rs (ItemStore: list / create / update / delete)
//!     → item.rs (Item: id + open field mapping)
//!     → serialized back to the client as JSON
//! ```
//!
//! # Design Decisions
//! - One `ItemStore` per process, owned by the server and shared via `Arc`
//! - Sequence and id counter live behind the same lock
//! - Ids come from a monotonic counter and are never reused
//! - Field order is preserved (`id` first, then client fields)

pub mod error;
pub mod item;
pub mod key;
pub mod service;

pub use error::StoreError;
pub use item::{Fields, Item};
pub use key::ItemKey;
pub use service::ItemStore;
