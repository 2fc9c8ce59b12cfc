//! Category model for a virtual-goods store.
//!
//! A category groups goods by item id for store organization and storefront
//! rendering. The crate exposes the category record with its JSON and
//! platform-bridge conversions, the shared JSON key constants, and an index
//! over the categories of a store-info document used by `category-check`.

pub mod catalog;
pub mod config;
pub mod error;
pub mod keys;
mod schema_loader;

pub use catalog::{
    BridgeCategory, BridgeItemId, CategoryIndex, PlatformCategorySource, VirtualCategory,
};
pub use config::{CATALOG_PATH_ENV, DEFAULT_CATALOG_FILE, resolve_catalog_path};
pub use error::{BridgeError, MalformedInputError, MalformedProblem};
