//! JSON field names shared with the rest of the store.
//!
//! Catalog loaders, remote config and persisted store-info documents all use
//! these exact keys; changing one breaks interoperability with stored data.

/// Display name of a category.
pub const CATEGORY_NAME: &str = "name";

/// Ordered array of good item ids belonging to a category.
pub const CATEGORY_GOODS_ITEM_IDS: &str = "goods_itemIds";

/// Array of categories inside a store-info document.
pub const STORE_CATEGORIES: &str = "categories";
