//! Indexed view of the categories in a store-info document.
//!
//! The index validates the document against the embedded schema, decodes each
//! category and maps every good id to the category that lists it.

use crate::catalog::model::VirtualCategory;
use crate::keys::STORE_CATEGORIES;
use crate::schema_loader::{STORE_CATEGORIES_SCHEMA, compile_embedded_schema, validate_against};
use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Default)]
/// Categories in document order plus a good id lookup.
pub struct CategoryIndex {
    categories: Vec<VirtualCategory>,
    by_good: BTreeMap<String, usize>,
}

impl CategoryIndex {
    /// Load and validate a store-info document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let data =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let value: Value =
            serde_json::from_str(&data).with_context(|| format!("parsing {}", path.display()))?;
        Self::from_labeled_value(&value, &path.display().to_string())
            .with_context(|| format!("loading {}", path.display()))
    }

    pub fn from_json_str(data: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(data).context("parsing store catalog")?;
        Self::from_value(&value)
    }

    /// Validate and index an already parsed store-info document.
    ///
    /// Sections other than `categories` are ignored.
    pub fn from_value(value: &Value) -> Result<Self> {
        Self::from_labeled_value(value, "store catalog")
    }

    fn from_labeled_value(value: &Value, label: &str) -> Result<Self> {
        let schema = compile_embedded_schema(STORE_CATEGORIES_SCHEMA)?;
        validate_against(&schema, value, label)?;

        let mut categories = Vec::new();
        if let Some(entries) = value.get(STORE_CATEGORIES).and_then(Value::as_array) {
            for (idx, entry) in entries.iter().enumerate() {
                let category = VirtualCategory::from_json(entry)
                    .with_context(|| format!("decoding category {idx} of {label}"))?;
                categories.push(category);
            }
        }

        let index = Self::from_categories(categories);
        tracing::debug!(
            source = %label,
            categories = index.len(),
            goods = index.by_good.len(),
            "Loaded store categories"
        );
        Ok(index)
    }

    /// Index categories built elsewhere.
    ///
    /// A good listed by several categories resolves to the last one.
    pub fn from_categories(categories: Vec<VirtualCategory>) -> Self {
        let mut by_good = BTreeMap::new();
        for (position, category) in categories.iter().enumerate() {
            for item_id in category.good_item_ids() {
                if let Some(previous) = by_good.insert(item_id.clone(), position) {
                    if previous != position {
                        tracing::warn!(
                            good = %item_id,
                            previous = %categories[previous].name(),
                            current = %category.name(),
                            "Good listed in multiple categories; keeping the later one"
                        );
                    }
                }
            }
        }
        Self {
            categories,
            by_good,
        }
    }

    pub fn categories(&self) -> &[VirtualCategory] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// First category with this name.
    pub fn category(&self, name: &str) -> Option<&VirtualCategory> {
        self.categories.iter().find(|category| category.name() == name)
    }

    /// Category that lists `item_id`, if any.
    pub fn category_for_good(&self, item_id: &str) -> Option<&VirtualCategory> {
        self.by_good
            .get(item_id)
            .map(|&position| &self.categories[position])
    }

    /// Iterates indexed good ids in stable order.
    pub fn good_ids(&self) -> impl Iterator<Item = &str> {
        self.by_good.keys().map(String::as_str)
    }

    /// Render the categories as a store-info `categories` section.
    pub fn to_json(&self) -> Value {
        let mut object = Map::new();
        object.insert(
            STORE_CATEGORIES.to_string(),
            Value::Array(self.categories.iter().map(VirtualCategory::to_json).collect()),
        );
        Value::Object(object)
    }
}
