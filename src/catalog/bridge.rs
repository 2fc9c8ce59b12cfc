//! Platform bridge ingestion.
//!
//! Native store runtimes expose categories through their own object model.
//! Adapters implement `PlatformCategorySource` so the category record never
//! depends on a particular bridge; `BridgeCategory` covers bridges that hand
//! the native object over as JSON.

use crate::catalog::model::VirtualCategory;
use crate::error::BridgeError;
use serde::Deserialize;
use serde_json::{Number, Value};
use std::fmt;

/// Anything that can yield a category's name and good ids.
pub trait PlatformCategorySource {
    /// Read `(name, good item ids)` with ids in the native iteration order.
    fn read_category(&self) -> Result<(String, Vec<String>), BridgeError>;
}

impl VirtualCategory {
    /// Build a category from a platform bridge source.
    ///
    /// Any accessor failure aborts construction of this record.
    pub fn from_platform<S>(source: &S) -> Result<Self, BridgeError>
    where
        S: PlatformCategorySource + ?Sized,
    {
        let (name, good_item_ids) = source.read_category()?;
        Ok(VirtualCategory::new(name, good_item_ids))
    }
}

/// Identifier object handed over by a bridge; rendered with its string form.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BridgeItemId {
    Text(String),
    Number(Number),
}

impl fmt::Display for BridgeItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeItemId::Text(text) => f.write_str(text),
            BridgeItemId::Number(number) => write!(f, "{number}"),
        }
    }
}

/// Category payload as emitted by a native bridge (`getName`,
/// `getGoodsItemIds`).
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeCategory {
    pub name: String,
    pub goods_item_ids: Vec<BridgeItemId>,
}

impl BridgeCategory {
    pub fn from_json_str(payload: &str) -> Result<Self, BridgeError> {
        Ok(serde_json::from_str(payload)?)
    }

    pub fn from_value(payload: Value) -> Result<Self, BridgeError> {
        Ok(serde_json::from_value(payload)?)
    }
}

impl PlatformCategorySource for BridgeCategory {
    fn read_category(&self) -> Result<(String, Vec<String>), BridgeError> {
        let ids = self.goods_item_ids.iter().map(ToString::to_string).collect();
        Ok((self.name.clone(), ids))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct ReleasedObject;

    impl PlatformCategorySource for ReleasedObject {
        fn read_category(&self) -> Result<(String, Vec<String>), BridgeError> {
            Err(BridgeError::Accessor {
                accessor: "getGoodsItemIds".into(),
                message: "native object already released".into(),
            })
        }
    }

    #[test]
    fn bridge_payload_builds_category_in_order() {
        let bridge = BridgeCategory::from_json_str(
            r#"{"name":"Weapons","goodsItemIds":["sword_001","shield_002"]}"#,
        )
        .unwrap();
        let category = VirtualCategory::from_platform(&bridge).unwrap();
        assert_eq!(category, VirtualCategory::new("Weapons", ["sword_001", "shield_002"]));
    }

    #[test]
    fn numeric_ids_use_their_string_form() {
        let bridge =
            BridgeCategory::from_value(json!({"name": "Legacy", "goodsItemIds": [42, "x", 7]}))
                .unwrap();
        let category = VirtualCategory::from_platform(&bridge).unwrap();
        assert_eq!(category.good_item_ids(), ["42", "x", "7"]);
    }

    #[test]
    fn accessor_failure_aborts_construction() {
        let err = VirtualCategory::from_platform(&ReleasedObject).unwrap_err();
        assert!(matches!(err, BridgeError::Accessor { .. }));
    }

    #[test]
    fn undecodable_payload_is_decode_error() {
        let err = BridgeCategory::from_json_str(r#"{"name":"Weapons"}"#).unwrap_err();
        assert!(matches!(err, BridgeError::Decode(_)));
    }

    #[test]
    fn trait_objects_are_accepted() {
        let bridge = BridgeCategory {
            name: "Boxed".into(),
            goods_item_ids: vec![BridgeItemId::Text("a".into())],
        };
        let source: &dyn PlatformCategorySource = &bridge;
        let category = VirtualCategory::from_platform(source).unwrap();
        assert_eq!(category.name(), "Boxed");
    }
}
