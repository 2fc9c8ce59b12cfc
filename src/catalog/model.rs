//! Category record and its JSON representation.
//!
//! A category names a group of virtual goods for arranging the store and for
//! storefront themes that render goods per category. The record only carries
//! good ids; resolving them against an item registry is the caller's job.

use crate::error::{MalformedInputError, MalformedProblem};
use crate::keys::{CATEGORY_GOODS_ITEM_IDS, CATEGORY_NAME};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Named, ordered group of good item ids.
///
/// Immutable once built. Ids keep their input order and duplicates are kept
/// as given.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct VirtualCategory {
    #[serde(rename = "name")]
    name: String,
    #[serde(rename = "goods_itemIds")]
    good_item_ids: Vec<String>,
}

impl VirtualCategory {
    pub fn new<I, S>(name: impl Into<String>, good_item_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            good_item_ids: good_item_ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn good_item_ids(&self) -> &[String] {
        &self.good_item_ids
    }

    pub fn contains_good(&self, item_id: &str) -> bool {
        self.good_item_ids.iter().any(|id| id == item_id)
    }

    pub fn into_parts(self) -> (String, Vec<String>) {
        (self.name, self.good_item_ids)
    }

    /// Decode a category from a JSON tree.
    ///
    /// Requires a string under `name` and an array of strings under
    /// `goods_itemIds`; anything else is rejected with the offending field.
    /// Extra keys are ignored.
    pub fn from_json(value: &Value) -> Result<Self, MalformedInputError> {
        let object = value
            .as_object()
            .ok_or_else(|| MalformedInputError::new("category", MalformedProblem::NotAnObject))?;

        let name = match object.get(CATEGORY_NAME) {
            None => {
                return Err(MalformedInputError::new(
                    CATEGORY_NAME,
                    MalformedProblem::Missing,
                ));
            }
            Some(Value::String(name)) => name.clone(),
            Some(_) => {
                return Err(MalformedInputError::new(
                    CATEGORY_NAME,
                    MalformedProblem::ExpectedString,
                ));
            }
        };

        let raw_ids = match object.get(CATEGORY_GOODS_ITEM_IDS) {
            None => {
                return Err(MalformedInputError::new(
                    CATEGORY_GOODS_ITEM_IDS,
                    MalformedProblem::Missing,
                ));
            }
            Some(Value::Array(ids)) => ids,
            Some(_) => {
                return Err(MalformedInputError::new(
                    CATEGORY_GOODS_ITEM_IDS,
                    MalformedProblem::ExpectedArray,
                ));
            }
        };

        let good_item_ids = raw_ids
            .iter()
            .enumerate()
            .map(|(idx, id)| {
                id.as_str().map(str::to_string).ok_or_else(|| {
                    MalformedInputError::new(
                        CATEGORY_GOODS_ITEM_IDS,
                        MalformedProblem::ExpectedStringElement(idx),
                    )
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name,
            good_item_ids,
        })
    }

    /// Render the category as a JSON object.
    pub fn to_json(&self) -> Value {
        let mut object = Map::new();
        object.insert(CATEGORY_NAME.to_string(), Value::String(self.name.clone()));
        object.insert(
            CATEGORY_GOODS_ITEM_IDS.to_string(),
            Value::Array(
                self.good_item_ids
                    .iter()
                    .cloned()
                    .map(Value::String)
                    .collect(),
            ),
        );
        Value::Object(object)
    }
}

impl TryFrom<&Value> for VirtualCategory {
    type Error = MalformedInputError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Self::from_json(value)
    }
}

impl From<&VirtualCategory> for Value {
    fn from(category: &VirtualCategory) -> Self {
        category.to_json()
    }
}
