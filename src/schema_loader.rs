//! JSON Schema compilation and validation for store documents.
//!
//! Schemas ship inside the crate so validation does not depend on the working
//! directory. Validation collects every violation instead of stopping at the
//! first one; loaders report them together.

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;

/// Schema for a store-info document's category section.
pub(crate) const STORE_CATEGORIES_SCHEMA: &str =
    include_str!("../schema/store_categories.schema.json");

/// Result of compiling a schema.
pub(crate) struct SchemaLoadResult {
    pub title: String,
    pub compiled: JSONSchema,
}

pub(crate) fn compile_embedded_schema(source: &str) -> Result<SchemaLoadResult> {
    let schema: Value = serde_json::from_str(source).context("parsing embedded schema")?;
    let title = schema
        .get("title")
        .and_then(Value::as_str)
        .ok_or_else(|| anyhow!("embedded schema missing title"))?
        .to_string();
    let compiled = JSONSchema::compile(&schema)
        .map_err(|err| anyhow!("compiling schema {title}: {err}"))?;
    Ok(SchemaLoadResult { title, compiled })
}

/// Returns one message per schema violation, each prefixed with the failing
/// instance path.
pub(crate) fn schema_violations(schema: &SchemaLoadResult, instance: &Value) -> Vec<String> {
    match schema.compiled.validate(instance) {
        Ok(()) => Vec::new(),
        Err(errors) => errors
            .map(|err| {
                let path = err.instance_path.to_string();
                if path.is_empty() {
                    err.to_string()
                } else {
                    format!("{path}: {err}")
                }
            })
            .collect(),
    }
}

/// Validate `instance`, failing with every violation joined by newlines.
pub(crate) fn validate_against(
    schema: &SchemaLoadResult,
    instance: &Value,
    label: &str,
) -> Result<()> {
    let violations = schema_violations(schema, instance);
    if violations.is_empty() {
        return Ok(());
    }
    bail!(
        "{label} failed {} schema validation:\n{}",
        schema.title,
        violations.join("\n")
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn embedded_schema_compiles() {
        let schema = compile_embedded_schema(STORE_CATEGORIES_SCHEMA).unwrap();
        assert_eq!(schema.title, "store_categories");
    }

    #[test]
    fn reports_every_violation() {
        let schema = compile_embedded_schema(STORE_CATEGORIES_SCHEMA).unwrap();
        let doc = json!({
            "categories": [
                {"goods_itemIds": []},
                {"name": "Armor", "goods_itemIds": "helmet"}
            ]
        });
        let violations = schema_violations(&schema, &doc);
        assert_eq!(violations.len(), 2, "{violations:?}");
        assert!(violations.iter().any(|v| v.starts_with("/categories/0")));
        assert!(violations.iter().any(|v| v.starts_with("/categories/1")));
    }

    #[test]
    fn validate_against_labels_failure() {
        let schema = compile_embedded_schema(STORE_CATEGORIES_SCHEMA).unwrap();
        let err = validate_against(&schema, &json!({}), "fixture").unwrap_err();
        assert!(err.to_string().starts_with("fixture failed store_categories"));
        assert!(validate_against(&schema, &json!({"categories": []}), "fixture").is_ok());
    }

    #[test]
    fn rejects_schema_without_title() {
        assert!(compile_embedded_schema(r#"{"type": "object"}"#).is_err());
    }
}
