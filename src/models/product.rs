use serde::{Deserialize, Deserializer, Serialize};

/// Treats an explicit JSON `null` like a missing field.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Core product entity. Identity is `id`; uniqueness is only checked when a
/// product is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, alias = "Id")]
    pub id: i32,
    #[serde(default, alias = "Name", deserialize_with = "null_as_empty")]
    pub name: String,
}

impl Product {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Path under which this product is addressable.
    pub fn location(&self) -> String {
        format!("/api/products/{}", self.id)
    }
}

// ── Request payloads ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProduct {
    #[serde(default, alias = "Name", deserialize_with = "null_as_empty")]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_as_id_and_name() {
        let value = serde_json::to_value(Product::new(1, "IPhone")).unwrap();
        assert_eq!(value, json!({ "id": 1, "name": "IPhone" }));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let p: Product = serde_json::from_value(json!({ "id": 9 })).unwrap();
        assert_eq!(p, Product::new(9, ""));

        let p: Product = serde_json::from_value(json!({ "name": "Watch" })).unwrap();
        assert_eq!(p, Product::new(0, "Watch"));
    }

    #[test]
    fn update_payload_defaults_to_empty_name() {
        let req: UpdateProduct = serde_json::from_value(json!({})).unwrap();
        assert!(req.name.is_empty());
    }

    #[test]
    fn null_name_reads_as_empty() {
        let p: Product = serde_json::from_value(json!({ "id": 7, "name": null })).unwrap();
        assert_eq!(p, Product::new(7, ""));

        let req: UpdateProduct = serde_json::from_value(json!({ "name": null })).unwrap();
        assert!(req.name.is_empty());
    }

    #[test]
    fn accepts_capitalized_keys() {
        let p: Product = serde_json::from_value(json!({ "Id": 7, "Name": "Watch" })).unwrap();
        assert_eq!(p, Product::new(7, "Watch"));

        let req: UpdateProduct = serde_json::from_value(json!({ "Name": "Pro" })).unwrap();
        assert_eq!(req.name, "Pro");
    }

    #[test]
    fn location_points_at_item_route() {
        assert_eq!(Product::new(42, "x").location(), "/api/products/42");
    }
}
