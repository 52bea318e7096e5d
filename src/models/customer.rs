//! Customer records

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::{ModelError, ModelResult};
use super::fields::{explicit, to_row, Timestamp};
use crate::store::Row;

/// Table holding customers
pub const CUSTOMERS_TABLE: &str = "customers";

/// Status a customer row reports when the column is absent
pub const DEFAULT_CUSTOMER_STATUS: &str = "active";

fn default_status() -> Option<String> {
    Some(DEFAULT_CUSTOMER_STATUS.to_string())
}

/// A persisted customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default = "default_status")]
    pub status: Option<String>,
    pub created_at: Timestamp,
}

/// Body of `POST /api/customers`.
///
/// Optional fields keep track of whether the caller set them; only set
/// fields reach the insert so the store's column defaults still apply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub name: String,
    #[serde(default, deserialize_with = "explicit", skip_serializing_if = "Option::is_none")]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit", skip_serializing_if = "Option::is_none")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit", skip_serializing_if = "Option::is_none")]
    pub status: Option<Option<String>>,
}

impl CustomerCreate {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> ModelResult<()> {
        if self.name.trim().is_empty() {
            return Err(ModelError::EmptyField("name"));
        }
        Ok(())
    }

    /// Validate and build the insert payload
    pub fn into_row(self) -> ModelResult<Row> {
        self.validate()?;
        to_row(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fields::from_row;
    use serde_json::json;

    #[test]
    fn test_insert_payload_omits_unset_fields() {
        let create: CustomerCreate = serde_json::from_value(json!({"name": "Acme"})).unwrap();
        let row = create.into_row().unwrap();

        assert_eq!(row.len(), 1);
        assert_eq!(row["name"], "Acme");
    }

    #[test]
    fn test_insert_payload_keeps_explicit_null() {
        let create: CustomerCreate =
            serde_json::from_value(json!({"name": "Acme", "email": null, "phone": "555"})).unwrap();
        let row = create.into_row().unwrap();

        assert_eq!(row.len(), 3);
        assert!(row["email"].is_null());
        assert_eq!(row["phone"], "555");
    }

    #[test]
    fn test_name_is_required() {
        assert!(serde_json::from_value::<CustomerCreate>(json!({"email": "a@b.c"})).is_err());
        assert!(serde_json::from_value::<CustomerCreate>(json!({"name": 42})).is_err());
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = CustomerCreate::named("   ").into_row().unwrap_err();
        assert_eq!(err, ModelError::EmptyField("name"));
    }

    #[test]
    fn test_row_coercion_defaults_status() {
        let row = json!({
            "id": "4f9d1c7e-8a51-4a59-9d6b-3a4f3f8b2c10",
            "name": "Acme",
            "created_at": "2024-05-01T09:30:00.000001+00:00",
            "internal_notes": "dropped"
        });
        let customer: Customer = from_row(row.as_object().cloned().unwrap()).unwrap();

        assert_eq!(customer.status.as_deref(), Some("active"));
        assert_eq!(customer.email, None);

        let out = serde_json::to_value(&customer).unwrap();
        assert!(out.get("internal_notes").is_none());
        assert!(out["phone"].is_null());
    }

    #[test]
    fn test_row_coercion_keeps_null_status() {
        let row = json!({
            "id": "4f9d1c7e-8a51-4a59-9d6b-3a4f3f8b2c10",
            "name": "Acme",
            "status": null,
            "created_at": "2024-05-01T09:30:00Z"
        });
        let customer: Customer = from_row(row.as_object().cloned().unwrap()).unwrap();
        assert_eq!(customer.status, None);
    }

    #[test]
    fn test_row_without_id_fails() {
        let row = json!({"name": "Acme", "created_at": "2024-05-01T09:30:00Z"});
        let result = from_row::<Customer>(row.as_object().cloned().unwrap());
        assert!(matches!(result, Err(ModelError::Decode(_))));
    }
}
