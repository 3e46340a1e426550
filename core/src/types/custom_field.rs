//! Custom field metadata and data shared by accounts and deals.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Id;

/// A custom field definition (`accountCustomFieldMetum` / `dealCustomFieldMetum`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldMeta {
    pub id: Id,
    pub field_label: String,
    pub field_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_options: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Partial update of a custom field definition. The type cannot change.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_options: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_default: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_required: Option<bool>,
}

/// A stored custom field value (`accountCustomFieldDatum` / `dealCustomFieldDatum`).
///
/// The API is inconsistent about snake vs. camel case on these records, so
/// both spellings are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomFieldDatum {
    pub id: Id,
    #[serde(
        rename = "customFieldId",
        alias = "custom_field_id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_field_id: Option<Id>,
    #[serde(rename = "fieldValue", default)]
    pub field_value: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
