use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Id;

/// A contact as returned by `/contacts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: Id,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Custom field value embedded in contact create/sync payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactFieldInput {
    pub field: Id,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub field_values: Vec<ContactFieldInput>,
}

impl NewContact {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }

    pub fn first_name(mut self, name: impl Into<String>) -> Self {
        self.first_name = Some(name.into());
        self
    }

    pub fn last_name(mut self, name: impl Into<String>) -> Self {
        self.last_name = Some(name.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn field(mut self, field: Id, value: impl Into<Value>) -> Self {
        self.field_values.push(ContactFieldInput {
            field,
            value: value.into(),
        });
        self
    }
}

/// Partial update; `None` fields are left unchanged on the server.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Input for `Contacts::create_custom_field`. `field_type` is checked
/// against `ContactFieldType` before anything is sent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewContactField {
    pub field_type: String,
    pub title: String,
    pub description: Option<String>,
    pub visible: Option<u8>,
    pub defval: Option<String>,
}

impl NewContactField {
    pub fn new(field_type: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            field_type: field_type.into(),
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Contact field definition from `/fields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactField {
    pub id: Id,
    pub title: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descript: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Whole body of a successful `POST /fields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFieldCreated {
    pub field: ContactField,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A contact's value for one custom field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldValue {
    pub id: Id,
    pub contact: Id,
    pub field: Id,
    #[serde(default)]
    pub value: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
