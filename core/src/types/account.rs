use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Id;

/// An account as returned by `/accounts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: Id,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_timestamp: Option<String>,
    /// Fields this crate does not model, kept as sent.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Custom field value embedded in account create/update payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountFieldValue {
    pub custom_field_id: Id,
    pub field_value: Value,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<AccountFieldValue>,
}

impl NewAccount {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn account_url(mut self, url: impl Into<String>) -> Self {
        self.account_url = Some(url.into());
        self
    }

    pub fn field(mut self, custom_field_id: Id, value: impl Into<Value>) -> Self {
        self.fields.push(AccountFieldValue {
            custom_field_id,
            field_value: value.into(),
        });
        self
    }
}

/// Partial update; `None` fields are left unchanged on the server.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<AccountFieldValue>,
}

/// Association between a contact and an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountContact {
    pub id: Id,
    pub account: Id,
    pub contact: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn account_reads_string_ids_and_keeps_unknown_fields() {
        let account: Account = serde_json::from_value(json!({
            "id": "3",
            "name": "Acme",
            "accountUrl": "https://acme.example",
            "contactCount": "2",
            "links": {"notes": "/api/3/accounts/3/notes"}
        }))
        .unwrap();

        assert_eq!(account.id.get(), 3);
        assert_eq!(account.account_url.as_deref(), Some("https://acme.example"));
        assert_eq!(account.extra["contactCount"], "2");
        assert!(account.extra.contains_key("links"));
    }

    #[test]
    fn new_account_omits_unset_fields() {
        let body = serde_json::to_value(NewAccount::new("Acme")).unwrap();
        assert_eq!(body, json!({"name": "Acme"}));
    }

    #[test]
    fn new_account_serializes_custom_fields() {
        let id = Id::new(6).unwrap();
        let body = serde_json::to_value(NewAccount::new("Acme").field(id, "EMEA")).unwrap();
        assert_eq!(body["fields"], json!([{"customFieldId": 6, "fieldValue": "EMEA"}]));
    }
}
