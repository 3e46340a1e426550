use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Id;

/// A deal as returned by `/deals`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub id: Id,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Custom field value embedded in deal create/update payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealFieldValue {
    pub custom_field_id: Id,
    pub field_value: Value,
}

/// Payload for `POST /deals`. `value` is in cents.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewDeal {
    pub title: String,
    pub value: u64,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u8>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<DealFieldValue>,
}

impl NewDeal {
    pub fn new(title: impl Into<String>, value: u64, currency: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value,
            currency: currency.into(),
            ..Self::default()
        }
    }

    pub fn contact(mut self, contact: Id) -> Self {
        self.contact = Some(contact);
        self
    }

    pub fn pipeline(mut self, group: Id, stage: Id) -> Self {
        self.group = Some(group);
        self.stage = Some(stage);
        self
    }

    pub fn owner(mut self, owner: Id) -> Self {
        self.owner = Some(owner);
        self
    }
}

/// Partial update; `None` fields are left unchanged on the server.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DealUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u8>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<DealFieldValue>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_deal_skips_unset_references() {
        let body = serde_json::to_value(NewDeal::new("Renewal", 45_600, "usd")).unwrap();
        assert_eq!(body, json!({"title": "Renewal", "value": 45600, "currency": "usd"}));
    }

    #[test]
    fn deal_keeps_value_in_extra() {
        let deal: Deal = serde_json::from_value(json!({
            "id": "5",
            "title": "Renewal",
            "value": "45600",
            "currency": "usd"
        }))
        .unwrap();
        assert_eq!(deal.currency.as_deref(), Some("usd"));
        assert_eq!(deal.extra["value"], "45600");
    }
}
