//! Custom field endpoints shared by accounts and deals.
//!
//! Both resources expose the same metadata (`*CustomFieldMeta`) and data
//! (`*CustomFieldData`) endpoint pairs; only the path segment, the envelope
//! keys and the owner id field differ. `CustomFieldScope` captures those
//! differences and `CustomFields` implements the operations once.

use serde_json::{json, Value};

use crate::client::{envelope, require_text, require_value, Expect, ResourceClient};
use crate::error::ActiveCampaignError;
use crate::http::HttpRequest;
use crate::types::{
    Confirmation, CustomFieldDatum, CustomFieldMeta, CustomFieldType, CustomFieldUpdate, Id,
    IntoId,
};

const FIELD_DELETED: &str = "Custom field was successfully deleted.";
const VALUE_DELETED: &str = "Custom field value was successfully deleted.";
const VALUES_SAVED: &str = "Custom field values were successfully saved.";

#[derive(Debug, Clone, Copy)]
pub(crate) struct CustomFieldScope {
    meta_path: &'static str,
    meta_key: &'static str,
    meta_one: Expect,
    meta_many: Expect,
    data_path: &'static str,
    data_key: &'static str,
    data_one: Expect,
    data_many: Expect,
    owner_key: &'static str,
}

impl CustomFieldScope {
    pub(crate) const ACCOUNT: Self = Self {
        meta_path: "/accountCustomFieldMeta",
        meta_key: "accountCustomFieldMetum",
        meta_one: Expect::new(&[200], "/accountCustomFieldMetum"),
        meta_many: Expect::new(&[200], "/accountCustomFieldMeta"),
        data_path: "/accountCustomFieldData",
        data_key: "accountCustomFieldDatum",
        data_one: Expect::new(&[200], "/accountCustomFieldDatum"),
        data_many: Expect::new(&[200], "/accountCustomFieldData"),
        owner_key: "customerAccountId",
    };

    pub(crate) const DEAL: Self = Self {
        meta_path: "/dealCustomFieldMeta",
        meta_key: "dealCustomFieldMetum",
        meta_one: Expect::new(&[200], "/dealCustomFieldMetum"),
        meta_many: Expect::new(&[200], "/dealCustomFieldMeta"),
        data_path: "/dealCustomFieldData",
        data_key: "dealCustomFieldDatum",
        data_one: Expect::new(&[200], "/dealCustomFieldDatum"),
        data_many: Expect::new(&[200], "/dealCustomFieldData"),
        owner_key: "dealId",
    };
}

/// One entry of a bulk value write.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValueEntry {
    pub owner: Id,
    pub custom_field: Id,
    pub value: Value,
}

impl FieldValueEntry {
    pub fn new(owner: Id, custom_field: Id, value: impl Into<Value>) -> Self {
        Self {
            owner,
            custom_field,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct CustomFields {
    client: ResourceClient,
    scope: CustomFieldScope,
}

impl CustomFields {
    pub(crate) fn new(client: ResourceClient, scope: CustomFieldScope) -> Self {
        Self { client, scope }
    }

    fn meta_item(&self, id: Id) -> String {
        format!("{}/{id}", self.scope.meta_path)
    }

    fn data_item(&self, id: Id) -> String {
        format!("{}/{id}", self.scope.data_path)
    }

    fn datum(&self, owner: Id, custom_field: Id, value: &Value) -> Value {
        json!({
            self.scope.owner_key: owner,
            "customFieldId": custom_field,
            "fieldValue": value,
        })
    }

    pub(crate) async fn create(
        &self,
        label: &str,
        field_type: &str,
    ) -> Result<CustomFieldMeta, ActiveCampaignError> {
        let field_type = CustomFieldType::parse(field_type)?;
        require_text(label, "custom field label")?;

        let body = envelope(
            self.scope.meta_key,
            &json!({ "fieldLabel": label, "fieldType": field_type }),
        )?;
        self.client
            .call(HttpRequest::post(self.scope.meta_path, body), self.scope.meta_one)
            .await
    }

    pub(crate) async fn find_all(&self) -> Result<Vec<CustomFieldMeta>, ActiveCampaignError> {
        self.client
            .call(HttpRequest::get(self.scope.meta_path), self.scope.meta_many)
            .await
    }

    pub(crate) async fn find(&self, id: impl IntoId) -> Result<CustomFieldMeta, ActiveCampaignError> {
        let id = id.into_id()?;
        self.client
            .call(HttpRequest::get(&self.meta_item(id)), self.scope.meta_one)
            .await
    }

    pub(crate) async fn update(
        &self,
        id: impl IntoId,
        update: &CustomFieldUpdate,
    ) -> Result<CustomFieldMeta, ActiveCampaignError> {
        let id = id.into_id()?;
        let body = envelope(self.scope.meta_key, update)?;
        self.client
            .call(HttpRequest::put(&self.meta_item(id), body), self.scope.meta_one)
            .await
    }

    pub(crate) async fn destroy(&self, id: impl IntoId) -> Result<Confirmation, ActiveCampaignError> {
        let id = id.into_id()?;
        self.client
            .confirm(HttpRequest::delete(&self.meta_item(id)), Expect::status(&[200]), FIELD_DELETED)
            .await
    }

    pub(crate) async fn set_value(
        &self,
        owner: impl IntoId,
        custom_field: impl IntoId,
        value: Value,
    ) -> Result<CustomFieldDatum, ActiveCampaignError> {
        let owner = owner.into_id()?;
        let custom_field = custom_field.into_id()?;
        require_value(&value, "custom field value")?;

        let body = envelope(self.scope.data_key, &self.datum(owner, custom_field, &value))?;
        self.client
            .call(HttpRequest::post(self.scope.data_path, body), self.scope.data_one)
            .await
    }

    pub(crate) async fn bulk_set_values(
        &self,
        entries: &[FieldValueEntry],
    ) -> Result<Confirmation, ActiveCampaignError> {
        if entries.is_empty() {
            return Err(ActiveCampaignError::validation("at least one custom field value is required"));
        }
        let mut items = Vec::with_capacity(entries.len());
        for entry in entries {
            let owner = entry.owner.into_id()?;
            let custom_field = entry.custom_field.into_id()?;
            require_value(&entry.value, "custom field value")?;
            items.push(self.datum(owner, custom_field, &entry.value));
        }

        let path = format!("{}/bulkCreate", self.scope.data_path);
        self.client
            .confirm(HttpRequest::post(&path, Value::Array(items)), Expect::status(&[200]), VALUES_SAVED)
            .await
    }

    pub(crate) async fn get_value(&self, id: impl IntoId) -> Result<CustomFieldDatum, ActiveCampaignError> {
        let id = id.into_id()?;
        self.client
            .call(HttpRequest::get(&self.data_item(id)), self.scope.data_one)
            .await
    }

    pub(crate) async fn find_all_values(&self) -> Result<Vec<CustomFieldDatum>, ActiveCampaignError> {
        self.client
            .call(HttpRequest::get(self.scope.data_path), self.scope.data_many)
            .await
    }

    pub(crate) async fn update_value(
        &self,
        id: impl IntoId,
        value: Value,
    ) -> Result<CustomFieldDatum, ActiveCampaignError> {
        let id = id.into_id()?;
        require_value(&value, "custom field value")?;

        let body = envelope(self.scope.data_key, &json!({ "fieldValue": value }))?;
        self.client
            .call(HttpRequest::put(&self.data_item(id), body), self.scope.data_one)
            .await
    }

    pub(crate) async fn destroy_value(&self, id: impl IntoId) -> Result<Confirmation, ActiveCampaignError> {
        let id = id.into_id()?;
        self.client
            .confirm(HttpRequest::delete(&self.data_item(id)), Expect::status(&[200]), VALUE_DELETED)
            .await
    }
}
