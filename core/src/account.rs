//! Account operations (`/accounts`, `/accountContacts`, account custom fields).

use std::sync::Arc;

use serde_json::{json, Value};

use crate::client::{envelope, require_text, Expect, ResourceClient};
use crate::custom_fields::{CustomFieldScope, CustomFields, FieldValueEntry};
use crate::error::ActiveCampaignError;
use crate::http::HttpRequest;
use crate::transport::Transport;
use crate::types::{
    Account, AccountContact, AccountUpdate, Confirmation, CustomFieldDatum, CustomFieldMeta,
    CustomFieldUpdate, IntoId, NewAccount,
};

const DELETED: &str = "Account was successfully deleted.";

const CREATED: Expect = Expect::new(&[201], "/account");
const ONE: Expect = Expect::new(&[200], "/account");
const FIRST: Expect = Expect::new(&[200], "/accounts/0");
const MANY: Expect = Expect::new(&[200], "/accounts");
const CONTACT_LINKED: Expect = Expect::new(&[201], "/accountContact");

#[derive(Debug, Clone)]
pub struct Accounts {
    client: ResourceClient,
    custom_fields: CustomFields,
}

impl Accounts {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        let client = ResourceClient::new(transport);
        Self {
            custom_fields: CustomFields::new(client.clone(), CustomFieldScope::ACCOUNT),
            client,
        }
    }

    pub async fn create(&self, account: &NewAccount) -> Result<Account, ActiveCampaignError> {
        require_text(&account.name, "account name")?;
        let body = envelope("account", account)?;
        self.client.call(HttpRequest::post("/accounts", body), CREATED).await
    }

    pub async fn update(
        &self,
        id: impl IntoId,
        update: &AccountUpdate,
    ) -> Result<Account, ActiveCampaignError> {
        let id = id.into_id()?;
        let body = envelope("account", update)?;
        self.client
            .call(HttpRequest::put(&format!("/accounts/{id}"), body), ONE)
            .await
    }

    pub async fn find_by_id(&self, id: impl IntoId) -> Result<Account, ActiveCampaignError> {
        let id = id.into_id()?;
        self.client
            .call(HttpRequest::get(&format!("/accounts/{id}")), ONE)
            .await
    }

    /// First account whose name matches `name`. No match is an error.
    pub async fn find_by_account_name(&self, name: &str) -> Result<Account, ActiveCampaignError> {
        require_text(name, "account name")?;
        let request = HttpRequest::get("/accounts").with_query("search", name);
        self.client.call(request, FIRST).await
    }

    pub async fn find_all(&self) -> Result<Vec<Account>, ActiveCampaignError> {
        self.client.call(HttpRequest::get("/accounts"), MANY).await
    }

    pub async fn destroy(&self, id: impl IntoId) -> Result<Confirmation, ActiveCampaignError> {
        let id = id.into_id()?;
        self.client
            .confirm(HttpRequest::delete(&format!("/accounts/{id}")), Expect::status(&[200]), DELETED)
            .await
    }

    /// Link a contact to an account, optionally with a job title.
    pub async fn add_contact_to_account(
        &self,
        contact_id: impl IntoId,
        account_id: impl IntoId,
        job_title: Option<&str>,
    ) -> Result<AccountContact, ActiveCampaignError> {
        let contact = contact_id.into_id()?;
        let account = account_id.into_id()?;
        let body = json!({
            "accountContact": {
                "contact": contact,
                "account": account,
                "jobTitle": job_title.unwrap_or_default(),
            }
        });
        self.client
            .call(HttpRequest::post("/accountContacts", body), CONTACT_LINKED)
            .await
    }

    pub async fn create_custom_field(
        &self,
        label: &str,
        field_type: &str,
    ) -> Result<CustomFieldMeta, ActiveCampaignError> {
        self.custom_fields.create(label, field_type).await
    }

    pub async fn find_all_custom_fields(&self) -> Result<Vec<CustomFieldMeta>, ActiveCampaignError> {
        self.custom_fields.find_all().await
    }

    pub async fn find_custom_field(&self, id: impl IntoId) -> Result<CustomFieldMeta, ActiveCampaignError> {
        self.custom_fields.find(id).await
    }

    pub async fn update_custom_field(
        &self,
        id: impl IntoId,
        update: &CustomFieldUpdate,
    ) -> Result<CustomFieldMeta, ActiveCampaignError> {
        self.custom_fields.update(id, update).await
    }

    pub async fn destroy_custom_field(&self, id: impl IntoId) -> Result<Confirmation, ActiveCampaignError> {
        self.custom_fields.destroy(id).await
    }

    pub async fn set_custom_field_value(
        &self,
        account_id: impl IntoId,
        custom_field_id: impl IntoId,
        value: impl Into<Value>,
    ) -> Result<CustomFieldDatum, ActiveCampaignError> {
        self.custom_fields
            .set_value(account_id, custom_field_id, value.into())
            .await
    }

    /// Write several values in one request. `owner` is the account id.
    pub async fn bulk_set_custom_field_values(
        &self,
        entries: &[FieldValueEntry],
    ) -> Result<Confirmation, ActiveCampaignError> {
        self.custom_fields.bulk_set_values(entries).await
    }

    pub async fn get_custom_field_value(&self, id: impl IntoId) -> Result<CustomFieldDatum, ActiveCampaignError> {
        self.custom_fields.get_value(id).await
    }

    pub async fn find_all_custom_field_values(&self) -> Result<Vec<CustomFieldDatum>, ActiveCampaignError> {
        self.custom_fields.find_all_values().await
    }

    pub async fn update_custom_field_value(
        &self,
        id: impl IntoId,
        value: impl Into<Value>,
    ) -> Result<CustomFieldDatum, ActiveCampaignError> {
        self.custom_fields.update_value(id, value.into()).await
    }

    pub async fn destroy_custom_field_value(&self, id: impl IntoId) -> Result<Confirmation, ActiveCampaignError> {
        self.custom_fields.destroy_value(id).await
    }
}
