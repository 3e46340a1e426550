//! Deal operations (`/deals`, deal notes, deal custom fields).

use std::sync::Arc;

use serde_json::{json, Value};

use crate::client::{envelope, require_text, Expect, ResourceClient};
use crate::custom_fields::{CustomFieldScope, CustomFields, FieldValueEntry};
use crate::error::ActiveCampaignError;
use crate::http::HttpRequest;
use crate::transport::Transport;
use crate::types::{
    Confirmation, CustomFieldDatum, CustomFieldMeta, CustomFieldUpdate, Deal, DealUpdate, IntoId,
    NewDeal,
};

const DELETED: &str = "Deal was successfully deleted.";

const CREATED: Expect = Expect::new(&[201], "/deal");
const ONE: Expect = Expect::new(&[200], "/deal");
const MANY: Expect = Expect::new(&[200], "/deals");
const NOTE_ADDED: Expect = Expect::new(&[201], "/deals");
const NOTE_UPDATED: Expect = Expect::new(&[200], "/deals");

#[derive(Debug, Clone)]
pub struct Deals {
    client: ResourceClient,
    custom_fields: CustomFields,
}

impl Deals {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        let client = ResourceClient::new(transport);
        Self {
            custom_fields: CustomFields::new(client.clone(), CustomFieldScope::DEAL),
            client,
        }
    }

    pub async fn create(&self, deal: &NewDeal) -> Result<Deal, ActiveCampaignError> {
        require_text(&deal.title, "deal title")?;
        require_text(&deal.currency, "deal currency")?;
        let body = envelope("deal", deal)?;
        self.client.call(HttpRequest::post("/deals", body), CREATED).await
    }

    pub async fn update(&self, id: impl IntoId, update: &DealUpdate) -> Result<Deal, ActiveCampaignError> {
        let id = id.into_id()?;
        let body = envelope("deal", update)?;
        self.client
            .call(HttpRequest::put(&format!("/deals/{id}"), body), ONE)
            .await
    }

    pub async fn find_by_id(&self, id: impl IntoId) -> Result<Deal, ActiveCampaignError> {
        let id = id.into_id()?;
        self.client
            .call(HttpRequest::get(&format!("/deals/{id}")), ONE)
            .await
    }

    /// All deals whose title matches `title`. An empty list is a success.
    pub async fn find_by_title(&self, title: &str) -> Result<Vec<Deal>, ActiveCampaignError> {
        require_text(title, "deal title")?;
        let request = HttpRequest::get("/deals").with_query("filters[title]", title);
        self.client.call(request, MANY).await
    }

    pub async fn find_all(&self) -> Result<Vec<Deal>, ActiveCampaignError> {
        self.client.call(HttpRequest::get("/deals"), MANY).await
    }

    pub async fn destroy(&self, id: impl IntoId) -> Result<Confirmation, ActiveCampaignError> {
        let id = id.into_id()?;
        self.client
            .confirm(HttpRequest::delete(&format!("/deals/{id}")), Expect::status(&[200]), DELETED)
            .await
    }

    /// Attach a note to a deal. The API answers with the deals the note now
    /// belongs to.
    pub async fn add_note(&self, id: impl IntoId, note: &str) -> Result<Vec<Deal>, ActiveCampaignError> {
        let id = id.into_id()?;
        require_text(note, "note")?;
        let body = json!({ "note": { "note": note } });
        self.client
            .call(HttpRequest::post(&format!("/deals/{id}/notes"), body), NOTE_ADDED)
            .await
    }

    pub async fn update_note(
        &self,
        id: impl IntoId,
        note_id: impl IntoId,
        note: &str,
    ) -> Result<Vec<Deal>, ActiveCampaignError> {
        let id = id.into_id()?;
        let note_id = note_id.into_id()?;
        require_text(note, "note")?;
        let body = json!({ "note": { "note": note } });
        self.client
            .call(
                HttpRequest::post(&format!("/deals/{id}/notes/{note_id}"), body),
                NOTE_UPDATED,
            )
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
        deal_id: impl IntoId,
        custom_field_id: impl IntoId,
        value: impl Into<Value>,
    ) -> Result<CustomFieldDatum, ActiveCampaignError> {
        self.custom_fields
            .set_value(deal_id, custom_field_id, value.into())
            .await
    }

    /// Write several values in one request. `owner` is the deal id.
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
