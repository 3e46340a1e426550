//! Contact operations (`/contacts`, `/contact/sync`, `/fields`, `/fieldValues`).

use std::sync::Arc;

use serde_json::{json, Value};

use crate::client::{envelope, require_text, require_value, Expect, ResourceClient};
use crate::error::ActiveCampaignError;
use crate::http::HttpRequest;
use crate::transport::Transport;
use crate::types::{
    Confirmation, Contact, ContactFieldCreated, ContactFieldType, ContactUpdate, FieldValue,
    IntoId, NewContact, NewContactField,
};

const DELETED: &str = "Contact was successfully deleted.";

const CREATED: Expect = Expect::new(&[201], "/contact");
const SYNCED: Expect = Expect::new(&[200, 201], "/contact");
const ONE: Expect = Expect::new(&[200], "/contact");
const FIRST: Expect = Expect::new(&[200], "/contacts/0");
const MANY: Expect = Expect::new(&[200], "/contacts");
const FIELD_CREATED: Expect = Expect::new(&[201], "");
const FIELD_VALUE: Expect = Expect::new(&[200], "/fieldValue");

#[derive(Debug, Clone)]
pub struct Contacts {
    client: ResourceClient,
}

impl Contacts {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            client: ResourceClient::new(transport),
        }
    }

    pub async fn create(&self, contact: &NewContact) -> Result<Contact, ActiveCampaignError> {
        require_text(&contact.email, "contact email")?;
        let body = envelope("contact", contact)?;
        self.client.call(HttpRequest::post("/contacts", body), CREATED).await
    }

    /// Create the contact, or update the one that already has this email.
    pub async fn sync(&self, contact: &NewContact) -> Result<Contact, ActiveCampaignError> {
        require_text(&contact.email, "contact email")?;
        let body = envelope("contact", contact)?;
        self.client.call(HttpRequest::post("/contact/sync", body), SYNCED).await
    }

    pub async fn update(
        &self,
        id: impl IntoId,
        update: &ContactUpdate,
    ) -> Result<Contact, ActiveCampaignError> {
        let id = id.into_id()?;
        let body = envelope("contact", update)?;
        self.client
            .call(HttpRequest::post(&format!("/contacts/{id}"), body), ONE)
            .await
    }

    pub async fn find_by_id(&self, id: impl IntoId) -> Result<Contact, ActiveCampaignError> {
        let id = id.into_id()?;
        self.client
            .call(HttpRequest::get(&format!("/contacts/{id}")), ONE)
            .await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Contact, ActiveCampaignError> {
        require_text(email, "contact email")?;
        let request = HttpRequest::get("/contacts").with_query("email", email);
        self.client.call(request, FIRST).await
    }

    pub async fn find_all(&self) -> Result<Vec<Contact>, ActiveCampaignError> {
        self.client.call(HttpRequest::get("/contacts"), MANY).await
    }

    pub async fn destroy(&self, id: impl IntoId) -> Result<Confirmation, ActiveCampaignError> {
        let id = id.into_id()?;
        self.client
            .confirm(HttpRequest::delete(&format!("/contacts/{id}")), Expect::status(&[200]), DELETED)
            .await
    }

    /// Define a new contact custom field. Returns the whole response body,
    /// which carries the field and any options the server attached.
    pub async fn create_custom_field(
        &self,
        field: &NewContactField,
    ) -> Result<ContactFieldCreated, ActiveCampaignError> {
        require_text(&field.field_type, "custom field type")?;
        require_text(&field.title, "custom field title")?;
        let field_type = ContactFieldType::parse(&field.field_type)?;

        let body = json!({
            "field": {
                "type": field_type,
                "title": field.title,
                "description": field.description.as_deref().unwrap_or_default(),
                "visible": field.visible.unwrap_or(1),
                "defval": field.defval.as_deref().unwrap_or_default(),
            }
        });
        self.client.call(HttpRequest::post("/fields", body), FIELD_CREATED).await
    }

    /// Set a contact's value for one custom field. The API answers with the
    /// affected contact.
    pub async fn set_custom_field_value(
        &self,
        contact_id: impl IntoId,
        field_id: impl IntoId,
        value: impl Into<Value>,
    ) -> Result<Contact, ActiveCampaignError> {
        let contact = contact_id.into_id()?;
        let field = field_id.into_id()?;
        let value = value.into();
        require_value(&value, "custom field value")?;

        let body = json!({
            "fieldValue": {
                "contact": contact,
                "field": field,
                "value": value,
            }
        });
        self.client.call(HttpRequest::post("/fieldValues", body), FIRST).await
    }

    pub async fn get_custom_field_value(&self, id: impl IntoId) -> Result<FieldValue, ActiveCampaignError> {
        let id = id.into_id()?;
        self.client
            .call(HttpRequest::get(&format!("/fieldValues/{id}")), FIELD_VALUE)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;
    use crate::transport::MockTransport;
    use serde_json::json;

    fn contacts(mock: &Arc<MockTransport>) -> Contacts {
        Contacts::new(mock.clone())
    }

    #[tokio::test]
    async fn create_rejection_keeps_server_errors() {
        let errors = json!([{
            "title": "Email address already exists in the system",
            "detail": "",
            "code": "duplicate",
            "source": {"pointer": "/data/attributes/email"}
        }]);
        let mock = Arc::new(MockTransport::new().respond(422, json!({"errors": errors})));
        let err = contacts(&mock).create(&NewContact::new("a@b.com")).await.unwrap_err();

        assert_eq!(err.status(), Some(422));
        assert_eq!(err.details(), errors.as_array().unwrap().as_slice());
    }

    #[tokio::test]
    async fn create_posts_contact_envelope() {
        let mock = Arc::new(MockTransport::new().respond(201, json!({"contact": {"id": "1", "email": "a@b.com"}})));
        let contact = contacts(&mock)
            .create(&NewContact::new("a@b.com").first_name("Ada"))
            .await
            .unwrap();
        assert_eq!(contact.email, "a@b.com");
        assert_eq!(
            mock.requests()[0].body,
            Some(json!({"contact": {"email": "a@b.com", "firstName": "Ada"}}))
        );
    }

    #[tokio::test]
    async fn create_without_email_never_sends() {
        let mock = Arc::new(MockTransport::new());
        assert!(contacts(&mock).create(&NewContact::new(" ")).await.unwrap_err().is_validation());
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn sync_accepts_created_and_updated() {
        let body = json!({"contact": {"id": "1", "email": "a@b.com"}});
        let mock = Arc::new(MockTransport::new().respond(201, body.clone()).respond(200, body));
        let c = contacts(&mock);
        c.sync(&NewContact::new("a@b.com")).await.unwrap();
        c.sync(&NewContact::new("a@b.com")).await.unwrap();
        assert!(mock.requests().iter().all(|r| r.path == "/api/3/contact/sync"));
    }

    #[tokio::test]
    async fn update_posts_to_item_path() {
        let mock = Arc::new(MockTransport::new().respond(200, json!({"contact": {"id": "3", "email": "new@b.com"}})));
        let update = ContactUpdate {
            email: Some("new@b.com".to_string()),
            ..ContactUpdate::default()
        };
        let contact = contacts(&mock).update("3", &update).await.unwrap();
        assert_eq!(contact.email, "new@b.com");

        let sent = &mock.requests()[0];
        assert_eq!(sent.method, HttpMethod::Post);
        assert_eq!(sent.path, "/api/3/contacts/3");
    }

    #[tokio::test]
    async fn find_by_email_reads_contacts_list() {
        let mock = Arc::new(MockTransport::new().respond(
            200,
            json!({"contacts": [{"id": "2", "email": "a@b.com"}], "meta": {"total": "1"}}),
        ));
        let contact = contacts(&mock).find_by_email("a@b.com").await.unwrap();
        assert_eq!(contact.id.get(), 2);
        assert_eq!(
            mock.requests()[0].query,
            vec![("email".to_string(), "a@b.com".to_string())]
        );
    }

    #[tokio::test]
    async fn find_all_requires_contacts_key() {
        let mock = Arc::new(MockTransport::new().respond(200, json!({"contact": []})));
        assert!(contacts(&mock).find_all().await.unwrap_err().is_api());
    }

    #[tokio::test]
    async fn destroy_returns_fixed_message() {
        let mock = Arc::new(MockTransport::new().respond(200, json!({})));
        let done = contacts(&mock).destroy(8u64).await.unwrap();
        assert_eq!(done.message, "Contact was successfully deleted.");
    }

    #[tokio::test]
    async fn destroy_missing_contact_is_an_error() {
        let mock = Arc::new(MockTransport::new().respond(404, json!({"message": "No Result found for Subscriber with id 8"})));
        assert_eq!(contacts(&mock).destroy(8u64).await.unwrap_err().status(), Some(404));
    }

    #[tokio::test]
    async fn create_custom_field_fills_defaults() {
        let mock = Arc::new(MockTransport::new().respond(
            201,
            json!({"field": {"id": "4", "title": "Shoe size", "type": "text"}}),
        ));
        let created = contacts(&mock)
            .create_custom_field(&NewContactField::new("text", "Shoe size"))
            .await
            .unwrap();
        assert_eq!(created.field.title, "Shoe size");
        assert_eq!(
            mock.requests()[0].body,
            Some(json!({"field": {
                "type": "text",
                "title": "Shoe size",
                "description": "",
                "visible": 1,
                "defval": ""
            }}))
        );
    }

    #[tokio::test]
    async fn create_custom_field_validates_before_sending() {
        let mock = Arc::new(MockTransport::new());
        let c = contacts(&mock);
        assert!(c.create_custom_field(&NewContactField::new("currency", "Budget")).await.unwrap_err().is_validation());
        assert!(c.create_custom_field(&NewContactField::new("text", "")).await.unwrap_err().is_validation());
        assert!(c.create_custom_field(&NewContactField::new("", "Size")).await.unwrap_err().is_validation());
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn set_custom_field_value_returns_contact() {
        let mock = Arc::new(MockTransport::new().respond(
            200,
            json!({
                "contacts": [{"id": "1", "email": "a@b.com"}],
                "fieldValue": {"id": "9", "contact": "1", "field": "4", "value": "42"}
            }),
        ));
        let contact = contacts(&mock).set_custom_field_value(1u64, 4u64, "42").await.unwrap();
        assert_eq!(contact.email, "a@b.com");
        assert_eq!(
            mock.requests()[0].body,
            Some(json!({"fieldValue": {"contact": 1, "field": 4, "value": "42"}}))
        );
    }

    #[tokio::test]
    async fn set_custom_field_value_requires_value() {
        let mock = Arc::new(MockTransport::new());
        let err = contacts(&mock).set_custom_field_value(1u64, 4u64, "").await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn get_custom_field_value_reads_field_value() {
        let mock = Arc::new(MockTransport::new().respond(
            200,
            json!({"fieldValue": {"id": "9", "contact": "1", "field": "4", "value": "42"}}),
        ));
        let value = contacts(&mock).get_custom_field_value(9u64).await.unwrap();
        assert_eq!(value.value, "42");
        assert_eq!(mock.requests()[0].path, "/api/3/fieldValues/9");
    }
}
