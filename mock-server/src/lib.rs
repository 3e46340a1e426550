//! In-memory imitation of the ActiveCampaign v3 API.
//!
//! Serves the subset of endpoints the client crate talks to, with the same
//! envelopes (`{"account": {...}}`), string ids, and error bodies as the real
//! service: 403 `{message}` without a valid `Api-Token`, 404 `{message}` for
//! unknown ids, 422 `{errors: [...]}` for missing required fields.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};

/// Token accepted by `app()`.
pub const DEFAULT_TOKEN: &str = "test-token";

fn id_string<S: Serializer>(id: &u64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&id.to_string())
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(serialize_with = "id_string")]
    pub id: u64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_url: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountContact {
    #[serde(serialize_with = "id_string")]
    pub id: u64,
    #[serde(serialize_with = "id_string")]
    pub account: u64,
    #[serde(serialize_with = "id_string")]
    pub contact: u64,
    pub job_title: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(serialize_with = "id_string")]
    pub id: u64,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct Field {
    #[serde(serialize_with = "id_string")]
    pub id: u64,
    pub title: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub descript: String,
    pub visible: u8,
    pub defval: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct FieldValue {
    #[serde(serialize_with = "id_string")]
    pub id: u64,
    #[serde(serialize_with = "id_string")]
    pub contact: u64,
    #[serde(serialize_with = "id_string")]
    pub field: u64,
    pub value: Value,
}

#[derive(Clone, Debug, Serialize)]
pub struct Deal {
    #[serde(serialize_with = "id_string")]
    pub id: u64,
    pub title: String,
    pub value: String,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct Note {
    #[serde(serialize_with = "id_string")]
    pub id: u64,
    #[serde(serialize_with = "id_string")]
    pub relid: u64,
    pub note: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DealFieldMeta {
    #[serde(serialize_with = "id_string")]
    pub id: u64,
    pub field_label: String,
    pub field_type: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DealFieldDatum {
    #[serde(serialize_with = "id_string")]
    pub id: u64,
    #[serde(serialize_with = "id_string")]
    pub deal_id: u64,
    #[serde(serialize_with = "id_string")]
    pub custom_field_id: u64,
    pub field_value: Value,
}

#[derive(Default, Debug)]
pub struct Store {
    next_id: u64,
    accounts: BTreeMap<u64, Account>,
    account_contacts: BTreeMap<u64, AccountContact>,
    contacts: BTreeMap<u64, Contact>,
    fields: BTreeMap<u64, Field>,
    field_values: BTreeMap<u64, FieldValue>,
    deals: BTreeMap<u64, Deal>,
    notes: BTreeMap<u64, Note>,
    deal_field_meta: BTreeMap<u64, DealFieldMeta>,
    deal_field_data: BTreeMap<u64, DealFieldDatum>,
}

impl Store {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

pub type Db = Arc<RwLock<Store>>;

#[derive(Clone)]
struct AppState {
    db: Db,
    token: Arc<str>,
}

// --- request bodies ---

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AccountInput {
    pub name: Option<String>,
    pub account_url: Option<String>,
}

#[derive(Deserialize)]
pub struct AccountBody {
    pub account: AccountInput,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountContactInput {
    pub contact: Option<u64>,
    pub account: Option<u64>,
    #[serde(default)]
    pub job_title: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountContactBody {
    pub account_contact: AccountContactInput,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContactInput {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
}

#[derive(Deserialize)]
pub struct ContactBody {
    pub contact: ContactInput,
}

#[derive(Deserialize)]
pub struct FieldInput {
    #[serde(rename = "type")]
    pub field_type: Option<String>,
    pub title: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub visible: u8,
    #[serde(default)]
    pub defval: String,
}

#[derive(Deserialize)]
pub struct FieldBody {
    pub field: FieldInput,
}

#[derive(Deserialize)]
pub struct FieldValueInput {
    pub contact: u64,
    pub field: u64,
    #[serde(default)]
    pub value: Value,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValueBody {
    pub field_value: FieldValueInput,
}

#[derive(Deserialize, Default)]
pub struct DealInput {
    pub title: Option<String>,
    pub value: Option<u64>,
    pub currency: Option<String>,
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct DealBody {
    pub deal: DealInput,
}

#[derive(Deserialize)]
pub struct NoteInput {
    pub note: Option<String>,
}

#[derive(Deserialize)]
pub struct NoteBody {
    pub note: NoteInput,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealFieldMetaInput {
    pub field_label: Option<String>,
    pub field_type: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealFieldMetaBody {
    pub deal_custom_field_metum: DealFieldMetaInput,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealFieldDatumInput {
    pub deal_id: u64,
    pub custom_field_id: u64,
    #[serde(default)]
    pub field_value: Value,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealFieldDatumBody {
    pub deal_custom_field_datum: DealFieldDatumInput,
}

#[derive(Deserialize)]
pub struct AccountQuery {
    pub search: Option<String>,
}

#[derive(Deserialize)]
pub struct ContactQuery {
    pub email: Option<String>,
}

#[derive(Deserialize)]
pub struct DealQuery {
    #[serde(rename = "filters[title]")]
    pub title: Option<String>,
}

// --- errors ---

/// An error response in the shape the real API uses.
pub struct ApiFailure(StatusCode, Value);

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        (self.0, Json(self.1)).into_response()
    }
}

fn not_found(kind: &str, id: u64) -> ApiFailure {
    ApiFailure(
        StatusCode::NOT_FOUND,
        json!({"message": format!("No Result found for {kind} with id {id}")}),
    )
}

fn unprocessable(title: &str, code: &str, pointer: &str) -> ApiFailure {
    ApiFailure(
        StatusCode::UNPROCESSABLE_ENTITY,
        json!({"errors": [{
            "title": title,
            "detail": "",
            "code": code,
            "source": {"pointer": pointer}
        }]}),
    )
}

fn required(value: Option<String>, title: &str, pointer: &str) -> Result<String, ApiFailure> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(unprocessable(title, "field_missing", pointer)),
    }
}

type ApiResult = Result<(StatusCode, Json<Value>), ApiFailure>;

fn ok(body: Value) -> ApiResult {
    Ok((StatusCode::OK, Json(body)))
}

fn created(body: Value) -> ApiResult {
    Ok((StatusCode::CREATED, Json(body)))
}

// --- app ---

pub fn app() -> Router {
    app_with_token(DEFAULT_TOKEN)
}

pub fn app_with_token(token: &str) -> Router {
    let state = AppState {
        db: Arc::new(RwLock::new(Store::default())),
        token: Arc::from(token),
    };
    Router::new()
        .route("/api/3/accounts", get(list_accounts).post(create_account))
        .route(
            "/api/3/accounts/{id}",
            get(get_account).put(update_account).delete(delete_account),
        )
        .route("/api/3/accountContacts", post(create_account_contact))
        .route("/api/3/contacts", get(list_contacts).post(create_contact))
        .route(
            "/api/3/contacts/{id}",
            get(get_contact).post(update_contact).delete(delete_contact),
        )
        .route("/api/3/contact/sync", post(sync_contact))
        .route("/api/3/fields", post(create_field))
        .route("/api/3/fieldValues", post(set_field_value))
        .route("/api/3/fieldValues/{id}", get(get_field_value))
        .route("/api/3/deals", get(list_deals).post(create_deal))
        .route(
            "/api/3/deals/{id}",
            get(get_deal).put(update_deal).delete(delete_deal),
        )
        .route("/api/3/deals/{id}/notes", post(add_note))
        .route("/api/3/deals/{id}/notes/{note_id}", post(update_note))
        .route(
            "/api/3/dealCustomFieldMeta",
            get(list_deal_fields).post(create_deal_field),
        )
        .route("/api/3/dealCustomFieldData", post(create_deal_field_datum))
        .route("/api/3/dealCustomFieldData/{id}", get(get_deal_field_datum))
        .layer(middleware::from_fn_with_state(state.clone(), require_token))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with_token(listener, DEFAULT_TOKEN).await
}

pub async fn run_with_token(listener: TcpListener, token: &str) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "mock ActiveCampaign API listening");
    }
    axum::serve(listener, app_with_token(token)).await
}

async fn require_token(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let authorized = request
        .headers()
        .get("api-token")
        .is_some_and(|v| v.as_bytes() == state.token.as_bytes());
    if !authorized {
        debug!(path = %request.uri().path(), "rejecting request without valid token");
        return ApiFailure(
            StatusCode::FORBIDDEN,
            json!({"message": "You are not authorized to access this resource"}),
        )
        .into_response();
    }
    next.run(request).await
}

// --- accounts ---

async fn list_accounts(State(state): State<AppState>, Query(query): Query<AccountQuery>) -> ApiResult {
    let store = state.db.read().await;
    let needle = query.search.map(|s| s.to_lowercase());
    let accounts: Vec<&Account> = store
        .accounts
        .values()
        .filter(|a| needle.as_ref().is_none_or(|n| a.name.to_lowercase().contains(n)))
        .collect();
    ok(json!({"accounts": accounts, "meta": {"total": accounts.len().to_string()}}))
}

async fn create_account(State(state): State<AppState>, Json(body): Json<AccountBody>) -> ApiResult {
    let name = required(body.account.name, "Account name is required", "/data/attributes/name")?;
    let mut store = state.db.write().await;
    if store.accounts.values().any(|a| a.name == name) {
        return Err(unprocessable(
            "The account name already exists",
            "duplicate",
            "/data/attributes/name",
        ));
    }
    let account = Account {
        id: store.next_id(),
        name,
        account_url: body.account.account_url,
    };
    store.accounts.insert(account.id, account.clone());
    created(json!({"account": account}))
}

async fn get_account(State(state): State<AppState>, Path(id): Path<u64>) -> ApiResult {
    let store = state.db.read().await;
    let account = store.accounts.get(&id).ok_or_else(|| not_found("Account", id))?;
    ok(json!({"account": account}))
}

async fn update_account(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(body): Json<AccountBody>,
) -> ApiResult {
    let mut store = state.db.write().await;
    let account = store.accounts.get_mut(&id).ok_or_else(|| not_found("Account", id))?;
    if let Some(name) = body.account.name {
        account.name = name;
    }
    if let Some(url) = body.account.account_url {
        account.account_url = Some(url);
    }
    ok(json!({"account": account}))
}

async fn delete_account(State(state): State<AppState>, Path(id): Path<u64>) -> ApiResult {
    let mut store = state.db.write().await;
    store.accounts.remove(&id).ok_or_else(|| not_found("Account", id))?;
    store.account_contacts.retain(|_, link| link.account != id);
    ok(json!({}))
}

async fn create_account_contact(
    State(state): State<AppState>,
    Json(body): Json<AccountContactBody>,
) -> ApiResult {
    let input = body.account_contact;
    let (Some(contact), Some(account)) = (input.contact, input.account) else {
        return Err(unprocessable(
            "Contact and account are required",
            "field_missing",
            "/data/attributes/contact",
        ));
    };
    let mut store = state.db.write().await;
    if !store.contacts.contains_key(&contact) {
        return Err(not_found("Contact", contact));
    }
    if !store.accounts.contains_key(&account) {
        return Err(not_found("Account", account));
    }
    let link = AccountContact {
        id: store.next_id(),
        account,
        contact,
        job_title: input.job_title,
    };
    store.account_contacts.insert(link.id, link.clone());
    created(json!({"accountContact": link}))
}

// --- contacts ---

fn apply_contact(contact: &mut Contact, input: ContactInput) {
    if let Some(email) = input.email {
        contact.email = email;
    }
    if input.first_name.is_some() {
        contact.first_name = input.first_name;
    }
    if input.last_name.is_some() {
        contact.last_name = input.last_name;
    }
    if input.phone.is_some() {
        contact.phone = input.phone;
    }
}

fn new_contact(store: &mut Store, email: String, input: ContactInput) -> Contact {
    let mut contact = Contact {
        id: store.next_id(),
        email,
        first_name: None,
        last_name: None,
        phone: None,
    };
    apply_contact(&mut contact, ContactInput { email: None, ..input });
    store.contacts.insert(contact.id, contact.clone());
    contact
}

async fn list_contacts(State(state): State<AppState>, Query(query): Query<ContactQuery>) -> ApiResult {
    let store = state.db.read().await;
    let contacts: Vec<&Contact> = store
        .contacts
        .values()
        .filter(|c| query.email.as_ref().is_none_or(|e| c.email.eq_ignore_ascii_case(e)))
        .collect();
    ok(json!({"contacts": contacts, "meta": {"total": contacts.len().to_string()}}))
}

async fn create_contact(State(state): State<AppState>, Json(body): Json<ContactBody>) -> ApiResult {
    let mut input = body.contact;
    let email = required(input.email.take(), "Email is required", "/data/attributes/email")?;
    let mut store = state.db.write().await;
    if store.contacts.values().any(|c| c.email.eq_ignore_ascii_case(&email)) {
        return Err(unprocessable(
            "Email address already exists in the system.",
            "duplicate",
            "/data/attributes/email",
        ));
    }
    let contact = new_contact(&mut store, email, input);
    created(json!({"contact": contact}))
}

async fn sync_contact(State(state): State<AppState>, Json(body): Json<ContactBody>) -> ApiResult {
    let mut input = body.contact;
    let email = required(input.email.take(), "Email is required", "/data/attributes/email")?;
    let mut store = state.db.write().await;
    let existing = store
        .contacts
        .values_mut()
        .find(|c| c.email.eq_ignore_ascii_case(&email));
    if let Some(contact) = existing {
        apply_contact(contact, input);
        return ok(json!({"contact": contact}));
    }
    let contact = new_contact(&mut store, email, input);
    created(json!({"contact": contact}))
}

async fn get_contact(State(state): State<AppState>, Path(id): Path<u64>) -> ApiResult {
    let store = state.db.read().await;
    let contact = store.contacts.get(&id).ok_or_else(|| not_found("Subscriber", id))?;
    ok(json!({"contact": contact}))
}

async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(body): Json<ContactBody>,
) -> ApiResult {
    let mut store = state.db.write().await;
    let contact = store.contacts.get_mut(&id).ok_or_else(|| not_found("Subscriber", id))?;
    apply_contact(contact, body.contact);
    ok(json!({"contact": contact}))
}

async fn delete_contact(State(state): State<AppState>, Path(id): Path<u64>) -> ApiResult {
    let mut store = state.db.write().await;
    store.contacts.remove(&id).ok_or_else(|| not_found("Subscriber", id))?;
    store.field_values.retain(|_, v| v.contact != id);
    store.account_contacts.retain(|_, link| link.contact != id);
    ok(json!({}))
}

async fn create_field(State(state): State<AppState>, Json(body): Json<FieldBody>) -> ApiResult {
    let input = body.field;
    let title = required(input.title, "Title is required", "/data/attributes/title")?;
    let field_type = required(input.field_type, "Type is required", "/data/attributes/type")?;
    let mut store = state.db.write().await;
    let field = Field {
        id: store.next_id(),
        title,
        field_type,
        descript: input.description,
        visible: input.visible,
        defval: input.defval,
    };
    store.fields.insert(field.id, field.clone());
    created(json!({"field": field}))
}

async fn set_field_value(State(state): State<AppState>, Json(body): Json<FieldValueBody>) -> ApiResult {
    let input = body.field_value;
    let mut store = state.db.write().await;
    let contact = store
        .contacts
        .get(&input.contact)
        .cloned()
        .ok_or_else(|| not_found("Subscriber", input.contact))?;
    if !store.fields.contains_key(&input.field) {
        return Err(not_found("Field", input.field));
    }
    let existing = store
        .field_values
        .values()
        .find(|v| v.contact == input.contact && v.field == input.field)
        .map(|v| v.id);
    let id = match existing {
        Some(id) => id,
        None => store.next_id(),
    };
    let value = FieldValue {
        id,
        contact: input.contact,
        field: input.field,
        value: input.value,
    };
    store.field_values.insert(id, value.clone());
    ok(json!({"contacts": [contact], "fieldValue": value}))
}

async fn get_field_value(State(state): State<AppState>, Path(id): Path<u64>) -> ApiResult {
    let store = state.db.read().await;
    let value = store.field_values.get(&id).ok_or_else(|| not_found("FieldValue", id))?;
    ok(json!({"fieldValue": value}))
}

// --- deals ---

async fn list_deals(State(state): State<AppState>, Query(query): Query<DealQuery>) -> ApiResult {
    let store = state.db.read().await;
    let deals: Vec<&Deal> = store
        .deals
        .values()
        .filter(|d| query.title.as_ref().is_none_or(|t| d.title.contains(t.as_str())))
        .collect();
    ok(json!({"deals": deals, "meta": {"total": deals.len().to_string()}}))
}

async fn create_deal(State(state): State<AppState>, Json(body): Json<DealBody>) -> ApiResult {
    let input = body.deal;
    let title = required(input.title, "Deal title is required", "/data/attributes/title")?;
    let currency = required(input.currency, "Deal currency is required", "/data/attributes/currency")?;
    let mut store = state.db.write().await;
    let deal = Deal {
        id: store.next_id(),
        title,
        value: input.value.unwrap_or(0).to_string(),
        currency,
        description: input.description,
    };
    store.deals.insert(deal.id, deal.clone());
    created(json!({"deal": deal}))
}

async fn get_deal(State(state): State<AppState>, Path(id): Path<u64>) -> ApiResult {
    let store = state.db.read().await;
    let deal = store.deals.get(&id).ok_or_else(|| not_found("Deal", id))?;
    ok(json!({"deal": deal}))
}

async fn update_deal(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(body): Json<DealBody>,
) -> ApiResult {
    let mut store = state.db.write().await;
    let deal = store.deals.get_mut(&id).ok_or_else(|| not_found("Deal", id))?;
    let input = body.deal;
    if let Some(title) = input.title {
        deal.title = title;
    }
    if let Some(value) = input.value {
        deal.value = value.to_string();
    }
    if let Some(currency) = input.currency {
        deal.currency = currency;
    }
    if input.description.is_some() {
        deal.description = input.description;
    }
    ok(json!({"deal": deal}))
}

async fn delete_deal(State(state): State<AppState>, Path(id): Path<u64>) -> ApiResult {
    let mut store = state.db.write().await;
    store.deals.remove(&id).ok_or_else(|| not_found("Deal", id))?;
    store.notes.retain(|_, n| n.relid != id);
    store.deal_field_data.retain(|_, d| d.deal_id != id);
    ok(json!({}))
}

async fn add_note(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(body): Json<NoteBody>,
) -> ApiResult {
    let text = required(body.note.note, "Note is required", "/data/attributes/note")?;
    let mut store = state.db.write().await;
    let deal = store.deals.get(&id).cloned().ok_or_else(|| not_found("Deal", id))?;
    let note = Note {
        id: store.next_id(),
        relid: id,
        note: text,
    };
    store.notes.insert(note.id, note.clone());
    created(json!({"deals": [deal], "note": note}))
}

async fn update_note(
    State(state): State<AppState>,
    Path((id, note_id)): Path<(u64, u64)>,
    Json(body): Json<NoteBody>,
) -> ApiResult {
    let text = required(body.note.note, "Note is required", "/data/attributes/note")?;
    let mut store = state.db.write().await;
    let deal = store.deals.get(&id).cloned().ok_or_else(|| not_found("Deal", id))?;
    let note = store
        .notes
        .get_mut(&note_id)
        .filter(|n| n.relid == id)
        .ok_or_else(|| not_found("Note", note_id))?;
    note.note = text;
    ok(json!({"deals": [deal], "note": note}))
}

async fn list_deal_fields(State(state): State<AppState>) -> ApiResult {
    let store = state.db.read().await;
    let meta: Vec<&DealFieldMeta> = store.deal_field_meta.values().collect();
    ok(json!({"dealCustomFieldMeta": meta}))
}

async fn create_deal_field(State(state): State<AppState>, Json(body): Json<DealFieldMetaBody>) -> ApiResult {
    let input = body.deal_custom_field_metum;
    let label = required(input.field_label, "Field label is required", "/data/attributes/fieldLabel")?;
    let field_type = required(input.field_type, "Field type is required", "/data/attributes/fieldType")?;
    let mut store = state.db.write().await;
    let meta = DealFieldMeta {
        id: store.next_id(),
        field_label: label,
        field_type,
    };
    store.deal_field_meta.insert(meta.id, meta.clone());
    ok(json!({"dealCustomFieldMetum": meta}))
}

async fn create_deal_field_datum(
    State(state): State<AppState>,
    Json(body): Json<DealFieldDatumBody>,
) -> ApiResult {
    let input = body.deal_custom_field_datum;
    let mut store = state.db.write().await;
    if !store.deals.contains_key(&input.deal_id) {
        return Err(not_found("Deal", input.deal_id));
    }
    if !store.deal_field_meta.contains_key(&input.custom_field_id) {
        return Err(not_found("DealCustomFieldMeta", input.custom_field_id));
    }
    let datum = DealFieldDatum {
        id: store.next_id(),
        deal_id: input.deal_id,
        custom_field_id: input.custom_field_id,
        field_value: input.field_value,
    };
    store.deal_field_data.insert(datum.id, datum.clone());
    ok(json!({"dealCustomFieldDatum": datum}))
}

async fn get_deal_field_datum(State(state): State<AppState>, Path(id): Path<u64>) -> ApiResult {
    let store = state.db.read().await;
    let datum = store
        .deal_field_data
        .get(&id)
        .ok_or_else(|| not_found("DealCustomFieldDatum", id))?;
    ok(json!({"dealCustomFieldDatum": datum}))
}
