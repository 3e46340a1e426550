use axum::http::{self, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use mock_server::{app, DEFAULT_TOKEN};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn request(method: &str, uri: &str, body: Option<Value>) -> Request<String> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("api-token", DEFAULT_TOKEN)
        .header(http::header::ACCEPT, "application/json");
    match body {
        Some(body) => builder
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(body.to_string())
            .unwrap(),
        None => builder.body(String::new()).unwrap(),
    }
}

async fn send(app: &Router, req: Request<String>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    (status, body_json(resp).await)
}

// --- auth ---

#[tokio::test]
async fn missing_token_is_forbidden() {
    let app = app();
    let resp = app
        .oneshot(Request::builder().uri("/api/3/accounts").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body = body_json(resp).await;
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn wrong_token_is_forbidden() {
    let app = mock_server::app_with_token("right");
    let resp = app
        .oneshot(request("GET", "/api/3/contacts", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

// --- accounts ---

#[tokio::test]
async fn list_accounts_empty() {
    let (status, body) = send(&app(), request("GET", "/api/3/accounts", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["accounts"], json!([]));
    assert_eq!(body["meta"]["total"], "0");
}

#[tokio::test]
async fn create_account_returns_201_with_string_id() {
    let (status, body) = send(
        &app(),
        request("POST", "/api/3/accounts", Some(json!({"account": {"name": "Acme"}}))),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["account"]["name"], "Acme");
    assert!(body["account"]["id"].is_string());
}

#[tokio::test]
async fn create_account_without_name_returns_errors() {
    let (status, body) = send(
        &app(),
        request("POST", "/api/3/accounts", Some(json!({"account": {}}))),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["source"]["pointer"], "/data/attributes/name");
}

#[tokio::test]
async fn search_accounts_by_name() {
    let app = app();
    for name in ["Acme", "Globex"] {
        send(&app, request("POST", "/api/3/accounts", Some(json!({"account": {"name": name}})))).await;
    }

    let (status, body) = send(&app, request("GET", "/api/3/accounts?search=acm", None)).await;
    assert_eq!(status, StatusCode::OK);
    let accounts = body["accounts"].as_array().unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0]["name"], "Acme");
}

#[tokio::test]
async fn get_unknown_account_returns_404_message() {
    let (status, body) = send(&app(), request("GET", "/api/3/accounts/99", None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No Result found for Account with id 99");
}

#[tokio::test]
async fn update_then_delete_account() {
    let app = app();
    let (_, created) = send(&app, request("POST", "/api/3/accounts", Some(json!({"account": {"name": "Acme"}})))).await;
    let id = created["account"]["id"].as_str().unwrap().to_string();

    let (status, updated) = send(
        &app,
        request("PUT", &format!("/api/3/accounts/{id}"), Some(json!({"account": {"accountUrl": "https://acme.example"}}))),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["account"]["name"], "Acme");
    assert_eq!(updated["account"]["accountUrl"], "https://acme.example");

    let (status, _) = send(&app, request("DELETE", &format!("/api/3/accounts/{id}"), None)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, request("DELETE", &format!("/api/3/accounts/{id}"), None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn account_contact_requires_existing_records() {
    let (status, _) = send(
        &app(),
        request("POST", "/api/3/accountContacts", Some(json!({"accountContact": {"contact": 1, "account": 2}}))),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// --- contacts ---

#[tokio::test]
async fn duplicate_contact_email_returns_422() {
    let app = app();
    let body = json!({"contact": {"email": "a@b.com"}});
    let (status, _) = send(&app, request("POST", "/api/3/contacts", Some(body.clone()))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, request("POST", "/api/3/contacts", Some(body))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errors"][0]["code"], "duplicate");
}

#[tokio::test]
async fn sync_creates_then_updates() {
    let app = app();
    let (status, first) = send(
        &app,
        request("POST", "/api/3/contact/sync", Some(json!({"contact": {"email": "a@b.com"}}))),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, second) = send(
        &app,
        request("POST", "/api/3/contact/sync", Some(json!({"contact": {"email": "a@b.com", "firstName": "Ada"}}))),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["contact"]["id"], first["contact"]["id"]);
    assert_eq!(second["contact"]["firstName"], "Ada");
}

#[tokio::test]
async fn filter_contacts_by_email() {
    let app = app();
    for email in ["a@b.com", "c@d.com"] {
        send(&app, request("POST", "/api/3/contacts", Some(json!({"contact": {"email": email}})))).await;
    }
    let (_, body) = send(&app, request("GET", "/api/3/contacts?email=c%40d.com", None)).await;
    let contacts = body["contacts"].as_array().unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0]["email"], "c@d.com");
}

#[tokio::test]
async fn field_value_round_trip() {
    let app = app();
    let (_, contact) = send(&app, request("POST", "/api/3/contacts", Some(json!({"contact": {"email": "a@b.com"}})))).await;
    let (status, field) = send(
        &app,
        request("POST", "/api/3/fields", Some(json!({"field": {"type": "text", "title": "Shoe size"}}))),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let contact_id: u64 = contact["contact"]["id"].as_str().unwrap().parse().unwrap();
    let field_id: u64 = field["field"]["id"].as_str().unwrap().parse().unwrap();
    let (status, set) = send(
        &app,
        request(
            "POST",
            "/api/3/fieldValues",
            Some(json!({"fieldValue": {"contact": contact_id, "field": field_id, "value": "42"}})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(set["contacts"][0]["email"], "a@b.com");

    let value_id = set["fieldValue"]["id"].as_str().unwrap();
    let (status, got) = send(&app, request("GET", &format!("/api/3/fieldValues/{value_id}"), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(got["fieldValue"]["value"], "42");
}

// --- deals ---

#[tokio::test]
async fn deal_notes_return_deals() {
    let app = app();
    let (status, created) = send(
        &app,
        request("POST", "/api/3/deals", Some(json!({"deal": {"title": "Renewal", "value": 100, "currency": "usd"}}))),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["deal"]["value"], "100");
    let id = created["deal"]["id"].as_str().unwrap().to_string();

    let (status, added) = send(
        &app,
        request("POST", &format!("/api/3/deals/{id}/notes"), Some(json!({"note": {"note": "Called"}}))),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(added["deals"][0]["id"], id.as_str());
    let note_id = added["note"]["id"].as_str().unwrap().to_string();

    let (status, updated) = send(
        &app,
        request("POST", &format!("/api/3/deals/{id}/notes/{note_id}"), Some(json!({"note": {"note": "Called back"}}))),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["note"]["note"], "Called back");
}

#[tokio::test]
async fn filter_deals_by_title() {
    let app = app();
    for title in ["Renewal", "Upsell"] {
        send(
            &app,
            request("POST", "/api/3/deals", Some(json!({"deal": {"title": title, "value": 1, "currency": "usd"}}))),
        )
        .await;
    }
    let (_, body) = send(&app, request("GET", "/api/3/deals?filters%5Btitle%5D=Upsell", None)).await;
    let deals = body["deals"].as_array().unwrap();
    assert_eq!(deals.len(), 1);
    assert_eq!(deals[0]["title"], "Upsell");
}

#[tokio::test]
async fn deal_custom_field_data_requires_known_field() {
    let app = app();
    let (_, created) = send(
        &app,
        request("POST", "/api/3/deals", Some(json!({"deal": {"title": "Renewal", "value": 1, "currency": "usd"}}))),
    )
    .await;
    let deal_id: u64 = created["deal"]["id"].as_str().unwrap().parse().unwrap();

    let (status, _) = send(
        &app,
        request(
            "POST",
            "/api/3/dealCustomFieldData",
            Some(json!({"dealCustomFieldDatum": {"dealId": deal_id, "customFieldId": 999, "fieldValue": "x"}})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
