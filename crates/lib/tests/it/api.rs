//! HTTP contract tests: status codes, envelopes, ordering, CRUD semantics.

use chrono::{DateTime, Utc};
use serde_json::{Value, json};

use crate::helpers::spawn_server;

async fn post_contact(base: &str, body: Value) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("{base}/api/contacts"))
        .json(&body)
        .send()
        .await
        .expect("POST failed to send")
}

async fn get_contacts(base: &str) -> Vec<Value> {
    reqwest::get(format!("{base}/api/contacts"))
        .await
        .expect("GET failed to send")
        .json()
        .await
        .expect("GET body was not a JSON array")
}

fn jane() -> Value {
    json!({"name": "Jane Doe", "email": "jane@example.com", "phone": "1234567890"})
}

#[tokio::test]
async fn liveness_root_is_plain_text() {
    let base = spawn_server().await;
    let response = reqwest::get(format!("{base}/")).await.unwrap();
    assert_eq!(response.status(), 200);
    let text = response.text().await.unwrap();
    assert!(text.contains("running"));
}

#[tokio::test]
async fn full_crud_scenario() {
    let base = spawn_server().await;

    // Create
    let response = post_contact(&base, jane()).await;
    assert_eq!(response.status(), 201);
    let created: Value = response.json().await.unwrap();
    let id = created["id"].as_str().expect("created record has an id");
    assert!(!id.is_empty());
    assert_eq!(created["name"], "Jane Doe");
    assert_eq!(created["email"], "jane@example.com");
    assert_eq!(created["phone"], "1234567890");
    let created_at: DateTime<Utc> = created["createdAt"]
        .as_str()
        .unwrap()
        .parse()
        .expect("createdAt is a timestamp");
    assert!(created_at <= Utc::now());

    // The new record is returned first
    let contacts = get_contacts(&base).await;
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0]["id"], id);

    // Partial update sets message and leaves everything else intact
    let response = reqwest::Client::new()
        .put(format!("{base}/api/contacts/{id}"))
        .json(&json!({"message": "hello"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["message"], "hello");
    assert_eq!(updated["name"], "Jane Doe");
    assert_eq!(updated["email"], "jane@example.com");
    assert_eq!(updated["phone"], "1234567890");
    assert_eq!(updated["id"], id);
    assert_eq!(updated["createdAt"], created["createdAt"]);

    // Delete
    let response = reqwest::Client::new()
        .delete(format!("{base}/api/contacts/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Contact successfully deleted");

    // Gone from the collection, and a repeated delete is always 404
    assert!(get_contacts(&base).await.is_empty());
    let response = reqwest::Client::new()
        .delete(format!("{base}/api/contacts/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn create_rejects_missing_or_empty_required_fields() {
    let base = spawn_server().await;

    let bad_bodies = [
        json!({}),
        json!({"name": "Jane Doe"}),
        json!({"name": "Jane Doe", "email": "jane@example.com"}),
        json!({"email": "jane@example.com", "phone": "1234567890"}),
        json!({"name": "", "email": "jane@example.com", "phone": "1234567890"}),
        json!({"name": "Jane Doe", "email": "", "phone": "1234567890"}),
        json!({"name": "Jane Doe", "email": "jane@example.com", "phone": ""}),
    ];
    for body in bad_bodies {
        let response = post_contact(&base, body.clone()).await;
        assert_eq!(response.status(), 400, "expected 400 for {body}");
        let envelope: Value = response.json().await.unwrap();
        assert_eq!(envelope["error"], "Name, Email, and Phone are required.");
        assert!(envelope.get("details").is_none());
    }

    // None of the rejected requests touched the store
    assert!(get_contacts(&base).await.is_empty());
}

#[tokio::test]
async fn list_is_ordered_most_recent_first() {
    let base = spawn_server().await;

    let mut ids = Vec::new();
    for i in 0..4 {
        let response = post_contact(
            &base,
            json!({
                "name": format!("Contact {i}"),
                "email": format!("c{i}@example.com"),
                "phone": "1234567890",
            }),
        )
        .await;
        assert_eq!(response.status(), 201);
        let created: Value = response.json().await.unwrap();
        ids.push(created["id"].as_str().unwrap().to_string());
    }

    let contacts = get_contacts(&base).await;
    let listed: Vec<&str> = contacts.iter().map(|c| c["id"].as_str().unwrap()).collect();
    ids.reverse();
    assert_eq!(listed, ids);
}

#[tokio::test]
async fn update_unknown_id_is_404() {
    let base = spawn_server().await;
    let response = reqwest::Client::new()
        .put(format!("{base}/api/contacts/no-such-id"))
        .json(&json!({"name": "X"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
    let envelope: Value = response.json().await.unwrap();
    assert_eq!(envelope["error"], "Contact not found");
}

#[tokio::test]
async fn update_changes_only_named_fields() {
    let base = spawn_server().await;
    let created: Value = post_contact(&base, jane()).await.json().await.unwrap();
    let id = created["id"].as_str().unwrap();

    let response = reqwest::Client::new()
        .put(format!("{base}/api/contacts/{id}"))
        .json(&json!({"name": "X"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["name"], "X");
    assert_eq!(updated["email"], created["email"]);
    assert_eq!(updated["phone"], created["phone"]);

    // An empty-field patch is allowed: the update path does not re-validate
    let response = reqwest::Client::new()
        .put(format!("{base}/api/contacts/{id}"))
        .json(&json!({"phone": ""}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["phone"], "");
}

#[tokio::test]
async fn update_drops_unknown_keys() {
    let base = spawn_server().await;
    let created: Value = post_contact(&base, jane()).await.json().await.unwrap();
    let id = created["id"].as_str().unwrap();

    let response = reqwest::Client::new()
        .put(format!("{base}/api/contacts/{id}"))
        .json(&json!({"name": "X", "role": "admin", "id": "forged"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let updated: Value = response.json().await.unwrap();
    assert!(updated.get("role").is_none());
    // The id is not patchable
    assert_eq!(updated["id"], id);

    let contacts = get_contacts(&base).await;
    assert_eq!(contacts.len(), 1);
    assert!(contacts[0].get("role").is_none());
    assert_eq!(contacts[0]["id"], id);
}

#[tokio::test]
async fn delete_unknown_id_is_404() {
    let base = spawn_server().await;
    let response = reqwest::Client::new()
        .delete(format!("{base}/api/contacts/no-such-id"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
    let envelope: Value = response.json().await.unwrap();
    assert_eq!(envelope["error"], "Contact not found");
}

#[tokio::test]
async fn delete_removes_exactly_one_record() {
    let base = spawn_server().await;
    let a: Value = post_contact(&base, jane()).await.json().await.unwrap();
    let _b: Value = post_contact(
        &base,
        json!({"name": "Bob", "email": "bob@example.com", "phone": "0987654321"}),
    )
    .await
    .json()
    .await
    .unwrap();

    let id = a["id"].as_str().unwrap();
    let response = reqwest::Client::new()
        .delete(format!("{base}/api/contacts/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let contacts = get_contacts(&base).await;
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0]["name"], "Bob");
}

#[tokio::test]
async fn message_is_omitted_when_absent() {
    let base = spawn_server().await;
    let created: Value = post_contact(&base, jane()).await.json().await.unwrap();
    assert!(created.get("message").is_none());

    let with_message: Value = post_contact(
        &base,
        json!({"name": "Bob", "email": "bob@example.com", "phone": "0987654321", "message": "hi"}),
    )
    .await
    .json()
    .await
    .unwrap();
    assert_eq!(with_message["message"], "hi");
}

#[tokio::test]
async fn api_is_reachable_cross_origin() {
    let base = spawn_server().await;
    let response = reqwest::Client::new()
        .get(format!("{base}/api/contacts"))
        .header("Origin", "http://frontend.example")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert!(
        response
            .headers()
            .contains_key("access-control-allow-origin")
    );
}
