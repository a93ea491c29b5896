#![cfg(feature = "rest")]

use std::{sync::Arc, time::Duration};

use chrono::Utc;
use seajourney_core::{
    Viewport, catalog,
    page::LandingPage,
    runtime::{self, RuntimeSettings, SystemClock, UserAction},
    subscription::{
        StoreError, SubscriberEmail, SubscriptionRequest, SubscriptionStore,
        form::MSG_DUPLICATE, insert_with_timeout, rest::RestSubscriptionStore,
    },
};
use url::Url;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

const API_KEY: &str = "test-anon-key";

fn request(raw: &str) -> SubscriptionRequest {
    SubscriptionRequest {
        email: SubscriberEmail::parse(raw).unwrap(),
    }
}

fn store_for(server: &MockServer) -> RestSubscriptionStore {
    let base = Url::parse(&server.uri()).unwrap();
    RestSubscriptionStore::new(&base, "subscriptions", API_KEY).unwrap()
}

#[tokio::test]
async fn insert_posts_one_row_with_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/subscriptions"))
        .and(header("apikey", API_KEY))
        .and(header("authorization", format!("Bearer {API_KEY}").as_str()))
        .and(header("prefer", "return=minimal"))
        .and(body_json(serde_json::json!([
            { "email": "traveller@example.com" }
        ])))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let store = store_for(&server);
    assert_eq!(store.insert(&request("traveller@example.com")).await, Ok(()));
}

#[tokio::test]
async fn unique_violation_body_is_a_duplicate() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(409).set_body_json(serde_json::json!({
            "code": "23505",
            "message": "duplicate key value violates unique constraint \"subscriptions_email_key\"",
        })))
        .mount(&server)
        .await;

    let result = store_for(&server).insert(&request("traveller@example.com")).await;
    assert_eq!(result, Err(StoreError::Duplicate));
}

#[tokio::test]
async fn conflict_without_body_is_a_duplicate() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(409))
        .mount(&server)
        .await;

    let result = store_for(&server).insert(&request("traveller@example.com")).await;
    assert_eq!(result, Err(StoreError::Duplicate));
}

#[tokio::test]
async fn conflict_on_another_constraint_is_not_a_duplicate() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(409).set_body_json(serde_json::json!({
            "code": "23503",
            "message": "insert or update on table \"subscriptions\" violates foreign key constraint",
        })))
        .mount(&server)
        .await;

    let result = store_for(&server).insert(&request("traveller@example.com")).await;
    match result {
        Err(StoreError::Backend(message)) => assert!(message.contains("foreign key")),
        other => panic!("expected backend error, got {other:?}"),
    }
}

#[tokio::test]
async fn other_failures_are_backend_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "code": "XX000",
            "message": "internal error",
        })))
        .mount(&server)
        .await;

    let result = store_for(&server).insert(&request("traveller@example.com")).await;
    match result {
        Err(StoreError::Backend(message)) => assert!(message.contains("internal error")),
        other => panic!("expected backend error, got {other:?}"),
    }
}

#[tokio::test]
async fn slow_endpoint_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let store = store_for(&server);
    let timeout = Duration::from_millis(200);
    let result = insert_with_timeout(&store, &request("traveller@example.com"), timeout).await;
    assert_eq!(result, Err(StoreError::Timeout(timeout)));
}

#[tokio::test]
async fn page_runtime_reports_duplicate_from_rest_store() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(serde_json::json!({ "code": "23505" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let page = LandingPage::new(
        Utc::now() + chrono::Duration::days(30),
        Utc::now(),
        catalog::default_slides(),
    )
    .unwrap();
    let settings = RuntimeSettings {
        countdown_tick: Duration::from_secs(1),
        carousel_interval: Duration::from_secs(5),
        submit_timeout: Duration::from_secs(5),
        viewport: Viewport::Wide,
    };
    let handle = runtime::spawn(
        page,
        Arc::new(store_for(&server)),
        settings,
        Arc::new(SystemClock),
    );
    let mut updates = handle.subscribe();

    handle
        .send(UserAction::EmailChanged("traveller@example.com".into()))
        .await
        .unwrap();
    handle.send(UserAction::Submit).await.unwrap();

    let snapshot = tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            updates.changed().await.unwrap();
            let snapshot = updates.borrow_and_update().clone();
            if !snapshot.notices.is_empty() {
                return snapshot;
            }
        }
    })
    .await
    .unwrap();

    assert_eq!(snapshot.notices[0].message, MSG_DUPLICATE);
    assert_eq!(snapshot.email, "traveller@example.com");
    handle.shutdown().await.unwrap();
}
