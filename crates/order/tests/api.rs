mod common;

use common::{BrokenStore, FakeCustomers, FakeProducts, harness};
use order::{
    di::{DependenciesInject, DependenciesInjectDeps},
    handler::AppRouter,
    state::AppState,
};
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use shared::utils::Metrics;
use std::{sync::Arc, time::Duration};
use tokio::net::TcpListener;

async fn spawn_app(timeout: Duration) -> (String, common::Harness) {
    let h = harness(
        FakeCustomers::default().with("a@x.com", "c1", "Ada"),
        FakeProducts::default()
            .with("Widget", "p1", 10.0)
            .with("Gadget", "p2", 25.5),
    );

    let base = serve(AppState::from_container(h.container.clone(), Metrics::new(), timeout)).await;
    (base, h)
}

async fn serve(state: AppState) -> String {
    let app = AppRouter::build(Arc::new(state));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

async fn body(response: reqwest::Response) -> Value {
    response.json().await.unwrap()
}

fn assert_envelope(value: &Value) {
    assert!(value["message"].is_string());
    assert!(value["timestamp"].is_string());
    assert!(value["elapsed_time"].as_str().unwrap().ends_with("ms"));
    assert!(value.get("data").is_some());
}

#[tokio::test]
async fn order_lifecycle_over_http() {
    let (base, _h) = spawn_app(Duration::from_secs(5)).await;
    let client = Client::new();

    let created = client
        .post(format!("{base}/v1/orders"))
        .json(&json!({
            "customer_email": "a@x.com",
            "products": [{"name": "Widget", "quantity": 2}, {"name": "Gadget", "quantity": 1}]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    let created = body(created).await;
    assert_envelope(&created);
    assert_eq!(created["message"], "Order created");
    let id = created["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(id.len(), 32);

    let fetched = client.get(format!("{base}/v1/orders/{id}")).send().await.unwrap();
    assert_eq!(fetched.status(), StatusCode::OK);
    let fetched = body(fetched).await;
    assert_envelope(&fetched);
    assert_eq!(fetched["message"], format!("Order by ID: {id}"));
    let order = &fetched["data"]["order"];
    assert_eq!(order["id"], id);
    assert_eq!(order["customer"], json!({"id": "c1", "name": "Ada", "email": "a@x.com"}));
    assert_eq!(order["products"][0]["name"], "Widget");
    assert_eq!(order["products"][0]["quantity"], 2);
    assert_eq!(order["products"][1]["price"], 25.5);

    let listed = client
        .get(format!("{base}/v1/orders/customers/c1"))
        .send()
        .await
        .unwrap();
    assert_eq!(listed.status(), StatusCode::OK);
    let listed = body(listed).await;
    assert_eq!(listed["data"]["orders"].as_array().unwrap().len(), 1);

    let deleted = client.delete(format!("{base}/v1/orders/{id}")).send().await.unwrap();
    assert_eq!(deleted.status(), StatusCode::OK);
    let deleted = body(deleted).await;
    assert_eq!(deleted["message"], "Order deleted");
    assert_eq!(deleted["data"], json!({}));

    let again = client.delete(format!("{base}/v1/orders/{id}")).send().await.unwrap();
    assert_eq!(again.status(), StatusCode::NOT_FOUND);

    let gone = client.get(format!("{base}/v1/orders/{id}")).send().await.unwrap();
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
    let gone = body(gone).await;
    assert_envelope(&gone);
    assert!(gone["message"].as_str().unwrap().starts_with("Error on GET order:"));
}

#[tokio::test]
async fn unresolvable_references_are_bad_requests() {
    let (base, h) = spawn_app(Duration::from_secs(5)).await;
    let client = Client::new();

    for payload in [
        json!({"customer_email": "nobody@x.com", "products": [{"name": "Widget", "quantity": 1}]}),
        json!({"customer_email": "a@x.com", "products": [{"name": "Nonexistent", "quantity": 1}]}),
        json!({"customer_email": "a@x.com", "products": []}),
        json!({"customer_email": "a@x.com", "products": [{"name": "Widget", "quantity": 0}]}),
    ] {
        let response = client
            .post(format!("{base}/v1/orders"))
            .json(&payload)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{payload}");

        let value = body(response).await;
        assert_envelope(&value);
        assert!(value["message"].as_str().unwrap().starts_with("Error on POST order:"));
    }

    assert!(h.store.is_empty());
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let (base, _h) = spawn_app(Duration::from_secs(5)).await;

    let response = Client::new()
        .post(format!("{base}/v1/orders"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_envelope(&body(response).await);
}

#[tokio::test]
async fn unknown_customer_has_empty_order_list() {
    let (base, _h) = spawn_app(Duration::from_secs(5)).await;

    let response = Client::new()
        .get(format!("{base}/v1/orders/customers/nobody"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body(response).await["data"]["orders"], json!([]));
}

#[tokio::test]
async fn unreadable_order_list_is_not_found() {
    let container = DependenciesInject::new(DependenciesInjectDeps {
        customer_client: Arc::new(FakeCustomers::default()),
        product_client: Arc::new(FakeProducts::default()),
        command: Arc::new(BrokenStore::Reset),
        query: Arc::new(BrokenStore::Reset),
        metrics: Metrics::new(),
    });
    let base = serve(AppState::from_container(
        container,
        Metrics::new(),
        Duration::from_secs(5),
    ))
    .await;

    let response = Client::new()
        .get(format!("{base}/v1/orders/customers/c1"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let value = body(response).await;
    assert_envelope(&value);
    assert!(value["message"].as_str().unwrap().starts_with("Error on GET orders:"));
}

#[tokio::test]
async fn exposes_metrics_and_openapi() {
    let (base, _h) = spawn_app(Duration::from_secs(5)).await;
    let client = Client::new();

    client
        .get(format!("{base}/v1/orders/customers/c1"))
        .send()
        .await
        .unwrap();

    let metrics = client.get(format!("{base}/metrics")).send().await.unwrap();
    assert_eq!(metrics.status(), StatusCode::OK);
    let text = metrics.text().await.unwrap();
    assert!(text.contains("order_service"));

    let spec = client
        .get(format!("{base}/api-docs/openapi.json"))
        .send()
        .await
        .unwrap();
    assert_eq!(spec.status(), StatusCode::OK);
    let spec = body(spec).await;
    assert!(spec["paths"].get("/v1/orders").is_some());
}
