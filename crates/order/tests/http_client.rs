use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
};
use order::{
    abstract_trait::http_client::{CustomerClientTrait, ProductClientTrait},
    config::HttpClientConfig,
    http_client::HttpClients,
};
use serde_json::json;
use shared::{
    errors::ServiceError,
    utils::{Metrics, RequestContext},
};
use std::{
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio::net::TcpListener;

type SeenTraceIds = Arc<Mutex<Vec<String>>>;

async fn customer_by_email(
    State(seen): State<SeenTraceIds>,
    headers: HeaderMap,
    Path(email): Path<String>,
) -> Response {
    if let Some(trace_id) = headers.get("x-trace-id").and_then(|v| v.to_str().ok()) {
        seen.lock().unwrap().push(trace_id.to_string());
    }

    match email.as_str() {
        "a@x.com" => Json(json!({
            "message": "Customer by email",
            "timestamp": "2025-01-01T00:00:00Z",
            "elapsed_time": "1ms",
            "data": {"customer": {
                "customer_id": "c1",
                "name": "Ada",
                "surname": "Lovelace",
                "email": "a@x.com",
                "birthdate": "1815-12-10"
            }}
        }))
        .into_response(),
        "garbled@x.com" => (StatusCode::OK, "<html>oops</html>").into_response(),
        "boom@x.com" => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({"message": "Error on GET customer: not found", "data": {}})),
        )
            .into_response(),
    }
}

async fn product_by_name(Path(name): Path<String>) -> Response {
    match name.as_str() {
        "Nonexistent" => StatusCode::NOT_FOUND.into_response(),
        "Flaky" => StatusCode::SERVICE_UNAVAILABLE.into_response(),
        "Garbled" => (StatusCode::OK, "{\"data\": {\"product\": 7}}").into_response(),
        _ => Json(json!({
            "message": "Product by name",
            "data": {"product": {
                "product_id": format!("id-{name}"),
                "name": name,
                "description": "catalog entry",
                "price": 12.5,
                "quantity": 40
            }}
        }))
        .into_response(),
    }
}

async fn start_upstream() -> (String, SeenTraceIds) {
    let seen = SeenTraceIds::default();

    let app = Router::new()
        .route("/v2/customers/email/{email}", get(customer_by_email))
        .route("/v1/products/name/{name}", get(product_by_name))
        .with_state(seen.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), seen)
}

fn clients_for(customer_url: &str, product_url: &str) -> HttpClients {
    let config = HttpClientConfig {
        customer_service_url: customer_url.to_string(),
        product_service_url: product_url.to_string(),
        connect_timeout: Duration::from_millis(500),
        timeout: Duration::from_secs(2),
    };
    HttpClients::init(&config, Metrics::new()).unwrap()
}

#[tokio::test]
async fn resolves_customer_and_forwards_trace_id() {
    let (base, seen) = start_upstream().await;
    let clients = clients_for(&base, &base);

    let ctx = RequestContext::new("trace-123");
    let customer = clients.customer.find_by_email(&ctx, "a@x.com").await.unwrap();

    assert_eq!(customer.id, "c1");
    assert_eq!(customer.name, "Ada");
    assert_eq!(customer.email, "a@x.com");
    assert_eq!(*seen.lock().unwrap(), vec!["trace-123".to_string()]);
}

#[tokio::test]
async fn maps_customer_failures() {
    let (base, _) = start_upstream().await;
    let clients = clients_for(&base, &base);
    let ctx = RequestContext::new("t");

    let missing = clients.customer.find_by_email(&ctx, "missing@x.com").await;
    assert!(
        matches!(missing, Err(ServiceError::NotFound(ref m)) if m == "customer with email missing@x.com not found")
    );

    let boom = clients.customer.find_by_email(&ctx, "boom@x.com").await;
    assert!(
        matches!(boom, Err(ServiceError::UpstreamUnavailable(ref m)) if m.starts_with("customer boom@x.com: customer-service answered 500"))
    );

    let garbled = clients.customer.find_by_email(&ctx, "garbled@x.com").await;
    assert!(
        matches!(garbled, Err(ServiceError::UpstreamUnavailable(ref m)) if m.contains("garbled@x.com") && m.contains("malformed body"))
    );
}

#[tokio::test]
async fn resolves_product_names_with_spaces() {
    let (base, _) = start_upstream().await;
    let clients = clients_for(&base, &base);

    let product = clients
        .product
        .find_by_name(&RequestContext::new("t"), "Blue Widget")
        .await
        .unwrap();

    assert_eq!(product.id, "id-Blue Widget");
    assert_eq!(product.name, "Blue Widget");
    assert_eq!(product.price, 12.5);
}

#[tokio::test]
async fn maps_product_failures() {
    let (base, _) = start_upstream().await;
    let clients = clients_for(&base, &base);
    let ctx = RequestContext::new("t");

    let missing = clients.product.find_by_name(&ctx, "Nonexistent").await;
    assert!(
        matches!(missing, Err(ServiceError::NotFound(ref m)) if m == "product Nonexistent not found")
    );

    let flaky = clients.product.find_by_name(&ctx, "Flaky").await;
    assert!(
        matches!(flaky, Err(ServiceError::UpstreamUnavailable(ref m)) if m == "product Flaky: product-service answered 503 Service Unavailable")
    );

    let garbled = clients.product.find_by_name(&ctx, "Garbled").await;
    assert!(
        matches!(garbled, Err(ServiceError::UpstreamUnavailable(ref m)) if m.starts_with("product Garbled: product-service returned a malformed body"))
    );
}

#[tokio::test]
async fn unreachable_collaborator_is_unavailable() {
    // bind then drop to get a port nothing listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let clients = clients_for(&dead, &dead);
    let err = clients
        .customer
        .find_by_email(&RequestContext::new("t"), "a@x.com")
        .await
        .unwrap_err();

    assert!(
        matches!(err, ServiceError::UpstreamUnavailable(ref m) if m.starts_with("customer a@x.com:"))
    );
}
