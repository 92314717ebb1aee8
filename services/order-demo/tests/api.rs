//! End-to-end tests driving the demo router in-process

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use halyard::prelude::Config;
use order_demo::{app, state::AppState};
use serde_json::Value;
use tower::ServiceExt;

fn test_app() -> Router {
    app(AppState::new(&Config::default()))
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = test_app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn first_page_of_user_orders() {
    let (status, json) = get("/orders?userId=37&page=0&size=2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["page"],
        serde_json::json!({"size": 2, "totalElements": 6, "totalPages": 3, "number": 0})
    );

    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], 1201);
    assert_eq!(items[0]["userId"], 37);
    assert_eq!(
        items[0]["links"]["self"]["href"],
        "http://localhost:8080/orders/1201"
    );

    let links = &json["links"];
    assert_eq!(
        links["self"]["href"],
        "http://localhost:8080/orders?userId=37&page=0&size=2"
    );
    assert_eq!(
        links["next"]["href"],
        "http://localhost:8080/orders?userId=37&page=1&size=2"
    );
    assert_eq!(
        links["last"]["href"],
        "http://localhost:8080/orders?userId=37&page=2&size=2"
    );
    assert!(links.get("prev").is_none());
    assert!(links.get("first").is_none());
}

#[tokio::test]
async fn middle_page_carries_all_navigation_links() {
    let (status, json) = get("/orders?userId=37&page=1&size=2&sort=id,asc").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["page"]["number"], 1);

    let links = &json["links"];
    for rel in ["self", "next", "prev", "first", "last"] {
        assert!(links.get(rel).is_some(), "missing relation: {rel}");
    }
    assert_eq!(
        links["prev"]["href"],
        "http://localhost:8080/orders?userId=37&page=0&size=2&sort=id,asc"
    );
    assert_eq!(
        links["next"]["href"],
        "http://localhost:8080/orders?userId=37&page=2&size=2&sort=id,asc"
    );
}

#[tokio::test]
async fn empty_result_is_well_formed() {
    let (status, json) = get("/orders?userId=404&size=2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["items"], serde_json::json!([]));
    assert_eq!(json["page"]["totalPages"], 0);

    let links = json["links"].as_object().unwrap();
    assert_eq!(links.len(), 1);
    assert!(links.contains_key("self"));
}

#[tokio::test]
async fn list_without_user_filter_omits_passthrough_param() {
    let (status, json) = get("/orders?page=0&size=5").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["page"]["totalElements"], 9);
    assert_eq!(
        json["links"]["self"]["href"],
        "http://localhost:8080/orders?page=0&size=5"
    );
}

#[tokio::test]
async fn detailed_list_embeds_shipment_per_item() {
    let (status, json) = get("/orders/detailed?userId=37&page=0&size=2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["page"],
        serde_json::json!({"size": 2, "totalElements": 6, "totalPages": 3, "number": 0})
    );

    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], 1201);
    assert_eq!(items[0]["embedded"]["shipment"]["id"], 501);
    assert_eq!(
        items[0]["embedded"]["shipment"]["links"]["self"]["href"],
        "http://localhost:8080/shipments/501"
    );
    // the most recent shipment for the order wins
    assert_eq!(items[1]["id"], 1202);
    assert_eq!(items[1]["embedded"]["shipment"]["id"], 507);

    let links = &json["links"];
    assert_eq!(
        links["self"]["href"],
        "http://localhost:8080/orders/detailed?userId=37&page=0&size=2"
    );
    assert_eq!(
        links["next"]["href"],
        "http://localhost:8080/orders/detailed?userId=37&page=1&size=2"
    );
}

#[tokio::test]
async fn detailed_list_omits_embedded_for_unshipped_order() {
    let (status, json) = get("/orders/detailed?userId=37&size=6").await;

    assert_eq!(status, StatusCode::OK);
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 6);
    // order 1205 has no shipment yet
    assert_eq!(items[4]["id"], 1205);
    assert!(items[4].get("embedded").is_none());
    assert_eq!(
        items[4]["links"]["self"]["href"],
        "http://localhost:8080/orders/1205"
    );
}

#[tokio::test]
async fn invalid_sort_direction_is_rejected() {
    let (status, json) = get("/orders?sort=id,sideways").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], 400);
}

#[tokio::test]
async fn single_order_with_links() {
    let (status, json) = get("/orders/1201").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], 1201);
    assert_eq!(json["status"], "Processing");
    assert_eq!(
        json["links"]["self"]["href"],
        "http://localhost:8080/orders/1201"
    );
    assert_eq!(
        json["links"]["shipment"]["href"],
        "http://localhost:8080/orders/1201/shipment"
    );
    assert!(json.get("embedded").is_none());
}

#[tokio::test]
async fn order_with_embedded_shipment() {
    let (status, json) = get("/orders/1202/with-shipment").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], 1202);
    // the most recent shipment for the order wins
    assert_eq!(json["embedded"]["shipment"]["id"], 507);
    assert_eq!(
        json["embedded"]["shipment"]["links"]["self"]["hreflang"],
        "en-US"
    );
}

#[tokio::test]
async fn shipment_by_order() {
    let (status, json) = get("/orders/1203/shipment").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], 503);
    assert_eq!(json["carrier"], "DHL");
    assert_eq!(
        json["links"]["order"]["href"],
        "http://localhost:8080/orders/1203"
    );
}

#[tokio::test]
async fn missing_order_is_404() {
    let (status, json) = get("/orders/9999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["status"], 404);
}

#[tokio::test]
async fn book_without_author() {
    let (status, json) = get("/books/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["title"], "The Pragmatic Programmer");
    assert!(json.get("embedded").is_none());
}

#[tokio::test]
async fn book_with_embedded_author() {
    let (status, json) = get("/books/2?withAuthor=true").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["embedded"]["author"]["name"], "Martin Fowler");
}

#[tokio::test]
async fn book_with_unknown_author_is_partial_content() {
    let (status, json) = get("/books/3?withAuthor=true").await;

    assert_eq!(status, StatusCode::PARTIAL_CONTENT);
    assert_eq!(json["title"], "A Collected Miscellany");
    assert!(json.get("embedded").is_none());
}

#[tokio::test]
async fn identical_requests_yield_identical_bodies() {
    let (_, first) = get("/orders?userId=37&page=1&size=2&sort=id,desc").await;
    let (_, second) = get("/orders?userId=37&page=1&size=2&sort=id,desc").await;
    assert_eq!(first, second);
}
