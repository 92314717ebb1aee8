//! Demonstration service for the halyard hypermedia contract
//!
//! Serves hardcoded in-memory collections through handlers that exercise
//! every shape the library produces: single resources with links, embedded
//! resources, and paginated collections with derived navigation links.

pub mod handlers;
pub mod models;
pub mod repository;
pub mod state;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Build the demo router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/orders", get(handlers::orders::list_orders))
        .route("/orders/detailed", get(handlers::orders::list_orders_detailed))
        .route("/orders/{orderId}", get(handlers::orders::get_order))
        .route(
            "/orders/{orderId}/with-shipment",
            get(handlers::orders::get_order_with_shipment),
        )
        .route(
            "/orders/{orderId}/shipment",
            get(handlers::shipments::get_order_shipment),
        )
        .route("/shipments/{shipmentId}", get(handlers::shipments::get_shipment))
        .route("/books/{bookId}", get(handlers::books::get_book))
        .with_state(state)
}
