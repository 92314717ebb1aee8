//! Shared application state

use std::sync::Arc;

use halyard::prelude::*;

use crate::repository::{
    BookRepository, InMemoryBooks, InMemoryOrders, InMemoryShipments, OrderRepository,
    ShipmentRepository,
};

/// State handed to every handler
///
/// Repositories are trait objects so real storage can replace the
/// in-memory fixtures without touching the handlers.
#[derive(Clone)]
pub struct AppState {
    pub orders: Arc<dyn OrderRepository>,
    pub shipments: Arc<dyn ShipmentRepository>,
    pub books: Arc<dyn BookRepository>,
    pub routes: Arc<RouteRegistry>,
    pub base_url: String,
    pub default_page_size: u32,
    pub max_page_size: u32,
}

impl AppState {
    /// State backed by the in-memory fixtures
    pub fn new(config: &Config) -> Self {
        Self::with_repositories(
            config,
            Arc::new(InMemoryOrders::with_fixtures()),
            Arc::new(InMemoryShipments::with_fixtures()),
            Arc::new(InMemoryBooks::with_fixtures()),
        )
    }

    /// State with caller-provided repositories
    pub fn with_repositories(
        config: &Config,
        orders: Arc<dyn OrderRepository>,
        shipments: Arc<dyn ShipmentRepository>,
        books: Arc<dyn BookRepository>,
    ) -> Self {
        Self {
            orders,
            shipments,
            books,
            routes: Arc::new(route_registry()),
            base_url: config.hypermedia.base_url.clone(),
            default_page_size: config.hypermedia.default_page_size,
            max_page_size: config.hypermedia.max_page_size,
        }
    }

    /// Build a registered route's link, resolved against the base URL
    pub fn link_for(&self, key: &str, params: &[(&str, &str)]) -> Result<Link> {
        Ok(Link::new(self.routes.href_for(key, params)?).prepend_base_url(&self.base_url))
    }
}

/// Every link the demo service builds comes from this registry
fn route_registry() -> RouteRegistry {
    RouteRegistry::new()
        .with_route("orders", LinkTemplate::new("orders{?userId}"))
        .with_route("orders-detailed", LinkTemplate::new("orders/detailed{?userId}"))
        .with_route("order", LinkTemplate::new("orders/{orderId}"))
        .with_route("order-shipment", LinkTemplate::new("orders/{orderId}/shipment"))
        .with_route("shipment", LinkTemplate::new("shipments/{shipmentId}"))
        .with_route("book", LinkTemplate::new("books/{bookId}"))
}
