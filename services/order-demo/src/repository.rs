//! Repository traits and in-memory fixture-backed implementations
//!
//! The handlers depend only on the traits; the in-memory implementations
//! stand in for real storage and are injected through
//! [`AppState`](crate::state::AppState), so swapping in a database-backed
//! repository never touches the link-assembly code.

use async_trait::async_trait;

use crate::models::{Author, Book, Order, Shipment};

/// Read access to orders
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn find_by_id(&self, id: u32) -> Option<Order>;

    /// One page of orders, optionally restricted to a user, sorted by id
    async fn find_page(&self, user_id: Option<u64>, limit: u32, offset: u64) -> Vec<Order>;

    /// Total order count for the same restriction as [`find_page`](Self::find_page)
    async fn count(&self, user_id: Option<u64>) -> u64;
}

/// Read access to shipments
#[async_trait]
pub trait ShipmentRepository: Send + Sync {
    async fn find_by_id(&self, id: u32) -> Option<Shipment>;

    /// The most recent shipment for an order
    async fn find_last_by_order_id(&self, order_id: u32) -> Option<Shipment>;
}

/// Read access to the book catalog
#[async_trait]
pub trait BookRepository: Send + Sync {
    async fn find_by_id(&self, id: u32) -> Option<Book>;

    /// Author lookup by exact name; unknown names yield `None`
    async fn find_author_by_name(&self, name: &str) -> Option<Author>;
}

/// In-memory order fixtures
pub struct InMemoryOrders {
    orders: Vec<Order>,
}

impl InMemoryOrders {
    /// Sample data: six orders for user 37, two for 38, one for 39
    pub fn with_fixtures() -> Self {
        Self {
            orders: vec![
                Order::new(1201, 37, 129.99, "Processing"),
                Order::new(1202, 37, 72.48, "Delivered"),
                Order::new(1203, 37, 199.95, "Returned"),
                Order::new(1204, 37, 34.00, "Delivered"),
                Order::new(1205, 37, 12.50, "Created"),
                Order::new(1206, 37, 89.90, "Delivered"),
                Order::new(2201, 38, 149.99, "Delivered"),
                Order::new(2202, 38, 49.99, "Processing"),
                Order::new(3301, 39, 34.00, "Created"),
            ],
        }
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrders {
    async fn find_by_id(&self, id: u32) -> Option<Order> {
        self.orders.iter().find(|order| order.id == id).cloned()
    }

    async fn find_page(&self, user_id: Option<u64>, limit: u32, offset: u64) -> Vec<Order> {
        let mut matching: Vec<Order> = self
            .orders
            .iter()
            .filter(|order| user_id.is_none_or(|uid| order.user_id == uid))
            .cloned()
            .collect();
        matching.sort_by_key(|order| order.id);
        matching
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect()
    }

    async fn count(&self, user_id: Option<u64>) -> u64 {
        self.orders
            .iter()
            .filter(|order| user_id.is_none_or(|uid| order.user_id == uid))
            .count() as u64
    }
}

/// In-memory shipment fixtures, keyed by order id
pub struct InMemoryShipments {
    shipments: Vec<(u32, Shipment)>,
}

impl InMemoryShipments {
    pub fn with_fixtures() -> Self {
        Self {
            shipments: vec![
                (1201, Shipment::new(501, "UPS", "1Z-440-7743-01", "InTransit")),
                (1202, Shipment::new(502, "UPS", "1Z-440-7743-02", "Completed")),
                (1203, Shipment::new(503, "DHL", "JD-0144-8821-03", "Completed")),
                (1204, Shipment::new(504, "UPS", "1Z-440-7743-04", "Completed")),
                (1206, Shipment::new(506, "DHL", "JD-0144-8821-06", "Completed")),
                (2201, Shipment::new(521, "UPS", "1Z-512-0098-21", "Completed")),
                // a second shipment for the same order; the later entry wins
                (1202, Shipment::new(507, "DHL", "JD-0144-8821-07", "InTransit")),
            ],
        }
    }
}

#[async_trait]
impl ShipmentRepository for InMemoryShipments {
    async fn find_by_id(&self, id: u32) -> Option<Shipment> {
        self.shipments
            .iter()
            .find(|(_, shipment)| shipment.id == id)
            .map(|(_, shipment)| shipment.clone())
    }

    async fn find_last_by_order_id(&self, order_id: u32) -> Option<Shipment> {
        self.shipments
            .iter()
            .rev()
            .find(|(oid, _)| *oid == order_id)
            .map(|(_, shipment)| shipment.clone())
    }
}

/// In-memory book catalog fixtures
pub struct InMemoryBooks {
    books: Vec<Book>,
    authors: Vec<Author>,
}

impl InMemoryBooks {
    pub fn with_fixtures() -> Self {
        Self {
            books: vec![
                Book {
                    id: 1,
                    title: "The Pragmatic Programmer".to_string(),
                    author: "Andrew Hunt".to_string(),
                    isbn: "978-0201616224".to_string(),
                    published_year: 1999,
                },
                Book {
                    id: 2,
                    title: "Refactoring".to_string(),
                    author: "Martin Fowler".to_string(),
                    isbn: "978-0134757599".to_string(),
                    published_year: 2018,
                },
                // catalog entry whose author is not in the author table
                Book {
                    id: 3,
                    title: "A Collected Miscellany".to_string(),
                    author: "Anonymous".to_string(),
                    isbn: "978-1852589998".to_string(),
                    published_year: 1901,
                },
            ],
            authors: vec![
                Author {
                    id: 11,
                    name: "Andrew Hunt".to_string(),
                    birth_date: None,
                    main_genre: Some("Software Engineering".to_string()),
                },
                Author {
                    id: 12,
                    name: "Martin Fowler".to_string(),
                    birth_date: Some("1963-12-18".to_string()),
                    main_genre: Some("Software Engineering".to_string()),
                },
            ],
        }
    }
}

#[async_trait]
impl BookRepository for InMemoryBooks {
    async fn find_by_id(&self, id: u32) -> Option<Book> {
        self.books.iter().find(|book| book.id == id).cloned()
    }

    async fn find_author_by_name(&self, name: &str) -> Option<Author> {
        self.authors.iter().find(|author| author.name == name).cloned()
    }
}
