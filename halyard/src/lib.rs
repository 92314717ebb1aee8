//! # halyard
//!
//! Hypermedia pagination and navigation-link assembly for axum services.
//!
//! The core of the crate is a small, pure contract: given a page of items,
//! page metadata, and sort criteria, produce a self-describing paginated
//! response with `self`/`next`/`prev`/`first`/`last` navigation links.
//! Around it sit the pieces a service needs to use it: a URI template
//! expander, a route registry for link construction, single-resource
//! wrappers with embedded resources, configuration, and an HTTP server
//! helper.
//!
//! ## Example
//!
//! ```rust
//! use halyard::prelude::*;
//!
//! #[derive(Serialize)]
//! struct Order {
//!     id: u32,
//! }
//!
//! fn list_orders(user_id: u64) -> Result<ListResponse<Order>> {
//!     // items, total count, and paging inputs come from a repository
//!     let items = vec![Order { id: 1234 }, Order { id: 1057 }];
//!     let sort = vec![SortCriterion::by("id", SortDirection::Ascending)];
//!
//!     ListAssembler::new(LinkTemplate::new("orders{?userId}"))
//!         .with_base_url("http://localhost:8080")
//!         .with_param("userId", user_id)
//!         .assemble(items, Some(PageRequest::new(2, 6, 0)), &sort)
//! }
//!
//! let response = list_orders(37).unwrap();
//! assert!(response.links.next.is_some());
//! ```

pub mod assembler;
pub mod config;
pub mod error;
pub mod links;
pub mod observability;
pub mod page;
pub mod resource;
pub mod routes;
pub mod server;
pub mod sort;
pub mod template;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::assembler::{ListAssembler, ListResponse, PageRequest};
    pub use crate::config::{Config, HypermediaConfig, ServiceConfig};
    pub use crate::error::{Error, Result};
    pub use crate::links::{derive_navigation_links, Link, LinkRelation, LinkSet};
    pub use crate::observability::init_tracing;
    pub use crate::page::PageInfo;
    pub use crate::resource::{EmbeddedResource, ResourceResponse};
    pub use crate::routes::RouteRegistry;
    pub use crate::server::Server;
    pub use crate::sort::{SortCriterion, SortDirection};
    pub use crate::template::{join_base, LinkTemplate};

    pub use axum::{
        extract::{Path, Query, State},
        http::StatusCode,
        response::{IntoResponse, Json, Response},
        routing::get,
        Router,
    };

    pub use serde::{Deserialize, Serialize};

    pub use tracing::{debug, error, info, instrument, trace, warn};

    pub use tokio;
}
