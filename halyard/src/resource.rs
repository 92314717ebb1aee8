//! Single-resource responses with links and embedded resources
//!
//! [`ResourceResponse`] wraps one domain value: its fields are flattened
//! at the top level of the JSON output, followed by an optional `embedded`
//! block keyed by relation name and a `links` block.
//!
//! ```json
//! {
//!   "id": 1234,
//!   "userId": 37,
//!   "embedded": {"shipment": {"id": 127, "links": {"self": {...}}}},
//!   "links": {"self": {"href": "..."}, "shipment": {"href": "..."}}
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use halyard::links::Link;
//! use halyard::resource::{EmbeddedResource, ResourceResponse};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Order { id: u32 }
//!
//! #[derive(Serialize)]
//! struct Shipment { id: u32 }
//!
//! let response: ResourceResponse<Order, Shipment> = ResourceResponse::wrap(Order { id: 1234 })
//!     .with_self_link(Link::new("orders/1234"))
//!     .with_embedded(
//!         "shipment",
//!         EmbeddedResource::wrap(Shipment { id: 127 })
//!             .with_self_link(Link::new("shipments/127")),
//!     );
//! ```

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::links::{Link, LinkSet};

/// A related entity nested under a parent resource, with its own links
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedResource<E> {
    /// The embedded value, flattened into the block
    #[serde(flatten)]
    pub resource: E,
    /// Links belonging to the embedded resource itself
    pub links: LinkSet,
}

impl<E> EmbeddedResource<E> {
    /// Wrap an embedded value with no links yet
    pub fn wrap(resource: E) -> Self {
        Self {
            resource,
            links: LinkSet::default(),
        }
    }

    /// Set the embedded resource's `self` link
    #[must_use]
    pub fn with_self_link(mut self, link: Link) -> Self {
        self.links.self_link = Some(link);
        self
    }

    /// Replace the embedded resource's link set
    #[must_use]
    pub fn with_links(mut self, links: LinkSet) -> Self {
        self.links = links;
        self
    }
}

/// A single resource plus links and optional embedded resources
///
/// `E` is the embedded resource type; it defaults to `()` for resources
/// that embed nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceResponse<T, E = ()> {
    /// The wrapped value, flattened to the top level
    #[serde(flatten)]
    pub resource: T,
    /// Embedded resources keyed by relation name
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub embedded: BTreeMap<String, EmbeddedResource<E>>,
    /// The resource's links
    pub links: LinkSet,
}

impl<T, E> ResourceResponse<T, E> {
    /// Wrap a resource with no links yet
    pub fn wrap(resource: T) -> Self {
        Self {
            resource,
            embedded: BTreeMap::new(),
            links: LinkSet::default(),
        }
    }

    /// Set the resource's `self` link
    #[must_use]
    pub fn with_self_link(mut self, link: Link) -> Self {
        self.links.self_link = Some(link);
        self
    }

    /// Add a link under a custom relation
    #[must_use]
    pub fn with_link(mut self, rel: impl Into<String>, link: Link) -> Self {
        self.links.custom.insert(rel.into(), link);
        self
    }

    /// Replace the resource's link set
    #[must_use]
    pub fn with_links(mut self, links: LinkSet) -> Self {
        self.links = links;
        self
    }

    /// Embed a related resource under a relation name
    #[must_use]
    pub fn with_embedded(mut self, rel: impl Into<String>, embedded: EmbeddedResource<E>) -> Self {
        self.embedded.insert(rel.into(), embedded);
        self
    }
}

impl<T: Serialize, E: Serialize> IntoResponse for ResourceResponse<T, E> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
