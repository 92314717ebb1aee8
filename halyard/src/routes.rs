//! Route registry for link construction
//!
//! Statically typed services cannot resolve handler methods to URLs by
//! reflection, so links are built from an explicit registry: a mapping from
//! logical endpoint keys to [`LinkTemplate`]s, populated once at startup
//! and looked up by key at request time.
//!
//! # Example
//!
//! ```rust
//! use halyard::routes::RouteRegistry;
//! use halyard::template::LinkTemplate;
//!
//! let registry = RouteRegistry::new()
//!     .with_route("order", LinkTemplate::new("orders/{orderId}"))
//!     .with_route("orders", LinkTemplate::new("orders{?userId}"));
//!
//! let href = registry.href_for("order", &[("orderId", "1234")]).unwrap();
//! assert_eq!(href, "orders/1234");
//! ```

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::template::LinkTemplate;

/// Startup-populated mapping from endpoint key to URI template
#[derive(Debug, Clone, Default)]
pub struct RouteRegistry {
    routes: BTreeMap<String, LinkTemplate>,
}

impl RouteRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template under a key, builder style
    ///
    /// Registering the same key twice replaces the earlier template.
    #[must_use]
    pub fn with_route(mut self, key: impl Into<String>, template: LinkTemplate) -> Self {
        self.routes.insert(key.into(), template);
        self
    }

    /// Register a template under a key
    pub fn register(&mut self, key: impl Into<String>, template: LinkTemplate) {
        self.routes.insert(key.into(), template);
    }

    /// Look up the template registered under `key`
    ///
    /// # Errors
    ///
    /// [`Error::UnknownRoute`] when the key was never registered.
    pub fn lookup(&self, key: &str) -> Result<&LinkTemplate> {
        self.routes
            .get(key)
            .ok_or_else(|| Error::UnknownRoute(key.to_string()))
    }

    /// Look up and expand in one step
    ///
    /// # Errors
    ///
    /// [`Error::UnknownRoute`] on a missing key, or
    /// [`Error::TemplateExpansion`] when a required placeholder has no
    /// value.
    pub fn href_for(&self, key: &str, params: &[(&str, &str)]) -> Result<String> {
        self.lookup(key)?.expand(params)
    }

    /// Number of registered routes
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> RouteRegistry {
        RouteRegistry::new()
            .with_route("order", LinkTemplate::new("orders/{orderId}"))
            .with_route("order-shipment", LinkTemplate::new("orders/{orderId}/shipment"))
    }

    #[test]
    fn test_lookup_known_key() {
        let registry = registry();
        assert_eq!(registry.lookup("order").unwrap().as_str(), "orders/{orderId}");
    }

    #[test]
    fn test_lookup_unknown_key_errors() {
        let err = registry().lookup("invoice").unwrap_err();
        assert!(matches!(err, Error::UnknownRoute(key) if key == "invoice"));
    }

    #[test]
    fn test_href_for_expands() {
        let href = registry()
            .href_for("order-shipment", &[("orderId", "1234")])
            .unwrap();
        assert_eq!(href, "orders/1234/shipment");
    }

    #[test]
    fn test_href_for_missing_placeholder_value() {
        let err = registry().href_for("order", &[]).unwrap_err();
        assert!(matches!(err, Error::TemplateExpansion { .. }));
    }

    #[test]
    fn test_reregistering_replaces() {
        let mut registry = registry();
        registry.register("order", LinkTemplate::new("v2/orders/{orderId}"));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.lookup("order").unwrap().as_str(), "v2/orders/{orderId}");
    }
}
