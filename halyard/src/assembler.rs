//! List response assembly
//!
//! [`ListAssembler`] orchestrates the page calculator, the template
//! expander, and the navigation-link deriver into the final structured
//! payload: items, an optional page block, and a links block.
//!
//! # Example
//!
//! ```rust
//! use halyard::assembler::{ListAssembler, PageRequest};
//! use halyard::template::LinkTemplate;
//!
//! let assembler = ListAssembler::new(LinkTemplate::new("orders{?userId}"))
//!     .with_base_url("http://host:8080")
//!     .with_param("userId", 37);
//!
//! let response = assembler
//!     .assemble(vec!["a", "b"], Some(PageRequest::new(2, 6, 0)), &[])
//!     .unwrap();
//!
//! assert_eq!(response.items.len(), 2);
//! assert_eq!(response.page.unwrap().total_pages, 3);
//! assert!(response.links.next.is_some());
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::links::{derive_navigation_links, Link, LinkSet};
use crate::page::PageInfo;
use crate::sort::SortCriterion;
use crate::template::{join_base, LinkTemplate};

/// The three pagination inputs, supplied all-or-nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Page size requested by the caller
    pub size: u32,
    /// Total element count reported by the data-access collaborator
    pub total_elements: u64,
    /// Offset of the first returned item
    pub offset: u64,
}

impl PageRequest {
    /// Create a pagination request
    #[must_use]
    pub fn new(size: u32, total_elements: u64, offset: u64) -> Self {
        Self {
            size,
            total_elements,
            offset,
        }
    }
}

/// A paginated, self-describing list payload
///
/// Serializes as `{"page": {...}, "items": [...], "links": {...}}`. The
/// page block is omitted (not `null`) when pagination inputs were absent;
/// `items` is always present, possibly empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    /// Page metadata, present only for paginated responses
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub page: Option<PageInfo>,
    /// Items in input order
    pub items: Vec<T>,
    /// Navigation links
    pub links: LinkSet,
}

impl<T> ListResponse<T> {
    /// Number of items on this page
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page carries no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Map each item to a new type, keeping page and links intact
    pub fn map<U, F>(self, f: F) -> ListResponse<U>
    where
        F: FnMut(T) -> U,
    {
        ListResponse {
            page: self.page,
            items: self.items.into_iter().map(f).collect(),
            links: self.links,
        }
    }
}

impl<T: Serialize> IntoResponse for ListResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Assembles [`ListResponse`] payloads for one collection endpoint
///
/// Holds the endpoint's link template, an optional base URL, and the
/// passthrough parameter values for the current request. Every call to
/// [`assemble`](Self::assemble) is a pure function of the assembler state
/// and its arguments.
#[derive(Debug, Clone)]
pub struct ListAssembler {
    template: LinkTemplate,
    base_url: Option<String>,
    params: Vec<(String, String)>,
}

impl ListAssembler {
    /// Create an assembler for the given collection template
    #[must_use]
    pub fn new(template: LinkTemplate) -> Self {
        Self {
            template,
            base_url: None,
            params: Vec::new(),
        }
    }

    /// Resolve expanded links against a base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Supply a value for a template placeholder
    ///
    /// Parameters not named by the template are ignored by expansion;
    /// parameters named by a `{?...}` expansion are carried into every
    /// derived navigation link.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.params.push((name.into(), value.to_string()));
        self
    }

    /// Assemble the final payload
    ///
    /// With `Some(page)` the response carries a page block and full
    /// navigation links. With `None` it carries only the items and a bare
    /// `self` link without paging or sort parameters.
    ///
    /// # Errors
    ///
    /// [`crate::Error::TemplateExpansion`] when the template names a
    /// required placeholder with no supplied value.
    pub fn assemble<T>(
        &self,
        items: Vec<T>,
        page: Option<PageRequest>,
        sort: &[SortCriterion],
    ) -> Result<ListResponse<T>> {
        let pairs: Vec<(&str, &str)> = self
            .params
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();
        let mut href = self.template.expand(&pairs)?;
        if let Some(base) = &self.base_url {
            href = join_base(base, &href);
        }

        let (page_info, links) = match page {
            Some(request) => {
                let info = PageInfo::from_offset(request.size, request.total_elements, request.offset);
                let links = derive_navigation_links(&href, &info, sort);
                (Some(info), links)
            }
            None => (None, LinkSet::self_only(Link::self_of(href))),
        };

        Ok(ListResponse {
            page: page_info,
            items,
            links,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::sort::SortDirection;

    fn assembler() -> ListAssembler {
        ListAssembler::new(LinkTemplate::new("orders{?userId}"))
            .with_base_url("http://host:8080")
            .with_param("userId", 37)
    }

    #[test]
    fn test_paginated_first_page() {
        // Scenario: size=2, total=6, offset=0
        let response = assembler()
            .assemble(vec![1, 2], Some(PageRequest::new(2, 6, 0)), &[])
            .unwrap();

        let page = response.page.unwrap();
        assert_eq!(page.size, 2);
        assert_eq!(page.total_elements, 6);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.number, 0);

        assert_eq!(
            response.links.self_link.as_ref().unwrap().href,
            "http://host:8080/orders?userId=37&page=0&size=2"
        );
        assert!(response.links.next.is_some());
        assert!(response.links.prev.is_none());
        assert!(response.links.first.is_none());
    }

    #[test]
    fn test_paginated_middle_page_with_sort() {
        // Scenario: size=2, total=6, offset=2
        let sort = vec![SortCriterion::by("id", SortDirection::Ascending)];
        let response = assembler()
            .assemble(vec![3, 4], Some(PageRequest::new(2, 6, 2)), &sort)
            .unwrap();

        assert_eq!(response.page.unwrap().number, 1);
        let links = &response.links;
        assert!(links.self_link.is_some());
        assert!(links.next.is_some());
        assert!(links.prev.is_some());
        assert!(links.first.is_some());
        assert!(links.last.is_some());
        assert_eq!(
            links.next.as_ref().unwrap().href,
            "http://host:8080/orders?userId=37&page=2&size=2&sort=id,asc"
        );
    }

    #[test]
    fn test_empty_collection() {
        // Scenario: total=0 — well-formed response, empty items, only self
        let response = assembler()
            .assemble(Vec::<u32>::new(), Some(PageRequest::new(2, 0, 0)), &[])
            .unwrap();

        assert!(response.is_empty());
        assert_eq!(response.page.unwrap().total_pages, 0);
        assert_eq!(response.links.len(), 1);
    }

    #[test]
    fn test_unpaginated_response() {
        // Scenario: no pagination inputs — bare self link, no page block
        let response = assembler().assemble(vec![1, 2, 3], None, &[]).unwrap();

        assert!(response.page.is_none());
        assert_eq!(response.links.len(), 1);
        assert_eq!(
            response.links.self_link.as_ref().unwrap().href,
            "http://host:8080/orders?userId=37"
        );
    }

    #[test]
    fn test_idempotent_output() {
        let sort = vec![SortCriterion::by("id", SortDirection::Descending)];
        let first = assembler()
            .assemble(vec![1, 2], Some(PageRequest::new(2, 6, 2)), &sort)
            .unwrap();
        let second = assembler()
            .assemble(vec![1, 2], Some(PageRequest::new(2, 6, 2)), &sort)
            .unwrap();

        let a = serde_json::to_vec(&first).unwrap();
        let b = serde_json::to_vec(&second).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_serialized_shape() {
        let response = assembler()
            .assemble(vec![1], Some(PageRequest::new(2, 6, 0)), &[])
            .unwrap();
        let json = serde_json::to_value(&response).unwrap();

        assert!(json.get("page").is_some());
        assert!(json.get("items").is_some());
        assert!(json.get("links").is_some());
        assert_eq!(json["page"]["totalElements"], 6);
        // absent relations are omitted, not null
        assert!(json["links"].get("prev").is_none());
    }

    #[test]
    fn test_page_block_omitted_when_unpaginated() {
        let response = assembler().assemble(vec![1], None, &[]).unwrap();
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("page").is_none());
    }

    #[test]
    fn test_round_trip() {
        let response = assembler()
            .assemble(vec![1, 2], Some(PageRequest::new(2, 6, 2)), &[])
            .unwrap();
        let json = serde_json::to_string(&response).unwrap();
        let back: ListResponse<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, response);
    }

    #[test]
    fn test_missing_required_placeholder_fails() {
        let assembler = ListAssembler::new(LinkTemplate::new("users/{userId}/orders"));
        let err = assembler.assemble(vec![1], None, &[]).unwrap_err();
        assert!(matches!(err, Error::TemplateExpansion { .. }));
    }

    #[test]
    fn test_map_keeps_page_and_links() {
        let response = assembler()
            .assemble(vec![1, 2], Some(PageRequest::new(2, 6, 0)), &[])
            .unwrap();
        let mapped = response.map(|n| n.to_string());
        assert_eq!(mapped.items, vec!["1", "2"]);
        assert!(mapped.page.is_some());
        assert!(mapped.links.self_link.is_some());
    }
}
