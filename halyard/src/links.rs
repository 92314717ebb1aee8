//! Hypermedia links and navigation-link derivation
//!
//! A [`Link`] is a resolved URL plus optional attributes. A [`LinkSet`]
//! groups links by relation name: the five IANA pagination relations get
//! typed slots, anything else (e.g. a `shipment` link on an order) goes
//! into the custom map. Relations that are absent are omitted from the
//! JSON output entirely, never serialized as `null`.
//!
//! [`derive_navigation_links`] computes the pagination relations for a
//! collection page:
//!
//! ```rust
//! use halyard::links::derive_navigation_links;
//! use halyard::page::PageInfo;
//!
//! let page = PageInfo::from_offset(2, 6, 0);
//! let links = derive_navigation_links("http://host/orders?userId=37", &page, &[]);
//!
//! assert_eq!(
//!     links.self_link.unwrap().href,
//!     "http://host/orders?userId=37&page=0&size=2"
//! );
//! assert_eq!(
//!     links.next.unwrap().href,
//!     "http://host/orders?userId=37&page=1&size=2"
//! );
//! assert!(links.prev.is_none());
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::page::PageInfo;
use crate::sort::SortCriterion;
use crate::template::join_base;

/// A single hypermedia link
///
/// # Example
///
/// ```rust
/// use halyard::links::Link;
///
/// let link = Link::new("shipment/127").with_hreflang("en-US");
/// assert_eq!(link.href, "shipment/127");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Fully resolved URL
    pub href: String,
    /// Language hint for the linked resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hreflang: Option<String>,
    /// Human-readable label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Secondary key for links sharing a relation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Link {
    /// Create a link from a resolved URL
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            hreflang: None,
            title: None,
            name: None,
        }
    }

    /// Create a link for the `self` relation of the resource at `href`
    ///
    /// # Example
    ///
    /// ```rust
    /// use halyard::links::{Link, LinkSet};
    ///
    /// let links = LinkSet::self_only(Link::self_of("orders/1234"));
    /// assert_eq!(links.self_link.unwrap().href, "orders/1234");
    /// ```
    pub fn self_of(href: impl Into<String>) -> Self {
        Self::new(href)
    }

    /// Set the `hreflang` attribute
    #[must_use]
    pub fn with_hreflang(mut self, hreflang: impl Into<String>) -> Self {
        self.hreflang = Some(hreflang.into());
        self
    }

    /// Set the `title` attribute
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the `name` attribute
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Resolve this link's href against a base URL
    ///
    /// # Example
    ///
    /// ```rust
    /// use halyard::links::Link;
    ///
    /// let link = Link::new("orders/1234").prepend_base_url("http://host:8080");
    /// assert_eq!(link.href, "http://host:8080/orders/1234");
    /// ```
    #[must_use]
    pub fn prepend_base_url(mut self, base: &str) -> Self {
        self.href = join_base(base, &self.href);
        self
    }
}

/// Pagination relation names used in navigation links
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkRelation {
    /// The current page
    #[serde(rename = "self")]
    SelfRel,
    /// The first page
    First,
    /// The preceding page
    Prev,
    /// The following page
    Next,
    /// The last page
    Last,
}

impl LinkRelation {
    /// The relation's wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SelfRel => "self",
            Self::First => "first",
            Self::Prev => "prev",
            Self::Next => "next",
            Self::Last => "last",
        }
    }
}

/// Links grouped by relation name
///
/// Serializes as a JSON object keyed by relation; custom relations are
/// flattened alongside the pagination slots and kept in sorted order so
/// identical inputs always produce byte-identical output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkSet {
    /// The `self` relation
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_link: Option<Link>,
    /// The `next` relation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<Link>,
    /// The `prev` relation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<Link>,
    /// The `first` relation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<Link>,
    /// The `last` relation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<Link>,
    /// Links under non-pagination relations (e.g. `shipment`)
    #[serde(flatten, default)]
    pub custom: BTreeMap<String, Link>,
}

impl LinkSet {
    /// A link set carrying only a `self` link
    #[must_use]
    pub fn self_only(link: Link) -> Self {
        Self {
            self_link: Some(link),
            ..Self::default()
        }
    }

    /// Set the `self` link
    #[must_use]
    pub fn with_self(mut self, link: Link) -> Self {
        self.self_link = Some(link);
        self
    }

    /// Add a link under a custom relation
    ///
    /// # Example
    ///
    /// ```rust
    /// use halyard::links::{Link, LinkSet};
    ///
    /// let links = LinkSet::self_only(Link::new("orders/1234"))
    ///     .with_custom("shipment", Link::new("orders/1234/shipment"));
    /// assert_eq!(links.len(), 2);
    /// ```
    #[must_use]
    pub fn with_custom(mut self, rel: impl Into<String>, link: Link) -> Self {
        self.custom.insert(rel.into(), link);
        self
    }

    /// Look up a pagination relation
    #[must_use]
    pub fn get(&self, rel: LinkRelation) -> Option<&Link> {
        match rel {
            LinkRelation::SelfRel => self.self_link.as_ref(),
            LinkRelation::First => self.first.as_ref(),
            LinkRelation::Prev => self.prev.as_ref(),
            LinkRelation::Next => self.next.as_ref(),
            LinkRelation::Last => self.last.as_ref(),
        }
    }

    /// Number of links present
    #[must_use]
    pub fn len(&self) -> usize {
        [&self.self_link, &self.next, &self.prev, &self.first, &self.last]
            .iter()
            .filter(|slot| slot.is_some())
            .count()
            + self.custom.len()
    }

    /// Whether no link is present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Derive pagination navigation links for a collection page
///
/// `expanded_href` is the collection URL with all passthrough query
/// parameters (e.g. `userId`) already expanded; the paging parameters are
/// appended to it, so passthrough parameters are carried into every
/// derived link unchanged.
///
/// Presence rules:
/// - `self` is always emitted, with the current `page`, the `size`, and one
///   `sort=field,direction` parameter per criterion in input order;
/// - `next` iff `number + 1 < total_pages`;
/// - `prev` iff `number > 0`;
/// - `first` iff `total_pages > 1` and the current page is not the first;
/// - `last` iff `total_pages > 1` and the current page is not the last.
///
/// With `total_elements == 0` only `self` is emitted.
#[must_use]
pub fn derive_navigation_links(
    expanded_href: &str,
    page: &PageInfo,
    sort: &[SortCriterion],
) -> LinkSet {
    let page_href = |number: u32| Link::new(paging_href(expanded_href, number, page.size, sort));

    let mut links = LinkSet::self_only(page_href(page.number));
    if page.has_next() {
        links.next = Some(page_href(page.number + 1));
    }
    if page.has_prev() {
        links.prev = Some(page_href(page.number - 1));
    }
    if page.total_pages > 1 && !page.is_first() {
        links.first = Some(page_href(0));
    }
    if page.total_pages > 1 && !page.is_last() {
        links.last = Some(page_href(page.total_pages - 1));
    }
    links
}

/// Append `page`, `size`, and `sort` query parameters to an expanded URL
fn paging_href(expanded_href: &str, number: u32, size: u32, sort: &[SortCriterion]) -> String {
    let mut href = String::from(expanded_href);
    let mut sep = if href.contains('?') { '&' } else { '?' };

    let mut push = |key: &str, value: String, sep: &mut char| {
        href.push(*sep);
        href.push_str(key);
        href.push('=');
        href.push_str(&value);
        *sep = '&';
    };

    push("page", number.to_string(), &mut sep);
    push("size", size.to_string(), &mut sep);
    for criterion in sort {
        push("sort", criterion.as_query_value(), &mut sep);
    }
    href
}
