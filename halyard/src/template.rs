//! URI templates with named placeholders
//!
//! A [`LinkTemplate`] is a URI string carrying two kinds of RFC-6570-style
//! placeholders:
//!
//! - simple placeholders, `{var}` — required; expansion fails when no value
//!   is supplied for them;
//! - form-style query expansion, `{?a,b,c}` — optional; names without a
//!   value are dropped silently, names with a value render as query
//!   parameters in template order.
//!
//! Values are percent-encoded on substitution. Expanding a template with no
//! remaining placeholders is the identity, so expansion is idempotent.
//!
//! # Example
//!
//! ```rust
//! use halyard::template::LinkTemplate;
//!
//! let template = LinkTemplate::new("orders{?userId,status}");
//! let href = template.expand(&[("userId", "37")]).unwrap();
//! assert_eq!(href, "orders?userId=37");
//!
//! let template = LinkTemplate::new("orders/{orderId}/shipment");
//! let href = template.expand(&[("orderId", "1234")]).unwrap();
//! assert_eq!(href, "orders/1234/shipment");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A URI template with named placeholders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkTemplate {
    template: String,
}

impl LinkTemplate {
    /// Create a template from its string form
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// The raw, unexpanded template string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.template
    }

    /// Whether the template still contains placeholders
    #[must_use]
    pub fn has_placeholders(&self) -> bool {
        self.template.contains('{')
    }

    /// Expand the template with the given `(name, value)` pairs
    ///
    /// Simple placeholders (`{var}`) are required: a missing value fails
    /// with [`Error::TemplateExpansion`]. Query expansions (`{?a,b}`) drop
    /// unset names. When the URI already carries a query string, a query
    /// expansion continues it with `&` instead of starting a new one.
    ///
    /// # Errors
    ///
    /// [`Error::TemplateExpansion`] on a missing required value or an
    /// unterminated placeholder.
    pub fn expand(&self, params: &[(&str, &str)]) -> Result<String> {
        let mut out = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let close = after.find('}').ok_or_else(|| Error::TemplateExpansion {
                template: self.template.clone(),
                placeholder: "{".to_string(),
            })?;
            let inner = &after[..close];

            if let Some(names) = inner.strip_prefix('?') {
                self.expand_query(&mut out, names, params);
            } else {
                let value = lookup(params, inner).ok_or_else(|| Error::TemplateExpansion {
                    template: self.template.clone(),
                    placeholder: inner.to_string(),
                })?;
                out.push_str(&urlencoding::encode(value));
            }
            rest = &after[close + 1..];
        }
        out.push_str(rest);
        Ok(out)
    }

    /// Render a `{?a,b,c}` expansion, keeping template order
    fn expand_query(&self, out: &mut String, names: &str, params: &[(&str, &str)]) {
        let mut sep = if out.contains('?') { '&' } else { '?' };
        for name in names.split(',').map(str::trim) {
            if let Some(value) = lookup(params, name) {
                out.push(sep);
                out.push_str(name);
                out.push('=');
                out.push_str(&urlencoding::encode(value));
                sep = '&';
            }
        }
    }
}

impl fmt::Display for LinkTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.template)
    }
}

impl From<&str> for LinkTemplate {
    fn from(template: &str) -> Self {
        Self::new(template)
    }
}

/// First value registered under `name`, if any
fn lookup<'a>(params: &[(&'a str, &'a str)], name: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| *value)
}

/// Join an expanded path onto a base URL with exactly one `/` between them
///
/// # Example
///
/// ```rust
/// use halyard::template::join_base;
///
/// assert_eq!(join_base("http://host:8080/", "/orders"), "http://host:8080/orders");
/// assert_eq!(join_base("http://host:8080", "orders?userId=37"), "http://host:8080/orders?userId=37");
/// ```
#[must_use]
pub fn join_base(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_placeholders_is_identity() {
        let template = LinkTemplate::new("orders/1234");
        assert_eq!(template.expand(&[]).unwrap(), "orders/1234");
        assert!(!template.has_placeholders());
    }

    #[test]
    fn test_simple_placeholder() {
        let template = LinkTemplate::new("orders/{orderId}/shipment");
        let href = template.expand(&[("orderId", "1234")]).unwrap();
        assert_eq!(href, "orders/1234/shipment");
    }

    #[test]
    fn test_simple_placeholder_missing_value_errors() {
        let template = LinkTemplate::new("orders/{orderId}");
        let err = template.expand(&[("userId", "37")]).unwrap_err();
        match err {
            Error::TemplateExpansion { placeholder, .. } => {
                assert_eq!(placeholder, "orderId");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_query_expansion_all_set() {
        let template = LinkTemplate::new("orders{?userId,status}");
        let href = template
            .expand(&[("userId", "37"), ("status", "open")])
            .unwrap();
        assert_eq!(href, "orders?userId=37&status=open");
    }

    #[test]
    fn test_query_expansion_drops_unset_names() {
        let template = LinkTemplate::new("orders{?userId,status}");
        assert_eq!(template.expand(&[("userId", "37")]).unwrap(), "orders?userId=37");
        assert_eq!(template.expand(&[]).unwrap(), "orders");
    }

    #[test]
    fn test_query_expansion_respects_template_order() {
        let template = LinkTemplate::new("orders{?userId,status}");
        // params given in reverse order of the template
        let href = template
            .expand(&[("status", "open"), ("userId", "37")])
            .unwrap();
        assert_eq!(href, "orders?userId=37&status=open");
    }

    #[test]
    fn test_query_expansion_continues_existing_query() {
        let template = LinkTemplate::new("orders?v=2{?userId}");
        let href = template.expand(&[("userId", "37")]).unwrap();
        assert_eq!(href, "orders?v=2&userId=37");
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let template = LinkTemplate::new("search/{term}{?filter}");
        let href = template
            .expand(&[("term", "a b"), ("filter", "x&y")])
            .unwrap();
        assert_eq!(href, "search/a%20b?filter=x%26y");
    }

    #[test]
    fn test_unterminated_placeholder_errors() {
        let template = LinkTemplate::new("orders/{orderId");
        assert!(template.expand(&[("orderId", "1")]).is_err());
    }

    #[test]
    fn test_mixed_placeholders() {
        let template = LinkTemplate::new("users/{userId}/orders{?status}");
        let href = template
            .expand(&[("userId", "37"), ("status", "open")])
            .unwrap();
        assert_eq!(href, "users/37/orders?status=open");
    }

    #[test]
    fn test_join_base_normalizes_slashes() {
        assert_eq!(join_base("http://h/", "/p"), "http://h/p");
        assert_eq!(join_base("http://h", "p"), "http://h/p");
        assert_eq!(join_base("http://h/", "p"), "http://h/p");
    }

    #[test]
    fn test_serde_transparent() {
        let template = LinkTemplate::new("orders{?userId}");
        let json = serde_json::to_string(&template).unwrap();
        assert_eq!(json, r#""orders{?userId}""#);
        let back: LinkTemplate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, template);
    }
}
