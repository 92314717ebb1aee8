//! Page metadata for paginated collections
//!
//! [`PageInfo`] is computed fresh per request from the page size, the total
//! element count, and the offset of the first returned item. It is never
//! mutated after construction and serializes into the `page` block of a
//! list response:
//!
//! ```json
//! {"size": 2, "totalElements": 6, "totalPages": 3, "number": 0}
//! ```

use serde::{Deserialize, Serialize};

/// Pagination metadata derived from `(size, total_elements, offset)`
///
/// # Example
///
/// ```rust
/// use halyard::page::PageInfo;
///
/// let page = PageInfo::from_offset(2, 6, 2);
/// assert_eq!(page.number, 1);
/// assert_eq!(page.total_pages, 3);
/// assert!(page.has_next());
/// assert!(page.has_prev());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Maximum number of items on a page
    pub size: u32,
    /// Total number of items across all pages
    pub total_elements: u64,
    /// Total number of pages
    pub total_pages: u32,
    /// Current page number (0-indexed)
    pub number: u32,
}

impl PageInfo {
    /// Compute page metadata from an offset-based window
    ///
    /// `number` is `offset / size` (integer division) and `total_pages` is
    /// `ceil(total_elements / size)`. A zero `size` yields zero for both,
    /// as does a zero `total_elements` for `total_pages`. No input is an
    /// error; callers are expected to have sanitized negative values at
    /// the boundary.
    ///
    /// # Example
    ///
    /// ```rust
    /// use halyard::page::PageInfo;
    ///
    /// let page = PageInfo::from_offset(20, 45, 40);
    /// assert_eq!(page.number, 2);
    /// assert_eq!(page.total_pages, 3);
    ///
    /// let empty = PageInfo::from_offset(20, 0, 0);
    /// assert_eq!(empty.total_pages, 0);
    /// ```
    #[must_use]
    pub fn from_offset(size: u32, total_elements: u64, offset: u64) -> Self {
        if size == 0 {
            return Self {
                size,
                total_elements,
                total_pages: 0,
                number: 0,
            };
        }
        let number = (offset / u64::from(size)).min(u64::from(u32::MAX)) as u32;
        Self {
            size,
            total_elements,
            total_pages: calculate_total_pages(total_elements, size),
            number,
        }
    }

    /// Whether a page follows the current one
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.total_pages > 0 && self.number < self.total_pages - 1
    }

    /// Whether a page precedes the current one
    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.number > 0
    }

    /// Whether the current page is the first of a multi-page collection
    #[must_use]
    pub fn is_first(&self) -> bool {
        self.number == 0
    }

    /// Whether the current page is the last of the collection
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.total_pages == 0 || self.number == self.total_pages - 1
    }
}

/// Ceiling division of `total` by `size`, clamped to `u32`
fn calculate_total_pages(total: u64, size: u32) -> u32 {
    let size = u64::from(size);
    let pages = total.saturating_add(size).saturating_sub(1) / size;
    pages.min(u64::from(u32::MAX)) as u32
}
