//! The standard response envelope used by every storefront endpoint.
//!
//! Every response body has the shape
//! `{"success": bool, "data": ..., "meta": {...} | null, "errors": [...] | null}`.
//! This module provides [`Envelope`] and its parts, plus the page-window
//! calculation used to render pagination controls from [`PaginationMeta`].

use serde::{Deserialize, Serialize};

use crate::clients::errors::{ApiError, GENERIC_FAILURE_MESSAGE};

/// A single error entry from an envelope's `errors` list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    /// Machine-readable error code.
    #[serde(default)]
    pub code: String,
    /// Human-readable error message.
    #[serde(default)]
    pub message: String,
    /// The request field the error refers to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Pagination information attached to list responses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    /// Total number of matching records.
    pub total: u64,
    /// The current page, starting at 1.
    pub page: u32,
    /// Records per page.
    pub per_page: u32,
    /// Total number of pages.
    pub total_pages: u32,
    /// Whether pages after this one exist.
    #[serde(default)]
    pub has_more: bool,
}

/// One entry in a rendered page list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageLink {
    /// A link to a specific page number.
    Page(u32),
    /// A gap between non-adjacent page numbers.
    Ellipsis,
}

/// Number of page slots shown before the list collapses with ellipses.
const PAGE_WINDOW: u32 = 5;

impl PaginationMeta {
    /// Computes the page links to display for `current` out of `total` pages.
    ///
    /// Up to five pages are listed in full. Beyond that the first and last
    /// pages are always shown, along with a small window around `current`:
    ///
    /// ```rust
    /// use storefront_api::clients::{PageLink::{Ellipsis, Page}, PaginationMeta};
    ///
    /// assert_eq!(
    ///     PaginationMeta::page_window(5, 10),
    ///     vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
    /// );
    /// ```
    #[must_use]
    pub fn page_window(current: u32, total: u32) -> Vec<PageLink> {
        if total <= PAGE_WINDOW {
            return (1..=total).map(PageLink::Page).collect();
        }

        let mut pages = Vec::with_capacity(7);
        if current <= 3 {
            pages.extend((1..=4).map(PageLink::Page));
            pages.push(PageLink::Ellipsis);
            pages.push(PageLink::Page(total));
        } else if current >= total - 2 {
            pages.push(PageLink::Page(1));
            pages.push(PageLink::Ellipsis);
            pages.extend((total - 3..=total).map(PageLink::Page));
        } else {
            pages.push(PageLink::Page(1));
            pages.push(PageLink::Ellipsis);
            pages.extend((current - 1..=current + 1).map(PageLink::Page));
            pages.push(PageLink::Ellipsis);
            pages.push(PageLink::Page(total));
        }
        pages
    }

    /// Returns the page links for this response's own page position.
    #[must_use]
    pub fn pages(&self) -> Vec<PageLink> {
        Self::page_window(self.page, self.total_pages)
    }

    /// Returns `true` if a previous page exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Returns `true` if a next page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// A response envelope wrapping a payload of type `T`.
///
/// `data` is only trustworthy when `success` is `true`; use
/// [`into_data`](Self::into_data) to unwrap it with that check applied.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    /// Whether the server reports the call as successful.
    #[serde(default)]
    pub success: bool,
    /// The payload.
    #[serde(default)]
    pub data: Option<T>,
    /// Pagination info for list endpoints.
    #[serde(default)]
    pub meta: Option<PaginationMeta>,
    /// Error entries; the first one is the surfaced failure reason.
    #[serde(default)]
    pub errors: Option<Vec<ApiErrorDetail>>,
}

impl<T> Envelope<T> {
    /// Returns the first error entry, if any.
    #[must_use]
    pub fn first_error(&self) -> Option<&ApiErrorDetail> {
        self.errors.as_ref().and_then(|errors| errors.first())
    }

    /// Returns the first error's message, or the generic failure message.
    #[must_use]
    pub fn failure_message(&self) -> String {
        self.first_error()
            .map(|e| e.message.as_str())
            .filter(|m| !m.is_empty())
            .unwrap_or(GENERIC_FAILURE_MESSAGE)
            .to_string()
    }

    /// Checks `success` and returns the payload.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Envelope`] if `success` is false, or
    /// [`ApiError::MissingData`] if a successful envelope has no `data`.
    pub fn into_data(self) -> Result<T, ApiError> {
        Ok(self.into_parts()?.0)
    }

    /// Checks `success` and returns the payload with its pagination info.
    ///
    /// # Errors
    ///
    /// Same as [`into_data`](Self::into_data).
    pub fn into_parts(self) -> Result<(T, Option<PaginationMeta>), ApiError> {
        if !self.success {
            return Err(ApiError::Envelope {
                message: self.failure_message(),
            });
        }
        let data = self.data.ok_or(ApiError::MissingData)?;
        Ok((data, self.meta))
    }
}

/// Extracts the failure details from a raw (possibly non-envelope) body.
///
/// Used for non-2xx responses, whose body is parsed as loosely as possible.
pub(crate) fn failure_from_body(status: u16, body: &serde_json::Value) -> ApiError {
    let first = body
        .get("errors")
        .and_then(serde_json::Value::as_array)
        .and_then(|errors| errors.first());

    let text = |key: &str| {
        first
            .and_then(|e| e.get(key))
            .and_then(serde_json::Value::as_str)
            .filter(|s| !s.is_empty())
            .map(String::from)
    };

    ApiError::Response {
        status,
        message: text("message").unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
        code: text("code"),
        field: text("field"),
    }
}
