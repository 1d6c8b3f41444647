//! Search results as handed to the caller
//!
//! A [`SearchResponse`] always carries the [`ResponseMeta`] of the exchange.
//! Failures that happen after a response was received come back as a
//! [`SearchFailure`] that still holds the (possibly partial) response.

use std::error::Error;
use std::fmt;

use reqwest::header::HeaderMap;
use reqwest::{StatusCode, Url};

use crate::error::SearchError;
use crate::hits::{DecodeFailure, Hit, Page};

/// Protocol level information about a search exchange
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseMeta {
    /// HTTP status of the response
    pub status: StatusCode,
    /// All response headers, including repeated ones
    pub headers: HeaderMap,
    /// The URL the request was sent to
    pub request_url: Url,
}

/// A page of search results
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResponse {
    /// Total number of hits the query matched, across all pages
    pub total_hits: i64,
    /// The hits of this page, in the order the service sent them
    pub hits: Vec<Hit>,
    pub meta: ResponseMeta,
}

impl SearchResponse {
    /// A response without any hits, as used on failure paths.
    pub fn empty(meta: ResponseMeta) -> Self {
        Self {
            total_hits: 0,
            hits: Vec::new(),
            meta,
        }
    }

    pub(crate) fn from_page(page: Page, meta: ResponseMeta) -> Self {
        Self {
            total_hits: page.total_hits,
            hits: page.hits,
            meta,
        }
    }

    pub fn series(&self) -> impl Iterator<Item = &crate::hits::Series> {
        self.hits.iter().filter_map(Hit::as_series)
    }

    pub fn assets(&self) -> impl Iterator<Item = &crate::hits::Asset> {
        self.hits.iter().filter_map(Hit::as_asset)
    }
}

/// A failed search
///
/// `response` is present whenever the service answered at all. On decode
/// failures it holds every hit decoded before the failing one.
#[derive(Debug)]
pub struct SearchFailure {
    pub response: Option<SearchResponse>,
    pub error: SearchError,
}

impl fmt::Display for SearchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

// Displays as `error`, so the chain continues below it
impl Error for SearchFailure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.error.source()
    }
}

impl SearchFailure {
    /// A failure before any response was received.
    pub(crate) fn without_response(error: SearchError) -> Self {
        Self {
            response: None,
            error,
        }
    }

    /// A failure that carries only the response meta.
    pub(crate) fn with_meta(meta: ResponseMeta, error: SearchError) -> Self {
        Self {
            response: Some(SearchResponse::empty(meta)),
            error,
        }
    }

    /// A decode failure with the hits decoded so far.
    pub(crate) fn partial(failure: DecodeFailure, meta: ResponseMeta) -> Self {
        Self {
            response: Some(SearchResponse::from_page(failure.page, meta)),
            error: failure.error,
        }
    }

    pub fn meta(&self) -> Option<&ResponseMeta> {
        self.response.as_ref().map(|response| &response.meta)
    }

    pub fn into_parts(self) -> (Option<SearchResponse>, SearchError) {
        (self.response, self.error)
    }
}

impl From<SearchError> for SearchFailure {
    fn from(error: SearchError) -> Self {
        Self::without_response(error)
    }
}
