//! Search client
//!
//! Builds the request for the `/search` endpoint, hands it to the configured
//! [`Transport`] and interprets the response.

use std::fmt;
use std::io::{BufReader, Read};
use std::time::Duration;

use reqwest::header::{HeaderName, HeaderValue};
use reqwest::{StatusCode, Url};
use serde::Deserialize;

use crate::classify::Classification;
use crate::error::{ApiError, SearchError};
use crate::hits::decode_page;
use crate::query::Query;
use crate::response::{ResponseMeta, SearchFailure, SearchResponse};
use crate::transport::{BodyGuard, HttpTransport, SearchRequest, Transport};

/// Base URL used when none is configured
pub const DEFAULT_BASE_URL: &str = "https://search.b17g.services/";

/// Query parameter carrying the configured application name
const CLIENT_PARAM: &str = "client";

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Modifies an outgoing search request before it is sent
pub trait RequestOption {
    /// Applies the modification.
    ///
    /// # Errors
    ///
    /// Returns an error if the modification cannot be expressed as a valid
    /// request, e.g. because a header value contains invalid characters.
    fn apply(&self, request: &mut SearchRequest) -> Result<(), SearchError>;
}

impl<F> RequestOption for F
where
    F: Fn(&mut SearchRequest) -> Result<(), SearchError>,
{
    fn apply(&self, request: &mut SearchRequest) -> Result<(), SearchError> {
        self(request)
    }
}

/// Sets the `X-Request-Id` header on the search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

impl RequestId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl RequestOption for RequestId {
    fn apply(&self, request: &mut SearchRequest) -> Result<(), SearchError> {
        let value = HeaderValue::from_str(&self.0)?;
        request
            .headers
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
        Ok(())
    }
}

/// Builder for [`Client`]
pub struct ClientBuilder {
    base_url: String,
    app_name: Option<String>,
    timeout: Option<Duration>,
    transport: Option<Box<dyn Transport>>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            app_name: None,
            timeout: None,
            transport: None,
        }
    }
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("base_url", &self.base_url)
            .field("app_name", &self.app_name)
            .field("timeout", &self.timeout)
            .field("custom_transport", &self.transport.is_some())
            .finish()
    }
}

impl ClientBuilder {
    /// Sets the base URL of the search service.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the application name sent as the `client` query parameter.
    pub fn app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    /// Sets the overall request timeout of the default transport.
    ///
    /// Has no effect when a custom transport is configured.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Uses `transport` instead of the default reqwest transport.
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// [`SearchError::InvalidBaseUrl`] if the base URL does not parse or
    /// cannot serve as a base, and [`SearchError::Transport`] if the default
    /// transport cannot be initialized.
    pub fn build(self) -> Result<Client, SearchError> {
        let base_url = Url::parse(&self.base_url)
            .map_err(|e| SearchError::InvalidBaseUrl(format!("{}: {}", self.base_url, e)))?;

        if base_url.cannot_be_a_base() {
            return Err(SearchError::InvalidBaseUrl(self.base_url));
        }

        let transport: Box<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Box::new(HttpTransport::new(self.timeout).map_err(SearchError::Transport)?),
        };

        Ok(Client {
            base_url,
            app_name: self.app_name.filter(|name| !name.is_empty()),
            transport,
        })
    }
}

/// Client for the search service
///
/// A client holds no per-search state; it can be shared between threads and
/// used for any number of concurrent searches.
pub struct Client {
    base_url: Url,
    app_name: Option<String>,
    transport: Box<dyn Transport>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url.as_str())
            .field("app_name", &self.app_name)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a client for the default base URL using the reqwest transport.
    pub fn new() -> Result<Self, SearchError> {
        Self::builder().build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Performs a search and returns the decoded page of hits.
    ///
    /// The `fields` parameter of `query` is extended with `type` when needed.
    /// `options` are applied to the request right before it is sent.
    ///
    /// # Errors
    ///
    /// Every failure is returned as a [`SearchFailure`]. Once the service has
    /// answered, the failure carries the response meta, and for decode
    /// failures also every hit decoded before the failing one.
    pub fn search(
        &self,
        query: Query,
        options: &[&dyn RequestOption],
    ) -> Result<SearchResponse, SearchFailure> {
        let request = self.search_request(query, options)?;
        let request_url = request.url.clone();

        log::debug!("GET {}", request_url);

        let response = self
            .transport
            .execute(request)
            .map_err(|e| SearchFailure::without_response(SearchError::Transport(e)))?;

        let meta = ResponseMeta {
            status: response.status,
            headers: response.headers,
            request_url,
        };

        let mut body = BodyGuard::new(response.body);
        let classification = Classification::of(meta.status, &meta.headers);

        log::debug!(
            "search response {} classified as {:?}",
            meta.status,
            classification
        );

        match classification {
            Classification::Success => match decode_page(&mut body) {
                Ok(page) => Ok(SearchResponse::from_page(page, meta)),
                Err(failure) => Err(SearchFailure::partial(failure, meta)),
            },
            Classification::ContentTypeError => Err(SearchFailure::with_meta(
                meta,
                SearchError::ContentTypeNotJson,
            )),
            Classification::OpaqueError => {
                let error = SearchError::status(meta.status);
                Err(SearchFailure::with_meta(meta, error))
            }
            Classification::StructuredError => {
                let error = decode_api_error(&mut body, meta.status);
                Err(SearchFailure::with_meta(meta, error))
            }
        }
    }

    /// Builds the request without sending it.
    pub fn search_request(
        &self,
        mut query: Query,
        options: &[&dyn RequestOption],
    ) -> Result<SearchRequest, SearchError> {
        query.ensure_type_field();

        if let Some(app_name) = &self.app_name {
            query.set(CLIENT_PARAM, app_name.as_str());
        }

        let mut url = self.base_url.clone();
        let path = format!("{}/search", self.base_url.path().trim_end_matches('/'));
        url.set_path(&path);
        url.set_fragment(None);
        url.set_query(None);

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.pairs());
        }

        let mut request = SearchRequest::new(url);
        for option in options {
            option.apply(&mut request)?;
        }

        Ok(request)
    }
}

/// Decodes the JSON error object of a non-200 response.
fn decode_api_error<R: Read>(body: R, status: StatusCode) -> SearchError {
    let mut deserializer = serde_json::Deserializer::from_reader(BufReader::new(body));
    match ApiError::deserialize(&mut deserializer) {
        Ok(api_error) => SearchError::Api(api_error),
        Err(e) => SearchError::malformed_error_body(status, e),
    }
}
