//! HTTP transport abstraction
//!
//! The search client never talks to the network itself. It hands a fully
//! built [`SearchRequest`] to a [`Transport`] and interprets the
//! [`RawResponse`] it gets back. [`HttpTransport`] is the default,
//! reqwest-backed implementation.

mod http;

pub use http::HttpTransport;

use std::fmt;
use std::io::{self, Read};
use std::sync::Arc;

use reqwest::header::HeaderMap;
use reqwest::{StatusCode, Url};

/// Error produced by a transport, passed through to the caller unchanged
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// Upper bound of unread body bytes drained before a body is released
pub(crate) const DRAIN_LIMIT: u64 = 64;

/// An outgoing GET request to the search endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    /// Fully resolved URL including the encoded query
    pub url: Url,
    /// Headers to send along with the request
    pub headers: HeaderMap,
}

impl SearchRequest {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            headers: HeaderMap::new(),
        }
    }
}

/// A response as received from the transport, body still unread
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Box<dyn Read + Send>,
}

impl fmt::Debug for RawResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawResponse")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

/// Trait for the collaborator that executes search requests.
///
/// Implementors perform the actual HTTP exchange, including timeouts and
/// any connection handling. A search issues exactly one call per invocation
/// and never retries.
pub trait Transport: Send + Sync {
    /// Executes the request and returns the response with its body unread.
    ///
    /// # Errors
    ///
    /// Returns an error if the exchange could not be completed at all
    /// (network, DNS, TLS). Non-200 statuses are not errors at this level.
    fn execute(&self, request: SearchRequest) -> Result<RawResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn execute(&self, request: SearchRequest) -> Result<RawResponse, TransportError> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn execute(&self, request: SearchRequest) -> Result<RawResponse, TransportError> {
        (**self).execute(request)
    }
}

/// Guard that owns a response body for the duration of a search
///
/// When dropped, it reads and discards up to [`DRAIN_LIMIT`] remaining bytes
/// before releasing the body, so the underlying connection can be reused.
pub(crate) struct BodyGuard {
    body: Box<dyn Read + Send>,
}

impl BodyGuard {
    pub fn new(body: Box<dyn Read + Send>) -> Self {
        Self { body }
    }
}

impl Read for BodyGuard {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.body.read(buf)
    }
}

impl Drop for BodyGuard {
    fn drop(&mut self) {
        // Drain errors are irrelevant once the body is being released
        let _ = io::copy(&mut (&mut self.body).take(DRAIN_LIMIT), &mut io::sink());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Reader over a fixed buffer that records how many bytes were consumed
    struct CountingReader {
        data: io::Cursor<Vec<u8>>,
        consumed: Arc<AtomicUsize>,
    }

    impl Read for CountingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let read = self.data.read(buf)?;
            self.consumed.fetch_add(read, Ordering::SeqCst);
            Ok(read)
        }
    }

    fn counting_body(len: usize) -> (BodyGuard, Arc<AtomicUsize>) {
        let consumed = Arc::new(AtomicUsize::new(0));
        let reader = CountingReader {
            data: io::Cursor::new(vec![b'x'; len]),
            consumed: Arc::clone(&consumed),
        };
        (BodyGuard::new(Box::new(reader)), consumed)
    }

    #[test]
    fn test_drop_drains_bounded_amount() {
        let (guard, consumed) = counting_body(1000);
        drop(guard);
        assert_eq!(consumed.load(Ordering::SeqCst), DRAIN_LIMIT as usize);
    }

    #[test]
    fn test_drop_drains_short_remainder() {
        let (mut guard, consumed) = counting_body(100);
        let mut buf = [0u8; 90];
        guard.read_exact(&mut buf).unwrap();
        drop(guard);
        assert_eq!(consumed.load(Ordering::SeqCst), 100);
    }
}
