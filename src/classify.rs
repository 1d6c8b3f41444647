//! Response classification
//!
//! Decides from status code and content type alone how a response body has
//! to be interpreted, before any byte of it is read.

use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderMap};

const JSON_MEDIA_TYPE: &str = "application/json";

/// How a search response must be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// 200 with a JSON body: a page of hits
    Success,
    /// Non-200 with a JSON body: a service-reported error object
    StructuredError,
    /// Non-200 without a JSON body: only status and reason are usable
    OpaqueError,
    /// 200 without a JSON body: the service broke its contract
    ContentTypeError,
}

impl Classification {
    /// Classifies a response by its status code and headers.
    pub fn of(status: StatusCode, headers: &HeaderMap) -> Self {
        let json = has_json_content_type(headers);

        match (status == StatusCode::OK, json) {
            (true, true) => Classification::Success,
            (true, false) => Classification::ContentTypeError,
            (false, true) => Classification::StructuredError,
            (false, false) => Classification::OpaqueError,
        }
    }
}

/// Returns whether the first `Content-Type` header denotes JSON.
///
/// A missing header or one that is not valid UTF-8 is not JSON.
pub fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(is_json_media_type)
}

/// Returns whether a textual media type is `application/json`, ignoring
/// parameters and surrounding whitespace.
pub fn is_json_media_type(content_type: &str) -> bool {
    let essence = content_type
        .split_once(';')
        .map_or(content_type, |(essence, _)| essence);

    essence.trim() == JSON_MEDIA_TYPE
}
