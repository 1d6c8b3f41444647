//! cmore_search - Client for the C More media-catalog search service
//!
//! This library sends queries to the search service and turns the returned
//! page of heterogeneous hits into typed values. Each hit is either an
//! [`Asset`] or a [`Series`], told apart by the `type` field of the raw
//! record.
//!
//! # Examples
//!
//! ```no_run
//! use cmore_search::{Client, Hit, Locale, Query, RequestId};
//!
//! let client = Client::builder()
//!     .app_name("my-app")
//!     .build()
//!     .unwrap();
//!
//! let query = Query::from([("q", "idol"), ("fields", "title_sv,video_id,id")]);
//!
//! match client.search(query, &[&RequestId::new("abc-123")]) {
//!     Ok(response) => {
//!         println!("{} hits in total", response.total_hits);
//!         for hit in &response.hits {
//!             match hit {
//!                 Hit::Asset(asset) => println!("asset {:?}", asset.video_id),
//!                 Hit::Series(series) => {
//!                     println!("series {:?}", series.titles.get(Locale::Sv))
//!                 }
//!             }
//!         }
//!     }
//!     Err(failure) => {
//!         if let Some(meta) = failure.meta() {
//!             eprintln!("search failed with status {}", meta.status);
//!         }
//!         eprintln!("{}", failure);
//!     }
//! }
//! ```

mod classify;
mod client;
mod error;
mod hits;
mod query;
mod response;
mod transport;

pub use classify::{Classification, has_json_content_type, is_json_media_type};
pub use client::{Client, ClientBuilder, DEFAULT_BASE_URL, RequestId, RequestOption};
pub use error::{ApiError, ErrorCode, SearchError};
pub use hits::{
    Asset, Brand, Credit, DescriptionLength, Descriptions, Event, ExternalReference, Genre, Hit,
    Image, Keywords, Locale, LocalizedImage, LocationRestrictions, LocationRights, OriginalTitle,
    ParentalRating, PublicationRights, SERIES_TYPE, Season, Series, Tags, Team, Titles,
};
pub use query::{FIELDS_PARAM, Query, TYPE_FIELD};
pub use response::{ResponseMeta, SearchFailure, SearchResponse};
pub use transport::{HttpTransport, RawResponse, SearchRequest, Transport, TransportError};

// Re-export the HTTP types that appear in the public API
pub use reqwest::header::HeaderMap;
pub use reqwest::{StatusCode, Url};
