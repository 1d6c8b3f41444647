//! Search hits
//!
//! A hit is either an [`Asset`] or a [`Series`]. Which one is decided by the
//! `type` field of the raw JSON record: `series` selects [`Series`], every
//! other non-empty value selects [`Asset`].

mod decode;
mod types;

pub(crate) use decode::{DecodeFailure, Page, decode_page};
pub use types::{
    Asset, Brand, Credit, DescriptionLength, Descriptions, Event, ExternalReference, Genre, Image,
    Keywords, LocalizedImage, LocationRestrictions, LocationRights, OriginalTitle, ParentalRating,
    PublicationRights, Season, Series, Tags, Team, Titles,
};

use serde::Serialize;

use crate::error::SearchError;

/// Discriminator value that selects the [`Series`] shape
pub const SERIES_TYPE: &str = "series";

/// Locales the service provides texts for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    /// Danish
    Da,
    /// Finnish
    Fi,
    /// Norwegian Bokmål
    Nb,
    /// Swedish
    Sv,
}

/// A single search hit
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Hit {
    Asset(Box<Asset>),
    Series(Box<Series>),
}

impl Hit {
    /// Decodes one raw hit record, choosing the shape by its `type` field.
    ///
    /// # Errors
    ///
    /// [`SearchError::TypeMissing`] when `type` is absent or empty, and
    /// [`SearchError::Decode`] when the record does not fit the chosen shape.
    pub fn from_value(raw: &serde_json::Value) -> Result<Self, SearchError> {
        decode::decode_hit(raw)
    }

    /// The discriminator value this hit was decoded from.
    pub fn kind(&self) -> &str {
        match self {
            Hit::Asset(asset) => &asset.kind,
            Hit::Series(series) => &series.kind,
        }
    }

    pub fn titles(&self) -> &Titles {
        match self {
            Hit::Asset(asset) => &asset.titles,
            Hit::Series(series) => &series.titles,
        }
    }

    pub fn as_asset(&self) -> Option<&Asset> {
        match self {
            Hit::Asset(asset) => Some(asset),
            Hit::Series(_) => None,
        }
    }

    pub fn as_series(&self) -> Option<&Series> {
        match self {
            Hit::Series(series) => Some(series),
            Hit::Asset(_) => None,
        }
    }
}

impl From<Asset> for Hit {
    fn from(asset: Asset) -> Self {
        Hit::Asset(Box::new(asset))
    }
}

impl From<Series> for Hit {
    fn from(series: Series) -> Self {
        Hit::Series(Box::new(series))
    }
}
