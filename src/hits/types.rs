/// Search service record shapes for deserialization.
///
/// These structures mirror the JSON objects in the `assets` array of a
/// search response. Every field is optional on the wire: scalars decode to
/// `None` when missing or `null`, lists and nested objects to their empty
/// default.
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::Locale;

/// Decodes `null` the same way as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Titles in each supported locale (`title_da`, `title_fi`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Titles {
    #[serde(rename = "title_da", default)]
    pub da: Option<String>,
    #[serde(rename = "title_fi", default)]
    pub fi: Option<String>,
    #[serde(rename = "title_nb", default)]
    pub nb: Option<String>,
    #[serde(rename = "title_sv", default)]
    pub sv: Option<String>,
}

impl Titles {
    pub fn get(&self, locale: Locale) -> Option<&str> {
        match locale {
            Locale::Da => self.da.as_deref(),
            Locale::Fi => self.fi.as_deref(),
            Locale::Nb => self.nb.as_deref(),
            Locale::Sv => self.sv.as_deref(),
        }
    }
}

/// Length class of a description text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescriptionLength {
    Tiny,
    Short,
    Medium,
    Long,
    Extended,
}

/// Descriptions in five lengths and each supported locale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Descriptions {
    #[serde(default)]
    pub description_tiny_da: Option<String>,
    #[serde(default)]
    pub description_tiny_fi: Option<String>,
    #[serde(default)]
    pub description_tiny_nb: Option<String>,
    #[serde(default)]
    pub description_tiny_sv: Option<String>,
    #[serde(default)]
    pub description_short_da: Option<String>,
    #[serde(default)]
    pub description_short_fi: Option<String>,
    #[serde(default)]
    pub description_short_nb: Option<String>,
    #[serde(default)]
    pub description_short_sv: Option<String>,
    #[serde(default)]
    pub description_medium_da: Option<String>,
    #[serde(default)]
    pub description_medium_fi: Option<String>,
    #[serde(default)]
    pub description_medium_nb: Option<String>,
    #[serde(default)]
    pub description_medium_sv: Option<String>,
    #[serde(default)]
    pub description_long_da: Option<String>,
    #[serde(default)]
    pub description_long_fi: Option<String>,
    #[serde(default)]
    pub description_long_nb: Option<String>,
    #[serde(default)]
    pub description_long_sv: Option<String>,
    #[serde(default)]
    pub description_extended_da: Option<String>,
    #[serde(default)]
    pub description_extended_fi: Option<String>,
    #[serde(default)]
    pub description_extended_nb: Option<String>,
    #[serde(default)]
    pub description_extended_sv: Option<String>,
}

impl Descriptions {
    pub fn get(&self, length: DescriptionLength, locale: Locale) -> Option<&str> {
        use DescriptionLength::*;

        let text = match (length, locale) {
            (Tiny, Locale::Da) => &self.description_tiny_da,
            (Tiny, Locale::Fi) => &self.description_tiny_fi,
            (Tiny, Locale::Nb) => &self.description_tiny_nb,
            (Tiny, Locale::Sv) => &self.description_tiny_sv,
            (Short, Locale::Da) => &self.description_short_da,
            (Short, Locale::Fi) => &self.description_short_fi,
            (Short, Locale::Nb) => &self.description_short_nb,
            (Short, Locale::Sv) => &self.description_short_sv,
            (Medium, Locale::Da) => &self.description_medium_da,
            (Medium, Locale::Fi) => &self.description_medium_fi,
            (Medium, Locale::Nb) => &self.description_medium_nb,
            (Medium, Locale::Sv) => &self.description_medium_sv,
            (Long, Locale::Da) => &self.description_long_da,
            (Long, Locale::Fi) => &self.description_long_fi,
            (Long, Locale::Nb) => &self.description_long_nb,
            (Long, Locale::Sv) => &self.description_long_sv,
            (Extended, Locale::Da) => &self.description_extended_da,
            (Extended, Locale::Fi) => &self.description_extended_fi,
            (Extended, Locale::Nb) => &self.description_extended_nb,
            (Extended, Locale::Sv) => &self.description_extended_sv,
        };

        text.as_deref()
    }
}

/// Keywords in each supported locale.
///
/// The service spells the Danish key `keywords_dk`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Keywords {
    #[serde(rename = "keywords_dk", default, deserialize_with = "null_as_default")]
    pub da: Vec<String>,
    #[serde(rename = "keywords_fi", default, deserialize_with = "null_as_default")]
    pub fi: Vec<String>,
    #[serde(rename = "keywords_nb", default, deserialize_with = "null_as_default")]
    pub nb: Vec<String>,
    #[serde(rename = "keywords_sv", default, deserialize_with = "null_as_default")]
    pub sv: Vec<String>,
}

impl Keywords {
    pub fn get(&self, locale: Locale) -> &[String] {
        match locale {
            Locale::Da => &self.da,
            Locale::Fi => &self.fi,
            Locale::Nb => &self.nb,
            Locale::Sv => &self.sv,
        }
    }
}

/// Image attribute of a record, possibly with per-language variants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub copyright: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub localizations: Vec<LocalizedImage>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalizedImage {
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub copyright: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// One entry in the credit list, e.g. an actor or director.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Credit {
    #[serde(default)]
    pub function: Option<String>,
    #[serde(default)]
    pub nid: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub rolename: Option<String>,
}

/// Publication window of a record on one site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub site: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub device_types: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub products: Vec<String>,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub publish_time: Option<DateTime<Utc>>,
}

/// Reference to the same record in another system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalReference {
    #[serde(default)]
    pub locator: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

/// Main genre with its sub genres, e.g. Horror with Action and Drama.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    #[serde(default)]
    pub main: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sub: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OriginalTitle {
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// Parental rating for a given country and rating system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParentalRating {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub system: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationRestrictions {
    #[serde(default, deserialize_with = "null_as_default")]
    pub include_countries: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationRights {
    #[serde(default, deserialize_with = "null_as_default")]
    pub location_restrictions: LocationRestrictions,
    #[serde(default)]
    pub product: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicationRights {
    #[serde(default, deserialize_with = "null_as_default")]
    pub location_rights: LocationRights,
}

/// Team of a sports asset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Team {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub nid: Option<String>,
}

/// Tags bind otherwise unrelated records, keyed by tag category.
pub type Tags = BTreeMap<String, Vec<String>>;

/// Brand of an asset, e.g. Idol or Harry Potter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(flatten)]
    pub titles: Titles,
    #[serde(flatten)]
    pub descriptions: Descriptions,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cinemascope: Image,
    #[serde(default, deserialize_with = "null_as_default")]
    pub landscape: Image,
    #[serde(default, deserialize_with = "null_as_default")]
    pub poster: Image,
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub external_references: Vec<ExternalReference>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub studio: Option<String>,
}

/// Season an asset belongs to, e.g. "Idol season 2".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Season {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "season_number", default)]
    pub number: Option<i64>,
    #[serde(default)]
    pub number_of_episodes: Option<i64>,
    #[serde(flatten)]
    pub titles: Titles,
    #[serde(flatten)]
    pub descriptions: Descriptions,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cinemascope: Image,
    #[serde(default, deserialize_with = "null_as_default")]
    pub landscape: Image,
    #[serde(default, deserialize_with = "null_as_default")]
    pub poster: Image,
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub external_references: Vec<ExternalReference>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub studio: Option<String>,
}

/// A playable asset hit: movie, episode, sports event and so on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Discriminator as sent, e.g. `movie` or `episode`
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub video_id: Option<String>,
    #[serde(default)]
    pub vman_id: Option<String>,
    #[serde(flatten)]
    pub titles: Titles,
    #[serde(flatten)]
    pub descriptions: Descriptions,
    #[serde(flatten)]
    pub keywords: Keywords,
    #[serde(default, deserialize_with = "null_as_default")]
    pub original_title: OriginalTitle,

    #[serde(default)]
    pub arena: Option<String>,
    #[serde(rename = "hometeam", default, deserialize_with = "null_as_default")]
    pub home_team: Team,
    #[serde(rename = "awayteam", default, deserialize_with = "null_as_default")]
    pub away_team: Team,
    #[serde(rename = "logohometeam", default, deserialize_with = "null_as_default")]
    pub logo_home_team: Image,
    #[serde(rename = "logoawayteam", default, deserialize_with = "null_as_default")]
    pub logo_away_team: Image,

    #[serde(default, deserialize_with = "null_as_default")]
    pub brand: Brand,
    #[serde(default, deserialize_with = "null_as_default")]
    pub season: Season,
    #[serde(default)]
    pub episode_number: Option<i64>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub cinemascope: Image,
    #[serde(default, deserialize_with = "null_as_default")]
    pub landscape: Image,
    #[serde(default, deserialize_with = "null_as_default")]
    pub poster: Image,

    #[serde(default)]
    pub content_source: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub credits: Vec<Credit>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<Genre>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub spoken_languages: Vec<String>,
    #[serde(default)]
    pub production_year: Option<String>,
    #[serde(default)]
    pub studio: Option<String>,
    /// Duration in seconds
    #[serde(default)]
    pub duration: Option<i64>,

    #[serde(default)]
    pub drm_restrictions: Option<bool>,
    #[serde(default)]
    pub items_published: Option<bool>,
    #[serde(default)]
    pub live: Option<bool>,
    #[serde(default)]
    pub live_event_end: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub events: Vec<Event>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub external_references: Vec<ExternalReference>,
    #[serde(rename = "mlt_nids", default, deserialize_with = "null_as_default")]
    pub more_like_this: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub parental_ratings: Vec<ParentalRating>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub publication_rights: PublicationRights,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Tags,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// A series hit, grouping the seasons and episodes of a show.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Discriminator as sent, always `series`
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub brand_id: Option<String>,
    #[serde(flatten)]
    pub titles: Titles,
    #[serde(flatten)]
    pub descriptions: Descriptions,
    #[serde(flatten)]
    pub keywords: Keywords,
    /// Season numbers available for this series
    #[serde(default, deserialize_with = "null_as_default")]
    pub seasons: Vec<i64>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub cinemascope: Image,
    #[serde(default, deserialize_with = "null_as_default")]
    pub landscape: Image,
    #[serde(default, deserialize_with = "null_as_default")]
    pub poster: Image,

    #[serde(default)]
    pub content_source: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub credits: Vec<Credit>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<Genre>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub spoken_languages: Vec<String>,
    #[serde(default)]
    pub studio: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub events: Vec<Event>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub external_references: Vec<ExternalReference>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Tags,
    #[serde(default)]
    pub timestamp: Option<String>,
}
