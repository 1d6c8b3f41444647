//! Two-pass decoding of the hit array.
//!
//! Each raw record is first peeked for its `type` only, then decoded in full
//! into the shape the discriminator selects. Decoding stops at the first bad
//! record but keeps everything decoded before it.

use std::io::{BufReader, Read};

use serde::Deserialize;
use serde::de::{Error as _, Unexpected};
use serde_json::Value;

use super::{Asset, Hit, SERIES_TYPE, Series};
use crate::error::SearchError;
use crate::query::TYPE_FIELD;

/// Top level of a success body
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    total_hits: Option<i64>,
    #[serde(rename = "assets", default)]
    hits: Option<Vec<Value>>,
}

/// A decoded page of hits
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Page {
    pub total_hits: i64,
    pub hits: Vec<Hit>,
}

/// A decode that stopped early, with everything decoded up to that point
#[derive(Debug)]
pub(crate) struct DecodeFailure {
    pub page: Page,
    pub error: SearchError,
}

/// Decodes a success body from `reader`.
///
/// Only the first JSON value is read; the reader is not required to be at
/// EOF afterwards.
pub(crate) fn decode_page<R: Read>(reader: R) -> Result<Page, DecodeFailure> {
    let mut deserializer = serde_json::Deserializer::from_reader(BufReader::new(reader));

    let envelope = Envelope::deserialize(&mut deserializer).map_err(|e| DecodeFailure {
        page: Page::default(),
        error: SearchError::Decode(e),
    })?;

    let mut page = Page {
        total_hits: envelope.total_hits.unwrap_or_default(),
        hits: Vec::new(),
    };

    let raw_hits = envelope.hits.unwrap_or_default();
    page.hits.reserve(raw_hits.len());

    for (index, raw) in raw_hits.iter().enumerate() {
        match decode_hit(raw) {
            Ok(hit) => {
                log::trace!("decoded hit {} as {}", index, hit.kind());
                page.hits.push(hit);
            }
            Err(error) => {
                log::warn!(
                    "aborting hit decoding at index {} of {}: {}",
                    index,
                    raw_hits.len(),
                    error
                );
                return Err(DecodeFailure { page, error });
            }
        }
    }

    Ok(page)
}

/// Decodes a single raw hit record.
pub(crate) fn decode_hit(raw: &Value) -> Result<Hit, SearchError> {
    let fields = match raw {
        Value::Null => return Err(SearchError::TypeMissing),
        Value::Object(fields) => fields,
        other => {
            let error = serde_json::Error::invalid_type(unexpected(other), &"a search hit object");
            return Err(SearchError::Decode(error));
        }
    };

    // Peek at the discriminator only; the rest is validated by the full decode
    let kind = fields
        .get(TYPE_FIELD)
        .map(Option::<String>::deserialize)
        .transpose()?
        .flatten();

    match kind.as_deref() {
        None | Some("") => Err(SearchError::TypeMissing),
        Some(SERIES_TYPE) => Ok(Hit::Series(Box::new(Series::deserialize(raw)?))),
        // Unknown discriminators fall back to the asset shape
        Some(_) => Ok(Hit::Asset(Box::new(Asset::deserialize(raw)?))),
    }
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(body: &str) -> Result<Page, DecodeFailure> {
        decode_page(body.as_bytes())
    }

    #[test]
    fn test_decodes_mixed_hits_in_order() {
        let page = decode(
            r#"{"total_hits":2,"assets":[{"type":"series","id":"s1"},{"type":"movie","video_id":"a1"}]}"#,
        )
        .unwrap();

        assert_eq!(page.total_hits, 2);
        assert_eq!(page.hits.len(), 2);

        let series = page.hits[0].as_series().unwrap();
        assert_eq!(series.id.as_deref(), Some("s1"));

        let asset = page.hits[1].as_asset().unwrap();
        assert_eq!(asset.video_id.as_deref(), Some("a1"));
        assert_eq!(asset.kind, "movie");
    }

    #[test]
    fn test_missing_type_keeps_preceding_hits() {
        let failure = decode(
            r#"{"total_hits":7,"assets":[{"type":"episode","video_id":"a1"},{"video_id":"a2"},{"type":"movie"}]}"#,
        )
        .unwrap_err();

        assert!(matches!(failure.error, SearchError::TypeMissing));
        assert_eq!(failure.page.total_hits, 7);
        assert_eq!(failure.page.hits.len(), 1);
        assert_eq!(
            failure.page.hits[0].as_asset().unwrap().video_id.as_deref(),
            Some("a1")
        );
    }

    #[test]
    fn test_empty_type_is_missing() {
        let failure = decode(r#"{"total_hits":1,"assets":[{"type":""}]}"#).unwrap_err();
        assert!(matches!(failure.error, SearchError::TypeMissing));
        assert!(failure.page.hits.is_empty());
        assert_eq!(failure.page.total_hits, 1);
    }

    #[test]
    fn test_null_element_is_missing_type() {
        let failure = decode(r#"{"total_hits":1,"assets":[null]}"#).unwrap_err();
        assert!(matches!(failure.error, SearchError::TypeMissing));
    }

    #[test]
    fn test_non_object_element_is_decode_error() {
        for raw in [json!([]), json!(["series"]), json!("series"), json!(5), json!(true)] {
            let error = decode_hit(&raw).unwrap_err();
            assert!(
                matches!(error, SearchError::Decode(_)),
                "{} gave {:?}",
                raw,
                error
            );
        }

        let failure = decode(
            r#"{"total_hits":2,"assets":[{"type":"series","id":"s1"},[]]}"#,
        )
        .unwrap_err();
        assert!(matches!(failure.error, SearchError::Decode(_)));
        assert_eq!(failure.page.hits.len(), 1);
    }

    #[test]
    fn test_null_type_is_missing() {
        let error = decode_hit(&json!({"type": null, "video_id": "a1"})).unwrap_err();
        assert!(matches!(error, SearchError::TypeMissing));
    }

    #[test]
    fn test_body_is_read_in_chunks() {
        struct CountingReads<R> {
            inner: R,
            calls: usize,
        }

        impl<R: Read> Read for CountingReads<R> {
            fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
                self.calls += 1;
                self.inner.read(buf)
            }
        }

        let hits: Vec<Value> = (0..50)
            .map(|i| json!({"type": "movie", "video_id": format!("a{}", i), "title_sv": "Film"}))
            .collect();
        let body = json!({"total_hits": 50, "assets": hits}).to_string();
        assert!(body.len() > 2000);

        let mut reader = CountingReads {
            inner: body.as_bytes(),
            calls: 0,
        };
        let page = decode_page(&mut reader).unwrap();

        assert_eq!(page.hits.len(), 50);
        assert!(reader.calls < 10, "{} reads for {} bytes", reader.calls, body.len());
    }

    #[test]
    fn test_structural_error_keeps_preceding_hits() {
        let failure = decode(
            r#"{"total_hits":3,"assets":[{"type":"series","id":"s1"},{"type":"movie","duration":"long"},{"type":"movie"}]}"#,
        )
        .unwrap_err();

        assert!(matches!(failure.error, SearchError::Decode(_)));
        assert_eq!(failure.page.hits.len(), 1);
        assert!(failure.page.hits[0].as_series().is_some());
    }

    #[test]
    fn test_non_string_type_is_decode_error() {
        let failure = decode(r#"{"total_hits":1,"assets":[{"type":5}]}"#).unwrap_err();
        assert!(matches!(failure.error, SearchError::Decode(_)));
    }

    #[test]
    fn test_peek_ignores_malformed_fields() {
        // `duration` is fine for a series, which has no such field
        let hit = decode_hit(&json!({"type": "series", "id": "s1", "duration": "long"})).unwrap();
        assert_eq!(hit.kind(), "series");
    }

    #[test]
    fn test_unknown_type_decodes_as_asset() {
        let hit = decode_hit(&json!({"type": "seriez", "video_id": "x"})).unwrap();
        assert!(hit.as_asset().is_some());
        assert_eq!(hit.kind(), "seriez");
    }

    #[test]
    fn test_missing_fields_default() {
        let page = decode(r#"{}"#).unwrap();
        assert_eq!(page, Page::default());

        let page = decode(r#"{"total_hits":0,"assets":null}"#).unwrap();
        assert!(page.hits.is_empty());
    }

    #[test]
    fn test_invalid_envelope_is_decode_error() {
        let failure = decode(r#"{"total_hits":"many","assets":[]}"#).unwrap_err();
        assert!(matches!(failure.error, SearchError::Decode(_)));
        assert_eq!(failure.page, Page::default());

        let failure = decode("").unwrap_err();
        assert!(matches!(failure.error, SearchError::Decode(_)));
    }

    #[test]
    fn test_trailing_data_is_ignored() {
        let page = decode(r#"{"total_hits":0,"assets":[]} trailing"#).unwrap();
        assert_eq!(page.total_hits, 0);
    }

    #[test]
    fn test_decoding_is_repeatable() {
        let body = r#"{"total_hits":2,"assets":[{"type":"series","id":"s1","title_sv":"Idol"},{"type":"movie","video_id":"a1","genres":[{"main":"Drama","sub":["Romance"]}]}]}"#;
        assert_eq!(decode(body).unwrap(), decode(body).unwrap());
    }
}
