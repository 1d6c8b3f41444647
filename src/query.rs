//! Query parameters for the search endpoint
//!
//! A multi-valued parameter set that encodes sorted by key, plus the
//! normalization that keeps the `type` discriminator in every explicit
//! field selection.

use std::collections::BTreeMap;

/// Name of the field-selection parameter
pub const FIELDS_PARAM: &str = "fields";

/// Name of the discriminator field every hit must carry
pub const TYPE_FIELD: &str = "type";

/// Multi-valued query parameters for a search request.
///
/// Keys are kept sorted so the encoded query string is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    params: BTreeMap<String, Vec<String>>,
}

impl Query {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the first value for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns every value for `key`.
    pub fn get_all(&self, key: &str) -> &[String] {
        self.params.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Replaces all values of `key` with `value`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.params.insert(key.into(), vec![value.into()]);
        self
    }

    /// Appends `value` to the values of `key`.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.params.entry(key.into()).or_default().push(value.into());
        self
    }

    /// Removes all values of `key`.
    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        self.params.remove(key)
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterates over all key/value pairs, sorted by key.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().flat_map(|(key, values)| {
            values
                .iter()
                .map(move |value| (key.as_str(), value.as_str()))
        })
    }

    /// Makes sure an explicit field selection also requests the `type` field.
    ///
    /// Without it the hits cannot be told apart. When `fields` is absent or
    /// empty the service default applies and nothing is changed.
    pub fn ensure_type_field(&mut self) {
        let Some(fields) = self.get(FIELDS_PARAM) else {
            return;
        };

        if fields.is_empty() || fields.split(',').any(|field| field == TYPE_FIELD) {
            return;
        }

        let fields = format!("{},{}", fields, TYPE_FIELD);
        self.set(FIELDS_PARAM, fields);
    }
}

impl<K, V> FromIterator<(K, V)> for Query
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = Query::new();
        for (key, value) in iter {
            query.add(key, value);
        }
        query
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Query
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}
