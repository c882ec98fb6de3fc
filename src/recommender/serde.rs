use std::{fmt::Display, hash::Hash};

use num::Num;
use serde::{de::IgnoredAny, ser::SerializeStruct, Deserialize, Deserializer, Serialize};

use crate::recommender::{error::CatalogError, feature::FeatureVector, item::Item, Catalog};

/// Serializable form of a `Catalog`
/// Field names follow the movie data files (`genreNames`, `movies`);
/// `vocabulary` and `items` are accepted as aliases.
/// Use `into_catalog` to validate it and get a `Catalog`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "K: Serialize, N: Serialize",
    deserialize = "K: Deserialize<'de>, N: Deserialize<'de>"
))]
pub struct CatalogData<K = u64, N = f32>
where
    N: Num + Copy,
{
    #[serde(rename = "genreNames", alias = "vocabulary")]
    pub vocabulary: Vec<String>,
    #[serde(rename = "movies", alias = "items")]
    pub items: Vec<Item<K, N>>,
}

impl<K, N> CatalogData<K, N>
where
    N: Num + Copy,
{
    /// Validate and convert into a `Catalog`
    /// fails on an empty vocabulary, repeated labels or repeated item keys
    pub fn into_catalog(self) -> Result<Catalog<K, N>, CatalogError>
    where
        K: Clone + Eq + Hash + Display,
    {
        if self.vocabulary.is_empty() {
            return Err(CatalogError::EmptyVocabulary);
        }
        let vocabulary = self.vocabulary.try_into()?;
        Catalog::new(self.items, vocabulary)
    }

    pub fn from_json_str<'de>(s: &'de str) -> Result<Self, CatalogError>
    where
        K: Deserialize<'de>,
        N: Deserialize<'de>,
    {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_cbor_slice<'de>(bytes: &'de [u8]) -> Result<Self, CatalogError>
    where
        K: Deserialize<'de>,
        N: Deserialize<'de>,
    {
        Ok(serde_cbor::from_slice(bytes)?)
    }
}

impl<K, N> From<&Catalog<K, N>> for CatalogData<K, N>
where
    K: Clone,
    N: Num + Copy,
{
    fn from(catalog: &Catalog<K, N>) -> Self {
        Self {
            vocabulary: catalog.vocabulary.iter().map(str::to_string).collect(),
            items: catalog.items.clone(),
        }
    }
}

impl<K, N> Serialize for Catalog<K, N>
where
    K: Serialize,
    N: Num + Copy + Serialize,
{
    /// Serialized in the `CatalogData` shape, without the key index.
    /// Deserialize through `CatalogData`.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Catalog", 2)?;
        state.serialize_field("genreNames", &self.vocabulary)?;
        state.serialize_field("movies", &self.items)?;
        state.end()
    }
}

impl<K, N> Catalog<K, N>
where
    K: Serialize,
    N: Num + Copy + Serialize,
{
    pub fn to_json_string(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_cbor_vec(&self) -> Result<Vec<u8>, CatalogError> {
        Ok(serde_cbor::to_vec(self)?)
    }
}

/// Reads a cached vector leniently
/// - a sequence of numbers becomes a vector, `null` elements read as 0
/// - anything else (string, object, mixed sequence, `null`) reads as absent,
///   so the vector is rebuilt from the genres
pub(crate) fn lenient_feature_vector<'de, D, N>(
    deserializer: D,
) -> Result<Option<FeatureVector<N>>, D::Error>
where
    D: Deserializer<'de>,
    N: Num + Copy + Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient<N> {
        Seq(Vec<Option<N>>),
        Other(IgnoredAny),
    }

    Ok(match Lenient::<N>::deserialize(deserializer)? {
        Lenient::Seq(values) => Some(
            values
                .into_iter()
                .map(|v| v.unwrap_or_else(N::zero))
                .collect::<Vec<N>>()
                .into(),
        ),
        Lenient::Other(_) => None,
    })
}
