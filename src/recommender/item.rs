use num::Num;
use serde::{Deserialize, Serialize};

use crate::recommender::{feature::FeatureVector, serde::lenient_feature_vector};

/// One recommendable entry of the catalog
///
/// `K` is the item key (e.g. `u64`, `String`), `N` the element type of a
/// cached feature vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "K: Deserialize<'de>, N: Deserialize<'de>"))]
pub struct Item<K = u64, N = f32>
where
    N: Num + Copy,
{
    /// unique key
    pub id: K,
    /// display title
    pub title: String,
    /// category labels, absent in the data means empty
    #[serde(default)]
    pub genres: Vec<String>,
    /// cached vector aligned to the catalog vocabulary
    /// preferred over the genres when present, even if stale
    #[serde(
        rename = "genreVector",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_feature_vector"
    )]
    pub feature_vector: Option<FeatureVector<N>>,
}

impl<K, N> Item<K, N>
where
    N: Num + Copy,
{
    pub fn new<T>(id: K, title: impl Into<String>, genres: &[T]) -> Self
    where
        T: AsRef<str>,
    {
        Self {
            id,
            title: title.into(),
            genres: genres.iter().map(|g| g.as_ref().to_string()).collect(),
            feature_vector: None,
        }
    }

    /// Attach a precomputed vector
    pub fn with_feature_vector(mut self, vector: impl Into<FeatureVector<N>>) -> Self {
        self.feature_vector = Some(vector.into());
        self
    }
}
