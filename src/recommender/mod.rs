pub mod compute;
pub mod config;
pub mod error;
pub mod evaluate;
pub mod feature;
pub mod item;
pub mod serde;
pub mod vocabulary;

use std::{borrow::Cow, fmt::Display, hash::Hash};

use indexmap::IndexMap;
use num::Num;
use tracing::{info, warn};

use crate::recommender::{
    config::RecommendConfig,
    error::{CatalogError, QueryError},
    evaluate::scoring::{rank, Recommendation},
    feature::{vectorize, FeatureVector},
    item::Item,
    vocabulary::Vocabulary,
};

/// Read-only context for recommendation requests
/// Items keep their load order, which is the tie-break order of the ranking.
#[derive(Debug, Clone)]
pub struct Catalog<K = u64, N = f32>
where
    N: Num + Copy,
{
    /// items in load order
    pub(crate) items: Vec<Item<K, N>>,
    /// feature axes
    pub(crate) vocabulary: Vocabulary,
    /// key -> position in `items`
    index: IndexMap<K, usize>,
}

impl<K, N> Catalog<K, N>
where
    K: Clone + Eq + Hash + Display,
    N: Num + Copy,
{
    /// Build a catalog, rejecting repeated keys
    /// Cached vectors whose length differs from the vocabulary are kept;
    /// they score 0 against everything.
    pub fn new(items: Vec<Item<K, N>>, vocabulary: Vocabulary) -> Result<Self, CatalogError> {
        let mut index = IndexMap::with_capacity(items.len());
        for (pos, item) in items.iter().enumerate() {
            if index.insert(item.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateKey(item.id.to_string()));
            }
            if let Some(vec) = &item.feature_vector {
                if vec.len() != vocabulary.len() {
                    warn!(
                        key = %item.id,
                        cached = vec.len(),
                        vocabulary = vocabulary.len(),
                        "cached feature vector length differs from vocabulary"
                    );
                }
            }
        }
        info!(items = items.len(), vocabulary = vocabulary.len(), "catalog ready");
        Ok(Self { items, vocabulary, index })
    }

    pub fn get(&self, key: &K) -> Option<&Item<K, N>> {
        self.index.get(key).map(|&pos| &self.items[pos])
    }

    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Feature vector of the item keyed by `key`
    pub fn vectorize(&self, key: &K) -> Option<Cow<'_, FeatureVector<N>>> {
        self.get(key).map(|item| vectorize(item, &self.vocabulary))
    }

    /// Recommend items similar to the one keyed by `query`
    /// `None` means nothing was selected.
    pub fn recommend(
        &self,
        query: Option<&K>,
        config: &RecommendConfig,
    ) -> Result<Recommendation<'_, K, N>, QueryError>
    where
        K: Sync,
        N: Into<f64> + Sync,
    {
        rank(&self.items, &self.vocabulary, query, config)
    }

    /// `(key, title)` pairs sorted by title for a chooser
    /// case-insensitive first, exact order on ties
    pub fn selection_list(&self) -> Vec<(&K, &str)> {
        let mut list: Vec<(&K, &str)> = self
            .items
            .iter()
            .map(|item| (&item.id, item.title.as_str()))
            .collect();
        list.sort_by_cached_key(|(_, title)| (title.to_lowercase(), title.to_string()));
        list
    }
}

impl<K, N> Catalog<K, N>
where
    N: Num + Copy,
{
    pub fn items(&self) -> &[Item<K, N>] {
        &self.items
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
