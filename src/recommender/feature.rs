use std::{borrow::Cow, collections::HashSet};

use num::Num;
use serde::{Deserialize, Serialize};

use crate::recommender::{item::Item, vocabulary::Vocabulary};

/// Numeric encoding of an item's categories against a vocabulary
/// Axis `i` belongs to vocabulary label `i`.
/// Never patched in place; a new vector is built instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector<N = f32>
where
    N: Num + Copy,
{
    values: Vec<N>,
}

impl<N> FeatureVector<N>
where
    N: Num + Copy,
{
    #[inline]
    pub fn as_slice(&self) -> &[N] {
        &self.values
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// number of non-zero axes
    pub fn nnz(&self) -> usize {
        self.values.iter().filter(|v| !v.is_zero()).count()
    }

    pub fn into_inner(self) -> Vec<N> {
        self.values
    }
}

impl<N> From<Vec<N>> for FeatureVector<N>
where
    N: Num + Copy,
{
    fn from(values: Vec<N>) -> Self {
        Self { values }
    }
}

impl<N> AsRef<[N]> for FeatureVector<N>
where
    N: Num + Copy,
{
    fn as_ref(&self) -> &[N] {
        &self.values
    }
}

/// Feature vector of an item over `vocabulary`
///
/// A cached vector on the item is returned as is, without checking it
/// against the genres or the vocabulary length.
/// Otherwise a binary vector of length `vocabulary.len()` is built:
/// 1 where the item's genres contain the label, 0 elsewhere.
/// Missing or unknown genres simply give zeros.
///
/// # Examples
/// ```
/// use genre_recommender::{vectorize, Item, Vocabulary};
/// let vocab = Vocabulary::try_from_labels(["Action", "Drama", "Comedy"]).unwrap();
/// let item: Item = Item::new(1, "A", &["Comedy", "Action"]);
/// assert_eq!(vectorize(&item, &vocab).as_slice(), &[1.0, 0.0, 1.0]);
/// ```
pub fn vectorize<'a, K, N>(item: &'a Item<K, N>, vocabulary: &Vocabulary) -> Cow<'a, FeatureVector<N>>
where
    N: Num + Copy,
{
    if let Some(cached) = &item.feature_vector {
        return Cow::Borrowed(cached);
    }
    let genres: HashSet<&str> = item.genres.iter().map(String::as_str).collect();
    let values = vocabulary
        .iter()
        .map(|label| if genres.contains(label) { N::one() } else { N::zero() })
        .collect();
    Cow::Owned(FeatureVector { values })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> Vocabulary {
        Vocabulary::try_from_labels(["Action", "Drama", "Comedy", "Horror"]).unwrap()
    }

    #[test]
    fn length_always_matches_vocabulary() {
        let vocab = vocab();
        let none: Item = Item::new(1, "none", &[] as &[&str]);
        let partial: Item = Item::new(2, "partial", &["Drama"]);
        let full: Item = Item::new(3, "full", &["Horror", "Comedy", "Drama", "Action"]);
        let outside: Item = Item::new(4, "outside", &["Western", "Musical"]);

        for item in [&none, &partial, &full, &outside] {
            assert_eq!(vectorize(item, &vocab).len(), vocab.len());
        }
        assert_eq!(vectorize(&full, &vocab).nnz(), 4);
        assert_eq!(vectorize(&partial, &vocab).as_slice(), &[0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn uncovered_genres_give_zero_vector() {
        let item: Item = Item::new(1, "x", &["Western"]);
        let v = vectorize(&item, &vocab());
        assert_eq!(v.nnz(), 0);
    }

    #[test]
    fn repeated_genres_stay_binary() {
        let item: Item<u64, u8> = Item::new(1, "x", &["Drama", "Drama"]);
        assert_eq!(vectorize(&item, &vocab()).as_slice(), &[0, 1, 0, 0]);
    }

    #[test]
    fn cached_vector_wins_even_when_stale() {
        let item: Item = Item::new(1, "x", &["Action"]).with_feature_vector(vec![0.0, 0.0, 1.0]);
        let v = vectorize(&item, &vocab());
        assert!(matches!(v, Cow::Borrowed(_)));
        // cached length is trusted, not padded to the vocabulary
        assert_eq!(v.as_slice(), &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn empty_vocabulary_gives_empty_vector() {
        let item: Item = Item::new(1, "x", &["Action"]);
        let v = vectorize(&item, &Vocabulary::default());
        assert!(v.is_empty());
    }
}
