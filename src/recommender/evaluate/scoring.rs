use std::fmt::{self, Debug, Display};

use num::Num;
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::recommender::{
    compute::compare::similarity,
    config::{RecommendConfig, ScoringMode},
    error::QueryError,
    feature::vectorize,
    item::Item,
    vocabulary::Vocabulary,
};

/// One scored candidate
pub struct HitEntry<'a, K, N>
where
    N: Num + Copy,
{
    pub item: &'a Item<K, N>,
    /// cosine similarity against the query item, in [0, 1]
    pub score: f64,
}

impl<K, N> Clone for HitEntry<'_, K, N>
where
    N: Num + Copy,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, N> Copy for HitEntry<'_, K, N> where N: Num + Copy {}

impl<K, N> Debug for HitEntry<'_, K, N>
where
    K: Debug,
    N: Num + Copy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HitEntry")
            .field("id", &self.item.id)
            .field("title", &self.item.title)
            .field("score", &self.score)
            .finish()
    }
}

/// Structure to store ranked candidates
pub struct Hits<'a, K, N>
where
    N: Num + Copy,
{
    pub list: Vec<HitEntry<'a, K, N>>,
}

impl<'a, K, N> Hits<'a, K, N>
where
    N: Num + Copy,
{
    pub fn new(list: Vec<HitEntry<'a, K, N>>) -> Self {
        Hits { list }
    }

    /// Sort by descending score
    /// Stable: equal scores keep their current (catalog) order
    pub fn sort_by_score_desc(&mut self) -> &mut Self {
        self.list.sort_by(|a, b| b.score.total_cmp(&a.score));
        self
    }

    /// Keep the first `n` entries
    pub fn truncate(&mut self, n: usize) -> &mut Self {
        self.list.truncate(n);
        self
    }

    /// Drop entries scoring at or below `min_score`
    pub fn retain_above(&mut self, min_score: f64) -> &mut Self {
        self.list.retain(|hit| hit.score > min_score);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HitEntry<'a, K, N>> {
        self.list.iter()
    }

    pub fn titles(&self) -> Vec<&'a str> {
        self.list.iter().map(|hit| hit.item.title.as_str()).collect()
    }
}

impl<K, N> Debug for Hits<'_, K, N>
where
    K: Debug,
    N: Num + Copy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            // one hit per line
            writeln!(f, "Hits [")?;
            for hit in &self.list {
                writeln!(f, "    {:?} {:?}: {:.6}", hit.item.id, hit.item.title, hit.score)?;
            }
            write!(f, "]")
        } else {
            f.debug_list()
                .entries(self.list.iter().map(|hit| (&hit.item.id, hit.score)))
                .finish()
        }
    }
}

impl<K, N> Display for Hits<'_, K, N>
where
    N: Num + Copy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (rank, hit) in self.list.iter().enumerate() {
            writeln!(f, "{:>3}. {} ({:.4})", rank + 1, hit.item.title, hit.score)?;
        }
        Ok(())
    }
}

/// Outcome of a resolved query
pub enum Recommendation<'a, K, N>
where
    N: Num + Copy,
{
    /// at least one candidate survived the cutoff, best first
    Ranked {
        query: &'a Item<K, N>,
        hits: Hits<'a, K, N>,
    },
    /// nothing to recommend for this query
    NoMatches { query: &'a Item<K, N> },
}

impl<'a, K, N> Recommendation<'a, K, N>
where
    N: Num + Copy,
{
    pub fn query(&self) -> &'a Item<K, N> {
        match self {
            Recommendation::Ranked { query, .. } | Recommendation::NoMatches { query } => *query,
        }
    }

    pub fn query_title(&self) -> &'a str {
        &self.query().title
    }

    pub fn hits(&self) -> Option<&Hits<'a, K, N>> {
        match self {
            Recommendation::Ranked { hits, .. } => Some(hits),
            Recommendation::NoMatches { .. } => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Recommendation::NoMatches { .. })
    }
}

impl<K, N> Debug for Recommendation<'_, K, N>
where
    K: Debug,
    N: Num + Copy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::Ranked { query, hits } => f
                .debug_struct("Ranked")
                .field("query", &query.id)
                .field("hits", hits)
                .finish(),
            Recommendation::NoMatches { query } => {
                f.debug_struct("NoMatches").field("query", &query.id).finish()
            }
        }
    }
}

impl<K, N> Display for Recommendation<'_, K, N>
where
    N: Num + Copy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::Ranked { query, hits } => write!(
                f,
                "Because you liked \"{}\", we recommend (cosine): {}",
                query.title,
                hits.titles().join(", ")
            ),
            Recommendation::NoMatches { query } => write!(
                f,
                "No recommendations found for \"{}\" using cosine similarity.",
                query.title
            ),
        }
    }
}

/// Recommend up to `top_n` items similar to the item keyed by `query`
///
/// - `query == None` (nothing selected) gives `QueryError::NoSelection`
/// - an unknown key gives `QueryError::NotFound`
/// - every item sharing the query key is excluded from the candidates
/// - candidates are ranked by descending score; ties keep catalog order
/// - the list is cut to `top_n` first, then entries scoring 0 are dropped
///
/// # Examples
/// ```
/// use genre_recommender::{recommend, Item, Vocabulary};
/// let vocab = Vocabulary::try_from_labels(["Action", "Drama"]).unwrap();
/// let items: Vec<Item> = vec![
///     Item::new(1, "A", &["Action"]),
///     Item::new(2, "B", &["Action"]),
///     Item::new(3, "C", &["Drama"]),
/// ];
/// let result = recommend(&items, &vocab, Some(&1), 2).unwrap();
/// assert_eq!(result.hits().unwrap().titles(), vec!["B"]);
/// ```
pub fn recommend<'a, K, N>(
    items: &'a [Item<K, N>],
    vocabulary: &Vocabulary,
    query: Option<&K>,
    top_n: usize,
) -> Result<Recommendation<'a, K, N>, QueryError>
where
    K: PartialEq + Display + Sync,
    N: Num + Copy + Into<f64> + Sync,
{
    rank(items, vocabulary, query, &RecommendConfig::default().with_top_n(top_n))
}

/// Full recommendation pass under `config`
pub(crate) fn rank<'a, K, N>(
    items: &'a [Item<K, N>],
    vocabulary: &Vocabulary,
    query: Option<&K>,
    config: &RecommendConfig,
) -> Result<Recommendation<'a, K, N>, QueryError>
where
    K: PartialEq + Display + Sync,
    N: Num + Copy + Into<f64> + Sync,
{
    let key = query.ok_or(QueryError::NoSelection)?;
    let query_item = items
        .iter()
        .find(|item| item.id == *key)
        .ok_or_else(|| QueryError::NotFound { key: key.to_string() })?;

    let query_vec = vectorize(query_item, vocabulary);
    let score_one = |item: &'a Item<K, N>| {
        let candidate_vec = vectorize(item, vocabulary);
        let score = similarity(query_vec.as_slice(), candidate_vec.as_slice());
        trace!(candidate = %item.id, score, "scored candidate");
        HitEntry { item, score }
    };
    let is_candidate = |item: &&'a Item<K, N>| item.id != query_item.id;

    debug!(query = %key, catalog = items.len(), mode = ?config.scoring, "scoring candidates");
    let list: Vec<HitEntry<'a, K, N>> = match config.scoring {
        ScoringMode::Sequential => items.iter().filter(is_candidate).map(score_one).collect(),
        // collect keeps source order, so the stable sort below sees the same input
        ScoringMode::Parallel => items.par_iter().filter(is_candidate).map(score_one).collect(),
    };

    let mut hits = Hits::new(list);
    // zero scores never pass, whatever the configured cutoff (NaN included)
    hits.sort_by_score_desc()
        .truncate(config.top_n)
        .retain_above(config.min_score.max(0.0));
    debug!(query = %key, hits = hits.len(), "recommendation finished");

    if hits.is_empty() {
        Ok(Recommendation::NoMatches { query: query_item })
    } else {
        Ok(Recommendation::Ranked { query: query_item, hits })
    }
}
