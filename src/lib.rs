/// This crate is a content-based item recommender over categorical feature vectors.
pub mod recommender;

/// Catalog
/// The read-only context object every recommendation runs against.
/// It bundles the items and the vocabulary that defines their feature axes.
///
/// A `Catalog` only exists once its data has been loaded and validated,
/// so holding one means the load step is complete and requests can be served.
/// It is `Send + Sync` for thread-safe keys and parameters and can be shared
/// behind an `Arc`.
pub use recommender::Catalog;

/// Catalog Data Structure for Serialization
/// A plain serializable form of a catalog, matching the shape of the movie data
/// files (`genreNames` + `movies`).
/// Convert it into a `Catalog` with `into_catalog`, which validates keys and labels.
///
/// # Serialization
/// Supported (JSON and CBOR helpers are provided).
///
/// # Deserialization
/// Supported. `genreVector` is read leniently: anything that is not a
/// sequence of numbers is treated as absent and rebuilt from the genres.
pub use recommender::serde::CatalogData;

/// Item and Vocabulary
/// - `Item`: one recommendable entry (key, title, genres, optional cached vector)
/// - `Vocabulary`: ordered set of distinct labels fixing vector dimensionality
pub use recommender::item::Item;
pub use recommender::vocabulary::Vocabulary;

/// Feature vectorization
/// `vectorize` turns an item's genre set into a binary vector over the vocabulary.
/// A cached vector on the item always wins over recomputation.
pub use recommender::feature::{vectorize, FeatureVector};

/// Similarity scorer
/// Cosine similarity in [0, 1] that never fails:
/// mismatched lengths and zero vectors score 0.
pub use recommender::compute::compare::similarity;

/// Recommendation pipeline and results
/// - `recommend`: rank every other item against a query item and keep the top N
/// - `Recommendation`: ranked hits, or "no matches" with the query title
/// - `Hits` / `HitEntry`: the ranked list and its entries
pub use recommender::evaluate::scoring::{recommend, HitEntry, Hits, Recommendation};

/// Configuration for the recommendation pass (top N, score cutoff, scoring mode).
pub use recommender::config::{RecommendConfig, ScoringMode};

/// Errors
/// - `QueryError`: no item selected or unknown key, an expected user-input outcome
/// - `CatalogError`: loader failures
/// - `ConfigError`: environment configuration failures
pub use recommender::error::{CatalogError, ConfigError, QueryError};
