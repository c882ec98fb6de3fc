use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::recommender::error::CatalogError;

/// Ordered set of distinct category labels.
///
/// The position of a label is the axis it occupies in every feature vector,
/// so the order is fixed once the vocabulary is built.
///
/// # Examples
/// ```
/// use genre_recommender::Vocabulary;
/// let vocab = Vocabulary::try_from_labels(["Action", "Drama"]).unwrap();
/// assert_eq!(vocab.len(), 2);
/// assert_eq!(vocab.index_of("Drama"), Some(1));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Vocabulary {
    labels: IndexSet<Box<str>>,
}

impl Vocabulary {
    /// Build a vocabulary, rejecting repeated labels
    pub fn try_from_labels<I, T>(labels: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let iter = labels.into_iter();
        let mut set = IndexSet::with_capacity(iter.size_hint().0);
        for label in iter {
            let label = label.as_ref();
            if !set.insert(Box::<str>::from(label)) {
                return Err(CatalogError::DuplicateLabel(label.to_string()));
            }
        }
        Ok(Self { labels: set })
    }

    /// number of axes
    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// axis index of a label
    #[inline]
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.get_index_of(label)
    }

    /// label at an axis index
    #[inline]
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get_index(index).map(|l| &**l)
    }

    #[inline]
    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    /// Labels in axis order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> {
        self.labels.iter().map(|l| &**l)
    }
}

// IndexSet equality ignores order, axis order matters here
impl PartialEq for Vocabulary {
    fn eq(&self, other: &Self) -> bool {
        self.labels.iter().eq(other.labels.iter())
    }
}

impl Eq for Vocabulary {}

impl TryFrom<Vec<String>> for Vocabulary {
    type Error = CatalogError;

    fn try_from(labels: Vec<String>) -> Result<Self, Self::Error> {
        Self::try_from_labels(labels)
    }
}

impl From<Vocabulary> for Vec<String> {
    fn from(vocab: Vocabulary) -> Self {
        vocab.labels.into_iter().map(String::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let vocab = Vocabulary::try_from_labels(["Drama", "Action", "Comedy"]).unwrap();
        assert_eq!(vocab.iter().collect::<Vec<_>>(), vec!["Drama", "Action", "Comedy"]);
        assert_eq!(vocab.index_of("Comedy"), Some(2));
        assert_eq!(vocab.label(1), Some("Action"));
        assert_eq!(vocab.index_of("Horror"), None);
    }

    #[test]
    fn rejects_duplicates() {
        let err = Vocabulary::try_from_labels(["Action", "Drama", "Action"]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateLabel(ref l) if l == "Action"));
    }

    #[test]
    fn serde_as_plain_sequence() {
        let vocab = Vocabulary::try_from_labels(["Action", "Drama"]).unwrap();
        let json = serde_json::to_string(&vocab).unwrap();
        assert_eq!(json, r#"["Action","Drama"]"#);

        let de: Vocabulary = serde_json::from_str(&json).unwrap();
        assert_eq!(de, vocab);

        assert!(serde_json::from_str::<Vocabulary>(r#"["A","A"]"#).is_err());
    }

    #[test]
    fn equality_is_order_sensitive() {
        let a = Vocabulary::try_from_labels(["Action", "Drama"]).unwrap();
        let b = Vocabulary::try_from_labels(["Drama", "Action"]).unwrap();
        assert_ne!(a, b);
    }
}
