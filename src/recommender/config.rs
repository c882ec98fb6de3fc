use serde::{Deserialize, Serialize};

use crate::recommender::error::ConfigError;

/// How candidates are scored during one recommendation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    /// score on the calling thread
    #[default]
    Sequential,
    /// score on the rayon pool
    /// candidate order is kept, so the result is identical to `Sequential`
    Parallel,
}

/// Parameters of a recommendation pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendConfig {
    /// Maximum number of ranked entries kept before the score cutoff
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Entries scoring at or below this are dropped after truncation
    #[serde(default)]
    pub min_score: f64,

    #[serde(default)]
    pub scoring: ScoringMode,
}

fn default_top_n() -> usize {
    2
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            min_score: 0.0,
            scoring: ScoringMode::default(),
        }
    }
}

impl RecommendConfig {
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_scoring(mut self, scoring: ScoringMode) -> Self {
        self.scoring = scoring;
        self
    }

    /// Load configuration from `RECOMMEND_*` environment variables
    /// (`RECOMMEND_TOP_N`, `RECOMMEND_MIN_SCORE`, `RECOMMEND_SCORING`).
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        envy::prefixed("RECOMMEND_").from_env::<RecommendConfig>()?.validated()
    }

    /// Same as `from_env`, reading from an explicit variable list
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed("RECOMMEND_").from_iter::<_, RecommendConfig>(vars)?.validated()
    }

    /// A negative cutoff would let zero scores through, NaN would drop everything
    fn validated(self) -> Result<Self, ConfigError> {
        if !self.min_score.is_finite() || self.min_score < 0.0 {
            return Err(ConfigError::InvalidMinScore(self.min_score));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn defaults_match_reference_behavior() {
        let config = RecommendConfig::default();
        assert_eq!(config.top_n, 2);
        assert_eq!(config.min_score, 0.0);
        assert_eq!(config.scoring, ScoringMode::Sequential);
    }

    #[test]
    fn reads_prefixed_vars() {
        let config = RecommendConfig::from_vars(vars(&[
            ("RECOMMEND_TOP_N", "5"),
            ("RECOMMEND_SCORING", "parallel"),
            ("UNRELATED", "x"),
        ]))
        .unwrap();
        assert_eq!(config.top_n, 5);
        assert_eq!(config.min_score, 0.0);
        assert_eq!(config.scoring, ScoringMode::Parallel);
    }

    #[test]
    fn empty_env_gives_defaults() {
        let config = RecommendConfig::from_vars(Vec::new()).unwrap();
        assert_eq!(config, RecommendConfig::default());
    }

    #[test]
    fn rejects_bad_values() {
        let err = RecommendConfig::from_vars(vars(&[("RECOMMEND_TOP_N", "many")])).unwrap_err();
        assert!(err.to_string().starts_with("Failed to load config"));
    }

    #[test]
    fn rejects_negative_or_non_finite_min_score() {
        for value in ["-1", "-0.5", "NaN", "inf"] {
            let err = RecommendConfig::from_vars(vars(&[("RECOMMEND_MIN_SCORE", value)])).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidMinScore(_)), "value={value}");
        }
        let config = RecommendConfig::from_vars(vars(&[("RECOMMEND_MIN_SCORE", "0.25")])).unwrap();
        assert_eq!(config.min_score, 0.25);
    }
}
