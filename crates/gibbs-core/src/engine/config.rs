use thiserror::Error;

pub const DEFAULT_ITERATIONS: usize = 100;
pub const DEFAULT_RESTARTS: usize = 20;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub motif_length: usize,           // k
    pub iterations: usize,             // N, Gibbs steps per restart
    pub restarts: usize,               // R
    pub seed: Option<u64>,             // Master seed; drawn from entropy when absent
    pub sequence_count: Option<usize>, // t; checked against the input when present
}

#[derive(Default)]
pub struct SearchConfigBuilder {
    motif_length: Option<usize>,
    iterations: Option<usize>,
    restarts: Option<usize>,
    seed: Option<u64>,
    sequence_count: Option<usize>,
}

impl SearchConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn motif_length(mut self, k: usize) -> Self {
        self.motif_length = Some(k);
        self
    }
    pub fn iterations(mut self, n: usize) -> Self {
        self.iterations = Some(n);
        self
    }
    pub fn restarts(mut self, r: usize) -> Self {
        self.restarts = Some(r);
        self
    }
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
    pub fn sequence_count(mut self, t: Option<usize>) -> Self {
        self.sequence_count = t;
        self
    }

    pub fn build(self) -> Result<SearchConfig, ConfigError> {
        let motif_length = self
            .motif_length
            .ok_or(ConfigError::MissingParameter("motif_length"))?;
        let config = SearchConfig {
            motif_length,
            iterations: self.iterations.unwrap_or(DEFAULT_ITERATIONS),
            restarts: self.restarts.unwrap_or(DEFAULT_RESTARTS),
            seed: self.seed,
            sequence_count: self.sequence_count,
        };

        for (name, value) in [
            ("motif_length", Some(config.motif_length)),
            ("iterations", Some(config.iterations)),
            ("restarts", Some(config.restarts)),
            ("sequence_count", config.sequence_count),
        ] {
            if value == Some(0) {
                return Err(ConfigError::InvalidParameter {
                    name,
                    reason: "must be a positive integer".to_string(),
                });
            }
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_applies_reference_defaults() {
        let config = SearchConfigBuilder::new().motif_length(8).build().unwrap();
        assert_eq!(config.motif_length, 8);
        assert_eq!(config.iterations, 100);
        assert_eq!(config.restarts, 20);
        assert_eq!(config.seed, None);
        assert_eq!(config.sequence_count, None);
    }

    #[test]
    fn build_keeps_explicit_values() {
        let config = SearchConfigBuilder::new()
            .motif_length(5)
            .iterations(42)
            .restarts(3)
            .seed(Some(7))
            .sequence_count(Some(4))
            .build()
            .unwrap();
        assert_eq!(
            config,
            SearchConfig {
                motif_length: 5,
                iterations: 42,
                restarts: 3,
                seed: Some(7),
                sequence_count: Some(4),
            }
        );
    }

    #[test]
    fn build_requires_motif_length() {
        assert_eq!(
            SearchConfigBuilder::new().build(),
            Err(ConfigError::MissingParameter("motif_length"))
        );
    }

    #[test]
    fn build_rejects_zero_values() {
        let err = SearchConfigBuilder::new()
            .motif_length(4)
            .restarts(0)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidParameter { name: "restarts", .. }
        ));

        let err = SearchConfigBuilder::new().motif_length(0).build().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidParameter {
                name: "motif_length",
                ..
            }
        ));
    }
}
