use crate::cli::RunArgs;
use crate::error::{CliError, Result};
use gibbsmotif::engine::config as core_config;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialSearchSection {
    #[serde(rename = "motif-length")]
    motif_length: Option<usize>,
    iterations: Option<usize>,
    restarts: Option<usize>,
    seed: Option<u64>,
    #[serde(rename = "sequence-count")]
    sequence_count: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialSearchConfig {
    search: Option<PartialSearchSection>,
}

impl PartialSearchConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn merge_with_cli(mut self, args: &RunArgs) -> Result<core_config::SearchConfig> {
        self.apply_set_values(&args.set_values)?;
        let file = self.search.take().unwrap_or_default();

        let mut builder = core_config::SearchConfigBuilder::new()
            .seed(args.seed.or(file.seed))
            .sequence_count(args.sequence_count.or(file.sequence_count));

        if let Some(k) = args.motif_length.or(file.motif_length) {
            builder = builder.motif_length(k);
        }
        if let Some(n) = args.iterations.or(file.iterations) {
            builder = builder.iterations(n);
        }
        if let Some(r) = args.restarts.or(file.restarts) {
            builder = builder.restarts(r);
        }

        let config = builder.build().map_err(|e| CliError::Config(e.to_string()))?;
        debug!("Merged search configuration: {:?}", config);
        Ok(config)
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        if set_values.is_empty() {
            return Ok(());
        }
        for kv_pair in set_values {
            let (key, value_str) = kv_pair.split_once('=').ok_or_else(|| {
                CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                ))
            })?;
            let section = self.search.get_or_insert_with(Default::default);

            match key {
                "search.motif-length" => section.motif_length = Some(parse_value(key, value_str)?),
                "search.iterations" => section.iterations = Some(parse_value(key, value_str)?),
                "search.restarts" => section.restarts = Some(parse_value(key, value_str)?),
                "search.seed" => section.seed = Some(parse_value(key, value_str)?),
                "search.sequence-count" => {
                    section.sequence_count = Some(parse_value(key, value_str)?)
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

fn parse_value<T: FromStr>(key: &str, value_str: &str) -> Result<T> {
    value_str.trim().parse().map_err(|_| {
        CliError::Config(format!(
            "Invalid integer value for {}: {}",
            key, value_str
        ))
    })
}
