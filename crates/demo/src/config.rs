//! Demo configuration, read from the environment.

use anyhow::{Context, bail};

use stockroom_inventory::DEFAULT_SPARSE_THRESHOLD;

pub const SPARSE_THRESHOLD_ENV: &str = "STOCKROOM_SPARSE_THRESHOLD";
pub const LOW_STOCK_THRESHOLD_ENV: &str = "STOCKROOM_LOW_STOCK_THRESHOLD";
pub const OUTPUT_ENV: &str = "STOCKROOM_OUTPUT";

const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 3;

/// How reports are written to stdout.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub sparse_threshold: i64,
    pub low_stock_threshold: i64,
    pub output: OutputFormat,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            sparse_threshold: DEFAULT_SPARSE_THRESHOLD,
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            output: OutputFormat::Text,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; unset keys fall back to defaults,
    /// malformed values are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let sparse_threshold = match lookup(SPARSE_THRESHOLD_ENV) {
            Some(raw) => parse_threshold(SPARSE_THRESHOLD_ENV, &raw)?,
            None => defaults.sparse_threshold,
        };
        let low_stock_threshold = match lookup(LOW_STOCK_THRESHOLD_ENV) {
            Some(raw) => parse_threshold(LOW_STOCK_THRESHOLD_ENV, &raw)?,
            None => defaults.low_stock_threshold,
        };
        let output = match lookup(OUTPUT_ENV) {
            Some(raw) => parse_output(&raw)?,
            None => defaults.output,
        };

        Ok(Self {
            sparse_threshold,
            low_stock_threshold,
            output,
        })
    }
}

fn parse_threshold(key: &str, raw: &str) -> anyhow::Result<i64> {
    raw.trim()
        .parse::<i64>()
        .with_context(|| format!("{key} must be an integer, got {raw:?}"))
}

fn parse_output(raw: &str) -> anyhow::Result<OutputFormat> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => bail!("{OUTPUT_ENV} must be `text` or `json`, got {other:?}"),
    }
}
