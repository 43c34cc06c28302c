//! CLI parameter reader.
//!
//! Parses `--param key=value[,key=value...]` inputs into a lookup table.

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use crate::error::{ParamError, Result};

/// Where a parameter came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamSource {
    Cli,
}

/// A single parsed parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CliParam {
    pub key: String,
    pub value: String,
    #[serde(rename = "type")]
    pub source: ParamSource,
}

/// Parameters keyed by name. Later duplicates overwrite earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CliParams {
    params: BTreeMap<String, CliParam>,
}

impl CliParams {
    /// Parse raw `--param` values.
    ///
    /// Each value may carry several comma-separated `key=value` pairs. Pairs
    /// are split on the first `=` and the value loses trailing whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ParamError::Malformed` for a pair without `=`.
    pub fn parse<S: AsRef<str>>(raw: &[S]) -> Result<Self> {
        let mut params = BTreeMap::new();

        for entry in raw {
            for pair in entry.as_ref().split(',') {
                let (key, value) = pair
                    .split_once('=')
                    .ok_or_else(|| ParamError::Malformed(pair.to_string()))?;

                params.insert(
                    key.to_string(),
                    CliParam {
                        key: key.to_string(),
                        value: value.trim_end().to_string(),
                        source: ParamSource::Cli,
                    },
                );
            }
        }

        debug!(count = params.len(), "cli params parsed");
        Ok(Self { params })
    }

    /// Look up a parameter by key.
    pub fn get(&self, key: &str) -> Option<&CliParam> {
        self.params.get(key)
    }

    /// Whether a key was passed at all, regardless of its value.
    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}
