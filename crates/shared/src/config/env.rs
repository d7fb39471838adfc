use anyhow::{Context, Result, anyhow};
use std::{collections::HashMap, fmt::Display, str::FromStr};

/// Source of configuration values. `from_env` reads the process
/// environment; `from_pairs` is a fixed map.
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    fixed: Option<HashMap<String, String>>,
}

impl EnvSource {
    pub fn from_env() -> Self {
        Self { fixed: None }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fixed: Some(
                pairs
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    pub fn optional(&self, key: &str) -> Option<String> {
        let value = match &self.fixed {
            Some(map) => map.get(key).cloned(),
            None => std::env::var(key).ok(),
        };
        value.filter(|v| !v.trim().is_empty())
    }

    pub fn required(&self, key: &str) -> Result<String> {
        self.optional(key)
            .with_context(|| format!("Missing environment variable: {key}"))
    }

    pub fn or_default(&self, key: &str, default: &str) -> String {
        self.optional(key).unwrap_or_else(|| default.to_string())
    }

    pub fn parse_or<T>(&self, key: &str, default: T) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        match self.optional(key) {
            Some(raw) => raw
                .parse::<T>()
                .map_err(|e| anyhow!("Unable to parse {key}='{raw}': {e}")),
            None => Ok(default),
        }
    }

    pub fn parse_required<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let raw = self.required(key)?;
        raw.parse::<T>()
            .map_err(|e| anyhow!("Unable to parse {key}='{raw}': {e}"))
    }

    pub fn flag(&self, key: &str, default: bool) -> Result<bool> {
        match self.optional(key).as_deref() {
            None => Ok(default),
            Some("true") | Some("1") => Ok(true),
            Some("false") | Some("0") => Ok(false),
            Some(other) => Err(anyhow!("{key} must be 'true' or 'false', got '{other}'")),
        }
    }
}
