use std::env;
use std::time::Duration;

use crate::error::ConfigError;

const DEFAULT_SEQUENCE_START: i64 = 8;
const DEFAULT_LOOKUP_NAME: &str = "Matematicas";

#[derive(Debug, Clone)]
pub struct Config {
    /// First id assigned by the in-memory exam store
    pub sequence_start: i64,
    /// Delay applied to every exam listing
    pub list_latency: Duration,
    /// Exam looked up by the binary when no argument is given
    pub lookup_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sequence_start: DEFAULT_SEQUENCE_START,
            list_latency: Duration::ZERO,
            lookup_name: DEFAULT_LOOKUP_NAME.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let defaults = Self::default();

        let sequence_start = match lookup("EXAMS_SEQUENCE_START") {
            Some(value) => parse_positive("EXAMS_SEQUENCE_START", value)?,
            None => defaults.sequence_start,
        };
        let list_latency = match lookup("EXAMS_LIST_LATENCY_MS") {
            Some(value) => Duration::from_millis(parse_value("EXAMS_LIST_LATENCY_MS", value)?),
            None => defaults.list_latency,
        };

        Ok(Self {
            sequence_start,
            list_latency,
            lookup_name: lookup("EXAMS_LOOKUP_NAME").unwrap_or(defaults.lookup_name),
        })
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { key, value })
}

// Ids below 1 are rejected by the question store.
fn parse_positive(key: &'static str, value: String) -> Result<i64, ConfigError> {
    match parse_value(key, value.clone())? {
        n if n >= 1 => Ok(n),
        _ => Err(ConfigError::InvalidValue { key, value }),
    }
}
