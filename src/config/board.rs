//! Job and board configuration structures.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::AppResult;
use crate::util::JobPriority;

/// Attempts a job gets before its attempt gate closes.
pub const DEFAULT_ATTEMPT_LIMIT: u32 = 5;

const ENV_MAX_CASCADE_DEPTH: &str = "COLONY_JOBS_MAX_CASCADE_DEPTH";
const ENV_STRICT_PREREQUISITES: &str = "COLONY_JOBS_STRICT_PREREQUISITES";
const ENV_AUDIT_CAPACITY: &str = "COLONY_JOBS_AUDIT_CAPACITY";

/// Construction-time settings for a single job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobConfig {
    /// Human-readable job name.
    pub name: String,
    /// Initial priority.
    #[serde(default)]
    pub priority: JobPriority,
    /// Spatial zone the job belongs to.
    #[serde(default)]
    pub zone: i32,
    /// Low-skill work flag. Fixed for the job's lifetime.
    #[serde(default)]
    pub menial: bool,
    /// Attempts allowed before the attempt gate closes.
    #[serde(default = "default_attempt_limit")]
    pub attempt_limit: u32,
    /// Synthetic sub-job hidden from top-level scheduling.
    #[serde(default)]
    pub internal: bool,
}

const fn default_attempt_limit() -> u32 {
    DEFAULT_ATTEMPT_LIMIT
}

impl JobConfig {
    /// Medium-priority, non-menial job in zone 0 with the default attempt limit.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            priority: JobPriority::default(),
            zone: 0,
            menial: false,
            attempt_limit: DEFAULT_ATTEMPT_LIMIT,
            internal: false,
        }
    }

    /// Set the initial priority.
    #[must_use]
    pub fn with_priority(mut self, priority: JobPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the zone.
    #[must_use]
    pub fn with_zone(mut self, zone: i32) -> Self {
        self.zone = zone;
        self
    }

    /// Mark the job as menial.
    #[must_use]
    pub fn with_menial(mut self, menial: bool) -> Self {
        self.menial = menial;
        self
    }

    /// Set the attempt limit.
    #[must_use]
    pub fn with_attempt_limit(mut self, attempt_limit: u32) -> Self {
        self.attempt_limit = attempt_limit;
        self
    }

    /// Mark the job as an internal sub-job.
    #[must_use]
    pub fn with_internal(mut self, internal: bool) -> Self {
        self.internal = internal;
        self
    }

    /// Validate job settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".into());
        }
        if self.attempt_limit == 0 {
            return Err("attempt_limit must be greater than 0".into());
        }
        Ok(())
    }
}

/// Board-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Deepest parent chain a failure cascade will walk.
    #[serde(default = "default_max_cascade_depth")]
    pub max_cascade_depth: usize,
    /// Treat failed prerequisites as unsatisfied instead of completed.
    #[serde(default)]
    pub strict_prerequisites: bool,
    /// Events kept by the default in-memory audit sink.
    #[serde(default = "default_audit_capacity")]
    pub audit_capacity: usize,
}

const fn default_max_cascade_depth() -> usize {
    64
}

const fn default_audit_capacity() -> usize {
    1024
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            max_cascade_depth: default_max_cascade_depth(),
            strict_prerequisites: false,
            audit_capacity: default_audit_capacity(),
        }
    }
}

impl BoardConfig {
    /// Validate board settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_cascade_depth == 0 {
            return Err("max_cascade_depth must be greater than 0".into());
        }
        if self.audit_capacity == 0 {
            return Err("audit_capacity must be greater than 0".into());
        }
        Ok(())
    }

    /// Parse board configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read and validate a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading board config {}", path.display()))?;
        Self::from_json_str(&raw)
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("loading board config {}", path.display()))
    }

    /// Defaults overridden by `COLONY_JOBS_*` environment variables.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    pub fn from_env() -> Result<Self, String> {
        let _ = dotenvy::dotenv();
        let mut cfg = Self::default();
        if let Some(depth) = env_parse::<usize>(ENV_MAX_CASCADE_DEPTH)? {
            cfg.max_cascade_depth = depth;
        }
        if let Some(strict) = env_parse::<bool>(ENV_STRICT_PREREQUISITES)? {
            cfg.strict_prerequisites = strict;
        }
        if let Some(capacity) = env_parse::<usize>(ENV_AUDIT_CAPACITY)? {
            cfg.audit_capacity = capacity;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

fn env_parse<T>(key: &str) -> Result<Option<T>, String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| format!("{key}: {e}")),
        Err(_) => Ok(None),
    }
}
