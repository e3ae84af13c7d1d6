//! Scheduling policy configuration.

use std::collections::HashMap;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::AppResult;

/// Environment variable overriding [`PolicyConfig::min_interviewers`].
pub const ENV_MIN_INTERVIEWERS: &str = "INTERVIEW_MIN_INTERVIEWERS";
/// Environment variable overriding [`PolicyConfig::interview_duration_minutes`].
pub const ENV_DURATION_MINUTES: &str = "INTERVIEW_DURATION_MINUTES";
/// Environment variable overriding [`PolicyConfig::notify_timeout_secs`].
pub const ENV_NOTIFY_TIMEOUT_SECS: &str = "INTERVIEW_NOTIFY_TIMEOUT_SECS";

const fn default_min_interviewers() -> usize {
    1
}

const fn default_duration_minutes() -> u32 {
    45
}

const fn default_notify_timeout_secs() -> u64 {
    30
}

/// Policy applied to one job's scheduling runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Smallest interviewer pool a run may start with.
    #[serde(default = "default_min_interviewers")]
    pub min_interviewers: usize,
    /// Length of one interview in minutes.
    #[serde(default = "default_duration_minutes")]
    pub interview_duration_minutes: u32,
    /// Upper bound for delivering one notice, in seconds.
    #[serde(default = "default_notify_timeout_secs")]
    pub notify_timeout_secs: u64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            min_interviewers: default_min_interviewers(),
            interview_duration_minutes: default_duration_minutes(),
            notify_timeout_secs: default_notify_timeout_secs(),
        }
    }
}

impl PolicyConfig {
    /// Validate policy values.
    pub fn validate(&self) -> Result<(), String> {
        if self.min_interviewers == 0 {
            return Err("min_interviewers must be greater than 0".into());
        }
        if self.interview_duration_minutes == 0 {
            return Err("interview_duration_minutes must be greater than 0".into());
        }
        if self.notify_timeout_secs == 0 {
            return Err("notify_timeout_secs must be greater than 0".into());
        }
        Ok(())
    }
}

/// Root scheduling configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulingConfig {
    /// Policy for jobs without an override.
    #[serde(default)]
    pub defaults: PolicyConfig,
    /// Per-job overrides keyed by job id.
    #[serde(default)]
    pub jobs: HashMap<String, PolicyConfig>,
}

impl SchedulingConfig {
    /// Validate the defaults and every override.
    pub fn validate(&self) -> Result<(), String> {
        self.defaults
            .validate()
            .map_err(|e| format!("defaults invalid: {e}"))?;
        for (job, policy) in &self.jobs {
            policy
                .validate()
                .map_err(|e| format!("job `{job}` invalid: {e}"))?;
        }
        Ok(())
    }

    /// Policy for a job, falling back to the defaults.
    pub fn policy_for(&self, job_id: &str) -> &PolicyConfig {
        self.jobs.get(job_id).unwrap_or(&self.defaults)
    }

    /// Parse scheduling configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Build the configuration from the process environment, loading `.env` first if present.
    ///
    /// Unset variables keep their defaults; per-job overrides are not read from the environment.
    ///
    /// # Errors
    ///
    /// Fails when a variable is set but not a number, or the result does not validate.
    pub fn from_env() -> AppResult<Self> {
        let _ = dotenvy::dotenv();
        let mut defaults = PolicyConfig::default();

        if let Ok(raw) = std::env::var(ENV_MIN_INTERVIEWERS) {
            defaults.min_interviewers = raw
                .trim()
                .parse()
                .with_context(|| format!("{ENV_MIN_INTERVIEWERS}=`{raw}` is not a number"))?;
        }
        if let Ok(raw) = std::env::var(ENV_DURATION_MINUTES) {
            defaults.interview_duration_minutes = raw
                .trim()
                .parse()
                .with_context(|| format!("{ENV_DURATION_MINUTES}=`{raw}` is not a number"))?;
        }
        if let Ok(raw) = std::env::var(ENV_NOTIFY_TIMEOUT_SECS) {
            defaults.notify_timeout_secs = raw
                .trim()
                .parse()
                .with_context(|| format!("{ENV_NOTIFY_TIMEOUT_SECS}=`{raw}` is not a number"))?;
        }

        let cfg = Self {
            defaults,
            jobs: HashMap::new(),
        };
        cfg.validate().map_err(anyhow::Error::msg)?;
        tracing::debug!(?cfg, "scheduling configuration loaded from environment");
        Ok(cfg)
    }
}
