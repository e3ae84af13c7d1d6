//! Builders to construct scheduling services from configuration.

use crate::config::{PolicyConfig, SchedulingConfig};
use crate::core::{ApplicationStore, AuditSink, Notifier, Param, SchedulingError};
use crate::runtime::SchedulingService;

/// Step-wise construction of a [`SchedulingService`].
pub struct ServiceBuilder {
    name: String,
    policy: PolicyConfig,
    audit: Option<Box<dyn AuditSink>>,
}

impl ServiceBuilder {
    /// Start a builder with a service name and policy.
    pub fn new(name: impl Into<String>, policy: PolicyConfig) -> Self {
        Self {
            name: name.into(),
            policy,
            audit: None,
        }
    }

    /// Service name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Policy the service will run with.
    pub const fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    /// Record run events into this sink.
    #[must_use]
    pub fn with_audit(mut self, audit: Box<dyn AuditSink>) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Validate the policy and assemble the service.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulingError::InvalidParameter`] when the policy does not validate.
    pub fn build<S, N>(self, store: S, notifier: N) -> Result<SchedulingService<S, N>, SchedulingError>
    where
        S: ApplicationStore,
        N: Notifier,
    {
        self.policy
            .validate()
            .map_err(|e| SchedulingError::invalid(Param::Policy, format!("policy invalid: {e}")))?;
        let service = SchedulingService::new(self.name, self.policy, store, notifier);
        Ok(match self.audit {
            Some(audit) => service.with_audit(audit),
            None => service,
        })
    }
}

/// Build the service for one job, using its override or the defaults.
///
/// # Errors
///
/// Returns [`SchedulingError::InvalidParameter`] when the configuration does not validate.
pub fn build_service_for_job<S, N>(
    cfg: &SchedulingConfig,
    job_id: &str,
    store: S,
    notifier: N,
) -> Result<SchedulingService<S, N>, SchedulingError>
where
    S: ApplicationStore,
    N: Notifier,
{
    cfg.validate()
        .map_err(|e| SchedulingError::invalid(Param::Policy, format!("config invalid: {e}")))?;
    ServiceBuilder::new(job_id, cfg.policy_for(job_id).clone()).build(store, notifier)
}
