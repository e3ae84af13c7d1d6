//! In-memory interviewer directory.

use std::collections::HashMap;

use parking_lot::RwLock;

use super::InterviewerDirectory;
use crate::core::{Interviewer, SchedulingError};

/// Directory kept in process memory, shared behind a read-write lock.
#[derive(Default)]
pub struct InMemoryInterviewerDirectory {
    companies: RwLock<HashMap<String, Vec<Interviewer>>>,
}

impl InMemoryInterviewerDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }
}

impl InterviewerDirectory for InMemoryInterviewerDirectory {
    fn add(
        &self,
        company: &str,
        mut interviewer: Interviewer,
    ) -> Result<Vec<Interviewer>, SchedulingError> {
        interviewer.email = interviewer.email.trim().to_lowercase();
        let mut companies = self.companies.write();
        let pool = companies.entry(company.to_string()).or_default();
        if pool.iter().any(|i| i.email == interviewer.email) {
            return Err(SchedulingError::DuplicateInterviewer(interviewer.email));
        }
        tracing::info!(company, email = %interviewer.email, "interviewer added");
        pool.push(interviewer);
        Ok(pool.clone())
    }

    fn list(&self, company: &str) -> Vec<Interviewer> {
        self.companies.read().get(company).cloned().unwrap_or_default()
    }

    fn remove(&self, company: &str, email: &str) -> Result<Vec<Interviewer>, SchedulingError> {
        let email = email.trim().to_lowercase();
        let mut companies = self.companies.write();
        let pool = companies
            .get_mut(company)
            .ok_or_else(|| SchedulingError::InterviewerNotFound(email.clone()))?;
        let before = pool.len();
        pool.retain(|i| i.email != email);
        if pool.len() == before {
            return Err(SchedulingError::InterviewerNotFound(email));
        }
        tracing::info!(company, email = %email, "interviewer removed");
        Ok(pool.clone())
    }
}
