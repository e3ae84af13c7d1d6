//! Interviewer directory backends.

pub mod memory;

pub use memory::InMemoryInterviewerDirectory;

use crate::core::{Interviewer, SchedulingError};

/// Per-company, ordered list of interviewers.
///
/// Order is insertion order; it becomes the pool order (and therefore the
/// tie-break order) of scheduling runs.
pub trait InterviewerDirectory: Send + Sync {
    /// Register an interviewer; e-mails are unique per company, ignoring case.
    fn add(&self, company: &str, interviewer: Interviewer)
        -> Result<Vec<Interviewer>, SchedulingError>;
    /// Interviewers of a company in pool order.
    fn list(&self, company: &str) -> Vec<Interviewer>;
    /// Remove an interviewer by e-mail, ignoring case.
    fn remove(&self, company: &str, email: &str) -> Result<Vec<Interviewer>, SchedulingError>;
}
