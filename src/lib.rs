//! # Interview Slotting
//!
//! Interview scheduling for a job board: assign accepted applicants to
//! interview slots and interviewers, and estimate how many days a panel
//! needs to get through everyone.
//!
//! ## Components
//!
//! - **Slot assignment engine** ([`core::assign_slots`]): each applicant gets
//!   their own earliest available slot and the interviewer with the smallest
//!   committed load, lowest pool position winning ties. Applicants are
//!   processed strictly in the order given. The heuristic is greedy and does not
//!   search for a globally optimal matching.
//! - **Minimum-days estimator** ([`core::minimum_days`]): smallest number of
//!   days such that `days * interviewers * slots_per_day` covers every
//!   applicant, found by binary search over the feasibility predicate.
//! - **Scheduling service** ([`runtime::SchedulingService`]): enforces the
//!   minimum panel size, selects eligible applications, writes outcomes back
//!   to an [`core::ApplicationStore`], sends [`core::ScheduleNotice`]s through
//!   a [`core::Notifier`] and reports run statistics. Before a run it invites
//!   accepted applicants to pick slots and validates what they submit against
//!   the job's slot catalog ([`core::submit_availability`]).
//!
//! Both algorithms are pure and synchronous; every run owns its interviewer
//! loads and nothing is shared between runs. Interviewers serving several
//! jobs can therefore be double-booked across jobs.
//!
//! ## Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use interview_slotting::core::{assign_slots, minimum_days, Applicant, Interviewer};
//!
//! let nine = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap();
//! let ten = Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap();
//! let applicants: Vec<_> = (0..5)
//!     .map(|i| Applicant::new(format!("a{i}"), vec![ten, nine]))
//!     .collect();
//! let pool = vec![
//!     Interviewer::new("i0", "Ada", "ada@example.com"),
//!     Interviewer::new("i1", "Grace", "grace@example.com"),
//! ];
//!
//! let plan = assign_slots(&applicants, &pool, 30).unwrap();
//! assert_eq!(plan.scheduled_count(), 5);
//! assert_eq!(plan.loads()[0].minutes, 90);
//! assert_eq!(plan.loads()[1].minutes, 60);
//!
//! assert_eq!(minimum_days(100, 3, 5, 30).unwrap(), 7);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core scheduling algorithms, domain records and collaborator traits.
pub mod core;
/// Configuration models for scheduling policies.
pub mod config;
/// Builders to construct scheduling services from configuration.
pub mod builders;
/// Infrastructure adapters for stores, directories and notifiers.
pub mod infra;
/// Service layer and API surface.
pub mod runtime;
/// Shared utilities.
pub mod util;
