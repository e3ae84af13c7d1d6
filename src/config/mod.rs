//! Configuration models for scheduling policies.

pub mod policy;

pub use policy::{PolicyConfig, SchedulingConfig};
