//! Builders to construct scheduling services from configuration.

pub mod service_builder;

pub use service_builder::{build_service_for_job, ServiceBuilder};
