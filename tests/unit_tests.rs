//! Entry point for the component-level unit tests.

mod unit;
