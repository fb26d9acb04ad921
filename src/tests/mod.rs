//! Unit tests for the tracker core.

mod domain_tests;
mod service_tests;
