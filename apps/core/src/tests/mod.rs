//! Test Module
//!
//! Crate-level tests for the support desk responder.
//!
//! ## Test Categories
//! - `brain_tests`: Rule ordering, keyword coverage and reply lookup
//! - `memory_tests`: Transcript ordering and rendering
//! - `config_tests`: Environment-driven demo configuration and log filters
//! - `integration_tests`: Full `Coordinator::ask` workflows

pub mod config_tests;
