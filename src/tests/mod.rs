//! Test Module
//!
//! Cross-module test suite for the UniConnect hub core.
//!
//! ## Test Categories
//! - `matcher_tests`: intent matching properties and rule-order pinning
//! - `chat_tests`: session log invariants
//! - `hub_tests`: hub orchestration with a mock responder
//! - `profile_tests`: profile store persistence round-trips
//! - `integration_tests`: full workflow integration tests
