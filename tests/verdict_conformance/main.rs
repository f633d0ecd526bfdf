//! Conformance suite for the public Verdict API
//!
//! Exercises the re-exported types the way a downstream crate would.

mod common;

mod attempt_tests;
mod guard_tests;
mod one_of_tests;
mod outcome_scenarios;
mod property_tests;
