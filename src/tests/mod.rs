//! Test modules for the prefix index.
//!
//! This module contains crate-internal test suites:
//! - Configuration loading and validation
//! - Error conversion and display
//! - Property-based tests of the trie engine using proptest
//! - Shared strategies and fixtures

pub mod error_tests;
pub mod prefix_trie_property_tests;

pub use test_utils::{key_set_strategy, key_strategy, TestFixture};
