//! Unit test suite entry point.

mod config_tests;
mod sort_tests;
mod tree_tests;
