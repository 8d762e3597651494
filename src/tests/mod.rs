//! Crate-level tests, grouped by concern

mod boundary_tests;
pub mod test_utils;
mod timing_tests;
