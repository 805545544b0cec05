//! Config module tests
//!
//! - Stylesheet loading and structural checks
//! - Default window settings

#[cfg(test)]
mod stylesheet_tests;
