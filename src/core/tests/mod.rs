//! Core module tests
//!
//! - Type tests (FormVisibility, SignupInput, LoginInput)

#[cfg(test)]
mod types_tests;
