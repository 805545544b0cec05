//! UI tests
//!
//! Controller logic only; widget code needs a display server.

mod controller_tests;
