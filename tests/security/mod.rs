//! Security tests module
//!
//! A failing test here means a weakness was accidentally fixed.

pub mod sql_injection_test;
