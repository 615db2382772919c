//! Deliberately vulnerable web application for security training.
//!
//! `/login` builds its SQL by string concatenation, `/search` reflects input
//! without escaping, and `/brute-force` never throttles. None of this is to be
//! fixed; it is what the application exists to demonstrate.

#[macro_use]
extern crate actix_web;

pub mod api;
pub mod config;
pub mod controllers;
pub mod database;
pub mod entities;
pub mod errors;
pub mod logging;
pub mod middlewares;
pub mod models;
pub mod requests;
pub mod responses;
pub mod router;
pub mod server;
pub mod services;
pub mod views;

// Testing utilities (always available for integration tests)
pub mod testing;

pub use crate::config::AppConfig;
pub use database::Store;
pub use errors::Error;
pub use middlewares::RequestLog;
