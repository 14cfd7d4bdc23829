//! Server side of the search page: forwards requests to the configured engine.

pub mod api;
pub mod config;
pub mod engine_utils;
