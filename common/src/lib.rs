//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod search_const;
pub mod search_query;
pub mod search_request;
pub mod search_response;
pub mod search_result;
pub mod search_fetch;
pub mod normalize;
pub mod key_value_store;
pub mod annotations;
pub mod preferences;
pub mod view_model;
