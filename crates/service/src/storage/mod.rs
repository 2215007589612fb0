//! Storage abstractions for service layer
//!
//! Reusable file-backed stores for state small enough to live in one JSON document.

pub mod json_list_store;
