//! Location, weather, events and movie lookups served from a SQL cache that
//! sits in front of third-party HTTP APIs.
//!
//! Every resource kind follows the same cache-or-fetch rule (see
//! [`services::Resolver`]): rows already in the store are returned as they
//! are; otherwise the matching provider is called once, its response is
//! normalized into an internal record, persisted and returned.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod providers;
pub mod services;
