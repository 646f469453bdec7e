//! HTTP API: server, routing, and request/response mapping for base items.

pub mod app;
pub mod config;
pub mod middleware;
