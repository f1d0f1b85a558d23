//! Realtime buyer-seller notification service
//!
//! Relays buyer search interest to seller dashboards over WebSocket,
//! falling back to email when no seller is connected, and fans out
//! third-party property submissions the same way.

pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
