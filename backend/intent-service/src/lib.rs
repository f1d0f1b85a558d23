//! Buyer intent and seller presence service
//!
//! Persists what buyers are looking for and whether sellers are
//! currently reachable, and keeps the same WebSocket lifecycle as the
//! notification service for connected seller dashboards.

pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
