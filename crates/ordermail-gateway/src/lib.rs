//! # OrderMail Gateway
//! Minimal HTTP surface: a liveness acknowledgment for the hosting
//! platform, a health endpoint, and the inbound route the change feed
//! pushes to.

pub mod routes;
pub mod server;

pub use server::{AppState, build_router, start};
