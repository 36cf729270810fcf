//! HTTP surface of the case-management service.
//!
//! Exposes the router builder and supporting modules so integration
//! tests can construct the exact application the binary serves.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
