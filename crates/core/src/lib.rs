//! Domain types and pure logic for the case-management service.
//!
//! This crate has no I/O and no internal dependencies so it can be
//! used by the store, the API layer, and any future CLI tooling.

pub mod case;
pub mod error;
pub mod evidence;
pub mod query;
pub mod stats;
pub mod submission;
pub mod tags;
pub mod types;
pub mod wizard;
