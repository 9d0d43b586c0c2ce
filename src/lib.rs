//! Non-conformance labor-cost analysis engine.
//!
//! This crate aggregates non-conformance records into per-role labor-cost
//! totals for the production and office departments, ranks the roles and
//! compares a period against the most recent earlier one.

#![warn(missing_docs)]

pub mod analysis;
pub mod api;
pub mod config;
pub mod error;
pub mod history;
pub mod models;
