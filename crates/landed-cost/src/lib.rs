//! Landed-cost engine for customs declarations.
//!
//! [`calculations`] holds the pure arithmetic: declaration breakdowns, item
//! allocation and variance. [`costing`] wraps it in a validated service and an
//! axum router so the API binary can expose it over JSON.

pub mod calculations;
pub mod config;
pub mod costing;
pub mod error;
pub mod telemetry;
