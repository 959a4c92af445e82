//! Validated cost service and its JSON routes.
//!
//! [`LandedCostService`] validates request payloads, applies the configured
//! [`TaxPolicy`] and delegates to the pure functions in
//! [`crate::calculations`]. [`costing_router`] exposes it over HTTP.

pub mod domain;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    DeclarationBreakdown, DeclarationBreakdownRequest, DeclarationVarianceRequest,
};
pub use router::costing_router;
pub use service::{CostingError, LandedCostService, TaxPolicy};
