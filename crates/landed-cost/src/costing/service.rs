use tracing::{debug, warn};

use super::domain::{
    DeclarationBreakdown, DeclarationBreakdownRequest, DeclarationVarianceRequest,
};
use crate::calculations::{
    allocate_items, calculate_all_costs_with_rate, calculate_item_costs, CostVarianceReport,
    DeclarationCostInputs, DeclarationCostResult, InputError, ItemCostInputs, ItemCostResult,
    VarianceInputs, VarianceResult, DEFAULT_SALES_TAX_RATE,
};
use crate::config::CostingConfig;

/// Sales tax policy applied to declaration breakdowns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxPolicy {
    pub sales_tax_rate: f64,
}

impl Default for TaxPolicy {
    fn default() -> Self {
        Self {
            sales_tax_rate: DEFAULT_SALES_TAX_RATE,
        }
    }
}

impl From<&CostingConfig> for TaxPolicy {
    fn from(config: &CostingConfig) -> Self {
        Self {
            sales_tax_rate: config.sales_tax_rate,
        }
    }
}

/// Service validating cost requests before running the calculator.
///
/// Holds no mutable state; share it behind an `Arc` across handlers.
#[derive(Debug, Clone, Default)]
pub struct LandedCostService {
    policy: TaxPolicy,
}

impl LandedCostService {
    pub fn new(policy: TaxPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> TaxPolicy {
        self.policy
    }

    /// Cost breakdown for a single declaration.
    pub fn declaration_costs(
        &self,
        inputs: &DeclarationCostInputs,
    ) -> Result<DeclarationCostResult, CostingError> {
        inputs.validate()?;
        let result = calculate_all_costs_with_rate(inputs, self.policy.sales_tax_rate);
        result.ensure_finite()?;
        debug!(
            fob_value_jod = result.fob_value_jod,
            total_customs_and_taxes = result.total_customs_and_taxes,
            total_landed_cost = result.total_landed_cost,
            "declaration costs calculated"
        );
        Ok(result)
    }

    /// Allocation of already-stored declaration totals onto one item.
    pub fn item_costs(&self, inputs: &ItemCostInputs) -> Result<ItemCostResult, CostingError> {
        inputs.validate()?;
        let result = calculate_item_costs(inputs);
        result.ensure_finite()?;
        debug!(
            item_fob_value_jod = result.item_fob_value_jod,
            item_expenses_share = result.item_expenses_share,
            unit_cost = result.unit_cost,
            "item costs calculated"
        );
        Ok(result)
    }

    /// Declaration totals plus the allocation of every submitted item.
    pub fn breakdown(
        &self,
        request: &DeclarationBreakdownRequest,
    ) -> Result<DeclarationBreakdown, CostingError> {
        let declaration = self.declaration_costs(&request.declaration)?;

        for item in &request.items {
            item.validate().map_err(|source| CostingError::InvalidItem {
                reference: item.reference.clone(),
                source,
            })?;
        }

        let allocation = allocate_items(&declaration, &request.items);
        for item in &allocation.items {
            item.costs.ensure_finite().map_err(|source| CostingError::InvalidItem {
                reference: item.reference.clone(),
                source,
            })?;
        }
        allocation.ensure_finite()?;
        if !allocation.is_reconciled {
            warn!(
                items = allocation.items.len(),
                allocated_percentage = allocation.allocated_percentage,
                unallocated_expenses = allocation.unallocated_expenses,
                "item allocation does not reconcile with declaration customs total"
            );
        }

        Ok(DeclarationBreakdown {
            declaration,
            allocation,
        })
    }

    pub fn variance(&self, inputs: &VarianceInputs) -> Result<VarianceResult, CostingError> {
        inputs.validate()?;
        let result = VarianceResult::from(*inputs);
        result.ensure_finite()?;
        Ok(result)
    }

    /// Line-by-line variance between post-clearance and estimated declarations.
    pub fn declaration_variance(
        &self,
        request: &DeclarationVarianceRequest,
    ) -> Result<CostVarianceReport, CostingError> {
        let actual = self.declaration_costs(&request.actual)?;
        let estimated = self.declaration_costs(&request.estimated)?;
        let report = CostVarianceReport::between(&actual, &estimated);
        for entry in &report.lines {
            entry.result.ensure_finite()?;
        }
        debug!(lines = report.lines.len(), "declaration variance calculated");
        Ok(report)
    }
}

/// Error raised by the cost service.
#[derive(Debug, thiserror::Error)]
pub enum CostingError {
    #[error(transparent)]
    Invalid(#[from] InputError),
    #[error("item {reference}: {source}")]
    InvalidItem {
        reference: String,
        #[source]
        source: InputError,
    },
}

impl CostingError {
    /// Wire name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            CostingError::Invalid(error) => error.field(),
            CostingError::InvalidItem { source, .. } => source.field(),
        }
    }
}
