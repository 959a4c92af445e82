//! Landed-cost arithmetic.
//!
//! Every function here is total: zero denominators produce `0.0` instead of an
//! error, and nothing validates its inputs. Callers that accept user input run
//! the checks in [`validation`] first.
//!
//! Amounts are binary64 floats on purpose. Each step rounds with
//! [`round_to_decimals`] and the next step consumes the rounded value, so the
//! order of operations in [`calculate_all_costs`] and [`calculate_item_costs`]
//! is part of the contract.

mod allocation;
mod declaration;
mod item;
mod rounding;
pub mod validation;
mod variance;

pub use allocation::{
    allocate_items, AllocationReport, ItemAllocation, LineItem, RECONCILIATION_TOLERANCE,
};
pub use declaration::{
    calculate_additional_expenses_ratio, calculate_all_costs, calculate_all_costs_with_rate,
    calculate_fob_value_jod, calculate_freight_and_insurance, calculate_sales_tax,
    calculate_taxable_value, calculate_total_customs_and_taxes, calculate_total_landed_cost,
    DeclarationCostInputs, DeclarationCostResult, DEFAULT_SALES_TAX_RATE,
};
pub use item::{
    calculate_item_costs, calculate_item_expenses_share, calculate_item_total_cost,
    calculate_item_value_percentage, calculate_unit_cost, ItemCostInputs, ItemCostResult,
};
pub use rounding::{
    round_currency, round_percentage, round_to_decimals, CURRENCY_DECIMALS, PERCENTAGE_DECIMALS,
};
pub use validation::InputError;
pub use variance::{
    calculate_variance, calculate_variance_percentage, CostLine, CostLineVariance,
    CostVarianceReport, VarianceInputs, VarianceResult,
};
