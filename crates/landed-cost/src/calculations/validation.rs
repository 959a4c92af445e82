//! Caller-side checks for calculator inputs.
//!
//! The calculator accepts any float; request handlers reject negative amounts,
//! non-finite numbers and non-positive exchange rates before calling it.
//! Finite inputs can still overflow inside a step, so results are checked too.

use super::allocation::{AllocationReport, LineItem};
use super::declaration::{DeclarationCostInputs, DeclarationCostResult};
use super::item::{ItemCostInputs, ItemCostResult};
use super::variance::{VarianceInputs, VarianceResult};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
    #[error("{field} must not be negative")]
    Negative { field: &'static str },
    #[error("{field} must be greater than zero")]
    NonPositive { field: &'static str },
    #[error("{field} is out of range for the submitted figures")]
    OutOfRange { field: &'static str },
}

impl InputError {
    /// Wire name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            InputError::NotFinite { field }
            | InputError::Negative { field }
            | InputError::NonPositive { field }
            | InputError::OutOfRange { field } => field,
        }
    }
}

fn finite(field: &'static str, value: f64) -> Result<f64, InputError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InputError::NotFinite { field })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), InputError> {
    if finite(field, value)? < 0.0 {
        return Err(InputError::Negative { field });
    }
    Ok(())
}

fn positive(field: &'static str, value: f64) -> Result<(), InputError> {
    if finite(field, value)? <= 0.0 {
        return Err(InputError::NonPositive { field });
    }
    Ok(())
}

impl DeclarationCostInputs {
    pub fn validate(&self) -> Result<(), InputError> {
        non_negative("fobValueForeign", self.fob_value_foreign)?;
        positive("exchangeRate", self.exchange_rate)?;
        non_negative("freightCost", self.freight_cost)?;
        non_negative("insuranceCost", self.insurance_cost)?;
        non_negative("customsDuty", self.customs_duty)?;
        non_negative("additionalFees", self.additional_fees)?;
        non_negative("customsServiceFee", self.customs_service_fee)?;
        non_negative("penalties", self.penalties)
    }
}

impl ItemCostInputs {
    pub fn validate(&self) -> Result<(), InputError> {
        non_negative("fobValueForeign", self.fob_value_foreign)?;
        positive("exchangeRate", self.exchange_rate)?;
        non_negative("quantity", self.quantity)?;
        non_negative("totalFobValueJod", self.total_fob_value_jod)?;
        non_negative("totalCustomsAndTaxes", self.total_customs_and_taxes)
    }
}

impl LineItem {
    pub fn validate(&self) -> Result<(), InputError> {
        non_negative("fobValueForeign", self.fob_value_foreign)?;
        positive("exchangeRate", self.exchange_rate)?;
        non_negative("quantity", self.quantity)
    }
}

impl VarianceInputs {
    /// Credit notes make negative figures legitimate, so only finiteness is checked.
    pub fn validate(&self) -> Result<(), InputError> {
        finite("actualValue", self.actual_value)?;
        finite("estimatedValue", self.estimated_value)?;
        Ok(())
    }
}

fn in_range(field: &'static str, value: f64) -> Result<(), InputError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InputError::OutOfRange { field })
    }
}

impl DeclarationCostResult {
    /// Rejects breakdowns where a step overflowed to infinity or NaN.
    pub fn ensure_finite(&self) -> Result<(), InputError> {
        in_range("fobValueJod", self.fob_value_jod)?;
        in_range("freightAndInsurance", self.freight_and_insurance)?;
        in_range("taxableValue", self.taxable_value)?;
        in_range("salesTax", self.sales_tax)?;
        in_range("totalCustomsAndTaxes", self.total_customs_and_taxes)?;
        in_range("totalLandedCost", self.total_landed_cost)?;
        in_range("additionalExpensesRatio", self.additional_expenses_ratio)
    }
}

impl ItemCostResult {
    pub fn ensure_finite(&self) -> Result<(), InputError> {
        in_range("itemFobValueJod", self.item_fob_value_jod)?;
        in_range("itemValuePercentage", self.item_value_percentage)?;
        in_range("itemExpensesShare", self.item_expenses_share)?;
        in_range("itemTotalCost", self.item_total_cost)?;
        in_range("unitCost", self.unit_cost)
    }
}

impl AllocationReport {
    /// Checks the summed totals; items are checked one by one by the caller.
    pub fn ensure_finite(&self) -> Result<(), InputError> {
        in_range("allocatedPercentage", self.allocated_percentage)?;
        in_range("allocatedExpenses", self.allocated_expenses)?;
        in_range("unallocatedExpenses", self.unallocated_expenses)
    }
}

impl VarianceResult {
    pub fn ensure_finite(&self) -> Result<(), InputError> {
        in_range("variance", self.variance)?;
        in_range("variancePercentage", self.variance_percentage)
    }
}
