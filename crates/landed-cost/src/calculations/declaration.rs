use super::rounding::{round_currency, round_percentage};
use serde::{Deserialize, Serialize};

/// Sales tax fraction applied when no rate is configured.
pub const DEFAULT_SALES_TAX_RATE: f64 = 0.16;

/// Raw figures for one customs declaration.
///
/// `fob_value_foreign` is in the invoice currency; every other amount is
/// already in local currency (JOD).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclarationCostInputs {
    pub fob_value_foreign: f64,
    pub exchange_rate: f64,
    pub freight_cost: f64,
    pub insurance_cost: f64,
    pub customs_duty: f64,
    #[serde(default)]
    pub additional_fees: f64,
    #[serde(default)]
    pub customs_service_fee: f64,
    #[serde(default)]
    pub penalties: f64,
}

/// Rounded cost breakdown for a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclarationCostResult {
    pub fob_value_jod: f64,
    pub freight_and_insurance: f64,
    pub taxable_value: f64,
    pub sales_tax: f64,
    pub total_customs_and_taxes: f64,
    pub total_landed_cost: f64,
    pub additional_expenses_ratio: f64,
}

pub fn calculate_fob_value_jod(fob_value_foreign: f64, exchange_rate: f64) -> f64 {
    round_currency(fob_value_foreign * exchange_rate)
}

pub fn calculate_freight_and_insurance(freight_cost: f64, insurance_cost: f64) -> f64 {
    round_currency(freight_cost + insurance_cost)
}

pub fn calculate_taxable_value(fob_value_jod: f64, freight_and_insurance: f64) -> f64 {
    round_currency(fob_value_jod + freight_and_insurance)
}

/// Sales tax on the taxable value plus customs duty.
///
/// Duty is part of the tax base. The base is rounded before the rate is
/// applied.
pub fn calculate_sales_tax(taxable_value: f64, customs_duty: f64, tax_rate: f64) -> f64 {
    let base_for_tax = round_currency(taxable_value + customs_duty);
    round_currency(base_for_tax * tax_rate)
}

pub fn calculate_total_customs_and_taxes(
    customs_duty: f64,
    sales_tax: f64,
    additional_fees: f64,
    customs_service_fee: f64,
    penalties: f64,
) -> f64 {
    round_currency(customs_duty + sales_tax + additional_fees + customs_service_fee + penalties)
}

pub fn calculate_total_landed_cost(
    fob_value_jod: f64,
    freight_and_insurance: f64,
    total_customs_and_taxes: f64,
) -> f64 {
    round_currency(fob_value_jod + freight_and_insurance + total_customs_and_taxes)
}

/// Customs and taxes as a percentage of the FOB value, `0.0` when there is no FOB value.
pub fn calculate_additional_expenses_ratio(
    total_customs_and_taxes: f64,
    fob_value_jod: f64,
) -> f64 {
    if fob_value_jod == 0.0 {
        return 0.0;
    }
    round_percentage(total_customs_and_taxes / fob_value_jod * 100.0)
}

/// Full breakdown at [`DEFAULT_SALES_TAX_RATE`].
pub fn calculate_all_costs(inputs: &DeclarationCostInputs) -> DeclarationCostResult {
    calculate_all_costs_with_rate(inputs, DEFAULT_SALES_TAX_RATE)
}

/// Full breakdown at an explicit sales tax rate.
///
/// Each step consumes the rounded result of the previous one; recomputing a
/// later figure from the raw inputs changes totals on some inputs.
pub fn calculate_all_costs_with_rate(
    inputs: &DeclarationCostInputs,
    tax_rate: f64,
) -> DeclarationCostResult {
    let fob_value_jod = calculate_fob_value_jod(inputs.fob_value_foreign, inputs.exchange_rate);
    let freight_and_insurance =
        calculate_freight_and_insurance(inputs.freight_cost, inputs.insurance_cost);
    let taxable_value = calculate_taxable_value(fob_value_jod, freight_and_insurance);
    let sales_tax = calculate_sales_tax(taxable_value, inputs.customs_duty, tax_rate);
    let total_customs_and_taxes = calculate_total_customs_and_taxes(
        inputs.customs_duty,
        sales_tax,
        inputs.additional_fees,
        inputs.customs_service_fee,
        inputs.penalties,
    );
    let total_landed_cost =
        calculate_total_landed_cost(fob_value_jod, freight_and_insurance, total_customs_and_taxes);
    let additional_expenses_ratio =
        calculate_additional_expenses_ratio(total_customs_and_taxes, fob_value_jod);

    DeclarationCostResult {
        fob_value_jod,
        freight_and_insurance,
        taxable_value,
        sales_tax,
        total_customs_and_taxes,
        total_landed_cost,
        additional_expenses_ratio,
    }
}
