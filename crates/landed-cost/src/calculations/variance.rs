use super::declaration::DeclarationCostResult;
use super::rounding::{round_currency, round_percentage};
use serde::{Deserialize, Serialize};

pub fn calculate_variance(actual_value: f64, estimated_value: f64) -> f64 {
    round_currency(actual_value - estimated_value)
}

/// Variance relative to the estimate, `0.0` when nothing was estimated.
pub fn calculate_variance_percentage(variance: f64, estimated_value: f64) -> f64 {
    if estimated_value == 0.0 {
        return 0.0;
    }
    round_percentage(variance / estimated_value * 100.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VarianceInputs {
    pub actual_value: f64,
    pub estimated_value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VarianceResult {
    pub actual_value: f64,
    pub estimated_value: f64,
    pub variance: f64,
    pub variance_percentage: f64,
}

impl VarianceResult {
    pub fn compare(actual_value: f64, estimated_value: f64) -> Self {
        let variance = calculate_variance(actual_value, estimated_value);
        Self {
            actual_value,
            estimated_value,
            variance,
            variance_percentage: calculate_variance_percentage(variance, estimated_value),
        }
    }
}

impl From<VarianceInputs> for VarianceResult {
    fn from(inputs: VarianceInputs) -> Self {
        Self::compare(inputs.actual_value, inputs.estimated_value)
    }
}

/// Cost lines of a declaration breakdown that can be compared after clearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostLine {
    FobValueJod,
    FreightAndInsurance,
    TaxableValue,
    SalesTax,
    TotalCustomsAndTaxes,
    TotalLandedCost,
}

impl CostLine {
    pub fn ordered() -> [CostLine; 6] {
        [
            CostLine::FobValueJod,
            CostLine::FreightAndInsurance,
            CostLine::TaxableValue,
            CostLine::SalesTax,
            CostLine::TotalCustomsAndTaxes,
            CostLine::TotalLandedCost,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            CostLine::FobValueJod => "FOB value (JOD)",
            CostLine::FreightAndInsurance => "Freight & insurance",
            CostLine::TaxableValue => "Taxable value",
            CostLine::SalesTax => "Sales tax",
            CostLine::TotalCustomsAndTaxes => "Customs & taxes",
            CostLine::TotalLandedCost => "Landed cost",
        }
    }

    pub fn value_of(&self, result: &DeclarationCostResult) -> f64 {
        match self {
            CostLine::FobValueJod => result.fob_value_jod,
            CostLine::FreightAndInsurance => result.freight_and_insurance,
            CostLine::TaxableValue => result.taxable_value,
            CostLine::SalesTax => result.sales_tax,
            CostLine::TotalCustomsAndTaxes => result.total_customs_and_taxes,
            CostLine::TotalLandedCost => result.total_landed_cost,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostLineVariance {
    pub line: CostLine,
    pub label: &'static str,
    #[serde(flatten)]
    pub result: VarianceResult,
}

/// Actual against estimated figures for every cost line of a declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostVarianceReport {
    pub lines: Vec<CostLineVariance>,
}

impl CostVarianceReport {
    pub fn between(actual: &DeclarationCostResult, estimated: &DeclarationCostResult) -> Self {
        let lines = CostLine::ordered()
            .into_iter()
            .map(|line| CostLineVariance {
                line,
                label: line.label(),
                result: VarianceResult::compare(line.value_of(actual), line.value_of(estimated)),
            })
            .collect();

        Self { lines }
    }

    pub fn line(&self, line: CostLine) -> Option<&VarianceResult> {
        self.lines
            .iter()
            .find(|entry| entry.line == line)
            .map(|entry| &entry.result)
    }
}
