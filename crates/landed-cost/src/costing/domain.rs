use serde::{Deserialize, Serialize};

use crate::calculations::{
    AllocationReport, DeclarationCostInputs, DeclarationCostResult, LineItem,
};

/// Declaration figures together with the line items to allocate against them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeclarationBreakdownRequest {
    pub declaration: DeclarationCostInputs,
    #[serde(default)]
    pub items: Vec<LineItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeclarationBreakdown {
    pub declaration: DeclarationCostResult,
    pub allocation: AllocationReport,
}

/// Post-clearance figures alongside the pre-clearance estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeclarationVarianceRequest {
    pub actual: DeclarationCostInputs,
    pub estimated: DeclarationCostInputs,
}
