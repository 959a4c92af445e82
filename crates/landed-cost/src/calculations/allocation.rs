use super::declaration::DeclarationCostResult;
use super::item::{calculate_item_costs, ItemCostInputs, ItemCostResult};
use super::rounding::{round_currency, round_percentage};
use serde::{Deserialize, Serialize};

/// Largest gap between allocated item shares and the declaration customs
/// total that still counts as reconciled.
pub const RECONCILIATION_TOLERANCE: f64 = 0.01;

/// A declaration line item as submitted for allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub reference: String,
    pub fob_value_foreign: f64,
    pub exchange_rate: f64,
    pub quantity: f64,
}

impl LineItem {
    /// Item inputs priced against an already computed declaration.
    pub fn cost_inputs(&self, declaration: &DeclarationCostResult) -> ItemCostInputs {
        ItemCostInputs {
            fob_value_foreign: self.fob_value_foreign,
            exchange_rate: self.exchange_rate,
            quantity: self.quantity,
            total_fob_value_jod: declaration.fob_value_jod,
            total_customs_and_taxes: declaration.total_customs_and_taxes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemAllocation {
    pub reference: String,
    #[serde(flatten)]
    pub costs: ItemCostResult,
}

/// Per-item allocation of a declaration plus how well it reconciles.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationReport {
    pub items: Vec<ItemAllocation>,
    pub allocated_percentage: f64,
    pub allocated_expenses: f64,
    pub unallocated_expenses: f64,
    pub is_reconciled: bool,
}

impl AllocationReport {
    pub fn item(&self, reference: &str) -> Option<&ItemAllocation> {
        self.items.iter().find(|item| item.reference == reference)
    }
}

/// Runs the item calculation for every line in input order and sums the
/// shares back against the declaration total.
pub fn allocate_items(declaration: &DeclarationCostResult, items: &[LineItem]) -> AllocationReport {
    let items: Vec<ItemAllocation> = items
        .iter()
        .map(|item| ItemAllocation {
            reference: item.reference.clone(),
            costs: calculate_item_costs(&item.cost_inputs(declaration)),
        })
        .collect();

    let allocated_percentage = round_percentage(
        items
            .iter()
            .map(|item| item.costs.item_value_percentage)
            .fold(0.0, |total, value| total + value),
    );
    let allocated_expenses = round_currency(
        items
            .iter()
            .map(|item| item.costs.item_expenses_share)
            .fold(0.0, |total, value| total + value),
    );
    let unallocated_expenses =
        round_currency(declaration.total_customs_and_taxes - allocated_expenses);

    AllocationReport {
        items,
        allocated_percentage,
        allocated_expenses,
        unallocated_expenses,
        is_reconciled: unallocated_expenses.abs() <= RECONCILIATION_TOLERANCE,
    }
}
