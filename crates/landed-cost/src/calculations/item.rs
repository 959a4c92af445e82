use super::declaration::calculate_fob_value_jod;
use super::rounding::{round_currency, round_percentage};
use serde::{Deserialize, Serialize};

/// Raw figures for one line item plus the parent declaration totals it is
/// allocated against.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCostInputs {
    pub fob_value_foreign: f64,
    pub exchange_rate: f64,
    pub quantity: f64,
    pub total_fob_value_jod: f64,
    pub total_customs_and_taxes: f64,
}

/// Rounded cost allocation for a line item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCostResult {
    pub item_fob_value_jod: f64,
    pub item_value_percentage: f64,
    pub item_expenses_share: f64,
    pub item_total_cost: f64,
    pub unit_cost: f64,
}

/// Share of the declaration FOB value held by one item, `0.0` when the total is zero.
pub fn calculate_item_value_percentage(item_value: f64, total_fob_value: f64) -> f64 {
    if total_fob_value == 0.0 {
        return 0.0;
    }
    round_percentage(item_value / total_fob_value * 100.0)
}

pub fn calculate_item_expenses_share(
    item_value_percentage: f64,
    total_customs_and_taxes: f64,
) -> f64 {
    round_currency(item_value_percentage / 100.0 * total_customs_and_taxes)
}

pub fn calculate_item_total_cost(item_fob_value_jod: f64, item_expenses_share: f64) -> f64 {
    round_currency(item_fob_value_jod + item_expenses_share)
}

/// Cost per unit, `0.0` for a zero quantity.
pub fn calculate_unit_cost(item_total_cost: f64, quantity: f64) -> f64 {
    if quantity == 0.0 {
        return 0.0;
    }
    round_currency(item_total_cost / quantity)
}

/// Allocates declaration customs costs onto one item.
///
/// The percentage is taken from the rounded item FOB value and the expense
/// share from the rounded percentage.
pub fn calculate_item_costs(inputs: &ItemCostInputs) -> ItemCostResult {
    let item_fob_value_jod =
        calculate_fob_value_jod(inputs.fob_value_foreign, inputs.exchange_rate);
    let item_value_percentage =
        calculate_item_value_percentage(item_fob_value_jod, inputs.total_fob_value_jod);
    let item_expenses_share =
        calculate_item_expenses_share(item_value_percentage, inputs.total_customs_and_taxes);
    let item_total_cost = calculate_item_total_cost(item_fob_value_jod, item_expenses_share);
    let unit_cost = calculate_unit_cost(item_total_cost, inputs.quantity);

    ItemCostResult {
        item_fob_value_jod,
        item_value_percentage,
        item_expenses_share,
        item_total_cost,
        unit_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocates_customs_by_value_share() {
        let result = calculate_item_costs(&ItemCostInputs {
            fob_value_foreign: 400.0,
            exchange_rate: 0.709,
            quantity: 8.0,
            total_fob_value_jod: 709.0,
            total_customs_and_taxes: 239.04,
        });

        assert_eq!(result.item_fob_value_jod, 283.6);
        assert_eq!(result.item_value_percentage, 40.0);
        assert_eq!(result.item_expenses_share, 95.616);
        assert_eq!(result.item_total_cost, 379.216);
        assert_eq!(result.unit_cost, 47.402);
    }

    #[test]
    fn zero_quantity_yields_zero_unit_cost() {
        let result = calculate_item_costs(&ItemCostInputs {
            fob_value_foreign: 250.0,
            exchange_rate: 1.0,
            quantity: 0.0,
            total_fob_value_jod: 1000.0,
            total_customs_and_taxes: 200.0,
        });

        assert_eq!(result.item_total_cost, 300.0);
        assert_eq!(result.unit_cost, 0.0);
    }

    #[test]
    fn zero_declaration_total_yields_no_share() {
        let result = calculate_item_costs(&ItemCostInputs {
            fob_value_foreign: 250.0,
            exchange_rate: 1.0,
            quantity: 5.0,
            total_fob_value_jod: 0.0,
            total_customs_and_taxes: 200.0,
        });

        assert_eq!(result.item_value_percentage, 0.0);
        assert_eq!(result.item_expenses_share, 0.0);
        assert_eq!(result.item_total_cost, 250.0);
        assert_eq!(result.unit_cost, 50.0);
    }

    #[test]
    fn percentage_is_rounded_before_share() {
        let percentage = calculate_item_value_percentage(1.0, 3.0);
        assert_eq!(percentage, 33.33);
        assert_eq!(calculate_item_expenses_share(percentage, 300.0), 99.99);
    }
}
