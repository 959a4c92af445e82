use landed_cost::calculations::{
    allocate_items, calculate_all_costs, calculate_item_expenses_share, round_to_decimals,
    DeclarationCostInputs, LineItem,
};
use proptest::prelude::*;

/// Splits 100.00% into `parts` non-negative shares expressed in hundredths of a percent.
fn percentage_split(parts: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0u32..=10_000, parts - 1).prop_map(|mut cuts| {
        cuts.sort_unstable();
        let mut previous = 0u32;
        let mut shares = Vec::with_capacity(cuts.len() + 1);
        for cut in cuts.into_iter().chain(std::iter::once(10_000)) {
            shares.push(f64::from(cut - previous) / 100.0);
            previous = cut;
        }
        shares
    })
}

fn customs_total() -> impl Strategy<Value = f64> {
    (0u64..=100_000_000).prop_map(|thousandths| thousandths as f64 / 1000.0)
}

proptest! {
    #[test]
    fn expense_shares_reconcile_when_percentages_total_one_hundred(
        (total, shares) in (customs_total(), (1usize..=10).prop_flat_map(percentage_split))
    ) {
        let allocated: f64 = shares
            .iter()
            .map(|percentage| calculate_item_expenses_share(*percentage, total))
            .fold(0.0, |sum, share| sum + share);

        prop_assert!(
            (allocated - total).abs() <= 0.01 + 1e-9,
            "allocated {allocated} against {total} from {shares:?}"
        );
    }

    #[test]
    fn rounded_results_have_bounded_decimals(value in -1.0e6f64..1.0e6, decimals in 0u32..=4) {
        let rounded = round_to_decimals(value, decimals);
        let rendered = rounded.to_string();
        let places = rendered.split_once('.').map(|(_, fraction)| fraction.len()).unwrap_or(0);
        prop_assert!(places <= decimals as usize, "{value} -> {rendered}");
    }

    #[test]
    fn whole_declaration_split_across_items_reconciles(
        units in prop::collection::vec(1u32..=5_000, 1..=6)
    ) {
        let items: Vec<LineItem> = units
            .iter()
            .enumerate()
            .map(|(index, value)| LineItem {
                reference: format!("line-{index}"),
                fob_value_foreign: f64::from(*value),
                exchange_rate: 1.0,
                quantity: 1.0,
            })
            .collect();
        let fob_value_foreign = units.iter().map(|value| f64::from(*value)).fold(0.0, |a, b| a + b);

        let declaration = calculate_all_costs(&DeclarationCostInputs {
            fob_value_foreign,
            exchange_rate: 1.0,
            freight_cost: 75.0,
            insurance_cost: 12.5,
            customs_duty: fob_value_foreign * 0.05,
            ..DeclarationCostInputs::default()
        });
        let report = allocate_items(&declaration, &items);

        // Each item percentage carries up to 0.005% of rounding error.
        let tolerance = declaration.total_customs_and_taxes * 0.00005 * items.len() as f64
            + 0.0005 * items.len() as f64
            + 0.002;
        prop_assert!(
            report.unallocated_expenses.abs() <= tolerance,
            "unallocated {} exceeds {tolerance}",
            report.unallocated_expenses
        );
    }
}
