use crate::infra::{resolve_tax_policy, sample_declaration, sample_line_items};
use clap::Args;
use landed_cost::calculations::{
    CostVarianceReport, DeclarationCostInputs, DeclarationCostResult, ItemCostInputs,
    ItemCostResult, VarianceInputs, VarianceResult,
};
use landed_cost::costing::{
    DeclarationBreakdown, DeclarationBreakdownRequest, DeclarationVarianceRequest,
    LandedCostService, TaxPolicy,
};
use landed_cost::error::AppError;
use serde::Serialize;

#[derive(Args, Debug)]
pub(crate) struct DeclarationCostArgs {
    /// Invoice (FOB) value in the foreign currency
    #[arg(long)]
    pub(crate) fob_value_foreign: f64,
    /// Local currency units per foreign currency unit
    #[arg(long)]
    pub(crate) exchange_rate: f64,
    /// Freight cost in local currency
    #[arg(long)]
    pub(crate) freight_cost: f64,
    /// Insurance cost in local currency
    #[arg(long)]
    pub(crate) insurance_cost: f64,
    /// Customs duty assessed on the declaration
    #[arg(long)]
    pub(crate) customs_duty: f64,
    #[arg(long, default_value_t = 0.0)]
    pub(crate) additional_fees: f64,
    #[arg(long, default_value_t = 0.0)]
    pub(crate) customs_service_fee: f64,
    #[arg(long, default_value_t = 0.0)]
    pub(crate) penalties: f64,
    /// Override the configured sales tax rate (fraction, e.g. 0.16)
    #[arg(long, value_parser = crate::infra::parse_tax_rate)]
    pub(crate) tax_rate: Option<f64>,
    /// Print the result as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

impl DeclarationCostArgs {
    pub(crate) fn inputs(&self) -> DeclarationCostInputs {
        DeclarationCostInputs {
            fob_value_foreign: self.fob_value_foreign,
            exchange_rate: self.exchange_rate,
            freight_cost: self.freight_cost,
            insurance_cost: self.insurance_cost,
            customs_duty: self.customs_duty,
            additional_fees: self.additional_fees,
            customs_service_fee: self.customs_service_fee,
            penalties: self.penalties,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct ItemCostArgs {
    /// Item invoice (FOB) value in the foreign currency
    #[arg(long)]
    pub(crate) fob_value_foreign: f64,
    /// Local currency units per foreign currency unit
    #[arg(long)]
    pub(crate) exchange_rate: f64,
    #[arg(long)]
    pub(crate) quantity: f64,
    /// Stored FOB value (JOD) of the parent declaration
    #[arg(long)]
    pub(crate) total_fob_value_jod: f64,
    /// Stored customs and taxes total of the parent declaration
    #[arg(long)]
    pub(crate) total_customs_and_taxes: f64,
    /// Print the result as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct VarianceArgs {
    /// Post-clearance figure
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) actual: f64,
    /// Pre-clearance estimate
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) estimated: f64,
    /// Print the result as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the configured sales tax rate (fraction, e.g. 0.16)
    #[arg(long, value_parser = crate::infra::parse_tax_rate)]
    pub(crate) tax_rate: Option<f64>,
    /// Customs duty assessed after clearance, compared against the sample estimate
    #[arg(long, default_value_t = 120.0)]
    pub(crate) actual_customs_duty: f64,
}

pub(crate) fn run_declaration_costs(args: DeclarationCostArgs) -> Result<(), AppError> {
    let policy = resolve_tax_policy(args.tax_rate)?;
    let service = LandedCostService::new(policy);
    let inputs = args.inputs();
    let result = service.declaration_costs(&inputs)?;

    if args.json {
        return print_json(&result);
    }
    render_declaration(&inputs, &result, policy);
    Ok(())
}

pub(crate) fn run_item_costs(args: ItemCostArgs) -> Result<(), AppError> {
    let inputs = ItemCostInputs {
        fob_value_foreign: args.fob_value_foreign,
        exchange_rate: args.exchange_rate,
        quantity: args.quantity,
        total_fob_value_jod: args.total_fob_value_jod,
        total_customs_and_taxes: args.total_customs_and_taxes,
    };
    let result = LandedCostService::default().item_costs(&inputs)?;

    if args.json {
        return print_json(&result);
    }
    render_item(&inputs, &result);
    Ok(())
}

pub(crate) fn run_variance(args: VarianceArgs) -> Result<(), AppError> {
    let inputs = VarianceInputs {
        actual_value: args.actual,
        estimated_value: args.estimated,
    };
    let result = LandedCostService::default().variance(&inputs)?;

    if args.json {
        return print_json(&result);
    }
    render_variance(&result);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let policy = resolve_tax_policy(args.tax_rate)?;
    let service = LandedCostService::new(policy);

    println!("Landed cost demo");
    let estimated = sample_declaration();
    let breakdown = service.breakdown(&DeclarationBreakdownRequest {
        declaration: estimated,
        items: sample_line_items(),
    })?;
    render_declaration(&estimated, &breakdown.declaration, policy);
    render_allocation(&breakdown);

    let mut actual = estimated;
    actual.customs_duty = args.actual_customs_duty;
    let report = service.declaration_variance(&DeclarationVarianceRequest { actual, estimated })?;
    println!(
        "\nPost-clearance variance (customs duty {:.3} -> {:.3})",
        estimated.customs_duty, actual.customs_duty
    );
    render_variance_report(&report);

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn render_declaration(
    inputs: &DeclarationCostInputs,
    result: &DeclarationCostResult,
    policy: TaxPolicy,
) {
    println!(
        "Declaration: FOB {:.3} @ {} | sales tax rate {:.2}%",
        inputs.fob_value_foreign,
        inputs.exchange_rate,
        policy.sales_tax_rate * 100.0
    );
    println!("- FOB value (JOD): {:.3}", result.fob_value_jod);
    println!("- Freight & insurance: {:.3}", result.freight_and_insurance);
    println!("- Taxable value: {:.3}", result.taxable_value);
    println!("- Sales tax: {:.3}", result.sales_tax);
    println!("- Customs & taxes: {:.3}", result.total_customs_and_taxes);
    println!("- Landed cost: {:.3}", result.total_landed_cost);
    println!(
        "- Additional expenses ratio: {:.2}%",
        result.additional_expenses_ratio
    );
}

fn render_allocation(breakdown: &DeclarationBreakdown) {
    let allocation = &breakdown.allocation;
    if allocation.items.is_empty() {
        println!("\nItem allocation: no items");
        return;
    }

    println!("\nItem allocation");
    for item in &allocation.items {
        println!(
            "- {}: {:.2}% of FOB | share {:.3} | total {:.3} | unit {:.3}",
            item.reference,
            item.costs.item_value_percentage,
            item.costs.item_expenses_share,
            item.costs.item_total_cost,
            item.costs.unit_cost
        );
    }

    let status = if allocation.is_reconciled {
        "reconciled"
    } else {
        "NOT reconciled"
    };
    println!(
        "Allocated {:.3} of {:.3} ({:.2}% of FOB), unallocated {:.3}: {}",
        allocation.allocated_expenses,
        breakdown.declaration.total_customs_and_taxes,
        allocation.allocated_percentage,
        allocation.unallocated_expenses,
        status
    );
}

fn render_item(inputs: &ItemCostInputs, result: &ItemCostResult) {
    println!(
        "Item: FOB {:.3} @ {} x {}",
        inputs.fob_value_foreign, inputs.exchange_rate, inputs.quantity
    );
    println!("- FOB value (JOD): {:.3}", result.item_fob_value_jod);
    println!("- Share of declaration: {:.2}%", result.item_value_percentage);
    println!("- Expenses share: {:.3}", result.item_expenses_share);
    println!("- Total cost: {:.3}", result.item_total_cost);
    println!("- Unit cost: {:.3}", result.unit_cost);
}

fn render_variance(result: &VarianceResult) {
    println!(
        "Actual {:.3} vs estimated {:.3}: variance {:+.3} ({:+.2}%)",
        result.actual_value, result.estimated_value, result.variance, result.variance_percentage
    );
}

fn render_variance_report(report: &CostVarianceReport) {
    for entry in &report.lines {
        println!(
            "- {}: {:.3} -> {:.3} ({:+.3}, {:+.2}%)",
            entry.label,
            entry.result.estimated_value,
            entry.result.actual_value,
            entry.result.variance,
            entry.result.variance_percentage
        );
    }
}
