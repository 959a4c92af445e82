use landed_cost::calculations::{DeclarationCostInputs, LineItem};
use landed_cost::config::CostingConfig;
use landed_cost::costing::TaxPolicy;
use landed_cost::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_tax_rate(raw: &str) -> Result<f64, String> {
    landed_cost::config::parse_tax_rate(raw).map_err(|err| err.to_string())
}

/// Tax policy from the command line, falling back to `APP_SALES_TAX_RATE`.
pub(crate) fn resolve_tax_policy(tax_rate: Option<f64>) -> Result<TaxPolicy, AppError> {
    match tax_rate {
        Some(sales_tax_rate) => Ok(TaxPolicy { sales_tax_rate }),
        None => {
            let costing = CostingConfig::load()?;
            Ok(TaxPolicy::from(&costing))
        }
    }
}

pub(crate) fn sample_declaration() -> DeclarationCostInputs {
    DeclarationCostInputs {
        fob_value_foreign: 1000.0,
        exchange_rate: 0.709,
        freight_cost: 50.0,
        insurance_cost: 10.0,
        customs_duty: 100.0,
        ..DeclarationCostInputs::default()
    }
}

pub(crate) fn sample_line_items() -> Vec<LineItem> {
    [("PUMP-220", 400.0, 8.0), ("VALVE-050", 350.0, 70.0), ("GASKET-12", 250.0, 500.0)]
        .into_iter()
        .map(|(reference, fob_value_foreign, quantity)| LineItem {
            reference: reference.to_string(),
            fob_value_foreign,
            exchange_rate: 0.709,
            quantity,
        })
        .collect()
}
