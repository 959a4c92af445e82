use crate::demo::{
    run_declaration_costs, run_demo, run_item_costs, run_variance, DeclarationCostArgs, DemoArgs,
    ItemCostArgs, VarianceArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use landed_cost::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Landed Cost Service",
    about = "Calculate customs declaration landed costs from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Declaration-level cost calculations
    Declaration {
        #[command(subcommand)]
        command: DeclarationCommand,
    },
    /// Line-item cost allocation
    Item {
        #[command(subcommand)]
        command: ItemCommand,
    },
    /// Compare an actual figure against its pre-clearance estimate
    Variance(VarianceArgs),
    /// Walk through a sample declaration with item allocation and variance
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum DeclarationCommand {
    /// Calculate the landed cost breakdown for one declaration
    Costs(DeclarationCostArgs),
}

#[derive(Subcommand, Debug)]
enum ItemCommand {
    /// Allocate stored declaration totals onto one line item
    Costs(ItemCostArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the configured sales tax rate (fraction, e.g. 0.16)
    #[arg(long, value_parser = crate::infra::parse_tax_rate)]
    pub(crate) tax_rate: Option<f64>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Declaration {
            command: DeclarationCommand::Costs(args),
        } => run_declaration_costs(args),
        Command::Item {
            command: ItemCommand::Costs(args),
        } => run_item_costs(args),
        Command::Variance(args) => run_variance(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["landed-cost-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_declaration_costs_with_optional_fees() {
        let cli = Cli::try_parse_from([
            "landed-cost-api",
            "declaration",
            "costs",
            "--fob-value-foreign",
            "1000",
            "--exchange-rate",
            "0.709",
            "--freight-cost",
            "50",
            "--insurance-cost",
            "10",
            "--customs-duty",
            "100",
            "--json",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Declaration {
                command: DeclarationCommand::Costs(args),
            }) => {
                let inputs = args.inputs();
                assert_eq!(inputs.fob_value_foreign, 1000.0);
                assert_eq!(inputs.penalties, 0.0);
                assert!(args.json);
                assert!(args.tax_rate.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn declaration_costs_requires_freight_and_insurance() {
        let result = Cli::try_parse_from([
            "landed-cost-api",
            "declaration",
            "costs",
            "--fob-value-foreign",
            "1000",
            "--exchange-rate",
            "0.709",
            "--customs-duty",
            "100",
        ]);

        let error = result.expect_err("missing freight and insurance");
        assert_eq!(error.kind(), clap::error::ErrorKind::MissingRequiredArgument);
        let message = error.to_string();
        assert!(message.contains("--freight-cost"));
        assert!(message.contains("--insurance-cost"));
    }

    #[test]
    fn rejects_out_of_range_tax_rate() {
        let result = Cli::try_parse_from(["landed-cost-api", "serve", "--tax-rate", "16"]);
        assert!(result.is_err());
    }

    #[test]
    fn variance_accepts_negative_figures() {
        let cli = Cli::try_parse_from([
            "landed-cost-api",
            "variance",
            "--actual",
            "-120.5",
            "--estimated",
            "-100",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Variance(args)) => {
                assert_eq!(args.actual, -120.5);
                assert_eq!(args.estimated, -100.0);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
