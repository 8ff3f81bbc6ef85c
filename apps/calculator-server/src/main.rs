mod config;
mod logging;
mod server;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use calculator::CalculatorModule;
use calculator_sdk::{CalculationRequest, CalculatorClientV1, CalculatorError, ErrorClass, Mode};
use clap::{Args, Parser, Subcommand};
use mimalloc::MiMalloc;
use serde_json::json;
use tokio_util::sync::CancellationToken;

use crate::config::AppConfig;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Calculator Server - arithmetic and scientific evaluation over HTTP
#[derive(Parser)]
#[command(name = "calculator-server")]
#[command(about = "Calculator Server - arithmetic and scientific evaluation over HTTP")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
    /// Evaluate a single calculation and print the JSON outcome
    Eval(EvalArgs),
}

#[derive(Args)]
struct EvalArgs {
    /// First operand (the only operand in scientific mode)
    #[arg(long, allow_negative_numbers = true)]
    num1: Option<f64>,

    /// Second operand, ignored in scientific mode
    #[arg(long, allow_negative_numbers = true)]
    num2: Option<f64>,

    /// Operator token: + - * / or sin cos tan log
    #[arg(long)]
    operation: Option<String>,

    /// `normal` or `scientific`
    #[arg(long, default_value = "normal")]
    mode: String,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if let Some(path) = &cli.config
        && !path.is_file()
    {
        anyhow::bail!("config file does not exist: {}", path.to_string_lossy());
    }

    // Layered config:
    // 1) defaults -> 2) YAML (if provided) -> 3) env (APP__*) -> 4) CLI overrides
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(cli.port, cli.verbose);

    logging::init_logging(&config.logging);

    if cli.print_config {
        println!("{}", config.to_pretty_json()?);
        return Ok(ExitCode::SUCCESS);
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(&config).await,
        Commands::Check => check_config(&config),
        Commands::Eval(args) => eval_once(config, args).await,
    }
}

async fn run_server(config: &AppConfig) -> Result<ExitCode> {
    tracing::info!("Calculator Server starting");

    let cancel = CancellationToken::new();
    server::cancel_on_signals(cancel.clone());
    server::serve(config, cancel).await?;

    tracing::info!("Calculator Server stopped");
    Ok(ExitCode::SUCCESS)
}

fn check_config(config: &AppConfig) -> Result<ExitCode> {
    config.server.socket_addr()?;
    println!("Configuration is valid");
    println!("{}", config.to_pretty_json()?);
    Ok(ExitCode::SUCCESS)
}

impl TryFrom<EvalArgs> for CalculationRequest {
    type Error = CalculatorError;

    fn try_from(args: EvalArgs) -> Result<Self, Self::Error> {
        Ok(Self {
            operand1: args.num1,
            operand2: args.num2,
            operator: args.operation,
            mode: args.mode.parse::<Mode>()?,
        })
    }
}

async fn eval_once(config: AppConfig, args: EvalArgs) -> Result<ExitCode> {
    let client = CalculatorModule::new(config.calculator).client();

    match evaluate_args(client.as_ref(), args).await {
        Ok(result) => {
            println!("{}", json!({ "result": result }));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("{}", json!({ "error": e.to_string() }));
            Ok(exit_code_for(&e))
        }
    }
}

async fn evaluate_args(
    client: &dyn CalculatorClientV1,
    args: EvalArgs,
) -> Result<f64, CalculatorError> {
    let request = CalculationRequest::try_from(args)?;
    client.evaluate(request).await
}

fn exit_code_for(error: &CalculatorError) -> ExitCode {
    match error.class() {
        ErrorClass::ClientError => ExitCode::from(1),
        ErrorClass::ServerError => ExitCode::from(2),
    }
}
