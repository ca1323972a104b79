use std::ffi::OsString;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tracing::{debug, error};

use crate::app::{RunCoordinator, export_csv, export_json, print_summary};
use crate::args::{DEFAULT_CONFIG_FILES, RunArgs};
use crate::auth::provider_from_config;
use crate::body::BodyRegistry;
use crate::config::{apply_config, build_endpoints, load_config};
use crate::error::AppResult;
use crate::http::{HttpExecutor, PoolPlan, RequestExecutor, build_client};

/// Parses the command line, sets up logging and the runtime, and runs once.
///
/// # Errors
///
/// Returns the first fatal error: setup, credential, worker or export.
pub fn run() -> AppResult<()> {
    let Some((args, matches)) = parse_args()? else {
        return Ok(());
    };

    crate::logger::init_logging(args.verbose, args.no_color);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(args, &matches)).inspect_err(|err| {
        error!("{}", err);
    })
}

fn parse_args() -> AppResult<Option<(RunArgs, ArgMatches)>> {
    let mut cmd = RunArgs::command();
    let raw_args: Vec<OsString> = std::env::args_os().collect();

    if should_show_help(&raw_args) {
        cmd.print_help()?;
        println!();
        return Ok(None);
    }

    let matches = cmd.get_matches_from(raw_args);
    let args = RunArgs::from_arg_matches(&matches)?;

    Ok(Some((args, matches)))
}

fn should_show_help(raw_args: &[OsString]) -> bool {
    let treat_as_empty =
        matches!(raw_args, [] | [_]) || matches!(raw_args, [_, second] if second == "--");
    if !treat_as_empty {
        return false;
    }

    !has_default_config()
}

fn has_default_config() -> bool {
    DEFAULT_CONFIG_FILES
        .iter()
        .any(|path| Path::new(path).exists())
}

async fn run_async(mut args: RunArgs, matches: &ArgMatches) -> AppResult<()> {
    let config = load_config(args.config.as_deref())?;
    apply_config(&mut args, matches, &config)?;

    let registry = BodyRegistry::from_config(&config.bodies)?;
    debug!(
        "Registered body builders: {:?}",
        registry.names().collect::<Vec<_>>()
    );
    let endpoints = build_endpoints(&config.endpoints, &registry)?;
    let plan = PoolPlan::new(
        args.concurrency,
        args.requests,
        Duration::from_millis(args.delay_ms),
    )?;
    let coordinator = RunCoordinator::new(plan, endpoints)?;

    let client = build_client(args.request_timeout, args.concurrency.get())?;
    let provider = provider_from_config(args.token.as_deref(), config.auth.as_ref(), &client)?;
    let executor: Arc<dyn RequestExecutor> = Arc::new(HttpExecutor::new(client, registry));

    let report = coordinator.execute(provider.as_ref(), executor).await?;
    print_summary(&report);

    let csv_result = export_csv(&args.output, &report.results).await;
    if let Some(path) = args.export_json.as_deref() {
        export_json(path, &report).await?;
    }
    csv_result
}
