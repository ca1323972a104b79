use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{PositiveU64, PositiveUsize, RunArgs, parsers::parse_duration_arg};
use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Applies `[run]` values from the config file to fields not set on the CLI.
///
/// # Errors
///
/// Returns an error when a config value is out of range.
pub fn apply_config(args: &mut RunArgs, matches: &ArgMatches, config: &ConfigFile) -> AppResult<()> {
    let run = &config.run;

    if !is_cli(matches, "concurrency")
        && let Some(value) = run.concurrency
    {
        args.concurrency = PositiveUsize::try_from(value).map_err(|err| {
            AppError::config(ConfigError::FieldMustBePositive {
                field: "run.concurrency".to_owned(),
                source: err,
            })
        })?;
    }

    if !is_cli(matches, "requests")
        && let Some(value) = run.requests
    {
        args.requests = PositiveU64::try_from(value).map_err(|err| {
            AppError::config(ConfigError::FieldMustBePositive {
                field: "run.requests".to_owned(),
                source: err,
            })
        })?;
    }

    if !is_cli(matches, "delay_ms")
        && let Some(value) = run.delay_ms
    {
        args.delay_ms = value;
    }

    if !is_cli(matches, "output")
        && let Some(output) = run.output.clone()
    {
        args.output = output;
    }

    if !is_cli(matches, "export_json")
        && let Some(path) = run.export_json.clone()
    {
        args.export_json = Some(path);
    }

    if !is_cli(matches, "request_timeout")
        && let Some(value) = run.request_timeout.as_deref()
    {
        let timeout = parse_duration_arg(value)
            .map_err(|err| AppError::config(ConfigError::InvalidRequestTimeout { source: err }))?;
        args.request_timeout = Some(timeout);
    }

    Ok(())
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}
