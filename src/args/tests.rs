use super::parsers::{parse_bool_env, parse_duration_arg};
use super::test_support::parse_test_args;
use super::*;
use crate::error::{AppError, AppResult};
use std::time::Duration;
