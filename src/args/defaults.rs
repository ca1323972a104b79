pub(crate) const DEFAULT_USER_AGENT: &str = concat!("authstress/", env!("CARGO_PKG_VERSION"));

/// Config filenames checked, in order, when `--config` is not given.
pub(crate) const DEFAULT_CONFIG_FILES: [&str; 2] = ["authstress.toml", "authstress.json"];

pub(crate) const DEFAULT_OUTPUT: &str = "results.csv";
