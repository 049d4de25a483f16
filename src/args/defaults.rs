use std::time::Duration;

pub(crate) const DEFAULT_USER_AGENT: &str = concat!("synthpost/", env!("CARGO_PKG_VERSION"));

/// Config filenames checked, in order, when no path is given.
pub(crate) const DEFAULT_CONFIG_FILES: [&str; 4] = [
    "synthpost.yaml",
    "synthpost.yml",
    "synthpost.toml",
    "synthpost.json",
];

pub(crate) const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
pub(crate) const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
