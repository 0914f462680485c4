use std::path::PathBuf;

use directories::ProjectDirs;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "HubTradeScanner";
const APP_NAME: &str = "HubTradeScanner";

/// Per-user config file, e.g. `~/.config/hubtradescanner/config.toml` on Linux.
pub fn default_config_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("config.toml"))
}
