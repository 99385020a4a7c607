//! Where Sneakergram binaries keep their files.
//!
//! Directories come from an explicit environment override first, then the
//! platform convention picked by `etcetera`, then a temp-dir fallback.

pub mod constants;

pub use etcetera::AppStrategy;
use etcetera::{AppStrategyArgs, choose_app_strategy};

use std::env;
use std::path::PathBuf;

pub fn create_strategy() -> std::result::Result<impl AppStrategy, etcetera::HomeDirError> {
    choose_app_strategy(AppStrategyArgs {
        top_level_domain: constants::TOP_LEVEL_DOMAIN.to_string(),
        author: constants::AUTHOR.to_string(),
        app_name: constants::APP_NAME.to_string(),
    })
}

/// Resolve a directory, preferring `env_key` over the strategy's answer.
pub fn resolve_dir<S, F>(env_key: &str, strategy: &S, strategy_fn: F) -> PathBuf
where
    S: AppStrategy,
    F: FnOnce(&S) -> Option<PathBuf>,
{
    env::var_os(env_key)
        .map(PathBuf::from)
        .or_else(|| strategy_fn(strategy))
        .unwrap_or_else(|| env::temp_dir().join(constants::APP_NAME))
}

/// Location of the command-line front end's TOML file.
///
/// `SNEAKERGRAM_CONFIG` points at a file directly; otherwise the file lives in
/// `SNEAKERGRAM_CONFIG_DIR` or the platform config directory.
pub fn cli_config_path<S: AppStrategy>(strategy: &S) -> PathBuf {
    env::var_os("SNEAKERGRAM_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            resolve_dir("SNEAKERGRAM_CONFIG_DIR", strategy, |s| Some(s.config_dir()))
                .join(constants::CLI_CONFIG_FILE_NAME)
        })
}
