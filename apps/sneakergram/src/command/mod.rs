pub mod interactive;
pub mod search;
pub mod trending;

use crate::config::Config;
use crate::error::{OptionExt, Result, WrapErr};
use search_core::{SearchEngine, Snapshot};
use std::path::{Path, PathBuf};

pub use interactive::InteractiveCommand;
pub use search::SearchCommand;
pub use trending::TrendingCommand;

#[async_trait::async_trait]
pub trait Command {
    async fn execute(&self) -> Result<()>;
}

/// Everything a command needs to build its engine.
pub struct EngineSource {
    config: Config,
    data: Option<PathBuf>,
}

impl EngineSource {
    pub fn new(config: Config, data: Option<PathBuf>) -> Self {
        Self { config, data }
    }

    pub fn load(&self) -> Result<SearchEngine> {
        let path = self
            .config
            .data_path(self.data.as_deref())
            .ok_or_eyre("No snapshot given: pass --data <FILE> or set `data-path` in the config file")?;
        load_engine(path, &self.config)
    }
}

fn load_engine(path: &Path, config: &Config) -> Result<SearchEngine> {
    let snapshot = Snapshot::load_from_file(path)
        .wrap_err_with(|| format!("Load snapshot {path:?} error"))?;
    Ok(SearchEngine::with_config(snapshot, config.search.clone()))
}
