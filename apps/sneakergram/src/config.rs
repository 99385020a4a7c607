use crate::error::{Result, WrapErr};
use config::create_strategy;
use search_core::SearchConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Config {
    /// 默认加载的快照文件，命令行 `--data` 优先
    pub data_path: Option<PathBuf>,
    pub search: SearchConfig,
}

const EXAMPLE_CONFIG: &str = r#"# Sneakergram 配置文件
#
# 此文件在首次运行时自动创建

# 快照文件（JSON，包含 users / sneakers / posts）
# data-path = "/path/to/snapshot.json"

[search]
# 输入防抖窗口（毫秒）
debounce-ms = 300
# 热门榜单长度
trending-limit = 10
"#;

impl Config {
    fn load_str(user_config_str: &str) -> Result<Config> {
        let user_config: Config = toml::from_str(user_config_str)?;
        user_config.search.validate()?;
        Ok(user_config)
    }

    pub fn load() -> Result<Config> {
        let strategy = create_strategy()?;
        let config_path = config::cli_config_path(&strategy);
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Config> {
        match std::fs::read_to_string(config_path) {
            Ok(user_config_str) => Self::load_str(&user_config_str)
                .wrap_err_with(|| format!("Invalid configuration file {config_path:?}")),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // 配置文件不存在，创建示例配置文件
                if let Err(e) = Self::create_example_config(config_path) {
                    tracing::warn!("无法创建示例配置 {:?}: {}", config_path, e);
                }
                Ok(Config::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Snapshot to load: the command-line path wins over `data-path`.
    pub fn data_path<'a>(&'a self, cli_data: Option<&'a Path>) -> Option<&'a Path> {
        cli_data.or(self.data_path.as_deref())
    }

    fn create_example_config(config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(config_path, EXAMPLE_CONFIG)?;
        tracing::info!("已创建配置文件: {:?}", config_path);
        Ok(())
    }
}
