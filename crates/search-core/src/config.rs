// search-core/src/config.rs
//! 配置模块

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_TRENDING_LIMIT: usize = 10;
/// 热门榜单最多 10 项
pub const MAX_TRENDING_LIMIT: usize = DEFAULT_TRENDING_LIMIT;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config")]
    Parse(#[from] toml::de::Error),
    #[error("trending-limit {0} exceeds the maximum of {max}", max = MAX_TRENDING_LIMIT)]
    TrendingLimitTooLarge(usize),
}

/// 搜索引擎配置
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct SearchConfig {
    /// set_query 的防抖窗口（毫秒）
    pub debounce_ms: u64,
    /// 热门榜单长度，不超过 `MAX_TRENDING_LIMIT`
    pub trending_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            trending_limit: DEFAULT_TRENDING_LIMIT,
        }
    }
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// 检查取值范围，反序列化之后调用
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trending_limit > MAX_TRENDING_LIMIT {
            return Err(ConfigError::TrendingLimitTooLarge(self.trending_limit));
        }
        Ok(())
    }

    /// 从 TOML 文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// 尝试加载配置，失败则使用默认值
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::load_from_file(path).unwrap_or_else(|e| {
            tracing::warn!("使用默认搜索配置: {}", e);
            Self::default()
        })
    }
}
