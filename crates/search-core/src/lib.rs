// search-core/src/lib.rs
//! Sneakergram 搜索与发现核心库
//!
//! 在只读快照（用户、球鞋、动态）上提供：
//! - 不区分大小写的子串搜索
//! - 展示用的结果分组过滤器
//! - 热门球鞋榜单
//! - 输入防抖

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;

pub mod config;
pub mod debounce;
pub mod filter;
pub mod models;
pub mod results;
pub mod search;
pub mod snapshot;

// 重导出核心类型
pub use config::{ConfigError, SearchConfig};
pub use debounce::Debouncer;
pub use filter::FilterOption;
pub use models::{EntityKind, Post, Sneaker, User};
pub use results::{ResultView, SearchResults, SearchState};
pub use search::{search_snapshot, trending_sneakers};
pub use snapshot::{Snapshot, SnapshotError};

/// 搜索引擎统一入口
///
/// 状态只由引擎自身修改。每次提交都在同一把锁内整体替换三组结果，
/// 订阅者只会看到完整提交后的状态。
pub struct SearchEngine {
    snapshot: Arc<Snapshot>,
    trending: Vec<Arc<Sneaker>>,
    state: Arc<watch::Sender<SearchState>>,
    debouncer: Debouncer,
    /// 防抖定时器实际触发的重新计算次数（含被丢弃的过期计算）
    debounced_recomputes: Arc<AtomicU64>,
    config: SearchConfig,
}

impl SearchEngine {
    pub fn new(snapshot: Snapshot) -> Self {
        Self::with_config(snapshot, SearchConfig::default())
    }

    /// 创建搜索引擎实例，热门榜单在此计算一次
    pub fn with_config(snapshot: Snapshot, config: SearchConfig) -> Self {
        let snapshot = Arc::new(snapshot);
        let trending = trending_sneakers(&snapshot, config.trending_limit);
        let (state, _) = watch::channel(SearchState::default());

        tracing::debug!(
            "[引擎] 初始化完成: 热门榜单 {} 项, 防抖 {:?}",
            trending.len(),
            config.debounce()
        );

        Self {
            snapshot,
            trending,
            state: Arc::new(state),
            debouncer: Debouncer::new(config.debounce()),
            debounced_recomputes: Arc::new(AtomicU64::new(0)),
            config,
        }
    }

    /// 立即更新查询串，并在防抖窗口结束后重新计算结果
    pub fn set_query(&self, text: impl Into<String>) {
        let text = text.into();
        // 递增 generation 与登记定时任务在同一把锁内完成，并发调用时最后登记的任务一定是最新的
        self.debouncer.schedule_with(|| {
            let mut generation = 0;
            self.state.send_modify(|state| {
                state.query = text.clone();
                state.generation += 1;
                generation = state.generation;
            });

            let snapshot = self.snapshot.clone();
            let state = self.state.clone();
            let recomputes = self.debounced_recomputes.clone();
            move || {
                recomputes.fetch_add(1, Ordering::Relaxed);
                let results = search_snapshot(&snapshot, &text);
                let committed = state.send_if_modified(|current| {
                    // 期间有更新的调用，放弃这次结果
                    if current.generation != generation {
                        return false;
                    }
                    current.results = Arc::new(results);
                    current.revision += 1;
                    true
                });
                if !committed {
                    tracing::debug!("[防抖] 丢弃过期的查询 '{}'", text);
                }
            }
        });
    }

    /// 同步搜索：跳过防抖，立即计算并提交结果
    pub fn search(&self, text: impl Into<String>) {
        let text = text.into();
        self.debouncer.cancel();

        let results = Arc::new(search_snapshot(&self.snapshot, &text));
        self.state.send_modify(|state| {
            state.query = text;
            state.results = results;
            state.generation += 1;
            state.revision += 1;
        });
    }

    /// 只记录分组选项，不触发重新计算
    pub fn set_filter(&self, option: FilterOption) {
        self.state.send_if_modified(|state| {
            let changed = state.active_filter != option;
            state.active_filter = option;
            changed
        });
    }

    /// 清空查询与结果，保留当前过滤器
    pub fn clear_search(&self) {
        if self.debouncer.cancel() {
            tracing::debug!("[防抖] 清空搜索，取消待执行的计算");
        }
        self.state.send_modify(|state| {
            state.query.clear();
            state.results = Arc::new(SearchResults::default());
            state.generation += 1;
            state.revision += 1;
        });
    }

    pub fn trending(&self) -> &[Arc<Sneaker>] {
        &self.trending
    }

    pub fn query(&self) -> String {
        self.state.borrow().query.clone()
    }

    pub fn active_filter(&self) -> FilterOption {
        self.state.borrow().active_filter
    }

    pub fn results(&self) -> Arc<SearchResults> {
        self.state.borrow().results.clone()
    }

    /// 当前已提交状态的副本
    pub fn state(&self) -> SearchState {
        self.state.borrow().clone()
    }

    /// 订阅状态变化（查询回显、过滤器切换、结果提交）
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    /// 防抖定时器已触发的重新计算次数
    pub fn debounced_recomputes(&self) -> u64 {
        self.debounced_recomputes.load(Ordering::Relaxed)
    }

    pub fn has_pending_search(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}
