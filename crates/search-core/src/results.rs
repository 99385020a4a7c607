// search-core/src/results.rs
//! 搜索结果与引擎状态

use std::sync::Arc;

use crate::filter::FilterOption;
use crate::models::{Post, Sneaker, User};

/// 一次搜索的完整结果，三组按快照顺序排列
#[derive(Debug, Clone, Default)]
pub struct SearchResults {
    pub users: Vec<Arc<User>>,
    pub sneakers: Vec<Arc<Sneaker>>,
    pub posts: Vec<Arc<Post>>,
}

/// 按过滤器投影后的结果视图（只借用，不修改原结果）
#[derive(Debug, Clone, Copy)]
pub struct ResultView<'a> {
    pub users: &'a [Arc<User>],
    pub sneakers: &'a [Arc<Sneaker>],
    pub posts: &'a [Arc<Post>],
}

impl SearchResults {
    pub fn total(&self) -> usize {
        self.users.len() + self.sneakers.len() + self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Project the results through `filter` for display.
    pub fn visible(&self, filter: FilterOption) -> ResultView<'_> {
        fn pick<T>(show: bool, items: &[T]) -> &[T] {
            if show { items } else { &[] }
        }

        ResultView {
            users: pick(filter.shows_users(), &self.users),
            sneakers: pick(filter.shows_sneakers(), &self.sneakers),
            posts: pick(filter.shows_posts(), &self.posts),
        }
    }
}

impl ResultView<'_> {
    pub fn total(&self) -> usize {
        self.users.len() + self.sneakers.len() + self.posts.len()
    }
}

/// 引擎对外可见的已提交状态
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub query: String,
    pub active_filter: FilterOption,
    pub results: Arc<SearchResults>,
    /// 每次重新计算或清空结果时递增
    pub revision: u64,
    /// 防抖任务用来判断自己是否已经过期
    pub(crate) generation: u64,
}

impl SearchState {
    /// 查询非空但三组结果都为空时，展示层应提示“没有找到结果”
    pub fn no_results_found(&self) -> bool {
        !self.query.is_empty() && self.results.is_empty()
    }

    pub fn visible(&self) -> ResultView<'_> {
        self.results.visible(self.active_filter)
    }
}
