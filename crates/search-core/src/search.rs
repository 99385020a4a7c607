// search-core/src/search.rs
//! 搜索模块
//!
//! 不区分大小写的子串匹配（查询与字段都先转小写），
//! 以及按拥有人数排序的热门榜单。

use std::sync::Arc;

use crate::config::MAX_TRENDING_LIMIT;
use crate::models::{Post, Sneaker, User};
use crate::results::SearchResults;
use crate::snapshot::Snapshot;

/// 已转小写的查询串
#[derive(Debug, Clone)]
pub struct Needle(String);

impl Needle {
    pub fn new(query: &str) -> Self {
        Self(query.to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn found_in(&self, field: &str) -> bool {
        field.to_lowercase().contains(&self.0)
    }
}

pub fn user_matches(user: &User, needle: &Needle) -> bool {
    needle.found_in(&user.username)
        || needle.found_in(&user.display_name)
        || needle.found_in(&user.bio)
}

pub fn sneaker_matches(sneaker: &Sneaker, needle: &Needle) -> bool {
    needle.found_in(&sneaker.brand)
        || needle.found_in(&sneaker.model)
        || needle.found_in(&sneaker.colorway)
        || needle.found_in(&sneaker.description)
}

pub fn post_matches(post: &Post, needle: &Needle) -> bool {
    needle.found_in(&post.caption) || post.sneaker_tags.iter().any(|tag| needle.found_in(tag))
}

/// 在快照上执行一次完整搜索
///
/// 空查询直接返回空结果，而不是“匹配全部”。结果保持快照中的顺序。
pub fn search_snapshot(snapshot: &Snapshot, query: &str) -> SearchResults {
    let needle = Needle::new(query);
    if needle.is_empty() {
        return SearchResults::default();
    }

    let results = SearchResults {
        users: collect_matches(snapshot.users(), |u| user_matches(u, &needle)),
        sneakers: collect_matches(snapshot.sneakers(), |s| sneaker_matches(s, &needle)),
        posts: collect_matches(snapshot.posts(), |p| post_matches(p, &needle)),
    };

    tracing::debug!(
        "[搜索] 查询 '{}': {} 用户, {} 球鞋, {} 动态",
        query,
        results.users.len(),
        results.sneakers.len(),
        results.posts.len()
    );
    results
}

fn collect_matches<T>(items: &[Arc<T>], pred: impl Fn(&T) -> bool) -> Vec<Arc<T>> {
    items.iter().filter(|item| pred(item)).cloned().collect()
}

/// 热门球鞋：按拥有人数降序稳定排序，取前 `limit` 个（最多 `MAX_TRENDING_LIMIT` 个）
pub fn trending_sneakers(snapshot: &Snapshot, limit: usize) -> Vec<Arc<Sneaker>> {
    let mut ranked = snapshot.sneakers().to_vec();
    // sort_by 是稳定排序，人数相同保持快照顺序
    ranked.sort_by(|a, b| b.owned_by_users.cmp(&a.owned_by_users));
    ranked.truncate(limit.min(MAX_TRENDING_LIMIT));
    ranked
}
