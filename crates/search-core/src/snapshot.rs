// search-core/src/snapshot.rs
//! 数据快照
//!
//! 搜索引擎构造时接收的只读数据集。实体以 `Arc` 持有，
//! 搜索结果与快照共享同一份实体（按身份引用，不复制、不伪造）。

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use crate::models::{EntityKind, Post, Sneaker, User};

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed snapshot document")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: EntityKind, id: String },
}

/// 数据提供方的 JSON 文档格式
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SnapshotDocument {
    users: Vec<User>,
    sneakers: Vec<Sneaker>,
    posts: Vec<Post>,
}

/// 用户、球鞋、动态三个有序集合
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    users: Vec<Arc<User>>,
    sneakers: Vec<Arc<Sneaker>>,
    posts: Vec<Arc<Post>>,
}

impl Snapshot {
    /// 创建快照，同类实体的 id 必须唯一
    pub fn new(
        users: Vec<User>,
        sneakers: Vec<Sneaker>,
        posts: Vec<Post>,
    ) -> Result<Self, SnapshotError> {
        ensure_unique(EntityKind::User, users.iter().map(|u| u.id.as_str()))?;
        ensure_unique(EntityKind::Sneaker, sneakers.iter().map(|s| s.id.as_str()))?;
        ensure_unique(EntityKind::Post, posts.iter().map(|p| p.id.as_str()))?;

        Ok(Self {
            users: users.into_iter().map(Arc::new).collect(),
            sneakers: sneakers.into_iter().map(Arc::new).collect(),
            posts: posts.into_iter().map(Arc::new).collect(),
        })
    }

    pub fn from_json_str(content: &str) -> Result<Self, SnapshotError> {
        let doc: SnapshotDocument = serde_json::from_str(content)?;
        Self::new(doc.users, doc.sneakers, doc.posts)
    }

    /// 从 JSON 文件加载快照
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot = Self::from_json_str(&content)?;
        tracing::info!(
            "快照已加载: {:?} ({} 用户, {} 球鞋, {} 动态)",
            path,
            snapshot.users.len(),
            snapshot.sneakers.len(),
            snapshot.posts.len()
        );
        Ok(snapshot)
    }

    pub fn users(&self) -> &[Arc<User>] {
        &self.users
    }

    pub fn sneakers(&self) -> &[Arc<Sneaker>] {
        &self.sneakers
    }

    pub fn posts(&self) -> &[Arc<Post>] {
        &self.posts
    }
}

fn ensure_unique<'a>(
    kind: EntityKind,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), SnapshotError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(SnapshotError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const DOCUMENT: &str = r#"{
        "users": [
            { "id": "u1", "username": "jordanfan23", "displayName": "Jordan Fan", "bio": "Collector" }
        ],
        "sneakers": [
            { "id": "s1", "brand": "Nike", "model": "Air Force 1", "colorway": "Triple White",
              "description": "Classic low", "ownedByUsers": 1500 }
        ],
        "posts": [
            { "id": "p1", "caption": "Fresh pickup", "sneakerTags": ["AF1", "Nike"] }
        ]
    }"#;

    #[test]
    fn test_parse_camel_case_document() {
        let snapshot = Snapshot::from_json_str(DOCUMENT).unwrap();
        assert_eq!(snapshot.users()[0].display_name, "Jordan Fan");
        assert_eq!(snapshot.sneakers()[0].owned_by_users, 1500);
        assert_eq!(snapshot.posts()[0].sneaker_tags, vec!["AF1", "Nike"]);
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let snapshot = Snapshot::from_json_str(r#"{ "sneakers": [] }"#).unwrap();
        assert!(snapshot.users().is_empty());
        assert!(snapshot.posts().is_empty());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let users = vec![
            User::new("u1", "a", "A", ""),
            User::new("u1", "b", "B", ""),
        ];
        let err = Snapshot::new(users, vec![], vec![]).unwrap_err();
        assert!(matches!(
            err,
            SnapshotError::DuplicateId { kind: EntityKind::User, ref id } if id == "u1"
        ));
        assert_eq!(err.to_string(), "duplicate user id 'u1'");
    }

    #[test]
    fn test_same_id_across_kinds_is_allowed() {
        let snapshot = Snapshot::new(
            vec![User::new("1", "a", "A", "")],
            vec![Sneaker::new("1", "Nike", "Dunk", "", "", 0)],
            vec![Post::new("1", "", Vec::<String>::new())],
        );
        assert!(snapshot.is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DOCUMENT.as_bytes()).unwrap();

        let snapshot = Snapshot::load_from_file(file.path()).unwrap();
        assert_eq!(snapshot.users().len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Snapshot::load_from_file("/nonexistent/snapshot.json").unwrap_err();
        assert!(matches!(err, SnapshotError::Io { .. }));
    }

    #[test]
    fn test_malformed_document() {
        let err = Snapshot::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, SnapshotError::Parse(_)));
    }
}
