// search-core/src/models.rs
//! 数据模型定义
//!
//! 三类实体均由外部数据提供方拥有，搜索核心只读。

use serde::{Deserialize, Serialize};

/// 用户
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub display_name: String,
    #[serde(default)]
    pub bio: String,
}

/// 球鞋
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sneaker {
    pub id: String,
    pub brand: String,
    pub model: String,
    #[serde(default)]
    pub colorway: String,
    #[serde(default)]
    pub description: String,
    /// 拥有该鞋款的用户数
    #[serde(default)]
    pub owned_by_users: u64,
}

/// 动态
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub sneaker_tags: Vec<String>,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        display_name: impl Into<String>,
        bio: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            display_name: display_name.into(),
            bio: bio.into(),
        }
    }
}

impl Sneaker {
    pub fn new(
        id: impl Into<String>,
        brand: impl Into<String>,
        model: impl Into<String>,
        colorway: impl Into<String>,
        description: impl Into<String>,
        owned_by_users: u64,
    ) -> Self {
        Self {
            id: id.into(),
            brand: brand.into(),
            model: model.into(),
            colorway: colorway.into(),
            description: description.into(),
            owned_by_users,
        }
    }
}

impl Post {
    pub fn new<I, S>(id: impl Into<String>, caption: impl Into<String>, sneaker_tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            caption: caption.into(),
            sneaker_tags: sneaker_tags.into_iter().map(Into::into).collect(),
        }
    }
}

/// 实体种类，用于错误信息和展示分组
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum EntityKind {
    User,
    Sneaker,
    Post,
}
