//! 链接分组领域模型
//!
//! 所有实体都是值类型：状态迁移时整体复制，不做原地修改。

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::AsRefStr;

/// 分组 ID（全局唯一）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(pub u64);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 链接 ID（在所属分组内唯一）
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkId(pub String);

impl LinkId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LinkId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for LinkId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// 链接的复合定位符
///
/// Link 本身不持有所属分组的引用，所有编辑/删除/查看接口都通过它定位。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinkRef {
    pub group_id: GroupId,
    pub link_id: LinkId,
}

impl LinkRef {
    pub fn new(group_id: GroupId, link_id: impl Into<LinkId>) -> Self {
        Self {
            group_id,
            link_id: link_id.into(),
        }
    }
}

impl fmt::Display for LinkRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.group_id, self.link_id)
    }
}

/// 链接生命周期状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LinkStatus {
    #[default]
    Active,
    Archived,
}

impl LinkStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// 短链接
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub id: LinkId,
    /// 短路径，例如 `/fb`
    pub key: String,
    pub original_url: String,
    #[serde(default)]
    pub clicks: u64,
    #[serde(default)]
    pub status: LinkStatus,
}

impl Link {
    pub fn new(
        id: impl Into<LinkId>,
        key: impl Into<String>,
        original_url: impl Into<String>,
        clicks: u64,
        status: LinkStatus,
    ) -> Self {
        Self {
            id: id.into(),
            key: key.into(),
            original_url: original_url.into(),
            clicks,
            status,
        }
    }
}

fn default_expanded() -> bool {
    true
}

/// 链接分组
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkGroup {
    pub id: GroupId,
    pub name: String,
    #[serde(default)]
    pub links: Vec<Link>,
    /// 纯展示标记，不影响其他实体
    #[serde(default = "default_expanded")]
    pub is_expanded: bool,
}

impl LinkGroup {
    pub fn new(id: GroupId, name: impl Into<String>, links: Vec<Link>) -> Self {
        Self {
            id,
            name: name.into(),
            links,
            is_expanded: true,
        }
    }

    pub fn collapsed(mut self) -> Self {
        self.is_expanded = false;
        self
    }

    pub fn link(&self, link_id: &LinkId) -> Option<&Link> {
        self.links.iter().find(|link| &link.id == link_id)
    }

    pub fn link_ref(&self, link: &Link) -> LinkRef {
        LinkRef::new(self.id, link.id.clone())
    }
}

/// 链接编辑补丁，仅覆盖给出的字段
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkPatch {
    pub key: Option<String>,
    pub original_url: Option<String>,
}

impl LinkPatch {
    pub fn new(key: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            original_url: Some(original_url.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.key.is_none() && self.original_url.is_none()
    }

    /// 合并到已有链接上，`id` / `clicks` / `status` 保持不变
    pub fn apply_to(&self, link: &Link) -> Link {
        Link {
            key: self.key.clone().unwrap_or_else(|| link.key.clone()),
            original_url: self
                .original_url
                .clone()
                .unwrap_or_else(|| link.original_url.clone()),
            ..link.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_keeps_counters() {
        let link = Link::new("a3", "/tiktok", "https://tiktok.com", 10500, LinkStatus::Active);
        let patched = LinkPatch::new("/tt", "https://tiktok.com/x").apply_to(&link);

        assert_eq!(patched.id, link.id);
        assert_eq!(patched.key, "/tt");
        assert_eq!(patched.original_url, "https://tiktok.com/x");
        assert_eq!(patched.clicks, 10500);
        assert_eq!(patched.status, LinkStatus::Active);
    }

    #[test]
    fn test_partial_patch() {
        let link = Link::new("b1", "/website", "https://example.com", 50, LinkStatus::Archived);
        let patch = LinkPatch {
            key: Some("/site".to_string()),
            original_url: None,
        };
        let patched = patch.apply_to(&link);

        assert_eq!(patched.key, "/site");
        assert_eq!(patched.original_url, "https://example.com");
        assert!(!LinkPatch::default().apply_to(&link).key.is_empty());
        assert!(LinkPatch::default().is_empty());
    }

    #[test]
    fn test_status_serde() {
        let json = serde_json::to_string(&LinkStatus::Archived).unwrap();
        assert_eq!(json, "\"archived\"");
        let parsed: LinkStatus = serde_json::from_str("\"active\"").unwrap();
        assert!(parsed.is_active());
        assert_eq!(LinkStatus::Archived.to_string(), "archived");
    }

    #[test]
    fn test_group_defaults_to_expanded() {
        let group: LinkGroup = serde_json::from_str(r#"{"id": 7, "name": "Misc"}"#).unwrap();
        assert!(group.is_expanded);
        assert!(group.links.is_empty());
        assert_eq!(group.id, GroupId(7));
    }
}
