//! 初始数据
//!
//! 内置的示例数据，以及从 JSON 文件加载/导出同样结构的数据。

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use super::models::{GroupId, Link, LinkGroup, LinkStatus};
use crate::errors::{LinkflowError, Result};

/// 内置示例数据
pub fn default_seed() -> Vec<LinkGroup> {
    vec![
        LinkGroup::new(
            GroupId(1),
            "Campaign \"Back to School 2024\"",
            vec![
                Link::new(
                    "a1",
                    "/ytb",
                    "https://youtube.com/campaign-name",
                    1200,
                    LinkStatus::Active,
                ),
                Link::new(
                    "a2",
                    "/fb",
                    "https://facebook.com/campaign-name",
                    2500,
                    LinkStatus::Active,
                ),
                Link::new(
                    "a3",
                    "/tiktok",
                    "https://tiktok.com/campaign-name",
                    10500,
                    LinkStatus::Active,
                ),
            ],
        ),
        LinkGroup::new(
            GroupId(2),
            "Social Media Links (General)",
            vec![
                Link::new(
                    "b1",
                    "/website",
                    "https://your-site.com",
                    50,
                    LinkStatus::Archived,
                ),
                Link::new(
                    "b2",
                    "/blog",
                    "https://your-site.com/blog",
                    230,
                    LinkStatus::Active,
                ),
            ],
        )
        .collapsed(),
    ]
}

/// 校验分组数据的不变量
///
/// - 分组 ID 全局唯一，链接 ID 在分组内唯一
/// - 分组名、key、原始 URL 去空白后不为空
pub fn validate_seed(groups: &[LinkGroup]) -> Result<()> {
    let mut group_ids = HashSet::new();
    for group in groups {
        if !group_ids.insert(group.id) {
            return Err(LinkflowError::validation(format!(
                "Duplicate group id: {}",
                group.id
            )));
        }
        if group.name.trim().is_empty() {
            return Err(LinkflowError::validation(format!(
                "Group {} has an empty name",
                group.id
            )));
        }

        let mut link_ids = HashSet::new();
        for link in &group.links {
            if !link_ids.insert(&link.id) {
                return Err(LinkflowError::validation(format!(
                    "Duplicate link id '{}' in group {}",
                    link.id, group.id
                )));
            }
            if link.key.trim().is_empty() || link.original_url.trim().is_empty() {
                return Err(LinkflowError::validation(format!(
                    "Link '{}' in group {} needs both a key and an original URL",
                    link.id, group.id
                )));
            }
        }
    }
    Ok(())
}

/// 解析 JSON 格式的分组数据
pub fn parse_seed(content: &str) -> Result<Vec<LinkGroup>> {
    let groups: Vec<LinkGroup> = serde_json::from_str(content)?;
    validate_seed(&groups)?;
    Ok(groups)
}

/// 从文件加载分组数据
pub fn load_seed<P: AsRef<Path>>(path: P) -> Result<Vec<LinkGroup>> {
    let path = path.as_ref();
    debug!("Loading seed data from: {}", path.display());

    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => {
            LinkflowError::not_found(format!("Seed file not found: {}", path.display()))
        }
        _ => LinkflowError::file_operation(format!("Failed to read {}: {}", path.display(), e)),
    })?;
    let groups = parse_seed(&content)?;

    info!(
        "Loaded {} groups ({} links) from {}",
        groups.len(),
        groups.iter().map(|g| g.links.len()).sum::<usize>(),
        path.display()
    );
    Ok(groups)
}

/// 序列化为 JSON
pub fn render_seed(groups: &[LinkGroup]) -> Result<String> {
    Ok(serde_json::to_string_pretty(groups)?)
}

/// 导出到文件
pub fn export_seed<P: AsRef<Path>>(groups: &[LinkGroup], path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, render_seed(groups)?)?;
    Ok(())
}
