//! 应用状态快照
//!
//! `AppState` 是 Store 对外发布的只读快照；视图只读取它，从不直接修改。

use strum::AsRefStr;

use super::models::{GroupId, Link, LinkGroup, LinkRef};

/// 顶层视图
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, AsRefStr)]
#[strum(serialize_all = "camelCase")]
pub enum View {
    #[default]
    Dashboard,
    GlobalStats,
    KeyStats,
    /// 导航入口存在，但尚无对应视图
    AllLinks,
    /// 导航入口存在，但尚无对应视图
    Settings,
}

impl View {
    /// 视图标题
    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::GlobalStats => "Global Statistics",
            Self::KeyStats => "Key Statistics",
            Self::AllLinks => "All Links",
            Self::Settings => "Settings",
        }
    }

    /// 是否有实际的视图实现
    pub fn is_implemented(&self) -> bool {
        matches!(self, Self::Dashboard | Self::GlobalStats | Self::KeyStats)
    }
}

/// 当前弹窗，每个变体携带自己的强类型载荷
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    EditGroup(LinkGroup),
    DeleteGroup(LinkGroup),
    EditLink { target: LinkRef, link: Link },
    DeleteLink { target: LinkRef, link: Link },
}

impl Modal {
    pub fn title(&self) -> &'static str {
        match self {
            Self::EditGroup(_) => "Edit Link Group",
            Self::DeleteGroup(_) => "Confirm Group Deletion",
            Self::EditLink { .. } => "Edit Link",
            Self::DeleteLink { .. } => "Confirm Link Deletion",
        }
    }

    /// 弹窗目标的显示名称（分组名或链接 key）
    pub fn target_name(&self) -> &str {
        match self {
            Self::EditGroup(group) | Self::DeleteGroup(group) => &group.name,
            Self::EditLink { link, .. } | Self::DeleteLink { link, .. } => &link.key,
        }
    }

    pub fn is_delete(&self) -> bool {
        matches!(self, Self::DeleteGroup(_) | Self::DeleteLink { .. })
    }
}

/// 完整的应用状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub groups: Vec<LinkGroup>,
    pub view: View,
    /// 详情视图选中的链接
    pub selected: Option<LinkRef>,
    pub sidebar_open: bool,
    pub modal: Option<Modal>,
}

impl AppState {
    pub fn new(groups: Vec<LinkGroup>) -> Self {
        Self {
            groups,
            view: View::Dashboard,
            selected: None,
            sidebar_open: true,
            modal: None,
        }
    }

    pub fn group(&self, group_id: GroupId) -> Option<&LinkGroup> {
        self.groups.iter().find(|group| group.id == group_id)
    }

    pub(crate) fn group_mut(&mut self, group_id: GroupId) -> Option<&mut LinkGroup> {
        self.groups.iter_mut().find(|group| group.id == group_id)
    }

    pub fn link(&self, target: &LinkRef) -> Option<&Link> {
        self.group(target.group_id)
            .and_then(|group| group.link(&target.link_id))
    }

    /// 当前选中且仍然存在的链接
    pub fn selected_link(&self) -> Option<&Link> {
        self.selected.as_ref().and_then(|target| self.link(target))
    }

    pub fn total_links(&self) -> usize {
        self.groups.iter().map(|group| group.links.len()).sum()
    }
}
