//! Group and link operations driven from the dashboard

use tracing::{info, warn};

use super::navigation::DashboardRow;
use super::state::{App, EditingField, Overlay};
use crate::store::{Action, LinkPatch, Modal};
use crate::utils::short_link;

impl App {
    /// 为光标所在行打开编辑弹窗，并用当前值填充表单
    pub fn open_edit_for_row(&mut self) {
        let modal = match self.current_row() {
            Some(DashboardRow::Group(group_id)) => self
                .store
                .group(group_id)
                .map(|group| Modal::EditGroup(group.clone())),
            Some(DashboardRow::Link(target)) => self
                .store
                .link(&target)
                .map(|link| Modal::EditLink {
                    target: target.clone(),
                    link: link.clone(),
                }),
            None => None,
        };
        let Some(modal) = modal else {
            return;
        };

        match &modal {
            Modal::EditGroup(group) => self.form.seed_group(&group.name),
            Modal::EditLink { link, .. } => self.form.seed_link(&link.key, &link.original_url),
            Modal::DeleteGroup(_) | Modal::DeleteLink { .. } => {}
        }
        self.dispatch(Action::OpenModal(modal));
    }

    /// 为光标所在行打开删除确认
    pub fn open_delete_for_row(&mut self) {
        let modal = match self.current_row() {
            Some(DashboardRow::Group(group_id)) => self
                .store
                .group(group_id)
                .map(|group| Modal::DeleteGroup(group.clone())),
            Some(DashboardRow::Link(target)) => {
                self.store.link(&target).map(|link| Modal::DeleteLink {
                    target: target.clone(),
                    link: link.clone(),
                })
            }
            None => None,
        };
        if let Some(modal) = modal {
            self.form.clear();
            self.dispatch(Action::OpenModal(modal));
        }
    }

    /// 提交当前弹窗
    ///
    /// 编辑表单存在空字段时不发出命令，弹窗保持打开并显示提示。
    pub fn submit_modal(&mut self) {
        let Some(modal) = self.state().modal.clone() else {
            return;
        };

        let (action, message) = match modal {
            Modal::EditGroup(group) => {
                self.validate_inputs();
                if self.has_validation_errors() {
                    warn!("Rename of group {} blocked: name is blank", group.id);
                    return;
                }
                let name = self.form.group_name.trim().to_string();
                let message = format!("Group renamed to {}", name);
                (
                    Action::RenameGroup {
                        group_id: group.id,
                        name,
                    },
                    message,
                )
            }
            Modal::EditLink { target, .. } => {
                self.validate_inputs();
                if self.has_validation_errors() {
                    warn!("Update of link {} blocked: blank fields", target);
                    return;
                }
                let patch = LinkPatch::new(self.form.key.trim(), self.form.original_url.trim());
                let message = format!("Link {} updated", self.form.key.trim());
                (Action::UpdateLink { target, patch }, message)
            }
            Modal::DeleteGroup(group) => (
                Action::DeleteGroup(group.id),
                format!(
                    "Group {} deleted with {} links",
                    group.name,
                    group.links.len()
                ),
            ),
            Modal::DeleteLink { target, link } => (
                Action::DeleteLink(target),
                format!("Link {} deleted", link.key),
            ),
        };

        self.dispatch(action);
        if self.state().modal.is_none() {
            info!("{}", message);
            self.form.clear();
            self.set_status(message);
        } else if let Some(field) = self.form.currently_editing {
            // Store 拒绝时把错误挂到当前字段上
            let error = std::mem::take(&mut self.error_message);
            self.form.set_error(field, error);
        }
    }

    /// 关闭弹窗，丢弃未提交的输入
    pub fn cancel_modal(&mut self) {
        self.form.clear();
        self.dispatch(Action::CloseModal);
    }

    /// 编辑表单中输入字符并实时验证
    pub fn input_char(&mut self, c: char) {
        self.form.push_char(c);
        self.validate_inputs();
    }

    pub fn input_backspace(&mut self) {
        self.form.pop_char();
        self.validate_inputs();
    }

    /// Tab 在链接表单的 key 与 URL 之间切换
    pub fn next_field(&mut self) {
        if matches!(
            self.form.currently_editing,
            Some(EditingField::Key | EditingField::OriginalUrl)
        ) {
            self.form.toggle_field();
        }
    }

    // ========== 剪贴板 ==========

    /// 复制光标所在链接的完整短链接
    pub fn copy_row_link(&mut self) {
        let Some(DashboardRow::Link(target)) = self.current_row() else {
            return;
        };
        if let Some(key) = self.store.link(&target).map(|link| link.key.clone()) {
            self.copy_short_link(&key);
        }
    }

    /// 复制 `short_domain + key`；剪贴板不可用时弹出阻塞提示
    pub fn copy_short_link(&mut self, key: &str) {
        let text = short_link(&self.short_domain, key);
        match self.clipboard.set_text(&text) {
            Ok(()) => {
                info!("Copied {} to clipboard", text);
                self.set_status(format!("Copied: {}", text));
            }
            Err(e) => {
                info!("{}, showing copy notice for {}", e, text);
                self.overlay = Some(Overlay::CopyNotice(text));
            }
        }
    }

    /// 确认复制提示
    pub fn acknowledge_notice(&mut self) {
        if let Some(Overlay::CopyNotice(text)) = self.overlay.take() {
            self.set_status(format!("Short link: {}", text));
        }
    }

    /// "Create new link" 尚未接入
    pub fn create_link_stub(&mut self) {
        self.set_error("Creating links is not available yet");
    }

    /// 顶栏搜索框同样只是占位
    pub fn search_stub(&mut self) {
        self.set_error("Search is not available yet");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UiConfig;
    use crate::errors::Result;
    use crate::interfaces::tui::clipboard::{ClipboardBackend, DisabledClipboard};
    use crate::store::{GroupId, Store, seed::default_seed};

    struct AcceptingClipboard;

    impl ClipboardBackend for AcceptingClipboard {
        fn set_text(&mut self, _text: &str) -> Result<()> {
            Ok(())
        }
    }

    fn app() -> App {
        App::new(Store::new(default_seed()), &UiConfig::default())
            .with_clipboard(Box::new(AcceptingClipboard))
    }

    #[test]
    fn test_edit_group_seeds_form_and_renames() {
        let mut app = app();
        app.open_edit_for_row();
        assert!(matches!(app.state().modal, Some(Modal::EditGroup(_))));
        assert_eq!(app.form.group_name, "Campaign \"Back to School 2024\"");

        app.form.group_name = "  Fall 2024 ".to_string();
        app.submit_modal();
        assert!(app.state().modal.is_none());
        assert_eq!(app.store.group(GroupId(1)).unwrap().name, "Fall 2024");
        assert_eq!(app.status_message, "Group renamed to Fall 2024");
    }

    #[test]
    fn test_blank_name_keeps_modal_open() {
        let mut app = app();
        app.open_edit_for_row();
        app.form.group_name.clear();
        app.submit_modal();

        assert!(matches!(app.state().modal, Some(Modal::EditGroup(_))));
        assert!(app.form.get_error(EditingField::GroupName).is_some());
        assert_eq!(
            app.store.group(GroupId(1)).unwrap().name,
            "Campaign \"Back to School 2024\""
        );
    }

    #[test]
    fn test_delete_link_row() {
        let mut app = app();
        app.cursor = 2;
        app.open_delete_for_row();
        assert!(matches!(app.state().modal, Some(Modal::DeleteLink { .. })));

        app.submit_modal();
        assert_eq!(app.store.total_links(), 4);
        assert_eq!(app.status_message, "Link /fb deleted");
    }

    #[test]
    fn test_cancel_keeps_data() {
        let mut app = app();
        app.open_delete_for_row();
        app.cancel_modal();
        assert!(app.state().modal.is_none());
        assert_eq!(app.state().groups.len(), 2);
    }

    #[test]
    fn test_copy_success_reports_status() {
        let mut app = app();
        app.cursor = 2;
        app.copy_row_link();
        assert!(app.overlay.is_none());
        assert_eq!(app.status_message, "Copied: your-domain.com/fb");
    }

    #[test]
    fn test_copy_failure_shows_notice() {
        let mut app = app().with_clipboard(Box::new(DisabledClipboard));
        app.cursor = 1;
        app.copy_row_link();
        assert_eq!(
            app.overlay,
            Some(Overlay::CopyNotice("your-domain.com/ytb".to_string()))
        );

        app.acknowledge_notice();
        assert!(app.overlay.is_none());
    }

    #[test]
    fn test_copy_on_group_row_does_nothing() {
        let mut app = app().with_clipboard(Box::new(DisabledClipboard));
        app.copy_row_link();
        assert!(app.overlay.is_none());
        assert!(app.status_message.is_empty());
    }
}
