//! 剪贴板访问
//!
//! 系统剪贴板不可用（无显示服务器、权限被拒绝或配置关闭）时，
//! 调用方退回到阻塞式确认弹窗。

use tracing::debug;

use crate::errors::{LinkflowError, Result};

/// 剪贴板后端
pub trait ClipboardBackend {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// 基于 arboard 的系统剪贴板
///
/// 句柄在第一次复制时才创建，并在之后保持存活（X11 下句柄被释放后
/// 剪贴板内容也会随之丢失）。
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardBackend for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new().map_err(|e| {
                LinkflowError::clipboard(format!("Clipboard unavailable: {}", e))
            })?;
            debug!("System clipboard initialized");
            self.inner = Some(clipboard);
        }

        let Some(clipboard) = self.inner.as_mut() else {
            return Err(LinkflowError::clipboard("Clipboard unavailable"));
        };
        clipboard
            .set_text(text.to_string())
            .map_err(|e| LinkflowError::clipboard(format!("Failed to copy: {}", e)))
    }
}

/// 关闭剪贴板时使用，每次复制都走确认弹窗
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledClipboard;

impl ClipboardBackend for DisabledClipboard {
    fn set_text(&mut self, _text: &str) -> Result<()> {
        Err(LinkflowError::clipboard("Clipboard access is disabled"))
    }
}

/// 根据配置选择剪贴板后端
pub fn from_config(enabled: bool) -> Box<dyn ClipboardBackend> {
    if enabled {
        Box::new(SystemClipboard::new())
    } else {
        Box::new(DisabledClipboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_clipboard_always_fails() {
        let mut clipboard = DisabledClipboard;
        let err = clipboard.set_text("your-domain.com/fb").unwrap_err();
        assert_eq!(err.code(), "E007");
    }
}
