//! 表单状态管理
//!
//! 管理编辑分组/链接时的表单输入和验证

use std::collections::HashMap;

/// 当前正在编辑的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditingField {
    GroupName,
    Key,
    OriginalUrl,
}

impl EditingField {
    /// 切换到下一个字段；分组表单只有一个字段
    pub fn next(&self) -> Self {
        match self {
            Self::GroupName => Self::GroupName,
            Self::Key => Self::OriginalUrl,
            Self::OriginalUrl => Self::Key,
        }
    }

    /// 获取字段名称（用于验证错误的 key）
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::GroupName => "group_name",
            Self::Key => "key",
            Self::OriginalUrl => "original_url",
        }
    }

    /// 获取字段显示标题
    pub fn display_title(&self) -> &'static str {
        match self {
            Self::GroupName => "Group Name",
            Self::Key => "Key",
            Self::OriginalUrl => "Original URL",
        }
    }
}

/// 表单状态
#[derive(Debug, Default)]
pub struct FormState {
    /// 分组名输入
    pub group_name: String,
    /// 短链接 key 输入
    pub key: String,
    /// 原始 URL 输入
    pub original_url: String,
    /// 验证错误 (field_name -> error_message)
    pub validation_errors: HashMap<String, String>,
    /// 当前编辑的字段
    pub currently_editing: Option<EditingField>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 用当前分组名填充表单
    pub fn seed_group(&mut self, name: &str) {
        self.clear();
        self.group_name = name.to_string();
        self.currently_editing = Some(EditingField::GroupName);
    }

    /// 用当前链接的 key 和 URL 填充表单
    pub fn seed_link(&mut self, key: &str, original_url: &str) {
        self.clear();
        self.key = key.to_string();
        self.original_url = original_url.to_string();
        self.currently_editing = Some(EditingField::Key);
    }

    /// 清空所有输入
    pub fn clear(&mut self) {
        self.group_name.clear();
        self.key.clear();
        self.original_url.clear();
        self.validation_errors.clear();
        self.currently_editing = None;
    }

    /// 切换到下一个编辑字段
    pub fn toggle_field(&mut self) {
        if let Some(field) = self.currently_editing {
            self.currently_editing = Some(field.next());
        }
    }

    /// 获取当前编辑字段的输入可变引用
    pub fn current_input_mut(&mut self) -> Option<&mut String> {
        match self.currently_editing {
            Some(EditingField::GroupName) => Some(&mut self.group_name),
            Some(EditingField::Key) => Some(&mut self.key),
            Some(EditingField::OriginalUrl) => Some(&mut self.original_url),
            None => None,
        }
    }

    /// 向当前编辑字段添加字符
    pub fn push_char(&mut self, c: char) {
        if let Some(input) = self.current_input_mut() {
            input.push(c);
        }
    }

    /// 从当前编辑字段删除最后一个字符
    pub fn pop_char(&mut self) {
        if let Some(input) = self.current_input_mut() {
            input.pop();
        }
    }

    /// 获取指定字段的验证错误
    pub fn get_error(&self, field: EditingField) -> Option<&String> {
        self.validation_errors.get(field.field_name())
    }

    /// 设置验证错误
    pub fn set_error(&mut self, field: EditingField, error: String) {
        self.validation_errors
            .insert(field.field_name().to_string(), error);
    }

    /// 清除验证错误
    pub fn clear_errors(&mut self) {
        self.validation_errors.clear();
    }

    /// 检查是否有验证错误
    pub fn has_errors(&self) -> bool {
        !self.validation_errors.is_empty()
    }
}
