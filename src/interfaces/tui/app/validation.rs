//! Input validation logic

use super::state::{App, EditingField};
use crate::store::{Modal, require_text};

impl App {
    /// Validate current input and update validation_errors
    ///
    /// 规则与 Store 一致：去除首尾空白后不能为空。
    pub fn validate_inputs(&mut self) {
        self.form.clear_errors();

        let fields: &[EditingField] = match self.state().modal {
            Some(Modal::EditGroup(_)) => &[EditingField::GroupName],
            Some(Modal::EditLink { .. }) => &[EditingField::Key, EditingField::OriginalUrl],
            _ => &[],
        };

        for field in fields {
            let value = match field {
                EditingField::GroupName => &self.form.group_name,
                EditingField::Key => &self.form.key,
                EditingField::OriginalUrl => &self.form.original_url,
            };
            if let Err(e) = require_text(field.display_title(), value) {
                self.form.set_error(*field, e.message().to_string());
            }
        }
    }

    /// Check if current form has any validation errors
    pub fn has_validation_errors(&self) -> bool {
        self.form.has_errors()
    }
}
