//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑以及列表和弹窗的处理方法

use tracing::{debug, warn};

use super::actions::Action;
use super::state::{App, Dialog};

impl App {
    /// 核心逻辑分发，返回是否退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::MoveSelectionUp => self.move_up(),
            Action::MoveSelectionDown => self.move_down(),

            Action::OpenAdd => self.open_add(),
            Action::OpenEdit => self.open_edit_selected(),
            Action::DeleteSelected => self.delete_selected(),

            Action::Cancel => self.cancel(),
            Action::Submit => self.submit(),

            Action::Input(c) => {
                if self.dialog.is_open() {
                    self.input_buffer.push(c);
                }
            }

            Action::DeleteChar => {
                if self.dialog.is_open() {
                    self.input_buffer.pop();
                }
            }
        }
        false
    }

    // ============ 导航相关 ============

    /// 向上移动选择
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// 向下移动选择
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.store.len() {
            self.selected_index += 1;
        }
    }

    // ============ 弹窗相关 ============

    /// 以添加模式打开弹窗，输入框为空
    pub fn open_add(&mut self) {
        debug!("dialog opened for a new item");
        self.dialog = Dialog::Open { target: None };
        self.input_buffer.clear();
        self.message = None;
    }

    /// 以编辑模式打开弹窗，输入框预填目标条目的文本
    pub fn open_edit(&mut self, id: &str) {
        let Some(item) = self.store.get(id).cloned() else {
            warn!(id, "edit requested for unknown item");
            return;
        };
        debug!(id, "dialog opened for editing");
        self.input_buffer = item.text.clone();
        self.dialog = Dialog::Open { target: Some(item) };
        self.message = None;
    }

    /// 编辑当前选中的条目
    pub fn open_edit_selected(&mut self) {
        match self.selected_item().map(|item| item.id.clone()) {
            Some(id) => self.open_edit(&id),
            None => debug!("edit ignored, list is empty"),
        }
    }

    /// 提交弹窗：有目标时更新，否则新增
    pub fn submit(&mut self) {
        let dialog = std::mem::take(&mut self.dialog);
        let text = std::mem::take(&mut self.input_buffer);

        match dialog {
            Dialog::Open { target: Some(item) } => {
                if self.store.update(&item.id, text) {
                    debug!(id = %item.id, "item updated");
                    self.message = Some("Item updated".to_string());
                } else {
                    warn!(id = %item.id, "update target no longer exists");
                }
            }
            Dialog::Open { target: None } => {
                let id = self.store.add(text);
                debug!(id = %id, "item added");
                self.selected_index = self.store.len() - 1;
                self.message = Some("Item added".to_string());
            }
            Dialog::Closed => {}
        }
    }

    /// 取消弹窗，不修改列表
    pub fn cancel(&mut self) {
        if self.dialog.is_open() {
            debug!("dialog cancelled");
        }
        self.dialog = Dialog::Closed;
        self.input_buffer.clear();
        self.message = None;
    }

    // ============ 删除相关 ============

    /// 删除条目，无需确认
    pub fn delete(&mut self, id: &str) {
        if let Some(item) = self.store.delete(id) {
            debug!(id = %item.id, "item deleted");
            self.message = Some("Item deleted".to_string());
        }
        self.clamp_selection();
    }

    /// 删除当前选中的条目
    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_item().map(|item| item.id.clone()) {
            self.delete(&id);
        }
    }
}
