//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及编辑弹窗状态

use crate::config::Theme;
use crate::models::{Item, ItemStore};

/// 应用状态
pub struct App {
    pub store: ItemStore,
    pub selected_index: usize,
    pub dialog: Dialog,
    pub input_buffer: String,
    pub message: Option<String>,
    pub title: String,
    pub theme: Theme,
}

/// 编辑弹窗状态
///
/// 添加与编辑共用同一个弹窗，`target` 为 `None` 时提交会新增条目，
/// 否则更新目标条目。
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Dialog {
    #[default]
    Closed,
    Open { target: Option<Item> },
}

impl Dialog {
    pub fn is_open(&self) -> bool {
        matches!(self, Dialog::Open { .. })
    }

    pub fn target(&self) -> Option<&Item> {
        match self {
            Dialog::Open { target } => target.as_ref(),
            Dialog::Closed => None,
        }
    }

    /// 主按钮文字
    pub fn submit_label(&self) -> &'static str {
        if self.target().is_some() {
            "Update Item"
        } else {
            "Add Item"
        }
    }
}

impl App {
    /// 创建新的应用实例
    pub fn new(title: String, theme: Theme) -> Self {
        Self {
            store: ItemStore::new(),
            selected_index: 0,
            dialog: Dialog::Closed,
            input_buffer: String::new(),
            message: None,
            title,
            theme,
        }
    }

    /// 确保选中索引有效
    pub fn clamp_selection(&mut self) {
        let len = self.store.len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    /// 获取当前选中的条目
    pub fn selected_item(&self) -> Option<&Item> {
        self.store.items().get(self.selected_index)
    }
}
