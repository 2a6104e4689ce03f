//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::actions::Action;
use super::state::{App, Dialog};

/// 根据弹窗状态和按键获取对应的 Action
pub fn get_action(dialog: &Dialog, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match dialog {
        Dialog::Closed => match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveSelectionDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveSelectionUp),
            KeyCode::Char('a') => Some(Action::OpenAdd),
            KeyCode::Char('e') | KeyCode::Enter => Some(Action::OpenEdit),
            KeyCode::Char('d') | KeyCode::Delete => Some(Action::DeleteSelected),
            _ => None,
        },
        Dialog::Open { .. } => match key.code {
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
    }
}

/// 处理按键事件，返回是否退出
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    match get_action(&app.dialog, key) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}
