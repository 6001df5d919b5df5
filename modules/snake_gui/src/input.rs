use macroquad::prelude::*;
use crate::domain::Direction;

/// 用户意图（从按键翻译而来）
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    Move(Direction),
    TogglePause,
    Restart,
}

/// 输入处理器：把键盘事件翻译成 Action
pub struct InputHandler;

impl InputHandler {
    const KEYS: [KeyCode; 12] = [
        KeyCode::Up,
        KeyCode::Down,
        KeyCode::Left,
        KeyCode::Right,
        KeyCode::W,
        KeyCode::S,
        KeyCode::A,
        KeyCode::D,
        KeyCode::P,
        KeyCode::Enter,
        KeyCode::KpEnter,
        KeyCode::R,
    ];

    /// 检测本帧按键，返回动作列表（通常 0~2 个）
    pub fn poll() -> Vec<Action> {
        Self::KEYS
            .iter()
            .filter(|&&key| is_key_pressed(key))
            .filter_map(|&key| Self::map_key(key))
            .collect()
    }

    pub fn map_key(key: KeyCode) -> Option<Action> {
        let action = match key {
            KeyCode::Up | KeyCode::W => Action::Move(Direction::Up),
            KeyCode::Down | KeyCode::S => Action::Move(Direction::Down),
            KeyCode::Left | KeyCode::A => Action::Move(Direction::Left),
            KeyCode::Right | KeyCode::D => Action::Move(Direction::Right),
            KeyCode::P => Action::TogglePause,
            KeyCode::Enter | KeyCode::KpEnter | KeyCode::R => Action::Restart,
            _ => return None,
        };
        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_wasd_move() {
        assert_eq!(InputHandler::map_key(KeyCode::Up), Some(Action::Move(Direction::Up)));
        assert_eq!(InputHandler::map_key(KeyCode::A), Some(Action::Move(Direction::Left)));
        assert_eq!(InputHandler::map_key(KeyCode::Right), Some(Action::Move(Direction::Right)));
        assert_eq!(InputHandler::map_key(KeyCode::S), Some(Action::Move(Direction::Down)));
    }

    #[test]
    fn enter_restarts_and_other_keys_are_ignored() {
        assert_eq!(InputHandler::map_key(KeyCode::Enter), Some(Action::Restart));
        assert_eq!(InputHandler::map_key(KeyCode::R), Some(Action::Restart));
        assert_eq!(InputHandler::map_key(KeyCode::P), Some(Action::TogglePause));
        assert_eq!(InputHandler::map_key(KeyCode::Space), None);
    }

    #[test]
    fn every_polled_key_has_an_action() {
        for key in InputHandler::KEYS {
            assert!(InputHandler::map_key(key).is_some(), "{key:?} is polled but unmapped");
        }
    }
}
