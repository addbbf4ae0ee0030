use std::time::Duration;
use tracing::trace;

use crate::domain::{AppConfig, AppError, Message};
use crate::model::Model;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyModifiers};

pub struct Controller {
    event_poll_time: u64,
}

impl Controller {
    pub fn new(cfg: &AppConfig) -> Self {
        Self {
            event_poll_time: cfg.event_poll_time,
        }
    }

    pub fn handle_event(&self, model: &Model) -> Result<Option<Message>, AppError> {
        if event::poll(Duration::from_millis(self.event_poll_time))?
            && let Event::Key(key) = event::read()?
            && key.kind == event::KeyEventKind::Press
        {
            if model.raw_keyevents() {
                return Ok(Some(Message::RawKey(key)));
            }
            return Ok(Self::handle_key(key));
        }
        Ok(None)
    }

    pub fn handle_key(key: event::KeyEvent) -> Option<Message> {
        let message = match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(Message::Quit),
            (KeyCode::Char('q'), _) => Some(Message::Quit),
            (KeyCode::Up, _) | (KeyCode::Char('k'), _) => Some(Message::MoveUp),
            (KeyCode::Down, _) | (KeyCode::Char('j'), _) => Some(Message::MoveDown),
            (KeyCode::Left, _) | (KeyCode::Char('h'), _) => Some(Message::MoveLeft),
            (KeyCode::Right, _) | (KeyCode::Char('l'), _) => Some(Message::MoveRight),
            (KeyCode::Tab, _) => Some(Message::NextTable),
            (KeyCode::BackTab, _) => Some(Message::PreviousTable),
            (KeyCode::Char('s'), _) => Some(Message::Sort),
            (KeyCode::Enter, _) => Some(Message::Enter),
            (KeyCode::Char('e'), _) => Some(Message::Edit),
            (KeyCode::Char('d'), _) => Some(Message::Delete),
            (KeyCode::Char('a'), _) => Some(Message::Add),
            (KeyCode::Char('y'), _) => Some(Message::Confirm),
            (KeyCode::Char('n'), _) => Some(Message::Deny),
            (KeyCode::Char('c'), _) => Some(Message::CopyRecord),
            (KeyCode::Char('?'), _) => Some(Message::Help),
            (KeyCode::Esc, _) => Some(Message::Exit),
            _ => None,
        };
        trace!("Mapped: {key:?} => {message:?}");
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::KeyEvent;

    fn map(code: KeyCode) -> Option<Message> {
        Controller::handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn maps_table_keys() {
        assert_eq!(map(KeyCode::Char('q')), Some(Message::Quit));
        assert_eq!(map(KeyCode::Char('j')), Some(Message::MoveDown));
        assert_eq!(map(KeyCode::Right), Some(Message::MoveRight));
        assert_eq!(map(KeyCode::Char('s')), Some(Message::Sort));
        assert_eq!(map(KeyCode::Char('d')), Some(Message::Delete));
        assert_eq!(map(KeyCode::Esc), Some(Message::Exit));
        assert_eq!(map(KeyCode::Char('z')), None);
    }

    #[test]
    fn ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(Controller::handle_key(key), Some(Message::Quit));
    }
}
