//! Key-to-event mapping.
//!
//! The same key means different things per phase: `q` types a letter
//! while names are being entered but quits during play.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::instrument;

use crate::games::tictactoe::Direction;
use crate::session::{Edit, Event, PhaseKind};

/// Maps a key press to an event, or `None` for keys with no meaning.
#[instrument]
pub fn map_key(key: KeyEvent, phase: PhaseKind) -> Option<Event> {
    // Skip key release events (crossterm fires both press and release on some platforms).
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return Some(Event::Quit);
    }

    match phase {
        PhaseKind::NameEntry => map_name_entry(key.code, ctrl),
        PhaseKind::Playing => map_playing(key.code, ctrl),
    }
}

fn map_name_entry(code: KeyCode, ctrl: bool) -> Option<Event> {
    match code {
        KeyCode::Up | KeyCode::BackTab => Some(Event::NavigateFocus(Direction::Up)),
        KeyCode::Down | KeyCode::Tab => Some(Event::NavigateFocus(Direction::Down)),
        KeyCode::Enter => Some(Event::Confirm),
        KeyCode::Backspace => Some(Event::EditField(Edit::Backspace)),
        KeyCode::Esc => Some(Event::Quit),
        KeyCode::Char(c) if !ctrl => Some(Event::EditField(Edit::Insert(c))),
        _ => None,
    }
}

fn map_playing(code: KeyCode, ctrl: bool) -> Option<Event> {
    if ctrl {
        return match code {
            KeyCode::Char('r') => Some(Event::HardReset),
            _ => None,
        };
    }

    match code {
        KeyCode::Up | KeyCode::Char('k') => Some(Event::MoveCursor(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Event::MoveCursor(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Event::MoveCursor(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Event::MoveCursor(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Event::Confirm),
        KeyCode::Char('r') => Some(Event::SoftReset),
        KeyCode::Char('q') | KeyCode::Esc => Some(Event::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_ctrl_c_quits_in_both_phases() {
        assert_eq!(map_key(ctrl('c'), PhaseKind::NameEntry), Some(Event::Quit));
        assert_eq!(map_key(ctrl('c'), PhaseKind::Playing), Some(Event::Quit));
    }

    #[test]
    fn test_vim_keys_move_cursor() {
        let phase = PhaseKind::Playing;
        assert_eq!(
            map_key(press(KeyCode::Char('k')), phase),
            Some(Event::MoveCursor(Direction::Up))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('j')), phase),
            Some(Event::MoveCursor(Direction::Down))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('h')), phase),
            Some(Event::MoveCursor(Direction::Left))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('l')), phase),
            Some(Event::MoveCursor(Direction::Right))
        );
    }

    #[test]
    fn test_playing_keys() {
        let phase = PhaseKind::Playing;
        assert_eq!(map_key(press(KeyCode::Enter), phase), Some(Event::Confirm));
        assert_eq!(map_key(press(KeyCode::Char(' ')), phase), Some(Event::Confirm));
        assert_eq!(map_key(press(KeyCode::Char('r')), phase), Some(Event::SoftReset));
        assert_eq!(map_key(ctrl('r'), phase), Some(Event::HardReset));
        assert_eq!(map_key(press(KeyCode::Char('q')), phase), Some(Event::Quit));
        assert_eq!(map_key(press(KeyCode::Char('x')), phase), None);
    }

    #[test]
    fn test_letters_are_typed_during_name_entry() {
        let phase = PhaseKind::NameEntry;
        assert_eq!(
            map_key(press(KeyCode::Char('q')), phase),
            Some(Event::EditField(Edit::Insert('q')))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('r')), phase),
            Some(Event::EditField(Edit::Insert('r')))
        );
        assert_eq!(
            map_key(press(KeyCode::Down), phase),
            Some(Event::NavigateFocus(Direction::Down))
        );
        assert_eq!(map_key(press(KeyCode::Esc), phase), Some(Event::Quit));
    }

    #[test]
    fn test_release_events_ignored() {
        let mut key = press(KeyCode::Enter);
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(key, PhaseKind::Playing), None);
    }
}
