use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::Duration;
use anyhow::Result;
use crate::action::Action;
use crate::select::Key;

pub fn poll_event(timeout: Duration) -> Result<Option<Action>> {
    if event::poll(timeout)? {
        Ok(Some(translate_event(event::read()?)))
    } else {
        Ok(None)
    }
}

fn translate_event(ev: Event) -> Action {
    match ev {
        Event::Key(key) if key.kind == KeyEventKind::Press => translate_key(key),
        Event::Mouse(mouse) => translate_mouse(mouse),
        Event::FocusLost => Action::Blur,
        _ => Action::None,
    }
}

fn translate_key(key: KeyEvent) -> Action {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Action::Quit,
        (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Action::Quit,
        (_, KeyCode::Tab) => Action::FocusNext,
        (_, KeyCode::BackTab) => Action::FocusPrev,
        (_, KeyCode::Enter) => Action::Key(Key::Enter),
        (_, KeyCode::Char(' ')) => Action::Key(Key::Space),
        (_, KeyCode::Up) => Action::Key(Key::ArrowUp),
        (_, KeyCode::Down) => Action::Key(Key::ArrowDown),
        _ => Action::Key(Key::Other),
    }
}

fn translate_mouse(mouse: MouseEvent) -> Action {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Action::Click { column, row },
        MouseEventKind::Moved => Action::Hover { column, row },
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn mouse(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent { kind, column: 7, row: 3, modifiers: KeyModifiers::NONE })
    }

    #[test]
    fn widget_keys() {
        assert_eq!(translate_event(press(KeyCode::Enter, KeyModifiers::NONE)), Action::Key(Key::Enter));
        assert_eq!(translate_event(press(KeyCode::Char(' '), KeyModifiers::NONE)), Action::Key(Key::Space));
        assert_eq!(translate_event(press(KeyCode::Up, KeyModifiers::NONE)), Action::Key(Key::ArrowUp));
        assert_eq!(translate_event(press(KeyCode::Down, KeyModifiers::NONE)), Action::Key(Key::ArrowDown));
        assert_eq!(translate_event(press(KeyCode::Char('x'), KeyModifiers::NONE)), Action::Key(Key::Other));
    }

    #[test]
    fn app_keys() {
        assert_eq!(translate_event(press(KeyCode::Char('q'), KeyModifiers::NONE)), Action::Quit);
        assert_eq!(translate_event(press(KeyCode::Esc, KeyModifiers::NONE)), Action::Quit);
        assert_eq!(translate_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL)), Action::Quit);
        assert_eq!(translate_event(press(KeyCode::Tab, KeyModifiers::NONE)), Action::FocusNext);
        assert_eq!(translate_event(press(KeyCode::BackTab, KeyModifiers::SHIFT)), Action::FocusPrev);
    }

    #[test]
    fn key_release_is_ignored() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Enter,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(translate_event(Event::Key(release)), Action::None);
    }

    #[test]
    fn mouse_and_focus() {
        assert_eq!(
            translate_event(mouse(MouseEventKind::Down(MouseButton::Left))),
            Action::Click { column: 7, row: 3 }
        );
        assert_eq!(translate_event(mouse(MouseEventKind::Moved)), Action::Hover { column: 7, row: 3 });
        assert_eq!(translate_event(mouse(MouseEventKind::Down(MouseButton::Right))), Action::None);
        assert_eq!(translate_event(Event::FocusLost), Action::Blur);
        assert_eq!(translate_event(Event::FocusGained), Action::None);
    }
}
