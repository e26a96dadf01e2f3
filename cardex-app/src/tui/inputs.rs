use crossterm::event::{Event, KeyCode, KeyEvent};

#[derive(Debug, Clone, Copy)]
pub enum Action {
    Quit,
    Back,
    Up,
    Down,
    Enter,
    ToggleSave,
    None,
}

pub fn map_event(ev: Event) -> Action {
    if let Event::Key(KeyEvent { code, .. }) = ev {
        match code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Esc => Action::Back,
            KeyCode::Up | KeyCode::Char('k') => Action::Up,
            KeyCode::Down | KeyCode::Char('j') => Action::Down,
            KeyCode::Enter => Action::Enter,
            KeyCode::Char('s') => Action::ToggleSave,
            _ => Action::None,
        }
    } else {
        Action::None
    }
}
