use crossterm::event::{Event as CrosstermEvent, KeyEvent, KeyEventKind, MouseEvent};

/// Application events.
#[derive(Debug)]
pub enum Event {
    /// Periodic wake-up that drains recommendation answers.
    Tick,
    /// A key press; releases and repeats are filtered out.
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// Pasted text, inserted into the input box as a whole.
    Paste(String),
}

impl Event {
    /// Keeps the terminal events the screen reacts to. Resize and focus
    /// changes map to `None`; the next draw picks them up anyway.
    pub fn from_terminal(event: CrosstermEvent) -> Option<Self> {
        match event {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Self::Key(key)),
            CrosstermEvent::Mouse(mouse) => Some(Self::Mouse(mouse)),
            CrosstermEvent::Paste(text) => Some(Self::Paste(text)),
            _ => None,
        }
    }
}
