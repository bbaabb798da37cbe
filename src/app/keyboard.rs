use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{App, CommandAction};

impl App {
    /// The main entry point for handling keyboard events.
    ///
    /// Shortcuts are resolved first; everything else edits the input box.
    pub async fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if let Some(action) = shortcut(key) {
            self.execute_action(action).await;
            return;
        }
        self.handle_input_key(key);
    }

    /// Pasted text goes into the input box; line breaks become spaces.
    pub fn handle_paste(&mut self, text: &str) {
        let flattened: String = text
            .chars()
            .filter(|ch| *ch != '\r')
            .map(|ch| if ch == '\n' { ' ' } else { ch })
            .collect();
        self.page.input.insert_str(&flattened);
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        let input = &mut self.page.input;
        match key.code {
            KeyCode::Char(ch) if !plain_control(key) => input.insert_char(ch),
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Left => input.move_left(),
            KeyCode::Right => input.move_right(),
            KeyCode::Home => input.move_home(),
            KeyCode::End => input.move_end(),
            KeyCode::Up => {
                input.history_previous();
            }
            KeyCode::Down => {
                input.history_next();
            }
            _ => {}
        }
    }
}

/// Control without Alt. AltGr arrives as Control+Alt on Windows and must
/// still type characters.
fn plain_control(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && !key.modifiers.contains(KeyModifiers::ALT)
}

/// Maps a key press to a screen action, if it is a shortcut.
fn shortcut(key: KeyEvent) -> Option<CommandAction> {
    let ctrl = plain_control(key);
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('c') if ctrl => Some(CommandAction::Quit),
        KeyCode::Char('l') if ctrl => Some(CommandAction::ToggleLanguage),
        KeyCode::Char('o') if ctrl => Some(CommandAction::OpenResultLink),
        KeyCode::Enter | KeyCode::F(5) => Some(CommandAction::RequestRecommendation),
        KeyCode::Esc | KeyCode::F(8) => Some(CommandAction::Clear),
        KeyCode::F(2) => Some(CommandAction::ToggleLanguage),
        KeyCode::F(3) | KeyCode::PageUp => Some(CommandAction::CarouselPrev),
        KeyCode::F(4) | KeyCode::PageDown => Some(CommandAction::CarouselNext),
        KeyCode::F(6) => Some(CommandAction::OpenResultLink),
        _ => None,
    }
}
