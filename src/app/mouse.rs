use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::{App, CommandAction};
use crate::definitions::ControlKind;

// Implementation block for mouse event handling in the App.
impl App {
    /// The main entry point for handling mouse events.
    ///
    /// A left click on a registered control runs its action; scrolling over
    /// the carousel flips panels.
    pub async fn handle_mouse(&mut self, event: MouseEvent) {
        let control = self.controls.hit_test(event.column, event.row);
        let action = match (event.kind, control) {
            (MouseEventKind::Down(MouseButton::Left), Some(control)) => click_action(control),
            (MouseEventKind::ScrollUp, Some(ControlKind::CarouselPrev | ControlKind::CarouselNext)) => {
                Some(CommandAction::CarouselPrev)
            }
            (MouseEventKind::ScrollDown, Some(ControlKind::CarouselPrev | ControlKind::CarouselNext)) => {
                Some(CommandAction::CarouselNext)
            }
            _ => None,
        };
        if let Some(action) = action {
            self.execute_action(action).await;
        }
    }
}

fn click_action(control: ControlKind) -> Option<CommandAction> {
    match control {
        ControlKind::LanguageSwitch => Some(CommandAction::ToggleLanguage),
        ControlKind::Submit => Some(CommandAction::RequestRecommendation),
        ControlKind::Clear => Some(CommandAction::Clear),
        ControlKind::CarouselPrev => Some(CommandAction::CarouselPrev),
        ControlKind::CarouselNext => Some(CommandAction::CarouselNext),
        ControlKind::ResultLink => Some(CommandAction::OpenResultLink),
        ControlKind::Input => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::layout::Rect;

    use crate::i18n::{LanguageCode, StringTable};
    use crate::recommend::testing::FakeBackend;

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[tokio::test]
    async fn clicking_controls_runs_their_actions() {
        let backend = FakeBackend::default();
        let mut app = App::new(
            LanguageCode::TraditionalChinese,
            StringTable::builtin(),
            Box::new(backend.clone()),
        );
        app.controls.register(ControlKind::LanguageSwitch, Rect::new(60, 0, 10, 1));
        app.controls.register(ControlKind::CarouselNext, Rect::new(70, 12, 3, 1));
        app.controls.register(ControlKind::Submit, Rect::new(2, 8, 12, 1));

        app.handle_mouse(click(61, 0)).await;
        assert_eq!(app.lang(), LanguageCode::English);

        app.handle_mouse(click(71, 12)).await;
        assert_eq!(app.page.carousel.index(), 1);

        app.handle_mouse(click(5, 8)).await;
        assert_eq!(backend.sent().len(), 1);

        app.handle_mouse(click(0, 30)).await;
        assert_eq!(app.page.carousel.index(), 1);
        assert_eq!(backend.sent().len(), 1);
    }
}
