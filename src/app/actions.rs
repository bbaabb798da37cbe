use log::{debug, error, warn};

use super::App;
use crate::browser;
use crate::i18n::keys;
use crate::page::ResultArea;

/// Everything a user can do on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    ToggleLanguage,
    RequestRecommendation,
    Clear,
    CarouselPrev,
    CarouselNext,
    OpenResultLink,
    Quit,
}

impl App {
    /// The single source of truth for executing a `CommandAction`.
    pub async fn execute_action(&mut self, action: CommandAction) {
        debug!("Executing action {:?}", action);
        match action {
            CommandAction::ToggleLanguage => self.toggle_language(),
            CommandAction::RequestRecommendation => self.request_recommendation().await,
            CommandAction::Clear => self.clear(),
            CommandAction::CarouselPrev => self.page.carousel.prev(),
            CommandAction::CarouselNext => self.page.carousel.next(),
            CommandAction::OpenResultLink => self.open_result_link(),
            CommandAction::Quit => self.should_quit = true,
        }
    }

    /// Sends the input text verbatim; an empty input is a legal request.
    ///
    /// The result area keeps its content until the answer arrives.
    pub(crate) async fn request_recommendation(&mut self) {
        let input = self.page.input.text().to_string();
        self.page.input.remember();
        match self.dispatcher.submit(input).await {
            Ok(seq) => {
                debug!("recommendation request #{seq} queued");
                self.status_message = self.strings.text(self.lang, keys::PENDING).to_string();
            }
            Err(err) => {
                error!("could not send recommendation request: {err}");
                self.page.result = ResultArea::failed(&self.strings, self.lang, err.to_string());
            }
        }
    }

    /// Empties the input and the result area.
    pub(crate) fn clear(&mut self) {
        self.page.clear();
    }

    fn open_result_link(&mut self) {
        let Some(anchor) = self.page.result.anchor() else {
            return;
        };
        if anchor.href.is_empty() {
            return;
        }
        if let Err(err) = browser::open_in_browser(&anchor.href) {
            warn!("failed to open {}: {err:#}", anchor.href);
            self.status_message = format!("{err:#}");
        }
    }
}
