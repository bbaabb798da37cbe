use log::{error, info};

use super::App;
use crate::i18n::keys;
use crate::page::ResultArea;
use crate::recommend::RecommendEvent;

// Implementation block for tick-related logic in the App.
impl App {
    /// This function is called on every "tick" of the application loop.
    ///
    /// It drains answers from the recommendation backend. The language used
    /// for the result is the one active when the answer is rendered.
    pub(crate) fn on_tick(&mut self) {
        let mut answered = false;
        while let Some(event) = self.dispatcher.poll() {
            answered = true;
            match event {
                RecommendEvent::Completed { seq, result } => {
                    info!("recommendation #{seq}: {} / {}", result.english, result.chinese);
                    self.page.result = ResultArea::recommendation(&self.strings, self.lang, &result);
                }
                RecommendEvent::Failed { seq, error } => {
                    error!("recommendation #{seq} failed: {error}");
                    self.page.result = ResultArea::failed(&self.strings, self.lang, error.to_string());
                }
            }
        }

        if answered && !self.dispatcher.is_pending() {
            self.status_message = self.strings.text(self.lang, keys::HELP).to_string();
        }
    }
}
