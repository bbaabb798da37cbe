//! Defines the core state structure for the application.

use crate::definitions::ControlRegistry;
use crate::i18n::{LanguageCode, StringTable};
use crate::page::Page;
use crate::recommend::RecommendationDispatcher;

/// The main application state.
///
/// The current language lives here and nowhere else; the page model only
/// mirrors it through its language attribute.
pub struct App {
    /// Flag to indicate if the application should quit.
    pub should_quit: bool,
    /// The active interface language.
    pub(crate) lang: LanguageCode,
    /// Localized UI strings, fixed after startup.
    pub strings: StringTable,
    /// Everything the screen shows.
    pub page: Page,
    /// The message currently displayed in the status bar.
    pub status_message: String,
    /// Areas of the clickable controls drawn in the last frame.
    pub controls: ControlRegistry,

    pub(crate) dispatcher: RecommendationDispatcher,
}

impl App {
    pub fn lang(&self) -> LanguageCode {
        self.lang
    }

    /// True while a recommendation request has not answered yet.
    pub fn is_pending(&self) -> bool {
        self.dispatcher.is_pending()
    }
}
