use log::debug;

use super::App;
use crate::definitions::ControlRegistry;
use crate::i18n::{LanguageCode, StringTable};
use crate::page::Page;
use crate::recommend::{RecommendationBackend, RecommendationDispatcher};

impl App {
    /// Creates a new instance of the `App` state.
    ///
    /// The backend is injected so tests can substitute a fake. The initial
    /// language is applied to every tagged element and the carousel starts on
    /// its first panel.
    ///
    /// # Arguments
    ///
    /// * `lang` - The language shown at startup.
    /// * `strings` - The localization table.
    /// * `backend` - Where recommendation requests are sent.
    pub fn new(
        lang: LanguageCode,
        strings: StringTable,
        backend: Box<dyn RecommendationBackend>,
    ) -> Self {
        debug!("Initializing App in {lang} with backend {}", backend.name());

        let mut app = Self {
            should_quit: false,
            lang,
            strings,
            page: Page::coffee(),
            status_message: String::new(),
            controls: ControlRegistry::default(),
            dispatcher: RecommendationDispatcher::new(backend),
        };

        app.set_language(lang);
        app.page.carousel.show(0);
        app
    }
}
