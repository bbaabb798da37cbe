use log::{info, warn};

use super::App;
use crate::i18n::{LanguageCode, StringTable, keys};
use crate::page::{ElementKind, Page};

/// Re-renders every tagged element of `page` in `lang`.
///
/// Input-like elements get their placeholder replaced, all others their text.
/// Elements whose key has no entry are left untouched; their keys are
/// returned so the caller can report them.
pub fn apply_language(page: &mut Page, strings: &StringTable, lang: LanguageCode) -> Vec<String> {
    let mut missing = Vec::new();
    for element in page.elements_mut() {
        let Some(text) = strings.lookup(lang, &element.key) else {
            missing.push(element.key.clone());
            continue;
        };
        match element.kind {
            ElementKind::Input => element.placeholder = text.to_string(),
            ElementKind::Text => element.text = text.to_string(),
        }
    }
    page.lang = lang;
    page.switch_indicator.active = lang == LanguageCode::TraditionalChinese;
    missing
}

impl App {
    /// Switches the interface to `lang`.
    pub(crate) fn set_language(&mut self, lang: LanguageCode) {
        self.lang = lang;
        let missing = apply_language(&mut self.page, &self.strings, lang);
        for key in missing {
            warn!("no {lang} text for key `{key}`, element left unchanged");
        }
        let status = if self.is_pending() { keys::PENDING } else { keys::HELP };
        self.status_message = self.strings.text(lang, status).to_string();
    }

    /// Switches to the other supported language.
    pub(crate) fn toggle_language(&mut self) {
        let next = self.lang.toggle();
        info!("switching language {} -> {next}", self.lang);
        self.set_language(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::Carousel;
    use crate::page::{ElementId, TaggedElement};
    use crate::recommend::testing::FakeBackend;

    fn snapshot(page: &Page) -> Vec<String> {
        page.elements()
            .iter()
            .map(|element| element.rendered().to_string())
            .collect()
    }

    #[test]
    fn every_tagged_element_follows_the_table() {
        let strings = StringTable::builtin();
        let mut page = Page::coffee();
        for lang in LanguageCode::all() {
            let missing = apply_language(&mut page, &strings, lang);
            assert!(missing.is_empty());
            for element in page.elements() {
                assert_eq!(Some(element.rendered()), strings.lookup(lang, &element.key));
            }
            assert_eq!(page.lang, lang);
        }
    }

    #[test]
    fn input_gets_placeholder_not_text() {
        let strings = StringTable::builtin();
        let mut page = Page::coffee();
        apply_language(&mut page, &strings, LanguageCode::English);
        let input = page.element(ElementId::Input).unwrap();
        assert_eq!(input.placeholder, "Input e.g. gender, age, etc.");
        assert!(input.text.is_empty());
        assert_eq!(page.rendered(ElementId::Title), "Coffee Recommender System");
    }

    #[test]
    fn indicator_is_active_only_in_chinese() {
        let strings = StringTable::builtin();
        let mut page = Page::coffee();
        apply_language(&mut page, &strings, LanguageCode::TraditionalChinese);
        assert!(page.switch_indicator.active);
        apply_language(&mut page, &strings, LanguageCode::English);
        assert!(!page.switch_indicator.active);
    }

    #[test]
    fn missing_key_leaves_element_unchanged() {
        let mut strings = StringTable::default();
        strings.extend(LanguageCode::English, [("title", "Coffee")]);
        let mut untranslated = TaggedElement::text(ElementId::Description, "description");
        untranslated.text = String::from("original");
        let mut page = Page::with_elements(
            vec![TaggedElement::text(ElementId::Title, "title"), untranslated],
            Carousel::default(),
        );

        let missing = apply_language(&mut page, &strings, LanguageCode::English);
        assert_eq!(missing, vec![String::from("description")]);
        assert_eq!(page.rendered(ElementId::Title), "Coffee");
        assert_eq!(page.rendered(ElementId::Description), "original");
    }

    #[test]
    fn toggling_twice_restores_language_and_text() {
        let mut app = App::new(
            LanguageCode::TraditionalChinese,
            StringTable::builtin(),
            Box::new(FakeBackend::default()),
        );
        let before = snapshot(&app.page);

        app.toggle_language();
        assert_eq!(app.lang(), LanguageCode::English);
        assert_ne!(snapshot(&app.page), before);

        app.toggle_language();
        assert_eq!(app.lang(), LanguageCode::TraditionalChinese);
        assert_eq!(snapshot(&app.page), before);
        assert!(app.page.switch_indicator.active);
    }
}
