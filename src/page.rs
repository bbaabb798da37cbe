//! In-memory model of the single recommendation screen.
//!
//! The renderer in `ui` only reads from [`Page`]; every user action mutates
//! it. This keeps the behavior testable without a live terminal.

use crate::carousel::{Carousel, PANEL_COUNT};
use crate::i18n::{LanguageCode, StringTable, keys};
use crate::recommend::RecommendationResult;

/// Identifies an element on the page that carries a string key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    Title,
    Description,
    Input,
    SubmitButton,
    ClearButton,
    SwitchChinese,
    SwitchEnglish,
    PanelName(usize),
    PanelDescription(usize),
}

/// Input-like elements receive placeholder text, the rest receive text content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Text,
    Input,
}

#[derive(Debug, Clone)]
pub struct TaggedElement {
    pub id: ElementId,
    pub key: String,
    pub kind: ElementKind,
    pub text: String,
    pub placeholder: String,
}

impl TaggedElement {
    pub fn text(id: ElementId, key: impl Into<String>) -> Self {
        Self {
            id,
            key: key.into(),
            kind: ElementKind::Text,
            text: String::new(),
            placeholder: String::new(),
        }
    }

    pub fn input(id: ElementId, key: impl Into<String>) -> Self {
        Self {
            kind: ElementKind::Input,
            ..Self::text(id, key)
        }
    }

    /// The string currently shown for this element.
    pub fn rendered(&self) -> &str {
        match self.kind {
            ElementKind::Text => &self.text,
            ElementKind::Input => &self.placeholder,
        }
    }
}

/// A link rendered in the result area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub text: String,
    pub href: String,
    /// Opened outside the application rather than in place.
    pub new_context: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResultArea {
    #[default]
    Empty,
    Recommendation {
        label: String,
        anchor: Anchor,
    },
    Failed {
        label: String,
        detail: String,
    },
}

impl ResultArea {
    /// Renders a recommendation as the localized label followed by a link
    /// whose text is the name in `lang`.
    pub fn recommendation(
        strings: &StringTable,
        lang: LanguageCode,
        result: &RecommendationResult,
    ) -> Self {
        Self::Recommendation {
            label: strings.text(lang, keys::RECOMMENDED_COFFEE).to_string(),
            anchor: Anchor {
                text: result.name_for(lang).to_string(),
                href: result.url.clone(),
                new_context: true,
            },
        }
    }

    pub fn failed(strings: &StringTable, lang: LanguageCode, detail: impl Into<String>) -> Self {
        Self::Failed {
            label: strings.text(lang, keys::RECOMMENDATION_FAILED).to_string(),
            detail: detail.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn anchor(&self) -> Option<&Anchor> {
        match self {
            Self::Recommendation { anchor, .. } => Some(anchor),
            _ => None,
        }
    }

    /// Plain-text form, used by the headless mode.
    pub fn plain_text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Recommendation { label, anchor } if anchor.href.is_empty() => {
                format!("{label}{}", anchor.text)
            }
            Self::Recommendation { label, anchor } => {
                format!("{label}{} <{}>", anchor.text, anchor.href)
            }
            Self::Failed { label, detail } => format!("{label}{detail}"),
        }
    }
}

/// Indicator inside the language switch; active while Chinese is selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwitchIndicator {
    pub active: bool,
}

/// Text buffer for the free-text self description.
///
/// The cursor is a byte offset that always sits on a char boundary.
#[derive(Clone, Default, Debug)]
pub struct InputBox {
    buffer: String,
    cursor: usize,
    history: Vec<String>,
    history_index: Option<usize>,
}

impl InputBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
        self.cursor = self.buffer.len();
        self.history_index = None;
    }

    pub fn insert_char(&mut self, ch: char) {
        self.buffer.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
        self.history_index = None;
    }

    pub fn insert_str(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor, text);
        self.cursor += text.len();
        self.history_index = None;
    }

    pub fn backspace(&mut self) {
        if let Some((idx, _)) = self.buffer[..self.cursor].char_indices().next_back() {
            self.buffer.drain(idx..self.cursor);
            self.cursor = idx;
            self.history_index = None;
        }
    }

    pub fn delete(&mut self) {
        if let Some(ch) = self.buffer[self.cursor..].chars().next() {
            let end = self.cursor + ch.len_utf8();
            self.buffer.drain(self.cursor..end);
            self.history_index = None;
        }
    }

    pub fn move_left(&mut self) {
        if let Some((idx, _)) = self.buffer[..self.cursor].char_indices().next_back() {
            self.cursor = idx;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(ch) = self.buffer[self.cursor..].chars().next() {
            self.cursor += ch.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
        self.history_index = None;
    }

    /// Records the current text so it can be recalled later. Blank and
    /// repeated entries are skipped.
    pub fn remember(&mut self) {
        if self.buffer.trim().is_empty() || self.history.last() == Some(&self.buffer) {
            return;
        }
        self.history.push(self.buffer.clone());
        self.history_index = None;
    }

    pub fn history_previous(&mut self) -> bool {
        if self.history.is_empty() {
            return false;
        }
        let target = match self.history_index {
            Some(idx) => idx.saturating_sub(1),
            None => self.history.len() - 1,
        };
        self.load_history(target)
    }

    pub fn history_next(&mut self) -> bool {
        match self.history_index {
            Some(idx) if idx + 1 < self.history.len() => self.load_history(idx + 1),
            Some(_) => {
                self.history_index = None;
                self.buffer.clear();
                self.cursor = 0;
                true
            }
            None => false,
        }
    }

    fn load_history(&mut self, index: usize) -> bool {
        match self.history.get(index).cloned() {
            Some(entry) => {
                self.buffer = entry;
                self.cursor = self.buffer.len();
                self.history_index = Some(index);
                true
            }
            None => false,
        }
    }
}

/// Name and description keys of the carousel panels, in display order.
pub const PANEL_KEYS: [(&str, &str); PANEL_COUNT] = [
    (keys::ARABICA, keys::ARABICA_DESCRIPTION),
    (keys::ROBUSTA, keys::ROBUSTA_DESCRIPTION),
    (keys::LIBERICA, keys::LIBERICA_DESCRIPTION),
];

/// Everything the screen shows.
#[derive(Debug, Clone)]
pub struct Page {
    /// Language attribute of the whole page.
    pub lang: LanguageCode,
    elements: Vec<TaggedElement>,
    pub input: InputBox,
    pub result: ResultArea,
    pub switch_indicator: SwitchIndicator,
    pub carousel: Carousel,
}

impl Page {
    /// The recommendation screen with its title, input, buttons, language
    /// switch and the three coffee panels.
    pub fn coffee() -> Self {
        let mut elements = vec![
            TaggedElement::text(ElementId::Title, keys::TITLE),
            TaggedElement::text(ElementId::Description, keys::DESCRIPTION),
            TaggedElement::input(ElementId::Input, keys::INPUT_PLACEHOLDER),
            TaggedElement::text(ElementId::SubmitButton, keys::GET_RECOMMENDATION),
            TaggedElement::text(ElementId::ClearButton, keys::CLEAR),
            TaggedElement::text(ElementId::SwitchChinese, keys::ZH),
            TaggedElement::text(ElementId::SwitchEnglish, keys::ENG),
        ];
        for (panel, (name, description)) in PANEL_KEYS.iter().enumerate() {
            elements.push(TaggedElement::text(ElementId::PanelName(panel), *name));
            elements.push(TaggedElement::text(
                ElementId::PanelDescription(panel),
                *description,
            ));
        }
        Self::with_elements(elements, Carousel::new(PANEL_KEYS.len()))
    }

    pub fn with_elements(elements: Vec<TaggedElement>, carousel: Carousel) -> Self {
        Self {
            lang: LanguageCode::default(),
            elements,
            input: InputBox::new(),
            result: ResultArea::Empty,
            switch_indicator: SwitchIndicator::default(),
            carousel,
        }
    }

    pub fn elements(&self) -> &[TaggedElement] {
        &self.elements
    }

    pub fn elements_mut(&mut self) -> impl Iterator<Item = &mut TaggedElement> {
        self.elements.iter_mut()
    }

    pub fn element(&self, id: ElementId) -> Option<&TaggedElement> {
        self.elements.iter().find(|element| element.id == id)
    }

    /// The rendered string of an element, or an empty string if absent.
    pub fn rendered(&self, id: ElementId) -> &str {
        self.element(id).map_or("", TaggedElement::rendered)
    }

    /// Empties the input and the result area.
    pub fn clear(&mut self) {
        self.input.clear();
        self.result = ResultArea::Empty;
    }
}
