use ratatui::layout::Rect;
use std::collections::HashMap;

/// Clickable areas of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    LanguageSwitch,
    Input,
    Submit,
    Clear,
    CarouselPrev,
    CarouselNext,
    ResultLink,
}

/// Screen areas of the controls drawn in the last frame, used for mouse hit testing.
#[derive(Default, Debug, Clone)]
pub struct ControlRegistry {
    entries: HashMap<ControlKind, Rect>,
}

impl ControlRegistry {
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn register(&mut self, kind: ControlKind, area: Rect) {
        self.entries.insert(kind, area);
    }

    pub fn area(&self, kind: ControlKind) -> Option<Rect> {
        self.entries.get(&kind).copied()
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<ControlKind> {
        self.entries.iter().find_map(|(kind, rect)| {
            if rect_contains(rect, column, row) {
                Some(*kind)
            } else {
                None
            }
        })
    }
}

pub fn rect_contains(rect: &Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
