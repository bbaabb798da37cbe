use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::App;
use crate::definitions::ControlKind;
use crate::i18n::keys;
use crate::page::{ElementId, ResultArea};

mod theme;
use theme::*;

const MIN_WIDTH: u16 = 60;
const MIN_HEIGHT: u16 = 20;

fn cell_width(text: &str) -> u16 {
    UnicodeWidthStr::width(text).min(u16::MAX as usize) as u16
}

pub fn render(f: &mut Frame<'_>, app: &mut App) {
    let size = f.size();
    app.controls.clear();
    if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
        let hint = app
            .strings
            .text(app.lang(), keys::WINDOW_TOO_SMALL)
            .replace("{width}", &MIN_WIDTH.to_string())
            .replace("{height}", &MIN_HEIGHT.to_string());
        let block = Paragraph::new(hint)
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(FG_PRIMARY).bg(BG_PRIMARY));
        f.render_widget(block, size);
        return;
    }

    f.render_widget(Block::default().style(Style::default().bg(BG_PRIMARY)), size);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title bar
            Constraint::Length(1), // description
            Constraint::Length(3), // input
            Constraint::Length(1), // buttons
            Constraint::Min(4),    // result
            Constraint::Length(7), // carousel
            Constraint::Length(1), // status bar
        ])
        .split(size);

    render_title_bar(f, app, vertical[0]);
    render_description(f, app, vertical[1]);
    render_input(f, app, vertical[2]);
    render_buttons(f, app, vertical[3]);
    render_result(f, app, vertical[4]);
    render_carousel(f, app, vertical[5]);
    render_status_bar(f, app, vertical[6]);
}

fn render_title_bar(f: &mut Frame<'_>, app: &mut App, area: Rect) {
    f.render_widget(Clear, area);
    let base = Style::default().fg(BAR_TEXT).bg(BAR_BG);
    let title = Paragraph::new(Line::from(Span::styled(
        format!(" ☕ {}", app.page.rendered(ElementId::Title)),
        base.add_modifier(Modifier::BOLD),
    )))
    .style(base);
    f.render_widget(title, area);

    // The indicator is active in Chinese mode, which highlights the 中文 side.
    let active = app.page.switch_indicator.active;
    let zh = format!(" {} ", app.page.rendered(ElementId::SwitchChinese));
    let eng = format!(" {} ", app.page.rendered(ElementId::SwitchEnglish));
    let on = Style::default()
        .fg(SWITCH_ACTIVE_FG)
        .bg(SWITCH_ACTIVE_BG)
        .add_modifier(Modifier::BOLD);
    let off = Style::default().fg(FG_DIM).bg(SWITCH_BG);
    let spans = vec![
        Span::styled(zh.clone(), if active { on } else { off }),
        Span::styled(eng.clone(), if active { off } else { on }),
    ];
    let width = cell_width(&zh) + cell_width(&eng);
    let switch_area = Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y,
        width: width.min(area.width),
        height: 1,
    };
    f.render_widget(Paragraph::new(Line::from(spans)), switch_area);
    app.controls.register(ControlKind::LanguageSwitch, switch_area);
}

fn render_description(f: &mut Frame<'_>, app: &App, area: Rect) {
    let text = Paragraph::new(format!(" {}", app.page.rendered(ElementId::Description)))
        .style(Style::default().fg(FG_PRIMARY).bg(BG_PRIMARY));
    f.render_widget(text, area);
}

/// Byte offset from which `before_cursor` must be shown so that the cursor
/// stays inside a box `width` cells wide.
fn scroll_offset(before_cursor: &str, width: u16) -> usize {
    let limit = width.saturating_sub(1) as usize;
    let mut used = UnicodeWidthStr::width(before_cursor);
    let mut offset = 0;
    for ch in before_cursor.chars() {
        if used <= limit {
            break;
        }
        used -= UnicodeWidthChar::width(ch).unwrap_or(0);
        offset += ch.len_utf8();
    }
    offset
}

fn render_input(f: &mut Frame<'_>, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER_FOCUS))
        .style(Style::default().bg(BG_PANEL));
    let inner = block.inner(area);
    f.render_widget(block, area);
    app.controls.register(ControlKind::Input, area);

    let input = &app.page.input;
    if input.is_empty() {
        let placeholder = Paragraph::new(Span::styled(
            app.page.rendered(ElementId::Input).to_string(),
            Style::default().fg(FG_DIM).add_modifier(Modifier::ITALIC),
        ));
        f.render_widget(placeholder, inner);
        f.set_cursor(inner.x, inner.y);
        return;
    }

    let text = input.text();
    let before = &text[..input.cursor()];
    let offset = scroll_offset(before, inner.width);
    let shown = Paragraph::new(Span::styled(
        text[offset..].to_string(),
        Style::default().fg(FG_PRIMARY),
    ));
    f.render_widget(shown, inner);
    let cursor_x = inner.x + cell_width(&before[offset..]).min(inner.width.saturating_sub(1));
    f.set_cursor(cursor_x, inner.y);
}

fn render_buttons(f: &mut Frame<'_>, app: &mut App, area: Rect) {
    let style = Style::default().fg(BUTTON_FG).bg(BUTTON_BG).add_modifier(Modifier::BOLD);
    let mut cursor = area.x + 1;
    for (id, kind) in [
        (ElementId::SubmitButton, ControlKind::Submit),
        (ElementId::ClearButton, ControlKind::Clear),
    ] {
        let label = format!(" {} ", app.page.rendered(id));
        let width = cell_width(&label).min(area.x + area.width - cursor);
        let rect = Rect {
            x: cursor,
            y: area.y,
            width,
            height: 1,
        };
        f.render_widget(Paragraph::new(Span::styled(label, style)), rect);
        app.controls.register(kind, rect);
        cursor = (cursor + width + 2).min(area.x + area.width);
    }
}

fn render_result(f: &mut Frame<'_>, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER_IDLE))
        .style(Style::default().bg(BG_PANEL));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = match &app.page.result {
        ResultArea::Empty => Vec::new(),
        ResultArea::Recommendation { label, anchor } => {
            let link_x = inner.x + cell_width(label);
            if link_x < inner.x + inner.width {
                app.controls.register(
                    ControlKind::ResultLink,
                    Rect {
                        x: link_x,
                        y: inner.y,
                        width: (cell_width(&anchor.text) + 2).min(inner.x + inner.width - link_x),
                        height: 1,
                    },
                );
            }
            let mut lines = vec![Line::from(vec![
                Span::styled(label.clone(), Style::default().fg(FG_PRIMARY)),
                Span::styled(
                    if anchor.new_context {
                        format!("{} ↗", anchor.text)
                    } else {
                        anchor.text.clone()
                    },
                    Style::default()
                        .fg(LINK_FG)
                        .add_modifier(Modifier::UNDERLINED | Modifier::BOLD),
                ),
            ])];
            if !anchor.href.is_empty() {
                lines.push(Line::from(vec![
                    Span::styled(anchor.href.clone(), Style::default().fg(FG_DIM)),
                    Span::styled(
                        format!("  ({})", app.strings.text(app.lang(), keys::OPEN_LINK)),
                        Style::default().fg(FG_DIM).add_modifier(Modifier::ITALIC),
                    ),
                ]));
            }
            lines
        }
        ResultArea::Failed { label, detail } => vec![Line::from(vec![
            Span::styled(label.clone(), Style::default().fg(ERROR_FG).add_modifier(Modifier::BOLD)),
            Span::styled(detail.clone(), Style::default().fg(ERROR_FG)),
        ])],
    };
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn render_carousel(f: &mut Frame<'_>, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER_IDLE))
        .style(Style::default().bg(BG_PANEL));
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.width < 8 || inner.height < 3 {
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(3), Constraint::Min(1), Constraint::Length(3)])
        .split(inner);
    let arrow = Style::default().fg(BUTTON_FG).bg(BUTTON_BG).add_modifier(Modifier::BOLD);
    let prev = Rect { height: 1, ..columns[0] };
    let next = Rect { height: 1, ..columns[2] };
    f.render_widget(Paragraph::new(Span::styled(" ◀ ", arrow)), prev);
    f.render_widget(Paragraph::new(Span::styled(" ▶ ", arrow)), next);
    app.controls.register(ControlKind::CarouselPrev, prev);
    app.controls.register(ControlKind::CarouselNext, next);

    let carousel = &app.page.carousel;
    let body = columns[1];
    for panel in (0..carousel.len()).filter(|panel| carousel.is_visible(*panel)) {
        let name = app.page.rendered(ElementId::PanelName(panel));
        let description = app.page.rendered(ElementId::PanelDescription(panel));
        let content = vec![
            Line::from(Span::styled(
                name.to_string(),
                Style::default().fg(SWITCH_ACTIVE_BG).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(description.to_string(), Style::default().fg(FG_PRIMARY))),
        ];
        let text_area = Rect {
            height: body.height.saturating_sub(1),
            ..body
        };
        f.render_widget(
            Paragraph::new(content)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            text_area,
        );
    }

    let dots: Vec<Span> = (0..carousel.len())
        .map(|panel| {
            if panel == carousel.index() {
                Span::styled("● ", Style::default().fg(SWITCH_ACTIVE_BG))
            } else {
                Span::styled("○ ", Style::default().fg(FG_DIM))
            }
        })
        .collect();
    let dots_area = Rect {
        y: body.y + body.height.saturating_sub(1),
        height: 1,
        ..body
    };
    f.render_widget(
        Paragraph::new(Line::from(dots)).alignment(Alignment::Center),
        dots_area,
    );
}

fn render_status_bar(f: &mut Frame<'_>, app: &App, area: Rect) {
    let lang = format!(" {} ", app.lang().tag());
    let message = format!(" {}", app.status_message);
    let line = Line::from(vec![
        Span::styled(
            lang,
            Style::default().fg(SWITCH_ACTIVE_FG).bg(SWITCH_ACTIVE_BG),
        ),
        Span::styled(message, Style::default().fg(BAR_TEXT).bg(BAR_BG)),
    ]);
    f.render_widget(
        Paragraph::new(line).style(Style::default().bg(BAR_BG)),
        area,
    );
}
