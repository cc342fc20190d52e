//! Terminal drawing of the search box, notices and the displayed entry.
//!
//! The entry is laid out by hand rather than with `Paragraph` wrapping so
//! that every clickable token has a known cell position; those positions are
//! recorded into [`App::regions`] for mouse hit-testing.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::controller::App;
use crate::view::{EntryView, LinkList, Target};

const BUTTON_WIDTH: u16 = 12;
const HELP: &str = " Enter search · Tab/Shift-Tab select · ↑↓ PgUp/PgDn scroll · Esc quit ";

pub fn draw(frame: &mut Frame, app: &mut App) {
    let [search_area, notice_area, results_area, help_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    app.regions.clear();
    draw_search(frame, app, search_area);
    draw_notice(frame, app, notice_area);
    draw_results(frame, app, results_area);
    frame.render_widget(
        Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray)),
        help_area,
    );
}

fn draw_search(frame: &mut Frame, app: &mut App, area: Rect) {
    let [input_area, button_area] =
        Layout::horizontal([Constraint::Min(10), Constraint::Length(BUTTON_WIDTH)]).areas(area);

    frame.render_widget(app.query.textarea(), input_area);
    frame.render_widget(
        Paragraph::new("Search")
            .centered()
            .style(Style::default().add_modifier(Modifier::BOLD))
            .block(Block::bordered().border_style(Style::default().fg(Color::Cyan))),
        button_area,
    );
    app.regions.push(button_area, Target::SearchButton);
}

fn draw_notice(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    if let Some(notice) = app.search.notice() {
        spans.push(Span::styled(
            notice.text(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }
    // a later lookup may still be running behind an earlier notice
    if app.search.is_searching() {
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled("Searching…", Style::default().fg(Color::DarkGray)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_results(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::bordered().border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(displayed) = app.search.displayed() else {
        app.max_scroll = 0;
        app.scroll = 0;
        frame.render_widget(
            Paragraph::new("Type a word and press Enter.")
                .style(Style::default().fg(Color::DarkGray)),
            inner,
        );
        return;
    };

    let layout = layout_entry(&displayed.view, inner.width, app.selection);
    let height = usize::from(inner.height);
    let max_scroll = layout.lines.len().saturating_sub(height);
    let mut scroll = usize::from(app.scroll).min(max_scroll);
    if app.follow_selection {
        if let Some(hit) = layout.hits.iter().find(|hit| Some(hit.ordinal) == app.selection) {
            if hit.line < scroll {
                scroll = hit.line;
            } else if height > 0 && hit.line >= scroll + height {
                scroll = hit.line + 1 - height;
            }
        }
        app.follow_selection = false;
    }
    app.max_scroll = u16::try_from(max_scroll).unwrap_or(u16::MAX);
    app.scroll = u16::try_from(scroll).unwrap_or(app.max_scroll);

    for hit in &layout.hits {
        if hit.line < scroll || hit.line >= scroll + height || hit.x >= inner.width {
            continue;
        }
        let row = inner.y + u16::try_from(hit.line - scroll).unwrap_or(u16::MAX);
        let width = hit.width.min(inner.width - hit.x);
        app.regions
            .push(Rect::new(inner.x + hit.x, row, width, 1), hit.target.clone());
    }

    frame.render_widget(Paragraph::new(layout.lines).scroll((app.scroll, 0)), inner);
}

/// A clickable token inside the laid out entry, in content coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Hit {
    pub line: usize,
    pub x: u16,
    pub width: u16,
    /// Position of the target in [`EntryView::targets`].
    pub ordinal: usize,
    pub target: Target,
}

#[derive(Debug, Default)]
pub(crate) struct EntryLayout {
    pub lines: Vec<Line<'static>>,
    pub hits: Vec<Hit>,
}

pub(crate) fn layout_entry(view: &EntryView, width: u16, selected: Option<usize>) -> EntryLayout {
    let mut writer = Writer::new(width, selected);
    let bold = Style::default().add_modifier(Modifier::BOLD);

    writer.text(&view.header.word, bold.fg(Color::Cyan), 0);
    writer.end_line();
    if let Some(origin) = &view.header.origin {
        writer.text(
            origin,
            Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
            0,
        );
        writer.end_line();
    }
    for phonetic in &view.phonetics {
        writer.text(&phonetic.label(), Style::default().fg(Color::Magenta), 0);
        writer.space();
        let play_style = if phonetic.audio.is_some() {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        writer.token("▶ play", play_style, 0, Target::Play(phonetic.index));
        writer.end_line();
    }

    for meaning in &view.meanings {
        writer.blank_line();
        writer.text(&meaning.word, bold, 0);
        writer.text(
            &meaning.part_of_speech,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
            0,
        );
        writer.end_line();
        for definition in &meaning.definitions {
            writer.text(&definition.label(), Style::default(), 2);
            writer.end_line();
            if let Some(example) = &definition.example {
                writer.text(
                    &format!("example: {example}"),
                    Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
                    5,
                );
                writer.end_line();
            }
            writer.links(definition.synonyms.as_ref(), 5);
            writer.links(definition.antonyms.as_ref(), 5);
        }
        writer.links(meaning.synonyms.as_ref(), 2);
        writer.links(meaning.antonyms.as_ref(), 2);
    }
    writer.end_line();

    EntryLayout {
        lines: writer.lines,
        hits: writer.hits,
    }
}

struct Writer {
    width: u16,
    selected: Option<usize>,
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    x: u16,
    hits: Vec<Hit>,
    ordinal: usize,
}

impl Writer {
    fn new(width: u16, selected: Option<usize>) -> Self {
        Self {
            width,
            selected,
            lines: Vec::new(),
            current: Vec::new(),
            x: 0,
            hits: Vec::new(),
            ordinal: 0,
        }
    }

    fn end_line(&mut self) {
        if self.current.is_empty() {
            return;
        }
        self.lines.push(Line::from(std::mem::take(&mut self.current)));
        self.x = 0;
    }

    fn blank_line(&mut self) {
        self.end_line();
        self.lines.push(Line::default());
    }

    fn push(&mut self, text: String, style: Style) {
        let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
        self.x = self.x.saturating_add(width);
        self.current.push(Span::styled(text, style));
    }

    fn space(&mut self) {
        self.push(" ".to_owned(), Style::default());
    }

    /// Moves to a fresh line indented by `indent` when `width` more cells would not fit.
    fn make_room(&mut self, width: u16, indent: u16) {
        if self.x > indent && self.x.saturating_add(width) > self.width {
            self.end_line();
        }
        if self.x == 0 && indent > 0 {
            self.push(" ".repeat(usize::from(indent)), Style::default());
        }
    }

    /// Word-wrapped text; continuation lines start at `indent`.
    fn text(&mut self, text: &str, style: Style, indent: u16) {
        for word in text.split_whitespace() {
            let width = u16::try_from(word.width()).unwrap_or(u16::MAX);
            let at_start = self.x <= indent;
            let needed = if at_start { width } else { width.saturating_add(1) };
            self.make_room(needed, indent);
            if self.x > indent && !self.current.is_empty() {
                self.space();
            }
            self.push(word.to_owned(), style);
        }
    }

    fn token(&mut self, text: &str, style: Style, indent: u16, target: Target) {
        let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
        self.make_room(width, indent);
        let style = if self.selected == Some(self.ordinal) {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        };
        self.hits.push(Hit {
            line: self.lines.len(),
            x: self.x,
            width,
            ordinal: self.ordinal,
            target,
        });
        self.ordinal += 1;
        self.push(text.to_owned(), style);
    }

    fn links(&mut self, list: Option<&LinkList>, indent: u16) {
        let Some(list) = list else {
            return;
        };
        let heading_style = Style::default().add_modifier(Modifier::BOLD).fg(Color::Green);
        self.text(list.kind.heading(), heading_style, indent);
        self.space();
        let item_indent = indent + 2;
        let link_style = Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::UNDERLINED);
        for (index, item) in list.items.iter().enumerate() {
            self.token(item, link_style, item_indent, Target::Link(item.clone()));
            if index + 1 != list.items.len() {
                self.push(", ".to_owned(), Style::default());
            }
        }
        self.end_line();
    }
}

#[cfg(test)]
#[path = "draw_tests.rs"]
mod draw_tests;
