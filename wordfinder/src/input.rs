use crossterm::event::KeyEvent;
use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

const PLACEHOLDER: &str = "Search for your word...";

/// The single-line search box.
pub struct QueryInput {
    textarea: TextArea<'static>,
}

impl QueryInput {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();

        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" English ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        textarea.set_placeholder_text(PLACEHOLDER);
        textarea.set_cursor_line_style(Style::default());

        Self { textarea }
    }

    pub fn text(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    pub fn input(&mut self, key: KeyEvent) -> bool {
        self.textarea.input(key)
    }

    pub fn insert_str(&mut self, text: &str) {
        // pasted newlines would split the query across lines
        let text = text.replace(['\r', '\n'], " ");
        self.textarea.insert_str(text);
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }
}

impl Default for QueryInput {
    fn default() -> Self {
        Self::new()
    }
}
