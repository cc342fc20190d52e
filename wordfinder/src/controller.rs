//! Turns terminal input into search actions and state changes.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::audio::AudioPlayer;
use crate::input::QueryInput;
use crate::layout::Regions;
use crate::state::{LookupResolved, Notice, SearchState};
use crate::view::Target;

const PAGE: i32 = 10;
const WHEEL: i32 = 3;

/// What the runtime has to do in response to an input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Search(String),
    PlayAudio(usize),
    Quit,
}

#[derive(Default)]
pub struct App {
    pub query: QueryInput,
    pub search: SearchState,
    pub regions: Regions,
    /// Ordinal into [`App::targets`] of the keyboard selection.
    pub selection: Option<usize>,
    pub scroll: u16,
    pub max_scroll: u16,
    /// Set when the selection moved and the next draw should bring it into view.
    pub follow_selection: bool,
    should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn handle_event(&mut self, event: &Event) -> Option<Action> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(*key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            Event::Paste(text) => {
                self.selection = None;
                self.query.insert_str(text);
                None
            }
            _ => None,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }
        match key.code {
            KeyCode::Enter => match self.selected_target() {
                Some(target) => self.activate(target),
                None => self.submit(),
            },
            KeyCode::Tab => {
                self.select_next();
                None
            }
            KeyCode::BackTab => {
                self.select_previous();
                None
            }
            KeyCode::Esc => {
                if self.selection.take().is_some() {
                    None
                } else {
                    Some(Action::Quit)
                }
            }
            KeyCode::PageDown => self.scroll_by(PAGE),
            KeyCode::PageUp => self.scroll_by(-PAGE),
            KeyCode::Down => self.scroll_by(1),
            KeyCode::Up => self.scroll_by(-1),
            _ => {
                self.selection = None;
                self.query.input(key);
                None
            }
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<Action> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let target = self.regions.hit(mouse.column, mouse.row)?;
                tracing::debug!(?target, "clicked");
                self.activate(target)
            }
            MouseEventKind::ScrollDown => self.scroll_by(WHEEL),
            MouseEventKind::ScrollUp => self.scroll_by(-WHEEL),
            _ => None,
        }
    }

    /// Submits the search box; blank queries are ignored.
    pub fn submit(&mut self) -> Option<Action> {
        let text = self.query.text().to_owned();
        self.submit_term(&text)
    }

    /// Searches `term` trimmed, or nothing when it is blank.
    pub fn submit_term(&mut self, term: &str) -> Option<Action> {
        let term = term.trim();
        if term.is_empty() {
            return None;
        }
        Some(self.redirect(term.to_owned()))
    }

    /// Searches `word` exactly as if it had been typed and submitted.
    pub fn redirect(&mut self, word: String) -> Action {
        self.query.clear();
        self.selection = None;
        Action::Search(word)
    }

    pub fn activate(&mut self, target: Target) -> Option<Action> {
        match target {
            Target::SearchButton => self.submit(),
            Target::Play(index) => Some(Action::PlayAudio(index)),
            Target::Link(word) => Some(self.redirect(word)),
        }
    }

    pub fn apply(&mut self, resolved: LookupResolved) {
        let term = resolved.term.clone();
        if self.search.resolve(resolved) {
            self.scroll = 0;
            self.selection = None;
        }
        tracing::debug!(
            term,
            status = ?self.search.status(),
            displayed = self.search.word().map(|word| word.word.as_str()),
            "lookup applied"
        );
    }

    pub fn play_audio(&mut self, index: usize, player: &dyn AudioPlayer) {
        let Some(displayed) = self.search.displayed() else {
            return;
        };
        match displayed.audio.play(index, player) {
            Ok(handle) => {
                tracing::info!(index, url = handle.url(), "playing pronunciation");
                self.search.clear_audio_notice();
            }
            Err(error) => {
                tracing::warn!(index, %error, "could not play pronunciation");
                self.search.set_notice(Notice::Audio(error.to_string()));
            }
        }
    }

    pub fn targets(&self) -> Vec<Target> {
        self.search
            .displayed()
            .map(|displayed| displayed.view.targets())
            .unwrap_or_default()
    }

    pub fn selected_target(&self) -> Option<Target> {
        let selection = self.selection?;
        self.targets().into_iter().nth(selection)
    }

    fn select_next(&mut self) {
        let count = self.targets().len();
        self.selection = match (self.selection, count) {
            (_, 0) => None,
            (Some(current), _) => Some((current + 1) % count),
            (None, _) => Some(0),
        };
        self.follow_selection = true;
    }

    fn select_previous(&mut self) {
        let count = self.targets().len();
        self.selection = match (self.selection, count) {
            (_, 0) => None,
            (Some(current), _) => Some((current + count - 1) % count),
            (None, _) => Some(count - 1),
        };
        self.follow_selection = true;
    }

    fn scroll_by(&mut self, delta: i32) -> Option<Action> {
        let scroll = (i32::from(self.scroll) + delta).clamp(0, i32::from(self.max_scroll));
        self.scroll = u16::try_from(scroll).unwrap_or(self.max_scroll);
        None
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
