use dictionary::{LookupOutcome, Word};

use crate::audio::AudioHandles;
use crate::view::{render_entry, EntryView};

pub const NOT_FOUND_NOTICE: &str =
    "No exact match found for your search in English. Please Retry!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Found,
    NotFound,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    NotFound,
    Failed(String),
    Audio(String),
}

impl Notice {
    pub fn text(&self) -> String {
        match self {
            Notice::NotFound => NOT_FOUND_NOTICE.to_owned(),
            Notice::Failed(reason) => {
                format!("Could not reach the dictionary ({reason}). Please Retry!")
            }
            Notice::Audio(reason) => format!("Audio: {reason}"),
        }
    }
}

/// A lookup that has come back, in whatever order lookups resolve.
#[derive(Debug)]
pub struct LookupResolved {
    pub term: String,
    pub outcome: LookupOutcome,
}

/// The entry on screen together with the audio bound to its phonetics.
#[derive(Debug)]
pub struct DisplayedEntry {
    pub word: Word,
    pub view: EntryView,
    pub audio: AudioHandles,
}

impl DisplayedEntry {
    pub fn new(word: Word) -> Self {
        let view = render_entry(&word);
        let audio = AudioHandles::bind(&view.phonetics);
        Self { word, view, audio }
    }
}

#[derive(Debug, Default)]
pub struct SearchState {
    status: Status,
    displayed: Option<DisplayedEntry>,
    notice: Option<Notice>,
    in_flight: usize,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn displayed(&self) -> Option<&DisplayedEntry> {
        self.displayed.as_ref()
    }

    pub fn word(&self) -> Option<&Word> {
        self.displayed.as_ref().map(|displayed| &displayed.word)
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn is_searching(&self) -> bool {
        self.in_flight > 0
    }

    pub fn begin_lookup(&mut self, term: &str) {
        self.in_flight += 1;
        tracing::debug!(term, in_flight = self.in_flight, "lookup started");
    }

    /// Applies a resolved lookup; returns whether the displayed entry was replaced.
    pub fn resolve(&mut self, resolved: LookupResolved) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        match resolved.outcome {
            LookupOutcome::Found(word) => {
                tracing::debug!(term = %resolved.term, word = %word.word, "displaying entry");
                self.status = Status::Found;
                self.notice = None;
                self.displayed = Some(DisplayedEntry::new(word));
                true
            }
            LookupOutcome::NotFound(_) => {
                self.status = Status::NotFound;
                self.notice = Some(Notice::NotFound);
                false
            }
            LookupOutcome::TransientError(error) => {
                self.status = Status::Failed;
                self.notice = Some(Notice::Failed(error.to_string()));
                false
            }
        }
    }

    pub fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn clear_audio_notice(&mut self) {
        if matches!(self.notice, Some(Notice::Audio(_))) {
            self.notice = None;
        }
    }
}
