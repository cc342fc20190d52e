use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use dictionary::{
    DictionaryError, LookupOutcome, NotFoundError, PartOfSpeech, Phonetic, Word, WordDefinition,
    WordMeaning,
};

use crate::controller::App;
use crate::state::LookupResolved;

/// The entry the api returns for "hello", trimmed to one sense.
pub fn hello_word() -> Word {
    Word {
        word: "hello".to_owned(),
        phonetic: None,
        phonetics: vec![Phonetic {
            text: Some("həˈloʊ".to_owned()),
            audio: Some("a.mp3".to_owned()),
        }],
        origin: None,
        meanings: vec![WordMeaning {
            part_of_speech: PartOfSpeech::Exclamation,
            definitions: vec![definition("used as a greeting", &["hi"], &[])],
            synonyms: vec![],
            antonyms: vec![],
        }],
    }
}

pub fn definition(text: &str, synonyms: &[&str], antonyms: &[&str]) -> WordDefinition {
    WordDefinition {
        definition: text.to_owned(),
        example: None,
        synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
        antonyms: antonyms.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn found(term: &str, word: Word) -> LookupResolved {
    LookupResolved {
        term: term.to_owned(),
        outcome: LookupOutcome::Found(word),
    }
}

pub fn not_found(term: &str) -> LookupResolved {
    LookupResolved {
        term: term.to_owned(),
        outcome: LookupOutcome::NotFound(NotFoundError {
            title: None,
            message: "No Definitions Found".to_owned(),
            resolution: None,
        }),
    }
}

pub fn transient(term: &str) -> LookupResolved {
    LookupResolved {
        term: term.to_owned(),
        outcome: LookupOutcome::TransientError(DictionaryError::UnexpectedShape(
            "got null".to_owned(),
        )),
    }
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_event(&Event::Key(key(KeyCode::Char(c))));
    }
}
