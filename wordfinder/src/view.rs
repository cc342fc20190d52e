//! Projection of a dictionary entry into the tree the terminal draws.
//!
//! Everything here is pure: the same [`Word`] always yields the same
//! [`EntryView`], and list identity is the position inside the already
//! ordered sequences.

use dictionary::{Word, WordDefinition, WordMeaning};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView {
    pub header: HeaderView,
    pub phonetics: Vec<PhoneticView>,
    pub meanings: Vec<MeaningView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub word: String,
    pub origin: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneticView {
    pub index: usize,
    pub text: String,
    pub audio: Option<String>,
}

impl PhoneticView {
    pub fn label(&self) -> String {
        format!("/{}/", self.text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeaningView {
    pub word: String,
    pub part_of_speech: String,
    pub definitions: Vec<DefinitionView>,
    pub synonyms: Option<LinkList>,
    pub antonyms: Option<LinkList>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionView {
    /// 1-based, restarts for every meaning.
    pub number: usize,
    pub text: String,
    pub example: Option<String>,
    pub synonyms: Option<LinkList>,
    pub antonyms: Option<LinkList>,
}

impl DefinitionView {
    pub fn label(&self) -> String {
        format!("{}. {}", self.number, self.text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Synonym,
    Antonym,
}

impl LinkKind {
    pub fn heading(self) -> &'static str {
        match self {
            LinkKind::Synonym => "SYNONYM",
            LinkKind::Antonym => "ANTONYM",
        }
    }
}

/// A non-empty list of words that each redirect the search when activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkList {
    pub kind: LinkKind,
    pub items: Vec<String>,
}

impl LinkList {
    fn new(kind: LinkKind, items: &[String]) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        Some(Self {
            kind,
            items: items.to_vec(),
        })
    }

    pub fn joined(&self) -> String {
        self.items.join(", ")
    }
}

/// Something on screen the user can click or select with the keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    SearchButton,
    Play(usize),
    Link(String),
}

pub fn render_entry(word: &Word) -> EntryView {
    let headline = word.phonetic.as_deref().unwrap_or_default();
    EntryView {
        header: HeaderView {
            word: word.word.clone(),
            origin: word.origin.clone(),
        },
        phonetics: word
            .phonetics
            .iter()
            .enumerate()
            .map(|(index, phonetic)| PhoneticView {
                index,
                text: phonetic
                    .text
                    .as_deref()
                    .unwrap_or(headline)
                    .trim_matches('/')
                    .to_owned(),
                audio: phonetic.audio.clone(),
            })
            .collect(),
        meanings: word
            .meanings
            .iter()
            .map(|meaning| render_meaning(&word.word, meaning))
            .collect(),
    }
}

fn render_meaning(word: &str, meaning: &WordMeaning) -> MeaningView {
    MeaningView {
        word: word.to_owned(),
        part_of_speech: meaning.part_of_speech.to_string(),
        definitions: meaning
            .definitions
            .iter()
            .enumerate()
            .map(|(index, definition)| render_definition(index + 1, definition))
            .collect(),
        synonyms: LinkList::new(LinkKind::Synonym, &meaning.synonyms),
        antonyms: LinkList::new(LinkKind::Antonym, &meaning.antonyms),
    }
}

fn render_definition(number: usize, definition: &WordDefinition) -> DefinitionView {
    DefinitionView {
        number,
        text: definition.definition.clone(),
        example: definition.example.clone(),
        synonyms: LinkList::new(LinkKind::Synonym, &definition.synonyms),
        antonyms: LinkList::new(LinkKind::Antonym, &definition.antonyms),
    }
}

impl EntryView {
    /// Activatable targets in reading order: play buttons, then every link
    /// list of each meaning, definition lists before the meaning's own.
    pub fn targets(&self) -> Vec<Target> {
        let mut targets: Vec<Target> = self
            .phonetics
            .iter()
            .map(|phonetic| Target::Play(phonetic.index))
            .collect();
        for meaning in &self.meanings {
            for list in meaning.link_lists() {
                targets.extend(list.items.iter().cloned().map(Target::Link));
            }
        }
        targets
    }
}

impl MeaningView {
    pub fn link_lists(&self) -> impl Iterator<Item = &LinkList> {
        self.definitions
            .iter()
            .flat_map(|definition| [&definition.synonyms, &definition.antonyms])
            .chain([&self.synonyms, &self.antonyms])
            .flatten()
    }
}
