use std::fmt;

/// A single dictionary entry, the first candidate the API returned for a term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub word: String,
    pub phonetic: Option<String>,
    pub phonetics: Vec<Phonetic>,
    pub origin: Option<String>,
    pub meanings: Vec<WordMeaning>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phonetic {
    pub text: Option<String>,
    /// Audio source url, `None` when the API sent nothing or an empty string.
    pub audio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordMeaning {
    pub part_of_speech: PartOfSpeech,
    pub definitions: Vec<WordDefinition>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartOfSpeech {
    Noun,
    Pronoun,
    Verb,
    Adjective,
    Adverb,
    Preposition,
    Conjunction,
    Interjection,
    Exclamation,
    Determiner,
    /// Anything the API sends that is not one of the classes above, kept verbatim.
    Other(String),
}

impl From<&str> for PartOfSpeech {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "noun" => PartOfSpeech::Noun,
            "pronoun" => PartOfSpeech::Pronoun,
            "verb" => PartOfSpeech::Verb,
            "adjective" => PartOfSpeech::Adjective,
            "adverb" => PartOfSpeech::Adverb,
            "preposition" => PartOfSpeech::Preposition,
            "conjunction" => PartOfSpeech::Conjunction,
            "interjection" => PartOfSpeech::Interjection,
            "exclamation" => PartOfSpeech::Exclamation,
            "determiner" => PartOfSpeech::Determiner,
            _ => PartOfSpeech::Other(value.to_owned()),
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Pronoun => "pronoun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Preposition => "preposition",
            PartOfSpeech::Conjunction => "conjunction",
            PartOfSpeech::Interjection => "interjection",
            PartOfSpeech::Exclamation => "exclamation",
            PartOfSpeech::Determiner => "determiner",
            PartOfSpeech::Other(other) => other.as_str(),
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordDefinition {
    pub definition: String,
    pub example: Option<String>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}
