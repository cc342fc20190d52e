// https://dictionaryapi.dev/ - free dictionary api, one entry per homograph, `message` object when nothing matches

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    DictionaryError, NotFoundError, PartOfSpeech, Phonetic, Word, WordDefinition, WordMeaning,
};

pub(crate) const DICTIONARY_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en/";

/// Characters that cannot appear raw inside a single url path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

pub(crate) fn definition_url(endpoint: &str, word: &str) -> String {
    format!("{endpoint}{}", utf8_percent_encode(word, PATH_SEGMENT))
}

/// `.` and `..` are dot-segments to url parsing in any spelling, `%2E` included,
/// so appending them would resolve to the endpoint or its parent.
pub(crate) fn is_dot_segment(word: &str) -> bool {
    matches!(word, "." | "..")
}

pub(crate) async fn get_definition(
    client: &reqwest::Client,
    endpoint: &str,
    word: &str,
) -> Result<Word, DictionaryError> {
    if is_dot_segment(word) {
        tracing::debug!(word, "dot-segment term, not requesting");
        return Err(DictionaryError::NotFound(NotFoundError::no_definitions()));
    }
    let url = definition_url(endpoint, word);
    tracing::debug!(%url, "requesting definition");
    let res: reqwest::Response = client.get(&url).send().await?;
    let status = res.status();
    // the api answers misses with a 404 and a json body, so the status is not checked
    let body = res.bytes().await?;
    tracing::debug!(%status, bytes = body.len(), "dictionary responded");
    parse_definition(&body)
}

pub(crate) fn parse_definition(body: &[u8]) -> Result<Word, DictionaryError> {
    let value: Value = serde_json::from_slice(body).map_err(DictionaryError::Deserialize)?;
    if let Some(message) = value.get("message") {
        return Err(DictionaryError::NotFound(NotFoundError {
            title: string_field(&value, "title"),
            message: message
                .as_str()
                .map(str::to_owned)
                .unwrap_or_else(|| message.to_string()),
            resolution: string_field(&value, "resolution"),
        }));
    }
    if !value.is_array() {
        return Err(DictionaryError::UnexpectedShape(format!(
            "expected an array of entries, got {}",
            kind_of(&value)
        )));
    }
    let entries: Vec<ApiWord> = serde_json::from_value(value).map_err(DictionaryError::Deserialize)?;
    if entries.len() > 1 {
        tracing::debug!(discarded = entries.len() - 1, "keeping only the first entry");
    }
    entries
        .into_iter()
        .next()
        .map(Word::from)
        .ok_or_else(|| DictionaryError::NotFound(NotFoundError::no_definitions()))
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_owned)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiWord {
    word: String,
    #[serde(default)]
    phonetic: Option<String>,
    #[serde(default)]
    phonetics: Vec<ApiPhonetic>,
    #[serde(default)]
    origin: Option<String>,
    #[serde(default)]
    meanings: Vec<ApiMeaning>,
}

#[derive(Debug, Deserialize)]
struct ApiPhonetic {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    audio: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiMeaning {
    part_of_speech: String,
    #[serde(default)]
    definitions: Vec<ApiDefinition>,
    #[serde(default)]
    synonyms: Vec<String>,
    #[serde(default)]
    antonyms: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ApiDefinition {
    definition: String,
    #[serde(default)]
    example: Option<String>,
    #[serde(default)]
    synonyms: Vec<String>,
    #[serde(default)]
    antonyms: Vec<String>,
}

impl From<ApiWord> for Word {
    fn from(word: ApiWord) -> Self {
        Self {
            word: word.word,
            phonetic: non_empty(word.phonetic),
            phonetics: word.phonetics.into_iter().map(Phonetic::from).collect(),
            origin: non_empty(word.origin),
            meanings: word.meanings.into_iter().map(WordMeaning::from).collect(),
        }
    }
}

impl From<ApiPhonetic> for Phonetic {
    fn from(phonetic: ApiPhonetic) -> Self {
        Self {
            text: non_empty(phonetic.text),
            audio: non_empty(phonetic.audio),
        }
    }
}

impl From<ApiMeaning> for WordMeaning {
    fn from(meaning: ApiMeaning) -> Self {
        Self {
            part_of_speech: PartOfSpeech::from(meaning.part_of_speech.as_str()),
            definitions: meaning
                .definitions
                .into_iter()
                .map(WordDefinition::from)
                .collect(),
            synonyms: meaning.synonyms,
            antonyms: meaning.antonyms,
        }
    }
}

impl From<ApiDefinition> for WordDefinition {
    fn from(definition: ApiDefinition) -> Self {
        Self {
            definition: definition.definition,
            example: non_empty(definition.example),
            synonyms: definition.synonyms,
            antonyms: definition.antonyms,
        }
    }
}
