use std::io;

use crate::view::PhoneticView;

#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("no pronunciation at position {0}")]
    NoSuchPhonetic(usize),
    #[error("no audio available for this pronunciation")]
    Missing,
    #[error("failed to play {url}: {source}")]
    Launch {
        url: String,
        #[source]
        source: io::Error,
    },
}

pub trait AudioPlayer {
    fn play(&self, url: &str) -> Result<(), AudioError>;
}

/// Hands the audio url to whatever the desktop opens `.mp3` links with.
pub struct SystemPlayer;

impl AudioPlayer for SystemPlayer {
    fn play(&self, url: &str) -> Result<(), AudioError> {
        open::that_detached(url).map_err(|source| AudioError::Launch {
            url: url.to_owned(),
            source,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioHandle {
    url: String,
}

impl AudioHandle {
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Playable audio per phonetic position of the entry currently displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudioHandles {
    handles: Vec<Option<AudioHandle>>,
}

impl AudioHandles {
    pub fn bind(phonetics: &[PhoneticView]) -> Self {
        Self {
            handles: phonetics
                .iter()
                .map(|phonetic| {
                    phonetic
                        .audio
                        .as_ref()
                        .map(|url| AudioHandle { url: url.clone() })
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn get(&self, index: usize) -> Option<&AudioHandle> {
        self.handles.get(index).and_then(Option::as_ref)
    }

    pub fn play(&self, index: usize, player: &dyn AudioPlayer) -> Result<&AudioHandle, AudioError> {
        if index >= self.len() {
            return Err(AudioError::NoSuchPhonetic(index));
        }
        let handle = self.get(index).ok_or(AudioError::Missing)?;
        player.play(&handle.url)?;
        Ok(handle)
    }
}
