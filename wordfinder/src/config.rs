use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use dictionary::Dictionary;

/// Look up English words in the terminal.
#[derive(Debug, Parser)]
#[command(name = "wordfinder", version, about)]
pub struct Config {
    /// Word to look up on start-up
    pub word: Option<String>,

    /// Base url the word is appended to
    #[arg(long, env = "WORDFINDER_ENDPOINT", default_value = Dictionary::DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Seconds before a lookup is given up on
    #[arg(long, env = "WORDFINDER_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Directory for log files, defaults to the platform data directory
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("wordfinder")
                .join("logs")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_arguments() {
        let config = Config::try_parse_from(["wordfinder"]).unwrap();
        assert_eq!(config.word, None);
        assert_eq!(config.timeout(), Duration::from_secs(config.timeout_secs));
        assert!(config.log_dir().ends_with("wordfinder/logs"));
    }

    #[test]
    fn word_and_flags_are_parsed() {
        let config = Config::try_parse_from([
            "wordfinder",
            "serendipity",
            "--endpoint",
            "http://localhost:8080/en/",
            "--timeout-secs",
            "3",
            "--log-dir",
            "/tmp/wf",
        ])
        .unwrap();
        assert_eq!(config.word.as_deref(), Some("serendipity"));
        assert_eq!(config.endpoint, "http://localhost:8080/en/");
        assert_eq!(config.timeout(), Duration::from_secs(3));
        assert_eq!(config.log_dir(), PathBuf::from("/tmp/wf"));
    }

    #[test]
    fn timeout_must_be_a_number() {
        assert!(Config::try_parse_from(["wordfinder", "--timeout-secs", "soon"]).is_err());
    }
}
