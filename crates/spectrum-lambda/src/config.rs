use std::env;
use std::path::PathBuf;

use spectrum_profiles::QuestionBank;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub bucket: String,
    pub region: String,
    /// JSON question bank to load instead of the built-in set.
    pub question_bank: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_format = match lookup("LOG_FORMAT").as_deref() {
            Some("pretty") => LogFormat::Pretty,
            _ => LogFormat::Json,
        };

        Self {
            bucket: lookup("SPECTRUM_BUCKET").unwrap_or_else(|| "spectrum".to_string()),
            region: lookup("AWS_REGION").unwrap_or_else(|| "us-east-1".to_string()),
            question_bank: lookup("SPECTRUM_QUESTION_BANK")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            log_format,
        }
    }

    /// Load the configured question bank. A configured file that cannot be
    /// read or validated is an error, not a fallback to the built-in set.
    pub fn load_question_bank(&self) -> eyre::Result<QuestionBank> {
        match &self.question_bank {
            None => Ok(QuestionBank::builtin()),
            Some(path) => {
                let contents = std::fs::read_to_string(path).map_err(|e| {
                    eyre::eyre!("failed to read question bank at {}: {e}", path.display())
                })?;
                let bank = QuestionBank::from_json(&contents).map_err(|e| {
                    eyre::eyre!("invalid question bank at {}: {e}", path.display())
                })?;
                Ok(bank)
            }
        }
    }
}
