//! Service settings: defaults, an optional RON file, then command-line flags.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use log::LevelFilter;
use serde::Deserialize;
use service_logging::LogDestination;
use summarizer_core::{RuleSegmenter, StopWordError, StopWordSet, Summarizer};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {message}")]
    Read { path: String, message: String },
    #[error("failed to parse config file {path}: {message}")]
    Parse { path: String, message: String },
    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },
    #[error(transparent)]
    StopWords(#[from] StopWordError),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    pub addr: String,
    /// Applied when a request omits `max_length`.
    pub default_max_length: usize,
    pub language: String,
    /// Replaces the built-in list for `language` when set.
    pub stopwords_file: Option<PathBuf>,
    pub extra_abbreviations: Vec<String>,
    pub log_level: String,
    pub log_destination: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0:8000".to_string(),
            default_max_length: 300,
            language: "en".to_string(),
            stopwords_file: None,
            extra_abbreviations: Vec::new(),
            log_level: "info".to_string(),
            log_destination: "terminal".to_string(),
        }
    }
}

impl ServiceSettings {
    pub fn from_ron_str(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        ron::from_str(content).map_err(|err| ConfigError::Parse {
            path: origin.display().to_string(),
            message: err.to_string(),
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|err| ConfigError::Read {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;
        Self::from_ron_str(&content, path)
    }

    pub fn log_level(&self) -> Result<LevelFilter, ConfigError> {
        service_logging::parse_level(&self.log_level).ok_or_else(|| ConfigError::InvalidValue {
            field: "log_level",
            value: self.log_level.clone(),
        })
    }

    pub fn log_destination(&self) -> Result<LogDestination, ConfigError> {
        LogDestination::parse(&self.log_destination).ok_or_else(|| ConfigError::InvalidValue {
            field: "log_destination",
            value: self.log_destination.clone(),
        })
    }
}

#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Extractive text summarization over HTTP")]
pub struct Args {
    /// RON file with service settings; flags below override it
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Address to bind the service to
    #[arg(long)]
    pub addr: Option<String>,
    /// Stop-word language code (en, de, fr, ...)
    #[arg(long)]
    pub language: Option<String>,
    /// File with one stop word per line, replacing the language list
    #[arg(long)]
    pub stopwords_file: Option<PathBuf>,
    /// Character limit used when a request omits max_length
    #[arg(long)]
    pub default_max_length: Option<usize>,
    /// Log level (error, warn, info, debug, trace)
    #[arg(long)]
    pub log_level: Option<String>,
    /// Log destination (terminal, file, both)
    #[arg(long = "log")]
    pub log_destination: Option<String>,
}

impl Args {
    /// Merge defaults, the optional config file and the flags.
    pub fn resolve(self) -> Result<ServiceSettings, ConfigError> {
        let mut settings = match &self.config {
            Some(path) => ServiceSettings::load(path)?,
            None => ServiceSettings::default(),
        };

        if let Some(addr) = self.addr {
            settings.addr = addr;
        }
        if let Some(language) = self.language {
            settings.language = language;
        }
        if let Some(path) = self.stopwords_file {
            settings.stopwords_file = Some(path);
        }
        if let Some(limit) = self.default_max_length {
            settings.default_max_length = limit;
        }
        if let Some(level) = self.log_level {
            settings.log_level = level;
        }
        if let Some(destination) = self.log_destination {
            settings.log_destination = destination;
        }

        // Surface typos before the listener is bound.
        settings.log_level()?;
        settings.log_destination()?;
        Ok(settings)
    }
}

/// Load stop words and segmentation rules once for the lifetime of the process.
pub fn build_summarizer(settings: &ServiceSettings) -> Result<Summarizer, ConfigError> {
    let stop_words = match &settings.stopwords_file {
        Some(path) => StopWordSet::from_file(path)?,
        None => StopWordSet::for_language(&settings.language)?,
    };
    let abbreviations: Vec<&str> = settings
        .extra_abbreviations
        .iter()
        .map(String::as_str)
        .collect();
    let segmenter = RuleSegmenter::new().with_abbreviations(&abbreviations);

    Ok(Summarizer::new(Arc::new(segmenter), Arc::new(stop_words)))
}
