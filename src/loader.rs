//! Rule loaders.
//!
//! A [`RuleLoader`] produces a [`RuleStore`] from somewhere: memory, a file,
//! or the list published at [`DEFAULT_PSL_URL`]. Loaders do not cache; call
//! `load` once and share the resulting store.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{LoadErrorKind, PslError, Result};
use crate::parser::parse_rules;
use crate::rules::{RuleData, RuleStore};

/// Logger callback type for reporting list downloads
type LoggerCallback = Box<dyn Fn(&str) + Send + Sync>;

/// Canonical location of the Public Suffix List
pub const DEFAULT_PSL_URL: &str = "https://publicsuffix.org/list/public_suffix_list.dat";

/// Trait for loading PSL rules
pub trait RuleLoader: Send + Sync {
    /// Load the rule store
    fn load(&self) -> Result<RuleStore>;
}

/// Rule file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleFormat {
    /// Public Suffix List text
    List,
    /// Nested-mapping JSON (see [`RuleData`])
    Json,
}

impl RuleFormat {
    /// Detect format from file extension
    pub fn detect(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "dat" | "txt" => Some(RuleFormat::List),
            "json" => Some(RuleFormat::Json),
            _ => None,
        }
    }

    /// Build a rule store from content in this format
    pub fn parse(&self, content: &str) -> Result<RuleStore> {
        match self {
            RuleFormat::List => parse_rules(content),
            RuleFormat::Json => {
                let data: RuleData = serde_json::from_str(content)?;
                RuleStore::from_data(&data)
            }
        }
    }
}

/// Loader over list text held in memory
#[derive(Debug, Clone)]
pub struct MemoryRuleLoader {
    text: String,
    format: RuleFormat,
}

impl MemoryRuleLoader {
    /// Create a loader over Public Suffix List text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: RuleFormat::List,
        }
    }

    /// Set the content format
    pub fn with_format(mut self, format: RuleFormat) -> Self {
        self.format = format;
        self
    }
}

impl RuleLoader for MemoryRuleLoader {
    fn load(&self) -> Result<RuleStore> {
        self.format.parse(&self.text)
    }
}

/// File-based loader with format auto-detection
#[derive(Debug, Clone)]
pub struct FileRuleLoader {
    path: PathBuf,
    format: Option<RuleFormat>,
}

impl FileRuleLoader {
    /// Create a loader for a file
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            format: None,
        }
    }

    /// Set explicit format (overrides auto-detection)
    pub fn with_format(mut self, format: RuleFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Explicit format, else detected from the extension, else list text
    fn get_format(&self) -> RuleFormat {
        self.format
            .or_else(|| RuleFormat::detect(&self.path))
            .unwrap_or(RuleFormat::List)
    }
}

impl RuleLoader for FileRuleLoader {
    fn load(&self) -> Result<RuleStore> {
        let content = fs::read_to_string(&self.path).map_err(|e| PslError::LoadError {
            kind: LoadErrorKind::FileError,
            message: format!("Failed to read '{}': {}", self.path.display(), e),
        })?;
        let format = self.get_format();
        log::debug!("Loading {:?} rules from {}", format, self.path.display());
        format.parse(&content)
    }
}

/// Loader that fetches the list over HTTP
pub struct UrlRuleLoader {
    url: String,
    logger: Option<LoggerCallback>,
}

impl UrlRuleLoader {
    /// Create a loader for the canonical list
    pub fn new() -> Self {
        Self {
            url: DEFAULT_PSL_URL.to_string(),
            logger: None,
        }
    }

    /// Set custom list URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set logger
    pub fn with_logger<F>(mut self, logger: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.logger = Some(Box::new(logger));
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn log(&self, msg: &str) {
        log::info!("{}", msg);
        if let Some(ref logger) = self.logger {
            logger(msg);
        }
    }

    fn download(&self) -> Result<String> {
        self.log(&format!("Downloading public suffix list from {}", self.url));

        let response = ureq::get(self.url.as_str()).call().map_err(|e| PslError::LoadError {
            kind: LoadErrorKind::DownloadFailed,
            message: format!("Download failed: {}", e),
        })?;

        let (_, body) = response.into_parts();
        let mut reader = body.into_reader();
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|e| PslError::LoadError {
                kind: LoadErrorKind::DownloadFailed,
                message: format!("Failed to read response body: {}", e),
            })?;

        self.log(&format!("Downloaded {} bytes", text.len()));
        Ok(text)
    }
}

impl Default for UrlRuleLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleLoader for UrlRuleLoader {
    fn load(&self) -> Result<RuleStore> {
        let text = self.download()?;
        let store = parse_rules(&text)?;
        if store.is_empty() {
            return Err(PslError::LoadError {
                kind: LoadErrorKind::InvalidData,
                message: format!("No rules found at {}", self.url),
            });
        }
        Ok(store)
    }
}
