//! Extractor configuration.
//!
//! Every field has a default, so an empty TOML file is a valid config.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::encoding::{TextEncoding, TABULAR_CANDIDATES, TEXT_CANDIDATES};
use crate::error::ExtractError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    pub pdf: PdfConfig,
    pub encodings: EncodingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    pub backend: PdfBackend,
    /// Preserve column layout (pdftotext backend only).
    pub layout: bool,
}

impl Default for PdfConfig {
    fn default() -> Self {
        PdfConfig {
            backend: PdfBackend::Lopdf,
            layout: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PdfBackend {
    Lopdf,
    Pdftotext,
}

/// Candidate lists for the encoding fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodingConfig {
    pub text: Vec<TextEncoding>,
    pub tabular: Vec<TextEncoding>,
}

impl Default for EncodingConfig {
    fn default() -> Self {
        EncodingConfig {
            text: TEXT_CANDIDATES.to_vec(),
            tabular: TABULAR_CANDIDATES.to_vec(),
        }
    }
}

impl ExtractorConfig {
    /// Load a config from a TOML file.
    pub fn load(path: &Path) -> Result<ExtractorConfig, ExtractError> {
        let content = std::fs::read_to_string(path).map_err(|e| ExtractError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::parse(&content).map_err(|reason| ExtractError::Config {
            path: path.to_path_buf(),
            reason,
        })
    }

    pub fn parse(toml_str: &str) -> Result<ExtractorConfig, String> {
        let config: ExtractorConfig = toml::from_str(toml_str).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        if self.encodings.text.is_empty() {
            return Err("encodings.text must not be empty".into());
        }
        if self.encodings.tabular.is_empty() {
            return Err("encodings.tabular must not be empty".into());
        }
        Ok(())
    }
}
