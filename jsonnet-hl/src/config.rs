//! Configuration module for the jsonnet-hl CLI.
//!
//! This module handles loading, saving, and validating the `jsonnet-hl.toml`
//! configuration file.

use dirs::{config_dir, home_dir};
use jsonnet_lex::highlight::DEFAULT_TAB_WIDTH;
use jsonnet_lex::TokenClass;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::commands::common::{error_messages, parse_color, OutputFormat};
use crate::error::{HlError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "jsonnet-hl.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Columns per tab stop when measuring text-block indentation.
    #[serde(default = "default_tab_width")]
    pub tab_width: usize,

    /// Default output format of the `tokens` command.
    #[serde(default = "default_format")]
    pub format: String,

    /// Colour per token class for the `highlight` command.
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Colour names per token class. Plain text is never coloured.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThemeConfig {
    #[serde(default = "default_keyword")]
    pub keyword: String,
    #[serde(default = "default_atom")]
    pub atom: String,
    #[serde(default = "default_comment")]
    pub comment: String,
    #[serde(default = "default_string")]
    pub string: String,
    #[serde(default = "default_string_escape")]
    pub string_escape: String,
    #[serde(default = "default_meta")]
    pub meta: String,
    #[serde(default = "default_number")]
    pub number: String,
    #[serde(default = "default_operator")]
    pub operator: String,
    #[serde(default = "default_error")]
    pub error: String,
}

fn default_tab_width() -> usize {
    DEFAULT_TAB_WIDTH
}

fn default_format() -> String {
    "text".to_string()
}

fn default_keyword() -> String {
    "magenta".to_string()
}

fn default_atom() -> String {
    "cyan".to_string()
}

fn default_comment() -> String {
    "bright black".to_string()
}

fn default_string() -> String {
    "green".to_string()
}

fn default_string_escape() -> String {
    "yellow".to_string()
}

fn default_meta() -> String {
    "blue".to_string()
}

fn default_number() -> String {
    "cyan".to_string()
}

fn default_operator() -> String {
    "white".to_string()
}

fn default_error() -> String {
    "red".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tab_width: default_tab_width(),
            format: default_format(),
            theme: ThemeConfig::default(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            keyword: default_keyword(),
            atom: default_atom(),
            comment: default_comment(),
            string: default_string(),
            string_escape: default_string_escape(),
            meta: default_meta(),
            number: default_number(),
            operator: default_operator(),
            error: default_error(),
        }
    }
}

impl ThemeConfig {
    /// Colour name configured for `class`, or `None` for plain text.
    pub fn color_name(&self, class: TokenClass) -> Option<&str> {
        let name = match class {
            TokenClass::Keyword => &self.keyword,
            TokenClass::Atom => &self.atom,
            TokenClass::Comment => &self.comment,
            TokenClass::String => &self.string,
            TokenClass::StringEscape => &self.string_escape,
            TokenClass::Meta => &self.meta,
            TokenClass::Number => &self.number,
            TokenClass::Operator => &self.operator,
            TokenClass::Error => &self.error,
            TokenClass::Plain => return None,
        };
        Some(name.as_str())
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/jsonnet-hl/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(HlError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| HlError::Config(format!("Failed to parse configuration: {}", e)))?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| HlError::Config(format!("Failed to serialize configuration: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check value ranges, the output format and every theme colour.
    pub fn validate(&self) -> Result<()> {
        if self.tab_width == 0 {
            return Err(HlError::Validation(
                error_messages::ZERO_TAB_WIDTH.to_string(),
            ));
        }

        if OutputFormat::from_str(&self.format).is_none() {
            return Err(HlError::Validation(format!(
                "{} {}",
                error_messages::INVALID_CONFIG_FORMAT,
                self.format
            )));
        }

        for class in TokenClass::ALL {
            if let Some(name) = self.theme.color_name(class) {
                parse_color(name).ok_or_else(|| {
                    HlError::Validation(format!(
                        "{} {} (for {})",
                        error_messages::UNKNOWN_COLOR,
                        name,
                        class
                    ))
                })?;
            }
        }

        Ok(())
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("jsonnet-hl").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("jsonnet-hl").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
