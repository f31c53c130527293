//! Scan settings, read from a JSON file.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::kernel::scan::{CallContextLocator, DoubleClickSelector, Matcher, CALL_CONTEXT_LOOKBACK};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSettings {
    #[serde(default = "default_lookback")]
    pub call_context_lookback: usize,
    #[serde(default = "default_order")]
    pub double_click_order: Vec<Matcher>,
    /// Skip brackets inside strings and comments.
    #[serde(default)]
    pub partition_aware: bool,
}

fn default_lookback() -> usize {
    CALL_CONTEXT_LOOKBACK
}

fn default_order() -> Vec<Matcher> {
    Matcher::DEFAULT_ORDER.to_vec()
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            call_context_lookback: default_lookback(),
            double_click_order: default_order(),
            partition_aware: false,
        }
    }
}

impl ScanSettings {
    pub fn from_json_str(data: &str) -> Result<Self, SettingsError> {
        serde_json::from_str(data).map_err(SettingsError::Parse)
    }

    pub fn to_json_pretty(&self) -> Result<String, SettingsError> {
        serde_json::to_string_pretty(self).map_err(SettingsError::Parse)
    }

    pub fn selector(&self) -> DoubleClickSelector {
        DoubleClickSelector::new(self.double_click_order.clone())
    }

    pub fn locator(&self) -> CallContextLocator {
        CallContextLocator::new(self.call_context_lookback)
    }
}

pub fn load_settings(path: &Path) -> Result<ScanSettings, SettingsError> {
    let data = std::fs::read_to_string(path)?;
    let settings = ScanSettings::from_json_str(&data)?;
    tracing::debug!(path = %path.display(), ?settings, "settings loaded");
    Ok(settings)
}

#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(err) => write!(f, "cannot read settings: {err}"),
            SettingsError::Parse(err) => write!(f, "invalid settings: {err}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(err) => Some(err),
            SettingsError::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        SettingsError::Io(err)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
