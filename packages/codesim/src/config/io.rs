//! Configuration I/O (YAML schema)
//!
//! Defines YAML schema types. Loading and applying them lives in
//! codesim_config.rs.

use serde::{Deserialize, Serialize};

use crate::features::parsing::LanguageId;
use crate::features::similarity::domain::RatioKind;

/// Schema versions this build understands
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (always 1 for v1)
    pub version: Option<u32>,

    /// Base preset
    #[serde(default = "default_preset_name")]
    pub preset: String,

    /// Fine-grained overrides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<ConfigOverrides>,
}

fn default_preset_name() -> String {
    "balanced".to_string()
}

/// Configuration overrides
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<LanguageId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratio: Option<RatioKind>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autojunk: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_extras: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_timeout_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
}
