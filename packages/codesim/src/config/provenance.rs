//! Configuration provenance tracking
//!
//! Track where each configuration value came from (preset, YAML, env, builder)

use super::preset::Preset;
use std::collections::BTreeMap;

/// Configuration provenance tracking
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigProvenance {
    /// Base preset used
    preset: Preset,

    /// Field name → source
    /// Example: "ratio" → ConfigSource::Env("CODESIM_RATIO")
    field_sources: BTreeMap<String, ConfigSource>,
}

/// Configuration source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// From YAML file (v1: path only, no line tracking)
    Yaml { path: String },

    /// From environment variable
    Env(String),

    /// From builder API (including CLI flags)
    Builder,

    /// Inferred from an input file's extension
    Extension { path: String },
}

impl ConfigProvenance {
    /// Create from preset
    pub fn from_preset(preset: Preset) -> Self {
        Self {
            preset,
            field_sources: BTreeMap::new(),
        }
    }

    /// Record field-level override
    pub fn track_field(&mut self, field: &str, source: ConfigSource) {
        self.field_sources.insert(field.to_string(), source);
    }

    /// Get source for a specific field; `None` means the preset default
    pub fn get_source(&self, field: &str) -> Option<&ConfigSource> {
        self.field_sources.get(field)
    }

    /// Get base preset
    pub fn preset(&self) -> Preset {
        self.preset
    }

    /// Get human-readable summary
    pub fn summary(&self) -> String {
        let mut lines = vec![format!("Base preset: {}", self.preset.as_str())];

        for (field, source) in &self.field_sources {
            let source_str = match source {
                ConfigSource::Yaml { path } => path.clone(),
                ConfigSource::Env(var) => format!("env ${}", var),
                ConfigSource::Builder => "builder API".to_string(),
                ConfigSource::Extension { path } => format!("extension of {}", path),
            };
            lines.push(format!("  {} ← {}", field, source_str));
        }

        lines.join("\n")
    }
}
