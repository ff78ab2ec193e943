//! Comparison configuration
//!
//! Resolution order: preset → YAML overrides → environment → builder calls.

use std::path::Path;
use std::time::Duration;

use super::error::{ConfigError, ConfigResult};
use super::io::{ConfigExportV1, ConfigOverrides, SUPPORTED_VERSIONS};
use super::preset::Preset;
use super::provenance::{ConfigProvenance, ConfigSource};
use crate::features::parsing::LanguageId;
use crate::features::similarity::domain::{
    CombineRule, RatioKind, Scorer, DEFAULT_PRECISION, DEFAULT_SCALE,
};
use crate::features::tokenization::ExtractOptions;

/// Environment variable selecting the grammar
pub const ENV_LANGUAGE: &str = "CODESIM_LANGUAGE";
/// Environment variable selecting the ratio kind
pub const ENV_RATIO: &str = "CODESIM_RATIO";
/// Environment variable overriding the parse timeout (milliseconds)
pub const ENV_TIMEOUT_MS: &str = "CODESIM_TIMEOUT_MS";

const MAX_PRECISION: u32 = 10;

/// Settings for one comparison run
#[derive(Debug, Clone, PartialEq)]
pub struct CodesimConfig {
    /// Grammar used for both inputs
    pub language: LanguageId,
    pub ratio: RatioKind,
    /// Popular-element heuristic of the greedy matcher
    pub autojunk: bool,
    /// Count comments and other extra nodes as leaves
    pub include_extras: bool,
    /// 0 disables the parse guard
    pub parse_timeout_ms: u64,
    /// Decimal places the ratio sum is rounded to
    pub precision: u32,
    pub scale: f64,
    provenance: ConfigProvenance,
}

impl Default for CodesimConfig {
    fn default() -> Self {
        Self::preset(Preset::default())
    }
}

impl CodesimConfig {
    /// Create from preset
    pub fn preset(preset: Preset) -> Self {
        let (ratio, parse_timeout_ms) = match preset {
            Preset::Fast => (RatioKind::Quick, 1_000),
            Preset::Balanced => (RatioKind::Quick, 5_000),
        };

        Self {
            language: LanguageId::default(),
            ratio,
            autojunk: false,
            include_extras: true,
            parse_timeout_ms,
            precision: DEFAULT_PRECISION,
            scale: DEFAULT_SCALE,
            provenance: ConfigProvenance::from_preset(preset),
        }
    }

    // Builder API

    pub fn language(mut self, language: LanguageId) -> Self {
        self.language = language;
        self.provenance.track_field("language", ConfigSource::Builder);
        self
    }

    pub fn ratio(mut self, ratio: RatioKind) -> Self {
        self.ratio = ratio;
        self.provenance.track_field("ratio", ConfigSource::Builder);
        self
    }

    pub fn autojunk(mut self, autojunk: bool) -> Self {
        self.autojunk = autojunk;
        self.provenance.track_field("autojunk", ConfigSource::Builder);
        self
    }

    pub fn include_extras(mut self, include_extras: bool) -> Self {
        self.include_extras = include_extras;
        self.provenance
            .track_field("include_extras", ConfigSource::Builder);
        self
    }

    pub fn parse_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.parse_timeout_ms = timeout_ms;
        self.provenance
            .track_field("parse_timeout_ms", ConfigSource::Builder);
        self
    }

    pub fn precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self.provenance.track_field("precision", ConfigSource::Builder);
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self.provenance.track_field("scale", ConfigSource::Builder);
        self
    }

    /// Pick the grammar from `path`'s extension
    ///
    /// Only applies while the language is still the preset default; an
    /// explicit choice from YAML, the environment or the builder wins.
    pub fn infer_language(mut self, path: &Path) -> Self {
        if self.provenance.get_source("language").is_some() {
            return self;
        }
        let inferred = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(LanguageId::from_extension);
        if let Some(language) = inferred {
            self.language = language;
            self.provenance.track_field(
                "language",
                ConfigSource::Extension {
                    path: path.display().to_string(),
                },
            );
        }
        self
    }

    /// Range-check every field
    pub fn validate(&self) -> ConfigResult<()> {
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::range_with_hint(
                "precision",
                self.precision,
                0,
                MAX_PRECISION,
                "Scores are rounded to at most 10 decimal places",
            ));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ConfigError::range_with_hint(
                "scale",
                self.scale,
                "0 (exclusive)",
                f64::MAX,
                "The scale must be a positive finite number",
            ));
        }
        Ok(())
    }

    // Derived settings

    pub fn scorer(&self) -> Scorer {
        Scorer::new(self.ratio, self.autojunk)
    }

    pub fn combine_rule(&self) -> CombineRule {
        CombineRule::new(self.precision, self.scale)
    }

    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            include_extras: self.include_extras,
        }
    }

    pub fn parse_timeout(&self) -> Option<Duration> {
        (self.parse_timeout_ms > 0).then(|| Duration::from_millis(self.parse_timeout_ms))
    }

    pub fn provenance(&self) -> &ConfigProvenance {
        &self.provenance
    }

    // YAML

    /// Load from YAML file (v1 schema)
    pub fn from_yaml(path: &str) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content, path)
    }

    /// Parse YAML text; `origin` is recorded as the provenance of overrides
    pub fn from_yaml_str(content: &str, origin: &str) -> ConfigResult<Self> {
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;

        // Version check
        match export.version {
            None => return Err(ConfigError::MissingVersion),
            Some(found) if !SUPPORTED_VERSIONS.contains(&found) => {
                return Err(ConfigError::UnsupportedVersion {
                    found,
                    supported: SUPPORTED_VERSIONS.to_vec(),
                })
            }
            Some(_) => {}
        }

        let preset = Preset::parse(&export.preset)?;
        let mut config = Self::preset(preset);

        if let Some(overrides) = export.overrides {
            config.apply_overrides(overrides, origin);
        }

        config.validate()?;
        Ok(config)
    }

    /// Export as YAML v1 (every field written as an override)
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: Some(1),
            preset: self.provenance.preset().as_str().to_string(),
            overrides: Some(ConfigOverrides {
                language: Some(self.language),
                ratio: Some(self.ratio),
                autojunk: Some(self.autojunk),
                include_extras: Some(self.include_extras),
                parse_timeout_ms: Some(self.parse_timeout_ms),
                precision: Some(self.precision),
                scale: Some(self.scale),
            }),
        };
        Ok(serde_yaml::to_string(&export)?)
    }

    fn apply_overrides(&mut self, overrides: ConfigOverrides, origin: &str) {
        let source = || ConfigSource::Yaml {
            path: origin.to_string(),
        };

        if let Some(language) = overrides.language {
            self.language = language;
            self.provenance.track_field("language", source());
        }
        if let Some(ratio) = overrides.ratio {
            self.ratio = ratio;
            self.provenance.track_field("ratio", source());
        }
        if let Some(autojunk) = overrides.autojunk {
            self.autojunk = autojunk;
            self.provenance.track_field("autojunk", source());
        }
        if let Some(include_extras) = overrides.include_extras {
            self.include_extras = include_extras;
            self.provenance.track_field("include_extras", source());
        }
        if let Some(timeout) = overrides.parse_timeout_ms {
            self.parse_timeout_ms = timeout;
            self.provenance.track_field("parse_timeout_ms", source());
        }
        if let Some(precision) = overrides.precision {
            self.precision = precision;
            self.provenance.track_field("precision", source());
        }
        if let Some(scale) = overrides.scale {
            self.scale = scale;
            self.provenance.track_field("scale", source());
        }
    }

    // Environment

    /// Apply `CODESIM_*` environment overrides
    pub fn apply_env(self) -> ConfigResult<Self> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides from an arbitrary lookup
    pub fn apply_env_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> ConfigResult<Self> {
        if let Some(value) = lookup(ENV_LANGUAGE) {
            self.language = value
                .parse()
                .map_err(|e| ConfigError::invalid_value(ENV_LANGUAGE, value.as_str(), e))?;
            self.provenance
                .track_field("language", ConfigSource::Env(ENV_LANGUAGE.to_string()));
        }
        if let Some(value) = lookup(ENV_RATIO) {
            self.ratio = value
                .parse()
                .map_err(|e: String| ConfigError::invalid_value(ENV_RATIO, value.as_str(), e))?;
            self.provenance
                .track_field("ratio", ConfigSource::Env(ENV_RATIO.to_string()));
        }
        if let Some(value) = lookup(ENV_TIMEOUT_MS) {
            self.parse_timeout_ms = value
                .trim()
                .parse()
                .map_err(|e| ConfigError::invalid_value(ENV_TIMEOUT_MS, value.as_str(), e))?;
            self.provenance.track_field(
                "parse_timeout_ms",
                ConfigSource::Env(ENV_TIMEOUT_MS.to_string()),
            );
        }
        Ok(self)
    }
}
