//! Configuration System
//!
//! Three levels, each overriding the previous:
//! - Preset - `CodesimConfig::preset(Preset::Fast)`
//! - YAML v1 - `CodesimConfig::from_yaml("codesim.yaml")?`
//! - Environment / builder - `config.apply_env()?.ratio(RatioKind::Quick)`
//!
//! # Examples
//!
//! ```rust,ignore
//! use codesim::config::{CodesimConfig, Preset};
//!
//! let config = CodesimConfig::preset(Preset::Balanced)
//!     .language(LanguageId::Python)
//!     .apply_env()?;
//! config.validate()?;
//! ```

pub mod codesim_config;
pub mod error;
pub mod io;
pub mod preset;
pub mod provenance;

// Re-exports
pub use codesim_config::{CodesimConfig, ENV_LANGUAGE, ENV_RATIO, ENV_TIMEOUT_MS};
pub use error::{ConfigError, ConfigResult};
pub use io::{ConfigExportV1, ConfigOverrides};
pub use preset::Preset;
pub use provenance::{ConfigProvenance, ConfigSource};
