use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow};
use jsonschema::{Draft, JSONSchema};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::{metrics::AnalyzerConfig, reflection::ReflectionConfig};

const DEFAULT_SCHEMA_FILE: &str = "aethero.schema.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct Config {
    #[serde(default)]
    #[validate(nested)]
    pub logging: LoggingConfig,
    #[serde(default)]
    #[validate(nested)]
    pub analyzer: AnalyzerConfig,
    #[serde(default)]
    #[validate(nested)]
    pub reflection: ReflectionConfig,
}

fn default_enabled_true() -> bool {
    true
}

fn default_logging_dir() -> PathBuf {
    PathBuf::from("./logs/aethero")
}

fn default_logging_filter() -> String {
    "warn,logging=info,extractor=info,validator=info,metrics=info,reflection=info".to_string()
}

fn default_logging_rotation() -> LoggingRotation {
    LoggingRotation::Daily
}

fn default_logging_retention_days() -> usize {
    14
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LoggingRotation {
    Daily,
    Hourly,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_logging_filter")]
    #[validate(length(min = 1))]
    pub filter: String,
    #[serde(default = "default_logging_rotation")]
    pub rotation: LoggingRotation,
    #[serde(default = "default_logging_retention_days")]
    #[validate(range(min = 1))]
    pub retention_days: usize,
    #[serde(default = "default_enabled_true")]
    pub stderr_warn_enabled: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: default_logging_dir(),
            filter: default_logging_filter(),
            rotation: default_logging_rotation(),
            retention_days: default_logging_retention_days(),
            stderr_warn_enabled: true,
        }
    }
}

impl Config {
    pub fn load(config_path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;
        let config_value: Value = json5::from_str(&config_content)
            .with_context(|| format!("failed to parse {}", config_path.display()))?;

        let config_base = config_path.parent().unwrap_or_else(|| Path::new("."));
        let schema_path = resolve_schema_path(config_base, &config_value)?;
        validate_against_schema(&config_value, &schema_path)?;

        let mut config: Config =
            serde_json::from_value(config_value).context("failed to deserialize aethero config")?;
        config
            .validate()
            .map_err(|errors| anyhow!("config range check failed: {errors}"))?;

        if !config.logging.dir.is_absolute() {
            config.logging.dir = config_base.join(&config.logging.dir);
        }

        Ok(config)
    }
}

fn resolve_schema_path(config_base: &Path, config_value: &Value) -> Result<PathBuf> {
    if let Some(path_text) = config_value.get("$schema").and_then(|value| value.as_str()) {
        let configured = PathBuf::from(path_text);
        if configured.is_absolute() {
            return Ok(configured);
        }
        return Ok(config_base.join(&configured));
    }

    let local_default = config_base.join(DEFAULT_SCHEMA_FILE);
    if local_default.exists() {
        return Ok(local_default);
    }

    let bundled = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_SCHEMA_FILE);
    if bundled.exists() {
        return Ok(bundled);
    }

    Err(anyhow!(
        "unable to resolve schema path: expected $schema in config or {DEFAULT_SCHEMA_FILE} next to it"
    ))
}

/// Checks `config_value` against the draft-07 schema at `schema_path` and
/// reports every violation with the config location it sits at.
fn validate_against_schema(config_value: &Value, schema_path: &Path) -> Result<()> {
    let schema: Value = fs::read_to_string(schema_path)
        .with_context(|| format!("failed to read schema {}", schema_path.display()))
        .and_then(|text| {
            serde_json::from_str(&text)
                .with_context(|| format!("schema {} is not JSON", schema_path.display()))
        })?;
    let compiled_schema = JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(&schema)
        .map_err(|err| anyhow!("schema {} does not compile: {err}", schema_path.display()))?;

    let Err(errors) = compiled_schema.validate(config_value) else {
        return Ok(());
    };
    let problems = errors
        .map(|error| match error.instance_path.to_string() {
            path if path.is_empty() => format!("(root): {error}"),
            path => format!("{path}: {error}"),
        })
        .collect::<Vec<_>>();
    Err(anyhow!(
        "config does not match {}: {}",
        schema_path.display(),
        problems.join("; ")
    ))
}
