//! Service configuration and secrets declaration handling.
//!
//! The service configuration is the host's configuration tree. Secret Baker
//! reads only its own namespace, `custom.secretBaker`:
//!
//! ```toml
//! [custom.secretBaker]
//! filePath = "secrets.json"
//!
//! [custom.secretBaker.secrets]
//! DB_PASSWORD = "/prod/db/password"
//! API_KEY = "/prod/api/key"
//! ```
//!
//! `secrets` may also be a plain list, in which case each name doubles as
//! its parameter path.

use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::types::{ParameterPath, SecretName};
use crate::error::{ConfigError, Result};

/// The host's configuration tree for one service.
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    root: Value,
}

impl ServiceConfig {
    /// Wrap an already parsed configuration tree.
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// Load configuration from a file.
    ///
    /// `.json` files are parsed as JSON, anything else as TOML. Key order is
    /// preserved in both cases.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file doesn't exist, or
    /// `ConfigError::Parse` if it is malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading service config");

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;

        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let root: Value = if is_json {
            serde_json::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?
        } else {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?
        };

        Ok(Self { root })
    }

    /// The service's `custom` block.
    pub fn custom(&self) -> Option<&Value> {
        self.root.get("custom")
    }

    /// The `custom.secretBaker` namespace.
    pub fn plugin(&self) -> Option<&Value> {
        self.custom()
            .and_then(|custom| custom.get(constants::CONFIG_NAMESPACE))
    }
}

/// A declared secret: the name it gets in the secrets file and the
/// parameter store path it is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretRef {
    pub name: SecretName,
    pub path: ParameterPath,
}

impl SecretRef {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// The two accepted shapes of `secretBaker.secrets`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretDeclaration {
    /// Names that double as parameter paths.
    List(Vec<String>),
    /// Name to path pairs in declaration order.
    Map(Vec<(String, String)>),
}

impl SecretDeclaration {
    /// Shape-check a raw declaration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidSecrets` when the value is neither a list
    /// of strings nor a mapping of strings.
    pub fn parse(value: &Value) -> Result<Self> {
        match value {
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.clone()),
                    other => Err(ConfigError::InvalidSecrets(kind(other)).into()),
                })
                .collect::<Result<Vec<_>>>()
                .map(Self::List),
            Value::Object(entries) => entries
                .iter()
                .map(|(name, path)| match path {
                    Value::String(p) => Ok((name.clone(), p.clone())),
                    other => Err(ConfigError::InvalidSecrets(kind(other)).into()),
                })
                .collect::<Result<Vec<_>>>()
                .map(Self::Map),
            other => Err(ConfigError::InvalidSecrets(kind(other)).into()),
        }
    }

    /// Flatten into ordered secret refs.
    pub fn into_refs(self) -> Vec<SecretRef> {
        match self {
            Self::List(names) => names
                .into_iter()
                .map(|name| SecretRef::new(name.clone(), name))
                .collect(),
            Self::Map(pairs) => pairs
                .into_iter()
                .map(|(name, path)| SecretRef::new(name, path))
                .collect(),
        }
    }
}

/// Normalized plugin configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretsConfig {
    pub secrets: Vec<SecretRef>,
    pub file_path: PathBuf,
}

impl SecretsConfig {
    /// Normalize the `custom.secretBaker` namespace.
    ///
    /// A missing or null declaration yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if `secrets` or `filePath` has the wrong shape.
    pub fn from_plugin(plugin: Option<&Value>) -> Result<Self> {
        let secrets = secret_refs(plugin)?;
        let file_path = file_path(plugin)?;

        debug!(
            secrets = secrets.len(),
            file = %file_path.display(),
            "secrets config normalized"
        );

        Ok(Self { secrets, file_path })
    }

    /// Normalize from a full service configuration.
    pub fn from_service(service: &ServiceConfig) -> Result<Self> {
        Self::from_plugin(service.plugin())
    }
}

/// Declared secrets in order.
pub fn secret_refs(plugin: Option<&Value>) -> Result<Vec<SecretRef>> {
    match plugin.and_then(|p| p.get("secrets")) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(value) => Ok(SecretDeclaration::parse(value)?.into_refs()),
    }
}

/// Output path: `filePath` when configured, the default name otherwise.
pub fn file_path(plugin: Option<&Value>) -> Result<PathBuf> {
    match plugin.and_then(|p| p.get("filePath")) {
        None | Some(Value::Null) => Ok(PathBuf::from(constants::DEFAULT_SECRETS_FILE)),
        Some(Value::String(path)) => Ok(PathBuf::from(path)),
        Some(other) => Err(ConfigError::InvalidFilePath(kind(other)).into()),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "mapping",
    }
}
