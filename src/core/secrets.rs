//! Secret materialization.
//!
//! Resolves every declared secret and writes them as one JSON file:
//!
//! ```json
//! {
//!   "DB_PASSWORD": {
//!     "ciphertext": "s3cr3t",
//!     "arn": "arn:aws:ssm:us-east-1:123456789012:parameter/DB_PASSWORD"
//!   }
//! }
//! ```
//!
//! The file is written only after every lookup succeeded, so a run never
//! leaves a partial file behind.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;
use zeroize::Zeroize;

use crate::core::client;
use crate::core::config::{self, SecretRef};
use crate::core::host::Host;
use crate::core::types::SecretName;
use crate::error::{Result, SecretError};

/// A resolved parameter: the raw stored value and its ARN.
///
/// The value is wiped from memory on drop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSecret {
    ciphertext: String,
    arn: String,
}

impl ResolvedSecret {
    pub fn new(ciphertext: String, arn: String) -> Self {
        Self { ciphertext, arn }
    }

    /// Stored value, as returned without decryption.
    pub fn ciphertext(&self) -> &str {
        &self.ciphertext
    }

    pub fn arn(&self) -> &str {
        &self.arn
    }
}

impl Drop for ResolvedSecret {
    fn drop(&mut self) {
        self.ciphertext.zeroize();
    }
}

/// Resolved secrets in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecretsFile {
    entries: Vec<(SecretName, ResolvedSecret)>,
}

impl SecretsFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a secret. A repeated name replaces the earlier value in place.
    pub fn insert(&mut self, name: SecretName, secret: ResolvedSecret) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = secret,
            None => self.entries.push((name, secret)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ResolvedSecret> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, secret)| secret)
    }

    /// Secret names in file order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the file, replacing whatever is at `path`.
    ///
    /// Contents go to a temp file in the same directory which is then
    /// renamed over `path`, so readers see the old file or the new one.
    ///
    /// # Errors
    ///
    /// Returns error if serialization or the file write fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let contents = serde_json::to_string_pretty(self)?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(contents.as_bytes())?;
        tmp.persist(path).map_err(|e| e.error)?;

        Ok(())
    }

    /// Read a previously written file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not a secrets file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&contents)?;

        let mut file = Self::new();
        for (name, value) in raw {
            file.insert(name, serde_json::from_value(value)?);
        }
        Ok(file)
    }
}

impl Serialize for SecretsFile {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, secret) in &self.entries {
            map.serialize_entry(name, secret)?;
        }
        map.end()
    }
}

/// Resolve secret refs in order.
///
/// # Errors
///
/// Returns `SecretError::NotFound` naming the first secret the backend does
/// not have, or any backend error. Nothing after the failing ref is looked up.
pub fn resolve<H: Host + ?Sized>(host: &H, refs: &[SecretRef]) -> Result<SecretsFile> {
    let mut file = SecretsFile::new();

    for secret in refs {
        debug!(name = %secret.name, path = %secret.path, "resolving secret");
        let resolved = client::fetch(host, &secret.path)?
            .ok_or_else(|| SecretError::NotFound(secret.name.clone()))?;
        file.insert(secret.name.clone(), resolved);
    }

    Ok(file)
}

/// Resolve every declared secret and write them to `path`.
///
/// # Errors
///
/// Returns a configuration error for a malformed declaration, a secret or
/// backend error from resolution, or an io error from the write. On any
/// error nothing is written.
pub fn materialize<H: Host + ?Sized>(host: &H, path: &Path) -> Result<SecretsFile> {
    let refs = config::secret_refs(host.service().plugin())?;
    let file = resolve(host, &refs)?;

    file.save(path)?;
    debug!(path = %path.display(), secrets = file.len(), "secrets file written");

    Ok(file)
}
