//! Lifecycle orchestration.
//!
//! Binds the two Secret Baker operations, package and cleanup, to the host's
//! lifecycle events. The event table is fixed at construction; cleanup
//! events are left out entirely when the `no-secret-baker-cleanup` param is
//! present.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::core::config;
use crate::core::constants;
use crate::core::host::Host;
use crate::core::params::CliParams;
use crate::core::secrets::{self, SecretsFile};
use crate::core::types::EventName;
use crate::error::Result;

/// Operation bound to a lifecycle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hook {
    /// Resolve secrets, write the file, add it to the package.
    Package,
    /// Remove the file again.
    Cleanup,
}

impl std::fmt::Display for Hook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Package => write!(f, "package"),
            Self::Cleanup => write!(f, "cleanup"),
        }
    }
}

/// Where a run is. With cleanup suppressed a run ends in `Packaged`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Idle,
    Packaging,
    Packaged,
    Cleaned,
}

/// The lifecycle orchestrator.
pub struct SecretBaker<H> {
    host: H,
    file_path: PathBuf,
    cleanup_enabled: bool,
    hooks: Vec<(EventName, Hook)>,
    state: State,
}

impl<H: Host> SecretBaker<H> {
    /// Build the orchestrator and its event table.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidFilePath` if `filePath` is not a string.
    pub fn new(host: H, params: &CliParams) -> Result<Self> {
        let file_path = config::file_path(host.service().plugin())?;
        let cleanup_enabled = !params.contains(constants::NO_CLEANUP_PARAM);
        let hooks = hook_table(cleanup_enabled);

        debug!(
            file = %file_path.display(),
            cleanup = cleanup_enabled,
            hooks = hooks.len(),
            "secret baker ready"
        );

        Ok(Self {
            host,
            file_path,
            cleanup_enabled,
            hooks,
            state: State::Idle,
        })
    }

    /// Registered events and their operations.
    pub fn hooks(&self) -> &[(EventName, Hook)] {
        &self.hooks
    }

    /// Operation registered for `event`, if any.
    pub fn handler(&self, event: &str) -> Option<Hook> {
        self.hooks
            .iter()
            .find(|(name, _)| *name == event)
            .map(|(_, hook)| *hook)
    }

    /// Run whatever is registered for `event`.
    ///
    /// # Returns
    ///
    /// `false` if nothing is registered for the event.
    pub fn dispatch(&mut self, event: &str) -> Result<bool> {
        match self.handler(event) {
            Some(hook) => {
                debug!(event, %hook, "dispatching");
                self.run(hook)?;
                Ok(true)
            }
            None => {
                debug!(event, "no hook registered");
                Ok(false)
            }
        }
    }

    /// Run one operation directly, bypassing the event table.
    pub fn run(&mut self, hook: Hook) -> Result<()> {
        match hook {
            Hook::Package => self.package().map(|_| ()),
            Hook::Cleanup => self.cleanup(),
        }
    }

    /// Resolve all secrets, write the file and add it to the package.
    ///
    /// # Errors
    ///
    /// Returns the first configuration, secret, backend or io error. The
    /// path is only appended to the include list on success.
    pub fn package(&mut self) -> Result<SecretsFile> {
        self.host.log(&format!(
            "Writing secrets to {}",
            self.file_path.display()
        ));
        self.state = State::Packaging;

        // The include list must exist even if resolution fails.
        self.host.include();

        let file = match secrets::materialize(&self.host, &self.file_path) {
            Ok(file) => file,
            Err(e) => {
                self.state = State::Idle;
                return Err(e);
            }
        };

        let include = self.host.include();
        if !include.iter().any(|p| *p == self.file_path) {
            include.push(self.file_path.clone());
        }

        info!(secrets = file.len(), file = %self.file_path.display(), "secrets packaged");
        self.state = State::Packaged;
        Ok(file)
    }

    /// Remove the secrets file. Does nothing if it is already gone.
    ///
    /// # Errors
    ///
    /// Returns an io error if the file exists but cannot be removed.
    pub fn cleanup(&mut self) -> Result<()> {
        self.host.log(&format!(
            "Removing secrets file {}",
            self.file_path.display()
        ));

        if self.file_path.exists() {
            match std::fs::remove_file(&self.file_path) {
                Ok(()) => debug!(file = %self.file_path.display(), "secrets file removed"),
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        } else {
            debug!(file = %self.file_path.display(), "no secrets file to remove");
        }

        self.state = State::Cleaned;
        Ok(())
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn cleanup_enabled(&self) -> bool {
        self.cleanup_enabled
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}

/// Event table: every package event, plus every cleanup event when enabled.
pub fn hook_table(cleanup: bool) -> Vec<(EventName, Hook)> {
    let package = constants::PACKAGE_EVENTS
        .iter()
        .map(|event| (*event, Hook::Package));

    let cleanup_events: &[&'static str] = if cleanup {
        constants::CLEANUP_EVENTS
    } else {
        &[]
    };
    let cleanup = cleanup_events.iter().map(|event| (*event, Hook::Cleanup));

    package.chain(cleanup).collect()
}
