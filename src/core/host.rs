//! Host capability bundle.
//!
//! Everything Secret Baker needs from the deployment tool that invokes it is
//! reached through [`Host`]: the request layer, the progress log, the
//! service configuration and the package include list. Nothing is held
//! globally.

use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::config::ServiceConfig;
use crate::core::store::{GetParameter, Parameter, ParameterStore, Provider, RequestError, RequestOptions};

/// Capabilities supplied by the host deployment tool.
pub trait Host {
    /// Send a parameter store request through the host's request layer.
    fn request(
        &self,
        request: &GetParameter,
        options: RequestOptions,
    ) -> Result<Parameter, RequestError>;

    /// Report progress to the user.
    fn log(&self, message: &str);

    /// The service configuration being packaged.
    fn service(&self) -> &ServiceConfig;

    /// The package include list, created empty if the service has none yet.
    fn include(&mut self) -> &mut Vec<PathBuf>;
}

/// In-process host used by the `secret-baker` binary and tests.
pub struct LocalHost<S> {
    service: ServiceConfig,
    provider: Provider<S>,
    include: Option<Vec<PathBuf>>,
    logger: fn(&str),
}

impl<S: ParameterStore> LocalHost<S> {
    pub fn new(service: ServiceConfig, store: S) -> Self {
        Self {
            service,
            provider: Provider::new(store),
            include: None,
            logger: log_to_tracing,
        }
    }

    /// Route `log` calls somewhere other than tracing.
    pub fn with_logger(mut self, logger: fn(&str)) -> Self {
        self.logger = logger;
        self
    }

    /// Paths added to the package so far, if the list exists.
    pub fn included(&self) -> Option<&[PathBuf]> {
        self.include.as_deref()
    }

    /// Whether `path` is on the include list.
    pub fn is_included(&self, path: &Path) -> bool {
        self.included()
            .map(|paths| paths.iter().any(|p| p == path))
            .unwrap_or(false)
    }

    pub fn provider(&self) -> &Provider<S> {
        &self.provider
    }
}

impl<S: ParameterStore> Host for LocalHost<S> {
    fn request(
        &self,
        request: &GetParameter,
        options: RequestOptions,
    ) -> Result<Parameter, RequestError> {
        self.provider.request(request, options)
    }

    fn log(&self, message: &str) {
        (self.logger)(message)
    }

    fn service(&self) -> &ServiceConfig {
        &self.service
    }

    fn include(&mut self) -> &mut Vec<PathBuf> {
        self.include.get_or_insert_with(Vec::new)
    }
}

fn log_to_tracing(message: &str) {
    info!("{}", message);
}
