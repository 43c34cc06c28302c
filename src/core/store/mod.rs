//! Parameter store access.
//!
//! Provides the backend abstraction and the request layer that sits in
//! front of it.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `ParameterStore` trait
//! 2. Add the implementation in a new file (e.g., `vault.rs`)
//! 3. Feature-gate if appropriate
//! 4. Select it from `default_backend`
//!
//! ## Example
//!
//! ```ignore
//! struct Fixed;
//!
//! impl ParameterStore for Fixed {
//!     fn get_parameter(&self, request: &GetParameter) -> Result<Parameter, RequestError> {
//!         Ok(Parameter::new("value", "arn:aws:ssm:us-east-1:0:parameter/x"))
//!     }
//! }
//! ```

use thiserror::Error;

mod backend;
mod cache;

#[cfg(feature = "aws")]
pub mod aws;

pub use backend::default_backend;
pub use cache::{Provider, RequestOptions};

/// A single parameter lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GetParameter {
    /// Parameter name or path.
    pub name: String,
    /// Ask the backend to decrypt SecureString values.
    pub with_decryption: bool,
}

/// A parameter as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Parameter {
    pub value: Option<String>,
    pub arn: Option<String>,
}

impl Parameter {
    pub fn new(value: impl Into<String>, arn: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            arn: Some(arn.into()),
        }
    }
}

/// A failed backend request.
///
/// `status` carries the HTTP-style status the backend answered with, when
/// it answered at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RequestError {
    pub status: Option<u16>,
    pub message: String,
}

impl RequestError {
    pub fn new(status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

/// Parameter store backend.
pub trait ParameterStore {
    /// Fetch one parameter.
    ///
    /// # Errors
    ///
    /// Returns `RequestError` when the backend rejects or cannot serve the
    /// request. A missing parameter is reported with status 400.
    fn get_parameter(&self, request: &GetParameter) -> Result<Parameter, RequestError>;
}

impl<S: ParameterStore + ?Sized> ParameterStore for Box<S> {
    fn get_parameter(&self, request: &GetParameter) -> Result<Parameter, RequestError> {
        (**self).get_parameter(request)
    }
}

impl<S: ParameterStore + ?Sized> ParameterStore for &S {
    fn get_parameter(&self, request: &GetParameter) -> Result<Parameter, RequestError> {
        (**self).get_parameter(request)
    }
}
