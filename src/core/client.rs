//! Parameter store client.
//!
//! Looks up one parameter through the host's request layer and separates
//! "not found" from real failures.

use tracing::debug;

use crate::core::constants;
use crate::core::host::Host;
use crate::core::secrets::ResolvedSecret;
use crate::core::store::{GetParameter, RequestOptions};
use crate::error::{BackendError, Result};

/// Fetch the parameter at `path`.
///
/// The lookup never asks for decryption and is served from the request
/// cache when the same path was fetched earlier in the run.
///
/// # Returns
///
/// `Ok(None)` when the backend reports the parameter as not found.
///
/// # Errors
///
/// Returns `BackendError` for any other failure, or when the response lacks
/// a value or ARN.
pub fn fetch<H: Host + ?Sized>(host: &H, path: &str) -> Result<Option<ResolvedSecret>> {
    let request = GetParameter {
        name: path.to_string(),
        with_decryption: false,
    };

    match host.request(&request, RequestOptions::cached()) {
        Ok(parameter) => {
            let ciphertext = parameter.value.ok_or_else(|| BackendError::MissingField {
                name: path.to_string(),
                field: "Value",
            })?;
            let arn = parameter.arn.ok_or_else(|| BackendError::MissingField {
                name: path.to_string(),
                field: "ARN",
            })?;

            debug!(path, "parameter resolved");
            Ok(Some(ResolvedSecret::new(ciphertext, arn)))
        }
        Err(e) if e.status == Some(constants::NOT_FOUND_STATUS) => {
            debug!(path, error = %e, "parameter not found");
            Ok(None)
        }
        Err(e) => Err(BackendError::Request(e.message).into()),
    }
}
