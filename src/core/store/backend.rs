//! Backend selection.

use super::{GetParameter, Parameter, ParameterStore, RequestError};

/// Default backend for this build.
///
/// With the `aws` feature this is SSM Parameter Store. Without it every
/// lookup fails with a request error explaining how to rebuild.
pub fn default_backend() -> Box<dyn ParameterStore> {
    #[cfg(feature = "aws")]
    {
        Box::new(super::aws::AwsSsm::new())
    }

    #[cfg(not(feature = "aws"))]
    {
        tracing::warn!("built without the aws feature; parameter lookups will fail");
        Box::new(Unavailable)
    }
}

/// Placeholder backend for builds without a parameter store.
#[allow(dead_code)]
struct Unavailable;

impl ParameterStore for Unavailable {
    fn get_parameter(&self, request: &GetParameter) -> Result<Parameter, RequestError> {
        Err(RequestError::new(
            None,
            format!(
                "cannot fetch '{}': SSM support not compiled. Rebuild with: cargo install secret-baker --features aws",
                request.name
            ),
        ))
    }
}
