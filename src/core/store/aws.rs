//! AWS SSM Parameter Store backend.
//!
//! Enable with `--features aws` (on by default).
//!
//! Uses AWS credentials from the environment (AWS_ACCESS_KEY_ID, AWS_REGION,
//! etc.) or from the default credential provider chain. The caller needs
//! `ssm:GetParameter` on every declared path.

use aws_sdk_ssm::error::{DisplayErrorContext, SdkError};
use aws_sdk_ssm::operation::get_parameter::GetParameterError;
use tracing::trace;

use super::{GetParameter, Parameter, ParameterStore, RequestError};
use crate::core::constants;

/// SSM Parameter Store backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct AwsSsm;

impl AwsSsm {
    pub fn new() -> Self {
        Self
    }
}

impl ParameterStore for AwsSsm {
    fn get_parameter(&self, request: &GetParameter) -> Result<Parameter, RequestError> {
        trace!(
            name = %request.name,
            with_decryption = request.with_decryption,
            "fetching from SSM"
        );

        // Create a tokio runtime for the async AWS SDK
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| RequestError::new(None, format!("failed to create runtime: {}", e)))?;

        rt.block_on(async {
            let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
            let client = aws_sdk_ssm::Client::new(&config);

            let output = client
                .get_parameter()
                .name(&request.name)
                .with_decryption(request.with_decryption)
                .send()
                .await
                .map_err(classify)?;

            let parameter = output.parameter();
            trace!(name = %request.name, found = parameter.is_some(), "fetched from SSM");

            Ok(Parameter {
                value: parameter.and_then(|p| p.value()).map(str::to_string),
                arn: parameter.and_then(|p| p.arn()).map(str::to_string),
            })
        })
    }
}

/// Map an SDK failure onto a status-carrying request error.
///
/// `ParameterNotFound` is reported as 400, which is what SSM answers with on
/// the wire.
fn classify(err: SdkError<GetParameterError>) -> RequestError {
    let not_found = err
        .as_service_error()
        .map(|e| e.is_parameter_not_found())
        .unwrap_or(false);

    let status = if not_found {
        Some(constants::NOT_FOUND_STATUS)
    } else {
        err.raw_response().map(|r| r.status().as_u16())
    };

    RequestError::new(status, DisplayErrorContext(&err).to_string())
}
