//! Constants used throughout secret-baker.
//!
//! Centralizes magic strings and lifecycle event names.

/// Default output file for resolved secrets.
pub const DEFAULT_SECRETS_FILE: &str = "secret-baker-secrets.json";

/// Default service configuration file.
pub const SERVICE_CONFIG_FILE: &str = "serverless.toml";

/// Plugin namespace under the service's `custom` block.
pub const CONFIG_NAMESPACE: &str = "secretBaker";

/// CLI parameter whose presence disables cleanup.
pub const NO_CLEANUP_PARAM: &str = "no-secret-baker-cleanup";

/// Service name passed to the request layer.
pub const SSM_SERVICE: &str = "SSM";

/// Operation name passed to the request layer.
pub const GET_PARAMETER: &str = "getParameter";

/// Status the backend reports for a missing parameter.
pub const NOT_FOUND_STATUS: u16 = 400;

/// Events that bake secrets into the package.
pub const PACKAGE_EVENTS: &[&str] = &[
    "before:package:createDeploymentArtifacts",
    "before:deploy:function:packageFunction",
    "before:invoke:local:invoke",
    "before:offline:start:init",
    "before:offline:start",
];

/// Events that remove the secrets file again.
pub const CLEANUP_EVENTS: &[&str] = &[
    "after:package:createDeploymentArtifacts",
    "after:deploy:function:packageFunction",
    "after:invoke:local:invoke",
    "before:offline:start:end",
];
