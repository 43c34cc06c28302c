//! Type aliases for domain concepts.

/// Logical secret name, the key in the secrets file (e.g. DB_PASSWORD).
pub type SecretName = String;

/// Parameter store path (e.g. /prod/db/password).
pub type ParameterPath = String;

/// Lifecycle event name dispatched by the host.
pub type EventName = &'static str;
