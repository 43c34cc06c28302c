//! Secret Baker - bakes parameter store secrets into deployment packages.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface (a minimal local host)
//! │   ├── hooks         # package, cleanup, hook, hooks
//! │   ├── status        # Show declared secrets and file state
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # Service config and secrets declaration
//!     ├── params        # --param key=value reader
//!     ├── host          # Host capability bundle
//!     ├── store/        # Parameter store backends
//!     │   ├── mod       # ParameterStore trait
//!     │   ├── cache     # Request layer with response cache
//!     │   └── aws       # SSM implementation
//!     ├── client        # Single parameter lookup
//!     ├── secrets       # Resolve and write the secrets file
//!     └── lifecycle     # Event table, package and cleanup
//! ```
//!
//! # Flow
//!
//! The host fires a package event, Secret Baker resolves every declared
//! secret in order, writes them to `secret-baker-secrets.json` (or the
//! configured `filePath`) and adds that file to the package. A later cleanup
//! event removes the file unless `--param no-secret-baker-cleanup=true`
//! was given.

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::config::{SecretRef, SecretsConfig, ServiceConfig};
pub use crate::core::host::{Host, LocalHost};
pub use crate::core::lifecycle::{Hook, SecretBaker, State};
pub use crate::core::params::{CliParam, CliParams};
pub use crate::core::secrets::{ResolvedSecret, SecretsFile};
pub use crate::core::store::{GetParameter, Parameter, ParameterStore, RequestError};
