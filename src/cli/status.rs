//! Quick status overview command.

use crate::cli::{output, LocalBaker};
use crate::core::config::SecretsConfig;
use crate::core::host::Host;
use crate::core::secrets::SecretsFile;
use crate::error::Result;

/// Show declared secrets and the state of the secrets file.
///
/// Only names and parameter paths are printed, never values.
pub fn execute(baker: &LocalBaker) -> Result<()> {
    let config = SecretsConfig::from_service(baker.host().service())?;

    output::section("Secret Baker Status");
    output::kv("file", output::path(baker.file_path().display()));
    output::kv(
        "cleanup",
        if baker.cleanup_enabled() {
            "after packaging"
        } else {
            "disabled"
        },
    );

    let file_state = if baker.file_path().exists() {
        match SecretsFile::load(baker.file_path()) {
            Ok(file) => format!(
                "present ({} secret{})",
                file.len(),
                if file.len() == 1 { "" } else { "s" }
            ),
            Err(_) => "present (unreadable)".to_string(),
        }
    } else {
        "absent".to_string()
    };
    output::kv("on disk", file_state);

    output::section("Secrets");
    if config.secrets.is_empty() {
        output::dimmed("no secrets declared");
    }
    for secret in &config.secrets {
        if secret.name == secret.path {
            output::list_item(&secret.name);
        } else {
            output::list_item(&format!("{} ← {}", secret.name, secret.path));
        }
    }

    Ok(())
}
