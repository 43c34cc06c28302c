//! Lifecycle commands.

use serde::Serialize;

use crate::cli::{output, LocalBaker};
use crate::core::constants;
use crate::core::lifecycle::Hook;
use crate::error::Result;

/// Event fired by `secret-baker package`.
const PACKAGE_EVENT: &str = "before:package:createDeploymentArtifacts";

/// Event fired by `secret-baker cleanup`.
const CLEANUP_EVENT: &str = "after:package:createDeploymentArtifacts";

/// Bake secrets and show what ends up in the package.
pub fn package(baker: &mut LocalBaker) -> Result<()> {
    dispatch(baker, PACKAGE_EVENT)?;

    if let Some(included) = baker.host().included() {
        output::section("Package include");
        for path in included {
            output::list_item(&output::path(path.display()));
        }
    }
    Ok(())
}

/// Remove the secrets file, unless cleanup was suppressed.
pub fn cleanup(baker: &mut LocalBaker) -> Result<()> {
    if !baker.cleanup_enabled() {
        output::warn(&format!(
            "cleanup disabled by --param {}",
            constants::NO_CLEANUP_PARAM
        ));
        return Ok(());
    }
    dispatch(baker, CLEANUP_EVENT)
}

/// Fire one lifecycle event.
pub fn dispatch(baker: &mut LocalBaker, event: &str) -> Result<()> {
    let Some(hook) = baker.handler(event) else {
        output::dimmed(&format!("no hook registered for {}", event));
        return Ok(());
    };

    baker.dispatch(event)?;

    match hook {
        Hook::Package => output::success(&format!(
            "secrets written to {}",
            output::path(baker.file_path().display())
        )),
        Hook::Cleanup => output::success("secrets file cleaned up"),
    }
    Ok(())
}

#[derive(Serialize)]
struct HookEntry {
    event: &'static str,
    hook: String,
}

/// List the event table.
pub fn list(baker: &LocalBaker, json: bool) -> Result<()> {
    if json {
        let entries: Vec<HookEntry> = baker
            .hooks()
            .iter()
            .map(|(event, hook)| HookEntry {
                event: *event,
                hook: hook.to_string(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for (event, hook) in baker.hooks() {
        output::kv(event, hook);
    }
    if !baker.cleanup_enabled() {
        output::dimmed(&format!(
            "cleanup hooks disabled by --param {}",
            constants::NO_CLEANUP_PARAM
        ));
    }
    Ok(())
}
