//! Rustup toolchain detection and switching.
//!
//! Detection mirrors what rustup itself would pick for the project:
//! `rust-toolchain.toml` first, then a bare `rust-toolchain` file, then a
//! scan of the crate roots for `#![feature(` as a nightly tell.

use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, warn};

/// Channel used when nothing in the project says otherwise.
pub const DEFAULT_CHANNEL: &str = "stable";

#[derive(Debug, Deserialize)]
struct ToolchainFile {
    toolchain: Option<ToolchainSection>,
}

#[derive(Debug, Deserialize)]
struct ToolchainSection {
    channel: Option<String>,
}

/// Detect the toolchain channel the project expects.
///
/// Unreadable or malformed files are ignored rather than fatal; detection
/// always produces a usable channel name.
pub fn detect(project_root: &Path) -> String {
    let mut channel = DEFAULT_CHANNEL.to_string();

    let toml_path = project_root.join("rust-toolchain.toml");
    let bare_path = project_root.join("rust-toolchain");

    if toml_path.exists() {
        if let Ok(text) = std::fs::read_to_string(&toml_path) {
            match toml::from_str::<ToolchainFile>(&text) {
                Ok(parsed) => {
                    if let Some(c) = parsed.toolchain.and_then(|t| t.channel) {
                        channel = c;
                    }
                }
                Err(e) => debug!(error = %e, "ignoring malformed rust-toolchain.toml"),
            }
        }
    } else if bare_path.exists() {
        if let Ok(text) = std::fs::read_to_string(&bare_path) {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                channel = trimmed.to_string();
            }
        }
    }

    // A feature-gate anywhere in the crate roots forces nightly
    for source in ["src/lib.rs", "src/main.rs"] {
        if let Ok(text) = std::fs::read_to_string(project_root.join(source)) {
            if text.contains("#![feature(") {
                channel = "nightly".to_string();
                break;
            }
        }
    }

    channel
}

/// Switch the rustup default toolchain.
///
/// The subprocess output is discarded; a non-zero exit is logged but not
/// fatal, matching the fire-and-forget behavior of the toolchain selector.
pub fn set_default(channel: &str) -> Result<()> {
    let status = Command::new("rustup")
        .args(["default", channel])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .context("failed to run rustup")?;

    if !status.success() {
        warn!(channel, status = ?status, "rustup default failed");
    }

    Ok(())
}
