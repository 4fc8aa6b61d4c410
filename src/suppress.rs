//! Disable remote translation while an emulator or media player is running.

use std::process::Command;

/// Processes that must get native input only.
pub const DEFAULT_EXCLUDED: &[&str] = &[
    "kodi_v7.bin",
    "kodi.bin_v7",
    "retroarch",
    "reicast",
    "drastic",
];

/// Answers whether a click should be held back right now.
pub trait Suppression {
    fn is_suppressed(&self) -> bool;
}

/// Checks the live process table on every call.
#[derive(Debug, Clone)]
pub struct SuppressionGuard {
    excluded: Vec<String>,
    program: String,
    args: Vec<String>,
}

impl SuppressionGuard {
    /// Lists processes with `ps -A`.
    pub fn new(excluded: Vec<String>) -> Self {
        Self::with_command(excluded, "ps", &["-A".to_string()])
    }

    /// Lists processes with a custom command whose stdout is searched.
    pub fn with_command(excluded: Vec<String>, program: &str, args: &[String]) -> Self {
        Self {
            excluded,
            program: program.to_string(),
            args: args.to_vec(),
        }
    }

    /// Excluded name found anywhere in a process listing.
    pub fn matches(&self, listing: &str) -> Option<&str> {
        self.excluded
            .iter()
            .find(|name| listing.contains(name.as_str()))
            .map(String::as_str)
    }

    fn process_listing(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .map_err(|e| format!("Failed to run {}: {}", self.program, e))?;
        if !output.status.success() {
            return Err(format!("{} exited with {}", self.program, output.status).into());
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Suppression for SuppressionGuard {
    fn is_suppressed(&self) -> bool {
        match self.process_listing() {
            Ok(listing) => match self.matches(&listing) {
                Some(name) => {
                    log::debug!("{} is running, suppressing remote input", name);
                    true
                }
                None => false,
            },
            Err(e) => {
                // Can't tell what is in the foreground, so stay quiet.
                log::warn!("Process table query failed, suppressing remote input: {}", e);
                true
            }
        }
    }
}
