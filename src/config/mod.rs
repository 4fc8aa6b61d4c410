mod cli;
mod file;

pub use cli::{Cli, Command};

use std::path::PathBuf;

use crate::suppress::DEFAULT_EXCLUDED;

const DEFAULT_BINDINGS: &str = "/opt/retropie/configs/all/retroarch.cfg";
const DEFAULT_ADAPTER: &str = "cec-client";
const DEFAULT_DEVICE_NAME: &str = "cec-pad";

/// Merged configuration from CLI args and TOML file.
#[derive(Debug, Clone)]
pub struct Config {
    pub bindings: PathBuf,
    pub adapter: String,
    pub adapter_args: Vec<String>,
    pub exclude: Vec<String>,
    pub device_name: String,
}

impl Config {
    /// Load configuration by merging TOML file with CLI overrides.
    pub fn load(cli: &Cli) -> Self {
        let file_config = cli
            .config
            .as_ref()
            .and_then(|p| file::load_from_path(p))
            .or_else(file::load_from_default_paths)
            .unwrap_or_default();

        Self::merge(cli, file_config)
    }

    fn merge(cli: &Cli, file_config: file::FileConfig) -> Self {
        Self {
            bindings: cli
                .bindings
                .clone()
                .or(file_config.bindings)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_BINDINGS)),
            adapter: cli
                .adapter
                .clone()
                .or(file_config.adapter)
                .unwrap_or_else(|| DEFAULT_ADAPTER.into()),
            adapter_args: non_empty(&cli.adapter_args)
                .or(file_config.adapter_args)
                .unwrap_or_default(),
            exclude: non_empty(&cli.exclude)
                .or(file_config.exclude)
                .unwrap_or_else(|| DEFAULT_EXCLUDED.iter().map(|s| s.to_string()).collect()),
            device_name: cli
                .device_name
                .clone()
                .or(file_config.device_name)
                .unwrap_or_else(|| DEFAULT_DEVICE_NAME.into()),
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.adapter.trim().is_empty() {
            return Err("Adapter command is empty");
        }
        if self.device_name.trim().is_empty() {
            return Err("Device name is empty");
        }
        Ok(())
    }
}

fn non_empty(values: &[String]) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values.to_vec())
    }
}
