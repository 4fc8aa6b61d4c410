use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cec-pad")]
#[command(about = "Drive EmulationStation with an HDMI-CEC TV remote")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// RetroArch config holding the player one keyboard bindings
    #[arg(long, env = "CECPAD_BINDINGS")]
    pub bindings: Option<PathBuf>,

    /// CEC adapter program that prints one line per remote event
    #[arg(long, env = "CECPAD_ADAPTER")]
    pub adapter: Option<String>,

    /// Extra argument for the adapter (repeatable)
    #[arg(long = "adapter-arg", allow_hyphen_values = true)]
    pub adapter_args: Vec<String>,

    /// Process name that disables the remote while running (repeatable, replaces defaults)
    #[arg(long = "exclude")]
    pub exclude: Vec<String>,

    /// Name of the virtual keyboard
    #[arg(long)]
    pub device_name: Option<String>,

    /// Path to config file
    #[arg(long, env = "CECPAD_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the key names accepted in retroarch.cfg
    Keys,
    /// Resolve the bindings and print the remote mapping, then exit
    Check,
    /// Show what a single adapter line would trigger
    Translate {
        /// Adapter output line, e.g. "key released: left (3)"
        line: String,
    },
}
