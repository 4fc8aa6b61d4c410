mod adapter;
mod bindings;
mod config;
mod device;
mod event_loop;
mod keylist;
mod keymap;
mod suppress;
mod translate;

use clap::Parser;

use config::{Cli, Command, Config};
use keylist::{BuildError, Control, KeyList, UnsupportedKeys};
use keymap::KeyCatalog;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load(&cli);
    if let Err(e) = config.validate() {
        log::error!("{}", e);
        std::process::exit(1);
    }

    let catalog = KeyCatalog::retroarch();

    match cli.command {
        Some(Command::Keys) => {
            for name in catalog.names() {
                println!("{}", name);
            }
            Ok(())
        }
        Some(Command::Check) => {
            let keys = resolve_keys(&config, &catalog);
            println!("{} bindings resolved from {}", keys.codes().len(), config.bindings.display());
            for control in Control::ALL {
                println!("{:<7} slot {:>2}  {:?}", control, control.slot(), keys.key(control));
            }
            Ok(())
        }
        Some(Command::Translate { line }) => {
            let keys = resolve_keys(&config, &catalog);
            match translate::classify(&line) {
                Some(control) => println!("{} {:?}", control, keys.key(control)),
                None => println!("no action"),
            }
            Ok(())
        }
        None => run(&config, &catalog),
    }
}

fn run(config: &Config, catalog: &KeyCatalog) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    log::info!(
        "cec-pad starting (bindings={}, adapter={}, exclude=[{}])",
        config.bindings.display(),
        config.adapter,
        config.exclude.join(", ")
    );

    log::debug!("Key catalog has {} names", catalog.len());

    let keys = resolve_keys(config, catalog);
    let mut keyboard = device::VirtualKeyboard::create(&config.device_name, &keys)?;
    let guard = suppress::SuppressionGuard::new(config.exclude.clone());
    let mut adapter = adapter::CecAdapter::spawn(&config.adapter, &config.adapter_args)?;

    log::info!("Remote forwarding started");
    event_loop::run(adapter.lines(), &keys, &mut keyboard, &guard)
}

/// Load and resolve the bindings, exiting on any configuration error.
fn resolve_keys(config: &Config, catalog: &KeyCatalog) -> KeyList {
    let bindings = match bindings::load(&config.bindings) {
        Ok(bindings) => bindings,
        Err(e) => {
            eprintln!("Cannot read {}: {}", config.bindings.display(), e);
            std::process::exit(1);
        }
    };

    match keylist::build(&bindings, catalog) {
        Ok(keys) => {
            for control in Control::ALL {
                log::debug!("{} -> {:?}", control, keys.key(control));
            }
            keys
        }
        Err(BuildError::Unsupported(e)) => {
            eprintln!("{}", unsupported_report(&e, catalog));
            std::process::exit(1);
        }
        Err(BuildError::Shape(e)) => {
            eprintln!("{} in {}", e, config.bindings.display());
            std::process::exit(1);
        }
    }
}

/// Offending names followed by every name the catalog accepts.
fn unsupported_report(e: &UnsupportedKeys, catalog: &KeyCatalog) -> String {
    format!(
        "{} by cec-pad\n\nSupported keys are:\n\n{}",
        e,
        catalog.names().join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_report_lists_names_and_catalog() {
        let catalog = KeyCatalog::retroarch();
        let e = UnsupportedKeys {
            names: vec!["nul".to_string(), "joy_0".to_string()],
        };
        let report = unsupported_report(&e, &catalog);

        let (offending, supported) = report.split_once("Supported keys are:").unwrap();
        assert!(offending.contains("The nul, joy_0 keys"));

        let listed: Vec<&str> = supported.trim().split(", ").collect();
        assert_eq!(listed, catalog.names());
        assert!(!listed.contains(&"nul"));
    }
}
