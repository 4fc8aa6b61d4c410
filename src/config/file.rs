use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub bindings: Option<PathBuf>,
    pub adapter: Option<String>,
    pub adapter_args: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
    pub device_name: Option<String>,
}

pub fn parse(content: &str) -> Result<FileConfig, toml::de::Error> {
    toml::from_str(content)
}

pub fn load_from_path(path: &Path) -> Option<FileConfig> {
    let content = std::fs::read_to_string(path).ok()?;
    match parse(&content) {
        Ok(config) => {
            log::debug!("Loaded config from {}", path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("Failed to parse {}: {}", path.display(), e);
            None
        }
    }
}

pub fn load_from_default_paths() -> Option<FileConfig> {
    for path in default_config_paths() {
        if path.exists() {
            if let Some(config) = load_from_path(&path) {
                return Some(config);
            }
        }
    }
    None
}

fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("cec-pad.toml"));

    if let Ok(home) = std::env::var("HOME") {
        paths.push(PathBuf::from(home).join(".config").join("cec-pad.toml"));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full() {
        let config = parse(
            r#"
            bindings = "/home/pi/retroarch.cfg"
            adapter = "/usr/bin/cec-client"
            adapter_args = ["-d", "8"]
            exclude = ["mpv", "retroarch"]
            device_name = "living room remote"
            "#,
        )
        .unwrap();
        assert_eq!(config.bindings, Some(PathBuf::from("/home/pi/retroarch.cfg")));
        assert_eq!(config.adapter.as_deref(), Some("/usr/bin/cec-client"));
        assert_eq!(config.adapter_args, Some(vec!["-d".to_string(), "8".to_string()]));
        assert_eq!(config.exclude.unwrap().len(), 2);
        assert_eq!(config.device_name.as_deref(), Some("living room remote"));
    }

    #[test]
    fn test_parse_empty() {
        let config = parse("").unwrap();
        assert!(config.bindings.is_none());
        assert!(config.exclude.is_none());
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(parse("volume = 10").is_err());
    }
}
