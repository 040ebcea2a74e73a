use mailblocks_compiler_html::ExportOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

pub const DEFAULT_CONFIG_NAME: &str = "mailblocks.config.json";

/// Mailblocks configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Where exported HTML lands when no output path is given
    pub out_dir: String,

    /// Directory holding stored newsletter records
    pub store_dir: String,

    /// Indent exported HTML
    pub pretty: bool,

    /// Undo levels kept while replaying mutations
    pub history_limit: usize,
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            debug!(path = %config_path.display(), "Loaded config");
            Ok(config)
        } else {
            debug!(cwd = cwd, "No config file, using defaults");
            Ok(Config::default())
        }
    }

    pub fn get_out_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.out_dir)
    }

    pub fn get_store_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.store_dir)
    }

    pub fn export_options(&self) -> ExportOptions {
        if self.pretty {
            ExportOptions::default()
        } else {
            ExportOptions::compact()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            out_dir: "dist".to_string(),
            store_dir: ".mailblocks/newsletters".to_string(),
            pretty: true,
            history_limit: mailblocks_editor::MAX_HISTORY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "outDir": "public",
            "storeDir": "drafts",
            "pretty": false,
            "historyLimit": 10
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.out_dir, "public");
        assert_eq!(config.store_dir, "drafts");
        assert!(!config.pretty);
        assert_eq!(config.history_limit, 10);
        assert!(!config.export_options().pretty);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{ "outDir": "out" }"#).unwrap();
        assert_eq!(config.out_dir, "out");
        assert_eq!(config.store_dir, ".mailblocks/newsletters");
        assert!(config.pretty);
        assert_eq!(config.history_limit, 50);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().display().to_string()).unwrap();
        assert_eq!(config.out_dir, "dist");
        assert_eq!(
            config.get_store_dir("/work"),
            PathBuf::from("/work/.mailblocks/newsletters")
        );
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_NAME), r#"{ "historyLimit": 5 }"#).unwrap();

        let config = Config::load(&dir.path().display().to_string()).unwrap();
        assert_eq!(config.history_limit, 5);
        assert_eq!(config.out_dir, "dist");
    }
}
