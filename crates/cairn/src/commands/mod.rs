//! CLI command implementations

pub mod config;
pub mod labels;
pub mod name;
pub mod preview;
pub mod region;

use anyhow::{Context, Result};
use cairn_core::config::{EnvConfigStore, LayeredConfigStore, StackConfig};
use cairn_core::Error;
use camino::Utf8PathBuf;
use tracing::{debug, warn};

/// Stack whose configuration commands read
#[derive(Debug, Clone)]
pub struct StackSource {
    pub stack: String,
    pub path: Option<Utf8PathBuf>,
}

impl StackSource {
    /// Stack file layered under `CAIRN_CONFIG_*` environment overrides
    ///
    /// An explicit `--config` path must exist; a discovered stack file is
    /// optional.
    pub fn open(&self) -> Result<LayeredConfigStore> {
        let mut store = LayeredConfigStore::new();

        match &self.path {
            Some(path) => {
                let file = StackConfig::load(path)
                    .with_context(|| format!("Failed to load stack '{}'", self.stack))?;
                store.push(file);
            }
            None => match StackConfig::discover(&self.stack) {
                Ok(file) => {
                    debug!(
                        "Using stack file {}",
                        file.path().map(|p| p.as_str()).unwrap_or("<memory>")
                    );
                    store.push(file);
                }
                Err(Error::ConfigNotFound { path }) => {
                    warn!("No stack file found ({}), using environment only", path);
                }
                Err(e) => {
                    return Err(e).with_context(|| format!("Failed to load stack '{}'", self.stack))
                }
            },
        }

        store.push(EnvConfigStore::new());
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cairn_core::ConfigStore;
    use tempfile::TempDir;

    #[test]
    fn test_open_explicit_stack_file() {
        let temp = TempDir::new().unwrap();
        let dir = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
        let path = dir.join("Cairn.qa.yaml");
        std::fs::write(&path, "config:\n  owner: qa-team\n").unwrap();

        let source = StackSource {
            stack: "qa".to_string(),
            path: Some(path),
        };
        let store = source.open().unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("owner").as_deref(), Some("qa-team"));
    }

    #[test]
    fn test_open_missing_explicit_file_fails() {
        let temp = TempDir::new().unwrap();
        let dir = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();

        let source = StackSource {
            stack: "qa".to_string(),
            path: Some(dir.join("Cairn.qa.yaml")),
        };
        let err = source.open().unwrap_err();
        assert!(err.to_string().contains("Failed to load stack 'qa'"));
    }
}
