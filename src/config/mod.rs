// ABOUTME: Plugin configuration for ros2-fdu, read from ros2-fdu.yml.
// ABOUTME: Output-file layout, transition policy, and environment overrides.

use crate::error::{Error, Result};
use crate::types::{FduId, InstanceId};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub use crate::fdu::TransitionPolicy;

pub const CONFIG_FILENAME: &str = "ros2-fdu.yml";
pub const CONFIG_FILENAME_ALT: &str = "ros2-fdu.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".ros2-fdu/config.yml";

pub const ENV_BASE_DIR: &str = "ROS2_FDU_BASE_DIR";
pub const ENV_TRANSITIONS: &str = "ROS2_FDU_TRANSITIONS";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Root of the plugin's working tree on the node.
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,

    /// Directory under `base_dir` that receives workload output files.
    #[serde(default = "default_log_dir")]
    pub log_dir: String,

    #[serde(default)]
    pub transitions: TransitionPolicy,
}

fn default_base_dir() -> PathBuf {
    PathBuf::from("/opt/fos/ros2")
}

fn default_log_dir() -> String {
    "logs".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_dir: default_base_dir(),
            log_dir: default_log_dir(),
            transitions: TransitionPolicy::default(),
        }
    }
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    /// Load a config file and apply environment overrides on top.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)?.with_env_overrides()
    }

    pub fn discover(dir: &Path) -> Result<Self> {
        let candidates = [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ];

        for path in &candidates {
            if path.exists() {
                tracing::debug!(path = %path.display(), "loading config");
                return Self::load(path);
            }
        }

        Err(Error::ConfigNotFound(dir.to_path_buf()))
    }

    /// Like `discover`, but a missing file yields the defaults.
    pub fn discover_or_default(dir: &Path) -> Result<Self> {
        match Self::discover(dir) {
            Err(Error::ConfigNotFound(_)) => Config::default().with_env_overrides(),
            other => other,
        }
    }

    /// Apply `ROS2_FDU_BASE_DIR` and `ROS2_FDU_TRANSITIONS` if set.
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(base_dir) = std::env::var(ENV_BASE_DIR) {
            self.base_dir = PathBuf::from(base_dir);
        }

        if let Ok(policy) = std::env::var(ENV_TRANSITIONS) {
            self.transitions = policy.parse().map_err(Error::InvalidConfig)?;
        }

        Ok(self)
    }

    /// Directory holding workload output files.
    pub fn log_path(&self) -> PathBuf {
        self.base_dir.join(&self.log_dir)
    }

    /// Output file for one instance: `<base_dir>/<log_dir>/<fdu>_<instance>.log`.
    pub fn outfile_for(&self, fdu_id: &FduId, instance: &InstanceId) -> PathBuf {
        self.log_path().join(format!("{fdu_id}_{instance}.log"))
    }
}

pub fn init_config(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() && !force {
        return Err(Error::AlreadyExists(config_path));
    }

    std::fs::write(&config_path, generate_template_yaml(&Config::default()))?;
    Ok(config_path)
}

fn generate_template_yaml(config: &Config) -> String {
    format!(
        r#"base_dir: {}
log_dir: {}
# lenient: apply every lifecycle notification; strict: reject illegal ones
transitions: lenient
"#,
        config.base_dir.display(),
        config.log_dir,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_parses_back_to_defaults() {
        let yaml = generate_template_yaml(&Config::default());
        assert_eq!(Config::from_yaml(&yaml).unwrap(), Config::default());
    }

    #[test]
    fn outfile_joins_ids_under_log_dir() {
        let config = Config::default();
        let path = config.outfile_for(&FduId::new("talker"), &InstanceId::new("abc"));
        assert_eq!(path, PathBuf::from("/opt/fos/ros2/logs/talker_abc.log"));
    }
}
