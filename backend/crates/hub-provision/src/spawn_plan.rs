use hub_auth::LocalAccountName;
use hub_config::SpawnerConfig;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Launch description for a user's notebook session, handed to the process
/// supervisor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnPlan {
    pub user: String,
    pub argv: Vec<String>,
    pub env: BTreeMap<String, String>,
    pub working_dir: PathBuf,
    pub default_url: String,
    pub http_timeout: Duration,
    pub start_timeout: Duration,
}

impl SpawnPlan {
    /// `inherited` is the gateway's own environment; only names listed in
    /// `env_keep` are carried over, and explicit `environment` entries win.
    pub fn build<I>(
        config: &SpawnerConfig,
        name: &LocalAccountName,
        home: &Path,
        inherited: I,
    ) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut env: BTreeMap<String, String> = inherited
            .into_iter()
            .filter(|(key, _)| config.env_keep.iter().any(|keep| keep == key))
            .collect();

        env.extend(
            config
                .environment
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );
        env.insert(String::from("USER"), name.to_string());
        env.insert(String::from("HOME"), home.display().to_string());

        Self {
            user: name.to_string(),
            argv: config.cmd.iter().chain(&config.args).cloned().collect(),
            env,
            working_dir: expand_home(&config.notebook_dir, home),
            default_url: config.default_url.clone(),
            http_timeout: Duration::from_secs(config.http_timeout_secs),
            start_timeout: Duration::from_secs(config.start_timeout_secs),
        }
    }
}

fn expand_home(dir: &str, home: &Path) -> PathBuf {
    match dir.strip_prefix('~') {
        Some("") => home.to_path_buf(),
        Some(rest) if rest.starts_with('/') => home.join(rest.trim_start_matches('/')),
        _ => PathBuf::from(dir),
    }
}
