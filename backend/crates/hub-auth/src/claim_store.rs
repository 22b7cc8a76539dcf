use crate::{AuthError, Result as AuthErrorResult};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

/// On-disk layout: a single `[claims]` table of `name = "identity"`.
#[derive(Debug, Default, Deserialize, Serialize)]
struct ClaimsFile {
    #[serde(default)]
    claims: BTreeMap<String, String>,
}

/// Which identity owns each local account name.
///
/// Backed by a TOML file when opened with [`ClaimStore::open`]; every change
/// is written through before it becomes visible.
#[derive(Debug, Default)]
pub struct ClaimStore {
    path: Option<PathBuf>,
    claims: BTreeMap<String, String>,
}

impl ClaimStore {
    /// Store that forgets everything on restart.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Load claims from `path`; a missing file is an empty store.
    #[track_caller]
    pub fn open(path: impl Into<PathBuf>) -> AuthErrorResult<Self> {
        let path = path.into();

        let claims = if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| AuthError::claim_store(&path, e.to_string()))?;
            toml::from_str::<ClaimsFile>(&contents)
                .map_err(|e| AuthError::claim_store(&path, e.to_string()))?
                .claims
        } else {
            BTreeMap::new()
        };

        info!(
            "Loaded {} identity claims from {}",
            claims.len(),
            path.display()
        );

        Ok(Self {
            path: Some(path),
            claims,
        })
    }

    pub fn owner(&self, name: &str) -> Option<&str> {
        self.claims.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Record `identity` as the owner of `name`.
    pub fn insert(&mut self, name: &str, identity: &str) -> AuthErrorResult<()> {
        let mut claims = self.claims.clone();
        claims.insert(name.to_string(), identity.to_string());
        self.persist(&claims)?;

        self.claims = claims;
        Ok(())
    }

    /// Keep only the claims whose name satisfies `keep`. Returns how many
    /// were dropped.
    pub fn retain<F>(&mut self, mut keep: F) -> AuthErrorResult<usize>
    where
        F: FnMut(&str) -> bool,
    {
        let mut claims = self.claims.clone();
        claims.retain(|name, _| keep(name));

        let dropped = self.claims.len() - claims.len();
        if dropped > 0 {
            self.persist(&claims)?;
            self.claims = claims;
        }
        Ok(dropped)
    }

    /// Write to a sibling temp file and rename over the store.
    fn persist(&self, claims: &BTreeMap<String, String>) -> AuthErrorResult<()> {
        let Some(ref path) = self.path else {
            return Ok(());
        };

        let contents = toml::to_string(&ClaimsFile {
            claims: claims.clone(),
        })
        .map_err(|e| AuthError::claim_store(path, e.to_string()))?;

        let tmp = temp_path(path);
        std::fs::write(&tmp, contents)
            .and_then(|()| std::fs::rename(&tmp, path))
            .map_err(|e| AuthError::claim_store(path, e.to_string()))?;

        debug!("Wrote {} identity claims to {}", claims.len(), path.display());
        Ok(())
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
