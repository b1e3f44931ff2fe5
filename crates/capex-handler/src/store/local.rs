//! Filesystem-backed stores for replaying events locally.

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, trace};

use super::{ObjectStore, SecretStore};
use crate::error::{SecretError, StorageError};
use crate::secret::Secret;

/// Object store mapping `bucket`/`key` to `<root>/<bucket>/<key>`.
#[derive(Debug, Clone)]
pub struct LocalObjectStore {
    root: PathBuf,
}

impl LocalObjectStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve an object path, refusing anything that could escape the bucket.
    fn object_path(&self, bucket: &str, key: &str) -> Result<PathBuf, StorageError> {
        let escapes = |s: &str| {
            Path::new(s)
                .components()
                .any(|c| !matches!(c, Component::Normal(_)))
        };
        if bucket.is_empty() || escapes(bucket) {
            return Err(StorageError::InvalidKey(bucket.to_string()));
        }
        if key.is_empty() || escapes(key) {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(bucket).join(key))
    }
}

impl ObjectStore for LocalObjectStore {
    fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.object_path(bucket, key)?;
        trace!("Reading object from {}", path.display());

        match std::fs::read(&path) {
            Ok(body) => {
                debug!("Read {} bytes from {}/{}", body.len(), bucket, key);
                Ok(body)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(StorageError::NoSuchKey {
                bucket: bucket.to_string(),
                key: key.to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }
}

/// Secret store backed by a JSON file of the form
/// `{ "<region>": { "<name>": "<value>" } }`.
///
/// The file is read on every lookup and nothing is cached.
#[derive(Debug, Clone)]
pub struct LocalSecretStore {
    path: PathBuf,
}

impl LocalSecretStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SecretStore for LocalSecretStore {
    fn get_secret(&self, name: &str, region: &str) -> Result<Secret, SecretError> {
        let content = std::fs::read_to_string(&self.path)?;
        let mut regions: HashMap<String, HashMap<String, String>> =
            serde_json::from_str(&content).map_err(|e| SecretError::InvalidStore(e.to_string()))?;

        regions
            .get_mut(region)
            .and_then(|secrets| secrets.remove(name))
            .map(Secret::new)
            .ok_or_else(|| SecretError::NotFound {
                name: name.to_string(),
                region: region.to_string(),
            })
    }
}
