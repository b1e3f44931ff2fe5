//! In-memory stores, mainly for tests.

use std::collections::HashMap;

use super::{ObjectStore, SecretStore};
use crate::error::{SecretError, StorageError};
use crate::secret::Secret;

/// Object store holding bodies in a map keyed by (bucket, key).
#[derive(Debug, Default, Clone)]
pub struct MemoryObjectStore {
    objects: HashMap<(String, String), Vec<u8>>,
}

impl MemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an object.
    pub fn with_object(
        mut self,
        bucket: impl Into<String>,
        key: impl Into<String>,
        body: impl Into<Vec<u8>>,
    ) -> Self {
        self.objects.insert((bucket.into(), key.into()), body.into());
        self
    }
}

impl ObjectStore for MemoryObjectStore {
    fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StorageError> {
        self.objects
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
            .ok_or_else(|| StorageError::NoSuchKey {
                bucket: bucket.to_string(),
                key: key.to_string(),
            })
    }
}

/// Secret store holding values in a map keyed by (region, name).
#[derive(Default, Clone)]
pub struct MemorySecretStore {
    secrets: HashMap<(String, String), Secret>,
}

impl MemorySecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_secret(
        mut self,
        region: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.secrets
            .insert((region.into(), name.into()), Secret::new(value));
        self
    }
}

impl SecretStore for MemorySecretStore {
    fn get_secret(&self, name: &str, region: &str) -> Result<Secret, SecretError> {
        self.secrets
            .get(&(region.to_string(), name.to_string()))
            .cloned()
            .ok_or_else(|| SecretError::NotFound {
                name: name.to_string(),
                region: region.to_string(),
            })
    }
}
