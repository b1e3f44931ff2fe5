//! Object and secret store backends.

mod local;
mod memory;

pub use local::{LocalObjectStore, LocalSecretStore};
pub use memory::{MemoryObjectStore, MemorySecretStore};

use crate::error::{SecretError, StorageError};
use crate::secret::Secret;

/// Read access to an object store.
pub trait ObjectStore {
    /// Fetch the full body of the object at `bucket`/`key`.
    fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StorageError>;
}

/// Read access to a secret manager.
pub trait SecretStore {
    /// Fetch the string payload of secret `name` in `region`.
    fn get_secret(&self, name: &str, region: &str) -> Result<Secret, SecretError>;
}

impl<T: ObjectStore + ?Sized> ObjectStore for &T {
    fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StorageError> {
        (**self).get_object(bucket, key)
    }
}

impl<T: SecretStore + ?Sized> SecretStore for &T {
    fn get_secret(&self, name: &str, region: &str) -> Result<Secret, SecretError> {
        (**self).get_secret(name, region)
    }
}
