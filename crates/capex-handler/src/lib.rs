//! Object-storage event handler for capex.
//!
//! On a storage-creation event the handler fetches a named secret, reads the
//! created object, parses it as JSON and logs it. Storage and secret access go
//! through traits so callers choose the backend:
//! - in-memory stores for tests
//! - local directory / JSON-file stores for replaying events on a workstation

mod error;
mod event;
mod handler;
mod secret;
pub mod store;

pub use error::{HandlerError, SecretError, StorageError};
pub use event::{unquote_plus, BucketEntity, EventRecord, ObjectEntity, S3Entity, StorageEvent};
pub use handler::{EventHandler, HandlerResponse, SUCCESS_BODY};
pub use secret::Secret;
pub use store::{ObjectStore, SecretStore};

/// Result type for handler operations.
pub type Result<T> = std::result::Result<T, HandlerError>;
