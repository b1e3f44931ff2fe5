//! The storage event handler.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use capex_core::HandlerConfig;

use crate::event::StorageEvent;
use crate::store::{ObjectStore, SecretStore};
use crate::Result;

/// Body returned for every successfully processed event.
pub const SUCCESS_BODY: &str = "JSON processed successfully";

/// Response returned to the event dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl HandlerResponse {
    pub fn ok() -> Self {
        Self {
            status_code: 200,
            body: SUCCESS_BODY.to_string(),
        }
    }
}

/// Handles object-creation events with injected stores.
pub struct EventHandler<O, S> {
    objects: O,
    secrets: S,
    secret_name: String,
    region: String,
}

impl<O: ObjectStore, S: SecretStore> EventHandler<O, S> {
    pub fn new(objects: O, secrets: S, config: &HandlerConfig) -> Self {
        Self {
            objects,
            secrets,
            secret_name: config.secret_name.clone(),
            region: config.region.clone(),
        }
    }

    /// Process one event.
    ///
    /// Fails on the first error: secret lookup, missing record, object read,
    /// UTF-8 decoding or JSON parsing. The content is only logged, never
    /// transformed or written back.
    pub fn handle(&self, event: &StorageEvent) -> Result<HandlerResponse> {
        info!(
            "Storage event received: {}",
            serde_json::to_string(event).unwrap_or_default()
        );

        {
            let secret = self.secrets.get_secret(&self.secret_name, &self.region)?;
            debug!(
                "Retrieved secret '{}' from {} ({} bytes)",
                self.secret_name,
                self.region,
                secret.expose().len()
            );
        }

        let record = event.first_record()?;
        let bucket = record.bucket();
        let key = record.object_key()?;

        info!("Bucket: {}", bucket);
        info!("Key: {}", key);

        let body = self.objects.get_object(bucket, &key)?;
        let content = String::from_utf8(body)?;
        let data: serde_json::Value = serde_json::from_str(&content)?;

        info!("JSON content: {}", data);

        Ok(HandlerResponse::ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{HandlerError, SecretError, StorageError};
    use crate::store::{MemoryObjectStore, MemorySecretStore};

    fn secrets() -> MemorySecretStore {
        MemorySecretStore::new().with_secret("eu-north-1", "prod", "s3cr3t")
    }

    #[test]
    fn test_handle_valid_json() {
        let objects = MemoryObjectStore::new().with_object("inbox", "a b.json", r#"{"x": 1}"#);
        let handler = EventHandler::new(objects, secrets(), &HandlerConfig::default());

        let response = handler
            .handle(&StorageEvent::single("inbox", "a+b.json"))
            .unwrap();
        assert_eq!(response, HandlerResponse::ok());
        assert!(!format!("{:?}", response).contains("s3cr3t"));
    }

    #[test]
    fn test_response_json_shape() {
        let json = serde_json::to_value(HandlerResponse::ok()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "statusCode": 200, "body": "JSON processed successfully" })
        );
    }

    #[test]
    fn test_malformed_json_fails() {
        let objects = MemoryObjectStore::new().with_object("inbox", "bad.json", "{ nope");
        let handler = EventHandler::new(objects, secrets(), &HandlerConfig::default());

        let err = handler
            .handle(&StorageEvent::single("inbox", "bad.json"))
            .unwrap_err();
        assert!(matches!(err, HandlerError::MalformedContent(_)));
    }

    #[test]
    fn test_non_utf8_body_fails() {
        let objects = MemoryObjectStore::new().with_object("inbox", "bin", vec![0xff, 0xfe]);
        let handler = EventHandler::new(objects, secrets(), &HandlerConfig::default());

        let err = handler.handle(&StorageEvent::single("inbox", "bin")).unwrap_err();
        assert!(matches!(err, HandlerError::Utf8(_)));
    }

    #[test]
    fn test_secret_error_propagates_before_read() {
        let objects = MemoryObjectStore::new().with_object("inbox", "a.json", "{}");
        let handler = EventHandler::new(objects, MemorySecretStore::new(), &HandlerConfig::default());

        let err = handler.handle(&StorageEvent::single("inbox", "a.json")).unwrap_err();
        assert!(matches!(err, HandlerError::Secret(SecretError::NotFound { .. })));
        assert_eq!(err.to_string(), "secret 'prod' not found in eu-north-1");
    }

    #[test]
    fn test_missing_object_propagates() {
        let handler = EventHandler::new(MemoryObjectStore::new(), secrets(), &HandlerConfig::default());

        let err = handler.handle(&StorageEvent::single("inbox", "a.json")).unwrap_err();
        assert!(matches!(err, HandlerError::Storage(StorageError::NoSuchKey { .. })));
    }

    #[test]
    fn test_event_without_records() {
        let handler = EventHandler::new(MemoryObjectStore::new(), secrets(), &HandlerConfig::default());

        let err = handler.handle(&StorageEvent { records: vec![] }).unwrap_err();
        assert!(matches!(err, HandlerError::MissingRecord));
    }

    #[test]
    fn test_secret_name_and_region_from_config() {
        let config = HandlerConfig {
            secret_name: "staging".to_string(),
            region: "eu-west-1".to_string(),
            ..HandlerConfig::default()
        };
        let secrets = MemorySecretStore::new().with_secret("eu-west-1", "staging", "x");
        let objects = MemoryObjectStore::new().with_object("b", "k", "[]");

        let handler = EventHandler::new(&objects, &secrets, &config);
        assert!(handler.handle(&StorageEvent::single("b", "k")).is_ok());
    }
}
