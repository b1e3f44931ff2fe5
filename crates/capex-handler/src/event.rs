//! Object-storage notification events.
//!
//! Only the fields the handler reads are modelled; everything else in the
//! notification is ignored on deserialization and dropped on serialization.

use serde::{Deserialize, Serialize};

use crate::error::HandlerError;

/// A storage notification carrying one or more records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageEvent {
    #[serde(rename = "Records", default)]
    pub records: Vec<EventRecord>,
}

/// One object change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub s3: S3Entity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct S3Entity {
    pub bucket: BucketEntity,
    pub object: ObjectEntity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketEntity {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectEntity {
    /// Object key as delivered: `+` for spaces, other bytes percent-encoded.
    pub key: String,
}

impl StorageEvent {
    /// Build an event with a single record.
    pub fn single(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            records: vec![EventRecord {
                s3: S3Entity {
                    bucket: BucketEntity { name: bucket.into() },
                    object: ObjectEntity { key: key.into() },
                },
            }],
        }
    }

    /// The first record; the handler ignores any others.
    pub fn first_record(&self) -> Result<&EventRecord, HandlerError> {
        self.records.first().ok_or(HandlerError::MissingRecord)
    }
}

impl EventRecord {
    pub fn bucket(&self) -> &str {
        &self.s3.bucket.name
    }

    /// The decoded object key.
    pub fn object_key(&self) -> Result<String, HandlerError> {
        unquote_plus(&self.s3.object.key)
    }
}

/// Decode a form-encoded key: `+` becomes a space, then `%XX` escapes are
/// decoded as UTF-8.
pub fn unquote_plus(encoded: &str) -> Result<String, HandlerError> {
    let spaced = encoded.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| HandlerError::InvalidKey(format!("{}: {}", encoded, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOTIFICATION: &str = r#"{
        "Records": [
            {
                "eventVersion": "2.1",
                "eventSource": "aws:s3",
                "eventName": "ObjectCreated:Put",
                "s3": {
                    "s3SchemaVersion": "1.0",
                    "bucket": { "name": "reports", "arn": "arn:aws:s3:::reports" },
                    "object": { "key": "2025/my+report%281%29.json", "size": 42 }
                }
            }
        ]
    }"#;

    #[test]
    fn test_parse_notification() {
        let event: StorageEvent = serde_json::from_str(NOTIFICATION).unwrap();
        let record = event.first_record().unwrap();

        assert_eq!(record.bucket(), "reports");
        assert_eq!(record.object_key().unwrap(), "2025/my report(1).json");
    }

    #[test]
    fn test_unquote_plus() {
        assert_eq!(unquote_plus("a+b").unwrap(), "a b");
        assert_eq!(unquote_plus("a%2Bb").unwrap(), "a+b");
        assert_eq!(unquote_plus("caf%C3%A9").unwrap(), "café");
        assert_eq!(unquote_plus("plain/key.json").unwrap(), "plain/key.json");
    }

    #[test]
    fn test_unquote_plus_rejects_invalid_utf8() {
        assert!(matches!(
            unquote_plus("%FF%FE"),
            Err(HandlerError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_empty_event_has_no_record() {
        let event: StorageEvent = serde_json::from_str("{}").unwrap();
        assert!(matches!(event.first_record(), Err(HandlerError::MissingRecord)));
    }
}
