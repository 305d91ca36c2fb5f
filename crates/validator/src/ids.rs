//! Document identifier types checked by the `id` and `ref` rules.
//!
//! [`ObjectId`] is the 12-byte identifier layout used by document stores:
//! a 4-byte big-endian timestamp, 5 process-unique random bytes and a 3-byte
//! counter. [`DbRef`] points at a document in another collection.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use smallvec::SmallVec;

use crate::core::value::{ToValue, Value};

/// Byte length of a well-formed [`ObjectId`].
pub const OBJECT_ID_LEN: usize = 12;

static PROCESS_UNIQUE: LazyLock<[u8; 5]> = LazyLock::new(rand::random);

static COUNTER: LazyLock<AtomicU32> = LazyLock::new(|| AtomicU32::new(rand::random()));

// ============================================================================
// ERRORS
// ============================================================================

/// Errors from parsing an [`ObjectId`] out of text.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ObjectIdError {
    /// The text does not encode exactly 12 bytes.
    #[error("object id must be {expected} hex characters, got {actual}")]
    BadLength {
        /// Required number of hex characters.
        expected: usize,
        /// Number of characters supplied.
        actual: usize,
    },

    /// The text is not hexadecimal.
    #[error("object id is not valid hex: {0}")]
    BadHex(#[from] hex::FromHexError),
}

// ============================================================================
// OBJECT ID
// ============================================================================

/// A content-addressable document identifier.
///
/// The byte buffer is not forced to 12 bytes: ids arriving from outside can
/// be any length, which is exactly what the `id` rule reports on. Use
/// [`ObjectId::is_valid`] to check the shape. The default value is empty and
/// counts as absent for `required`.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId {
    bytes: SmallVec<[u8; OBJECT_ID_LEN]>,
}

impl ObjectId {
    /// Generates a fresh, well-formed id.
    #[must_use]
    pub fn new() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as u32)
            .unwrap_or_default();
        let count = COUNTER.fetch_add(1, Ordering::Relaxed);

        let mut bytes = SmallVec::new();
        bytes.extend_from_slice(&secs.to_be_bytes());
        bytes.extend_from_slice(&*PROCESS_UNIQUE);
        bytes.extend_from_slice(&count.to_be_bytes()[1..]);
        Self { bytes }
    }

    /// Wraps raw bytes without checking their length.
    pub fn from_bytes(bytes: impl AsRef<[u8]>) -> Self {
        Self {
            bytes: SmallVec::from_slice(bytes.as_ref()),
        }
    }

    /// Parses a 24-character hex string.
    pub fn parse_str(s: &str) -> Result<Self, ObjectIdError> {
        if s.len() != OBJECT_ID_LEN * 2 {
            return Err(ObjectIdError::BadLength {
                expected: OBJECT_ID_LEN * 2,
                actual: s.len(),
            });
        }
        let bytes = hex::decode(s)?;
        Ok(Self::from_bytes(bytes))
    }

    /// Returns true if the id has exactly 12 bytes.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.bytes.len() == OBJECT_ID_LEN
    }

    /// Returns true if the id holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Seconds since the Unix epoch encoded in a well-formed id.
    #[must_use]
    pub fn timestamp(&self) -> Option<u32> {
        if !self.is_valid() {
            return None;
        }
        let mut secs = [0_u8; 4];
        secs.copy_from_slice(&self.bytes[..4]);
        Some(u32::from_be_bytes(secs))
    }

    /// Lowercase hex encoding of the bytes.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId(\"{}\")", self.to_hex())
    }
}

impl FromStr for ObjectId {
    type Err = ObjectIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl ToValue for ObjectId {
    fn to_value(&self) -> Value<'_> {
        Value::ObjectId(self)
    }
}

// ============================================================================
// DATABASE REFERENCE
// ============================================================================

/// The id a [`DbRef`] points at.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RefId {
    /// A generated document id; checked for shape by the `ref` rule.
    ObjectId(ObjectId),
    /// A natural string key.
    Text(String),
    /// A natural integer key.
    Int(i64),
}

impl From<ObjectId> for RefId {
    fn from(id: ObjectId) -> Self {
        Self::ObjectId(id)
    }
}

impl From<String> for RefId {
    fn from(key: String) -> Self {
        Self::Text(key)
    }
}

impl From<&str> for RefId {
    fn from(key: &str) -> Self {
        Self::Text(key.to_owned())
    }
}

impl From<i64> for RefId {
    fn from(key: i64) -> Self {
        Self::Int(key)
    }
}

/// A reference to a document in another collection.
///
/// Only the shape is validated; whether the target exists is up to the
/// caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DbRef {
    /// Target collection name.
    pub collection: String,
    /// Target document id.
    pub id: Option<RefId>,
    /// Target database, when it differs from the referencing document's.
    pub database: Option<String>,
}

impl DbRef {
    /// Creates a reference to `id` in `collection`.
    pub fn new(collection: impl Into<String>, id: impl Into<RefId>) -> Self {
        Self {
            collection: collection.into(),
            id: Some(id.into()),
            database: None,
        }
    }

    /// Sets the target database.
    #[must_use = "builder methods must be chained or built"]
    pub fn in_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Returns true if every component is empty.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.collection.is_empty()
            && self.id.is_none()
            && self.database.as_deref().is_none_or(str::is_empty)
    }
}

impl ToValue for DbRef {
    fn to_value(&self) -> Value<'_> {
        Value::DbRef(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn generated_ids_are_well_formed_and_distinct() {
        let a = ObjectId::new();
        let b = ObjectId::new();

        assert!(a.is_valid());
        assert!(b.is_valid());
        assert_ne!(a, b);
        assert!(a.timestamp().is_some_and(|secs| secs > 0));
    }

    #[test]
    fn hex_round_trip() {
        let id = ObjectId::new();
        let parsed: ObjectId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(
            ObjectId::parse_str("abcd"),
            Err(ObjectIdError::BadLength {
                expected: 24,
                actual: 4
            })
        );
        assert!(matches!(
            ObjectId::parse_str("zzzzzzzzzzzzzzzzzzzzzzzz"),
            Err(ObjectIdError::BadHex(_))
        ));
    }

    #[test]
    fn short_ids_are_kept_but_invalid() {
        let id = ObjectId::from_bytes("1234");
        assert!(!id.is_valid());
        assert!(!id.is_empty());
        assert_eq!(id.timestamp(), None);
        assert!(ObjectId::default().is_empty());
    }

    #[test]
    fn db_ref_zero() {
        assert!(DbRef::default().is_zero());
        assert!(DbRef::default().in_database("").is_zero());
        assert!(!DbRef::new("users", ObjectId::new()).is_zero());
        assert!(!DbRef::default().in_database("archive").is_zero());
    }
}
