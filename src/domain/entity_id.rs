//! Typed entity identifiers.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// A non-negative integer identifier tagged with the aggregate it belongs to.
///
/// The type parameter keeps ids of different aggregates apart at compile
/// time: a [`ResumeId`](crate::domain::ResumeId) cannot be handed to a user
/// repository.
///
/// # Example
///
/// ```
/// use resume_core::domain::ResumeId;
///
/// let id = ResumeId::new(42).unwrap();
/// assert_eq!(id.value(), 42);
/// assert!(ResumeId::new(-1).is_err());
/// ```
pub struct EntityId<T> {
    value: u64,
    _marker: PhantomData<fn() -> T>,
}

impl<T> EntityId<T> {
    /// Create an id from a signed integer, rejecting negative values.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NegativeId` if `value` is below zero.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        u64::try_from(value)
            .map(Self::from_u64)
            .map_err(|_| ValidationError::NegativeId(value))
    }

    /// Create an id from an unsigned integer.
    pub const fn from_u64(value: u64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Get the raw value.
    pub const fn value(&self) -> u64 {
        self.value
    }
}

impl<T> Clone for EntityId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for EntityId<T> {}

impl<T> PartialEq for EntityId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for EntityId<T> {}

impl<T> PartialOrd for EntityId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for EntityId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> Hash for EntityId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for EntityId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.value)
    }
}

impl<T> fmt::Display for EntityId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<u64> for EntityId<T> {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

/// Signed form accepted by the service layer. Fails above `i64::MAX`.
impl<T> TryFrom<EntityId<T>> for i64 {
    type Error = std::num::TryFromIntError;

    fn try_from(id: EntityId<T>) -> Result<Self, Self::Error> {
        i64::try_from(id.value)
    }
}

impl<T> Serialize for EntityId<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for EntityId<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = i64::deserialize(deserializer)?;
        EntityId::new(raw).map_err(serde::de::Error::custom)
    }
}
