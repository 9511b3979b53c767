//! Composite key construction.
//!
//! A composite key encodes an object type plus an ordered tuple of string
//! attributes into a single flat key. The encoding delimits every component
//! with `U+0000`, so the boundary between components is always recoverable:
//! `("device", ["active", "x"])` and `("device", ["activex", ""])` produce
//! distinct keys, and a key built under one partition attribute can never
//! collide with a key built under another.

use crate::error::{LedgerError, LedgerResult};

/// Component delimiter. No component may contain this character.
const DELIMITER: char = '\u{0}';

/// A deterministically encoded composite key.
///
/// Keys compare lexicographically on their encoded form. Because every
/// component is followed by the delimiter, the ordering groups all keys of
/// one `(object_type, leading attributes)` prefix into one contiguous range,
/// which is what makes prefix scans work.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CompositeKey(String);

impl CompositeKey {
    /// Builds a composite key from an object type and attribute tuple.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidKey`] if the object type is empty or if
    /// any component contains the `U+0000` delimiter.
    pub fn new(object_type: &str, attributes: &[&str]) -> LedgerResult<Self> {
        if object_type.is_empty() {
            return Err(LedgerError::InvalidKey {
                component: String::new(),
                reason: "object type must not be empty",
            });
        }
        check_component(object_type)?;
        for attribute in attributes {
            check_component(attribute)?;
        }

        let mut encoded = String::with_capacity(
            2 + object_type.len() + attributes.iter().map(|a| a.len() + 1).sum::<usize>(),
        );
        encoded.push(DELIMITER);
        encoded.push_str(object_type);
        encoded.push(DELIMITER);
        for attribute in attributes {
            encoded.push_str(attribute);
            encoded.push(DELIMITER);
        }
        Ok(Self(encoded))
    }

    /// Builds the encoded prefix covering every key whose object type and
    /// leading attributes match the given ones.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidKey`] under the same conditions as
    /// [`CompositeKey::new`].
    pub fn prefix(object_type: &str, attributes: &[&str]) -> LedgerResult<String> {
        Ok(Self::new(object_type, attributes)?.0)
    }

    /// Returns the encoded key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Wraps an already-encoded key read back from storage.
    pub(crate) const fn from_encoded(encoded: String) -> Self {
        Self(encoded)
    }
}

impl std::fmt::Display for CompositeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The delimiter is unprintable; render components slash-separated.
        let mut first = true;
        for component in self.0.split(DELIMITER).filter(|c| !c.is_empty()) {
            if !first {
                f.write_str("/")?;
            }
            f.write_str(component)?;
            first = false;
        }
        Ok(())
    }
}

fn check_component(component: &str) -> LedgerResult<()> {
    if component.contains(DELIMITER) {
        return Err(LedgerError::InvalidKey {
            component: component.to_string(),
            reason: "contains the key delimiter U+0000",
        });
    }
    Ok(())
}
