//! Immutable codec registry keyed by type OIDs.
//!
//! The extension's types get their OIDs at `CREATE EXTENSION` time, so they
//! differ between databases. Driver glue queries the catalog once at startup,
//! builds one [`CodecRegistry`], and passes it wherever lookup is needed;
//! after that the registry is read-only. There is deliberately no process-wide
//! registration table.

use crate::error::{MalformedInputError, ValidationError};
use crate::wire::{VectorKind, VectorValue};

/// A mapping between type OIDs and wire kinds, built once at startup.
///
/// Postgres uses a single OID per type; text versus binary is a transfer
/// format flag, not a separate OID, so one entry per kind covers both
/// [`decode_binary`] and [`decode_text`].
///
/// [`decode_binary`]: CodecRegistry::decode_binary
/// [`decode_text`]: CodecRegistry::decode_text
///
/// # Example
///
/// ```
/// use vecwire::{CodecRegistry, VectorKind};
///
/// let mut registry = CodecRegistry::new();
/// registry.register(VectorKind::Vector, 16_400).unwrap();
/// registry.register(VectorKind::SparseVec, 16_406).unwrap();
///
/// assert_eq!(registry.kind_for(16_400), Some(VectorKind::Vector));
/// assert_eq!(registry.oid_for(VectorKind::SparseVec), Some(16_406));
/// assert_eq!(registry.kind_for(25), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodecRegistry {
    entries: Vec<(u32, VectorKind)>,
}

impl CodecRegistry {
    /// Create an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Register the OID for a wire kind.
    ///
    /// # Errors
    ///
    /// Returns an error if the OID or the kind is already registered.
    pub fn register(&mut self, kind: VectorKind, oid: u32) -> Result<(), ValidationError> {
        if self.entries.iter().any(|&(existing, _)| existing == oid) {
            return Err(ValidationError::DuplicateOid(oid));
        }
        if self.entries.iter().any(|&(_, existing)| existing == kind) {
            return Err(ValidationError::DuplicateKind(kind.type_name()));
        }
        self.entries.push((oid, kind));
        Ok(())
    }

    /// Look up the wire kind registered for an OID.
    #[must_use]
    pub fn kind_for(&self, oid: u32) -> Option<VectorKind> {
        self.entries
            .iter()
            .find(|&&(existing, _)| existing == oid)
            .map(|&(_, kind)| kind)
    }

    /// Look up the OID registered for a wire kind.
    #[must_use]
    pub fn oid_for(&self, kind: VectorKind) -> Option<u32> {
        self.entries
            .iter()
            .find(|&&(_, existing)| existing == kind)
            .map(|&(oid, _)| oid)
    }

    /// Decode a binary buffer whose column type is identified by OID.
    ///
    /// Returns `None` for an unregistered OID; [`Some`] of the decode result
    /// otherwise.
    #[must_use]
    pub fn decode_binary(
        &self,
        oid: u32,
        bytes: &[u8],
    ) -> Option<Result<VectorValue, MalformedInputError>> {
        self.kind_for(oid).map(|kind| VectorValue::decode_binary(kind, bytes))
    }

    /// Decode a text representation whose column type is identified by OID.
    ///
    /// Returns `None` for an unregistered OID; [`Some`] of the decode result
    /// otherwise.
    #[must_use]
    pub fn decode_text(
        &self,
        oid: u32,
        text: &str,
    ) -> Option<Result<VectorValue, MalformedInputError>> {
        self.kind_for(oid).map(|kind| VectorValue::decode_text(kind, text))
    }

    /// The number of registered kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no kinds are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Vector;
    use crate::wire::Codec;

    fn registry() -> CodecRegistry {
        let mut registry = CodecRegistry::new();
        registry.register(VectorKind::Vector, 100).unwrap();
        registry.register(VectorKind::HalfVec, 101).unwrap();
        registry.register(VectorKind::SparseVec, 102).unwrap();
        registry.register(VectorKind::Bit, 103).unwrap();
        registry
    }

    #[test]
    fn test_lookup_both_directions() {
        let registry = registry();
        assert_eq!(registry.len(), 4);
        assert_eq!(registry.kind_for(102), Some(VectorKind::SparseVec));
        assert_eq!(registry.oid_for(VectorKind::Bit), Some(103));
        assert_eq!(registry.kind_for(999), None);
        assert_eq!(CodecRegistry::new().oid_for(VectorKind::Vector), None);
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let mut registry = registry();
        assert_eq!(
            registry.register(VectorKind::Vector, 200).unwrap_err(),
            ValidationError::DuplicateKind("vector")
        );
        let mut empty = CodecRegistry::new();
        empty.register(VectorKind::Vector, 100).unwrap();
        assert_eq!(
            empty.register(VectorKind::HalfVec, 100).unwrap_err(),
            ValidationError::DuplicateOid(100)
        );
    }

    #[test]
    fn test_decode_by_oid() {
        let registry = registry();
        let vector = Vector::new(vec![1.5, 2.0]).unwrap();

        let value = registry.decode_binary(100, &vector.encode_binary()).unwrap().unwrap();
        assert_eq!(value, VectorValue::Vector(vector.clone()));

        let value = registry.decode_text(100, "[1.5,2]").unwrap().unwrap();
        assert_eq!(value, VectorValue::Vector(vector));

        assert!(registry.decode_binary(999, &[]).is_none());
        assert!(registry.decode_binary(100, &[0x00]).unwrap().is_err());
    }
}
