use sha2::{Digest, Sha256};

/// Compute the content fingerprint of a file: lowercase hex SHA-256 over
/// the exact byte sequence. Deterministic and independent of file name or
/// metadata; the persistence collaborator uses it for deduplication and
/// audit.
pub fn fingerprint(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
