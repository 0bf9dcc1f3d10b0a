use super::identifiable::Identifiable;

/// Trait for entities whose name is unique regardless of case
///
/// The stored `name_hash` is the hash of the lowercased name and carries the
/// uniqueness constraint, so lookups by name go through the hash.
pub trait NameKeyed: Identifiable {
    /// The display name as registered
    fn name(&self) -> &str;

    /// Hash of the normalized (lowercased) name
    fn name_hash(&self) -> i64;
}
