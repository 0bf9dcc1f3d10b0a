/// Trait for entities identified by a surrogate integer key
pub trait Identifiable {
    /// Returns the unique identifier of the entity
    ///
    /// Entities that have not been stored yet report `0`.
    fn get_id(&self) -> i64;
}
