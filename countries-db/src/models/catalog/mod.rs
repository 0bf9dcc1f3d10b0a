pub mod hotel;
pub mod restaurant;

pub use hotel::*;
pub use restaurant::*;

use super::identifiable::Identifiable;
use super::name_keyed::NameKeyed;

/// # Documentation
/// Describes a catalog table: a uniquely named entry with one optional
/// free-text detail column, attachable to countries through a link table.
///
/// Hotels and restaurants share every storage operation through this trait;
/// the constants name the SQL objects each implementation lives in.
pub trait CatalogEntity: NameKeyed + Clone + Send + Sync + Unpin + 'static {
    /// Domain record returned to callers
    type Item: Send + 'static;

    /// Entity table name
    const TABLE: &'static str;

    /// Column holding the free-text detail
    const DETAIL_COLUMN: &'static str;

    /// Country association table
    const LINK_TABLE: &'static str;

    /// Foreign key column in [`Self::LINK_TABLE`] pointing at [`Self::TABLE`]
    const LINK_COLUMN: &'static str;

    /// Human readable singular used in messages
    const LABEL: &'static str;

    /// Build an entity, computing the name hash
    fn from_parts(id: i64, name: &str, detail: Option<&str>) -> Result<Self, String>;

    fn detail(&self) -> Option<&str>;

    fn into_item(self) -> Self::Item;

    /// Apply a patch; `None` keeps the current value
    fn patched(&self, name: Option<&str>, detail: Option<&str>) -> Result<Self, String> {
        Self::from_parts(
            self.get_id(),
            name.unwrap_or(self.name()),
            detail.or(self.detail()),
        )
    }
}
