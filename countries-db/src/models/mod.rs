pub mod catalog;
pub mod country;
pub mod identifiable;
pub mod link;
pub mod name_keyed;

use countries_api::domain::{MAX_DETAIL_LEN, MAX_ISO_CODE_LEN, MAX_NAME_LEN};

/// Byte capacities for the bounded string fields. Limits are counted in
/// characters and a UTF-8 character takes at most 4 bytes.
pub const NAME_CAPACITY: usize = MAX_NAME_LEN * 4;
pub const ISO_CODE_CAPACITY: usize = MAX_ISO_CODE_LEN * 4;
pub const DETAIL_CAPACITY: usize = MAX_DETAIL_LEN * 4;

// Re-exports
pub use catalog::*;
pub use country::*;
pub use identifiable::*;
pub use link::*;
pub use name_keyed::*;
