pub mod create_batch;
pub mod delete_batch;
pub mod exist_by_ids;
pub mod find_by_name_hash;
pub mod link_batch;
pub mod load_all;
pub mod load_batch;
pub mod load_linked;
pub mod pagination;
pub mod update_batch;

// Re-exports
pub use create_batch::*;
pub use delete_batch::*;
pub use exist_by_ids::*;
pub use find_by_name_hash::*;
pub use link_batch::*;
pub use load_all::*;
pub use load_batch::*;
pub use load_linked::*;
pub use pagination::*;
pub use update_batch::*;
