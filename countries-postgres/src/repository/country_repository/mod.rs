pub mod repo_impl;
pub mod create_batch;
pub mod create_missing;
pub mod delete_batch;
pub mod filter;
pub mod find_by_name_hash;
pub mod find_existing_name_hashes;
pub mod load_all;
pub mod load_batch;
pub mod load_page;
pub mod update_batch;

#[cfg(test)]
pub mod test_utils;

pub use repo_impl::CountryRepositoryImpl;
