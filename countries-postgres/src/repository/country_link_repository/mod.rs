pub mod repo_impl;
pub mod link_batch;
pub mod load_linked;

pub use repo_impl::CountryLinkRepositoryImpl;
