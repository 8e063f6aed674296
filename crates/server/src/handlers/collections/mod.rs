//! Handlers for collection minter endpoints.

pub mod get_collection;
pub mod get_collections;

pub use get_collection::get_collection;
pub use get_collections::get_collections;
