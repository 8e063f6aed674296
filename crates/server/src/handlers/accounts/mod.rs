//! Handlers for owner-scoped endpoints.

pub mod get_account_collections;
pub mod get_account_minters;

pub use get_account_collections::get_account_collections;
pub use get_account_minters::get_account_minters;
