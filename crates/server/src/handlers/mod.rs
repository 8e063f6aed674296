pub mod accounts;
pub mod collections;
pub mod common;
pub mod creation_fee;
pub mod health;
pub mod live_minters;
pub mod metrics;
pub mod version;
