pub mod concurrency;
pub mod format;

pub use concurrency::run_with_concurrency_settled;
