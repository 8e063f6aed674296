pub mod get_version;

pub use get_version::get_version;
