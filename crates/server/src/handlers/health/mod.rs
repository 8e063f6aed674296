pub mod get_health;

pub use get_health::get_health;
