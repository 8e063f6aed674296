pub mod get_live_minters;

pub use get_live_minters::get_live_minters;
