pub mod get_creation_fee;

pub use get_creation_fee::get_creation_fee;
