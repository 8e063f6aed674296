pub mod accounts;
pub mod collections;
pub mod health;
pub mod metrics;
pub mod registry;
pub mod root;
pub mod version;

pub use registry::{API_VERSION, RegisterRoute, RouteRegistry};
