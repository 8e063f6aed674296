pub mod middleware;
pub mod registry;

pub use middleware::metrics_middleware;
pub use registry::{MetricsGatherError, gather_metrics, init, is_initialized};
