pub mod error;
pub mod metrics;
pub mod period;

// Re-export the core types to provide a clean public API.
pub use error::CoreError;
pub use metrics::{BigCompany, CompanyMetrics, MetricsSnapshot, UserMetric};
pub use period::{DateRange, Period};
