use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Cannot resolve a date range for {0}")]
    UnresolvablePeriod(String),
}
