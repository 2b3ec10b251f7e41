use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("'{0}' is not a recognized time period")]
    InvalidPeriodFormat(String),
}
