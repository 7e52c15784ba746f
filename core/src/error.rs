use crate::types::Year;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid config field '{field}': {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("Run already finished at year {year}")]
    RunFinished { year: Year },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type SimResult<T> = Result<T, SimError>;
