use thiserror::Error;

/// Objective parameters that cannot produce a usable cost
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ObjectiveError {
    #[error("parameter {name} is out of range, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}
