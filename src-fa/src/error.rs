use firefly_objectives::ObjectiveError;
use thiserror::Error;

/// Errors raised before a firefly run starts, or by misuse of the state machine
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FAError {
	#[error("invalid bounds on {axis} axis: min={min}, max={max} (need finite values with min <= max and a finite width)")]
	InvalidBounds { axis: char, min: f64, max: f64 },

	#[error("swarm size must be at least 1")]
	EmptySwarm,

	#[error("parameter {name} is out of range, got {value}")]
	InvalidParameter { name: &'static str, value: f64 },

	#[error("optimizer is not running (call initialize() first, or the run already converged)")]
	NotRunning,
}

impl From<ObjectiveError> for FAError {
	fn from(e: ObjectiveError) -> Self {
		match e {
			ObjectiveError::InvalidParameter { name, value } => FAError::InvalidParameter { name, value },
		}
	}
}
