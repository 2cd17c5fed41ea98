use serde::{Deserialize, Serialize};

use crate::error::FAError;

/// Axis-aligned search rectangle, fixed for one run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
	pub x_min: f64,
	pub x_max: f64,
	pub y_min: f64,
	pub y_max: f64,
}

impl Default for Bounds {
	fn default() -> Self {
		Self { x_min: -5.0, x_max: 5.0, y_min: -5.0, y_max: 5.0 }
	}
}

impl Bounds {
	/// Build and validate bounds from per-axis (min, max) pairs
	pub fn new(x: (f64, f64), y: (f64, f64)) -> Result<Self, FAError> {
		let b = Self { x_min: x.0, x_max: x.1, y_min: y.0, y_max: y.1 };
		b.validate()?;
		Ok(b)
	}

	/// Same square range on both axes
	pub fn square(min: f64, max: f64) -> Result<Self, FAError> {
		Self::new((min, max), (min, max))
	}

	pub fn validate(&self) -> Result<(), FAError> {
		check_axis('x', self.x_min, self.x_max)?;
		check_axis('y', self.y_min, self.y_max)
	}

	pub fn x_range(&self) -> f64 {
		self.x_max - self.x_min
	}

	pub fn y_range(&self) -> f64 {
		self.y_max - self.y_min
	}

	pub fn contains(&self, p: &firefly_objectives::Point) -> bool {
		p.x >= self.x_min && p.x <= self.x_max && p.y >= self.y_min && p.y <= self.y_max
	}
}

fn check_axis(axis: char, min: f64, max: f64) -> Result<(), FAError> {
	// max - min must not overflow
	if min.is_finite() && max.is_finite() && min <= max && (max - min).is_finite() {
		Ok(())
	} else {
		Err(FAError::InvalidBounds { axis, min, max })
	}
}
