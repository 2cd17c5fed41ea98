//! Objective functions for the firefly optimizer
//!
//! This library provides the 2-D geometry primitive and the cost functions the
//! optimizer minimizes:
//!
//! - **Product**: generic bivariate test function `x * y`
//! - **PotentialField**: obstacle repulsion plus goal attraction used to score
//!   candidate positions for robot path planning
//!
//! Any `Fn(&Point) -> f64` is also accepted as an objective.
//!
//! # Example
//!
//! ```rust
//! use firefly_objectives::*;
//!
//! let p = Point::new(2.0, -3.0);
//! assert_eq!(product(&p), -6.0);
//!
//! let objective: ObjectiveVariant = "product".parse().unwrap();
//! assert_eq!(objective.cost(&p), -6.0);
//!
//! let bounds = get_function_bounds("product");
//! assert_eq!(bounds, Some(vec![(-5.0, 5.0), (-5.0, 5.0)]));
//! ```

use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

pub mod error;
pub mod functions;
pub mod point;

pub use error::ObjectiveError;
pub use functions::*;
pub use point::{Point, distance};

/// A scalar cost over the plane. Lower is better.
pub trait ObjectiveFunction {
    fn cost(&self, p: &Point) -> f64;

    /// Reject parameters that make the cost meaningless
    fn validate(&self) -> Result<(), ObjectiveError> {
        Ok(())
    }

    /// Element-wise cost, result ordered like the input
    fn cost_batch(&self, points: &[Point]) -> Array1<f64> {
        points.iter().map(|p| self.cost(p)).collect()
    }
}

impl<F> ObjectiveFunction for F
where
    F: Fn(&Point) -> f64,
{
    fn cost(&self, p: &Point) -> f64 {
        self(p)
    }
}

impl ObjectiveFunction for PotentialField {
    fn cost(&self, p: &Point) -> f64 {
        PotentialField::cost(self, p)
    }

    fn validate(&self) -> Result<(), ObjectiveError> {
        PotentialField::validate(self)
    }
}

/// Objective selected once per run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ObjectiveVariant {
    /// f(x, y) = x * y
    Product,
    /// Obstacle repulsion plus goal attraction
    PotentialField(PotentialField),
}

impl ObjectiveVariant {
    pub fn name(&self) -> &'static str {
        match self {
            ObjectiveVariant::Product => "product",
            ObjectiveVariant::PotentialField(_) => "potential_field",
        }
    }
}

impl ObjectiveFunction for ObjectiveVariant {
    fn cost(&self, p: &Point) -> f64 {
        match self {
            ObjectiveVariant::Product => product(p),
            ObjectiveVariant::PotentialField(field) => field.cost(p),
        }
    }

    fn validate(&self) -> Result<(), ObjectiveError> {
        match self {
            ObjectiveVariant::Product => Ok(()),
            ObjectiveVariant::PotentialField(field) => field.validate(),
        }
    }
}

impl FromStr for ObjectiveVariant {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.to_lowercase();
        match t.as_str() {
            "product" | "xy" => Ok(ObjectiveVariant::Product),
            "potential_field" | "potential-field" | "potentialfield" | "robot" => {
                Ok(ObjectiveVariant::PotentialField(PotentialField::default()))
            }
            _ => Err(format!("unknown objective: {}", s)),
        }
    }
}

impl fmt::Display for ObjectiveVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Metadata for an objective: default domain and known optima
#[derive(Debug, Clone)]
pub struct FunctionMetadata {
    /// Function name
    pub name: String,
    /// Default bounds per axis (min, max)
    pub bounds: Vec<(f64, f64)>,
    /// Global minima locations and values on the default bounds
    pub global_minima: Vec<(Point, f64)>,
    /// Description of the function
    pub description: String,
}

/// Get metadata for all available objectives
pub fn get_function_metadata() -> HashMap<String, FunctionMetadata> {
    let mut metadata = HashMap::new();

    metadata.insert(
        "product".to_string(),
        FunctionMetadata {
            name: "product".to_string(),
            bounds: vec![(-5.0, 5.0); 2],
            global_minima: vec![(Point::new(5.0, -5.0), -25.0), (Point::new(-5.0, 5.0), -25.0)],
            description: "2D saddle x*y, minima at the anti-diagonal corners".to_string(),
        },
    );

    // Optimum depends on the obstacle/goal scene, no closed form.
    metadata.insert(
        "potential_field".to_string(),
        FunctionMetadata {
            name: "potential_field".to_string(),
            bounds: vec![(0.0, 50.0); 2],
            global_minima: vec![],
            description: "2D obstacle repulsion plus goal attraction for path planning".to_string(),
        },
    );

    metadata
}

/// Default bounds for a named objective
pub fn get_function_bounds(name: &str) -> Option<Vec<(f64, f64)>> {
    get_function_metadata().get(name).map(|m| m.bounds.clone())
}

/// Default 2D bounds for a named objective, or `fallback` on both axes
pub fn get_function_bounds_2d(name: &str, fallback: (f64, f64)) -> [(f64, f64); 2] {
    match get_function_bounds(name) {
        Some(b) if b.len() >= 2 => [b[0], b[1]],
        _ => [fallback, fallback],
    }
}
