use firefly_objectives::ObjectiveFunction;

use crate::{Bounds, FAConfig, FAError, FAReport, FireflyAlgorithm};

/// Convenience function in the shape of SciPy-style optimizers:
/// - `objective`: anything implementing `ObjectiveFunction`, closures included
/// - `bounds`: `[(x_min, x_max), (y_min, y_max)]`
/// - `config`: FA configuration
pub fn firefly_algorithm<O>(
	objective: &O,
	bounds: [(f64, f64); 2],
	config: FAConfig,
) -> Result<FAReport, FAError>
where
	O: ObjectiveFunction + ?Sized,
{
	let bounds = Bounds::new(bounds[0], bounds[1])?;
	let mut fa = FireflyAlgorithm::new(objective, bounds, config)?;
	fa.solve()
}
