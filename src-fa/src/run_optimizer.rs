//! Entry point used by collaborators (CLI, plotting): positions in, positions out

use firefly_objectives::{ObjectiveVariant, Point};

use crate::{Bounds, FAConfig, FAError, FireflyAlgorithm};

/// Run a full firefly optimization and return the final positions.
///
/// `seed`, when given, overrides `config.seed`. Configuration errors are
/// reported before any sampling happens.
pub fn run_optimizer(
	bounds: &Bounds,
	objective: &ObjectiveVariant,
	mut config: FAConfig,
	seed: Option<u64>,
) -> Result<Vec<Point>, FAError> {
	if seed.is_some() {
		config.seed = seed;
	}
	let mut fa = FireflyAlgorithm::new(objective, *bounds, config)?;
	let report = fa.solve()?;
	Ok(report.population)
}
