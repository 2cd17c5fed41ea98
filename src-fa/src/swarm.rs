use firefly_objectives::{ObjectiveFunction, Point};
use ndarray::Array1;

use crate::argmin;

/// Fireflies and their costs, paired by index: `costs[i] == f(positions[i])`
#[derive(Debug, Clone, PartialEq)]
pub struct Swarm {
	pub(crate) positions: Vec<Point>,
	pub(crate) costs: Array1<f64>,
}

impl Swarm {
	/// Score `positions` with the batched objective. `positions` is never empty.
	pub(crate) fn new<O: ObjectiveFunction + ?Sized>(positions: Vec<Point>, objective: &O) -> Self {
		let costs = objective.cost_batch(&positions);
		Self { positions, costs }
	}

	pub fn len(&self) -> usize {
		self.positions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.positions.is_empty()
	}

	pub fn positions(&self) -> &[Point] {
		&self.positions
	}

	pub fn costs(&self) -> &Array1<f64> {
		&self.costs
	}

	/// Index and cost of the brightest (lowest cost) firefly
	pub fn best(&self) -> (usize, f64) {
		argmin(&self.costs)
	}

	pub fn best_position(&self) -> Point {
		self.positions[self.best().0]
	}

	/// Mean and standard deviation of the costs
	pub fn cost_stats(&self) -> (f64, f64) {
		(self.costs.mean().unwrap_or(f64::NAN), self.costs.std(0.0))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use firefly_objectives::product;

	#[test]
	fn test_swarm_pairs_costs_with_positions() {
		let swarm = Swarm::new(vec![Point::new(1.0, 2.0), Point::new(-3.0, 3.0), Point::new(0.0, 0.0)], &product);
		assert_eq!(swarm.len(), 3);
		assert_eq!(swarm.costs().to_vec(), vec![2.0, -9.0, 0.0]);
		assert_eq!(swarm.best(), (1, -9.0));
		assert_eq!(swarm.best_position(), Point::new(-3.0, 3.0));
	}

	#[test]
	fn test_cost_stats() {
		let swarm = Swarm::new(vec![Point::new(1.0, 1.0), Point::new(1.0, 3.0)], &product);
		let (mean, std) = swarm.cost_stats();
		assert_eq!(mean, 2.0);
		assert_eq!(std, 1.0);
	}
}
