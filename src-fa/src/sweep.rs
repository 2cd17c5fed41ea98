use firefly_objectives::ObjectiveFunction;
use rand::Rng;

use crate::FAConfig;
use crate::attract::attract;
use crate::bounds::Bounds;
use crate::swarm::Swarm;

/// Counters for one generation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepStats {
	/// Ordered pairs (i, j), i != j, that were compared
	pub comparisons: usize,
	/// Candidate evaluations (only when firefly i was strictly worse than j)
	pub evaluations: usize,
	/// Candidates that strictly improved their firefly and replaced it
	pub accepted: usize,
}

/// Run one generation over every ordered pair, ascending i then ascending j.
///
/// A worse firefly `i` tries to move toward a brighter `j`; the move is kept
/// only if it strictly lowers `i`'s cost, and it is written back immediately
/// so later pairs in the same sweep see it. A NaN or infinite candidate cost
/// never passes the `<` test.
pub fn sweep<O, R>(
	swarm: &mut Swarm,
	objective: &O,
	bounds: &Bounds,
	config: &FAConfig,
	rng: &mut R,
) -> SweepStats
where
	O: ObjectiveFunction + ?Sized,
	R: Rng + ?Sized,
{
	let n = swarm.len();
	let mut stats = SweepStats::default();
	for i in 0..n {
		for j in 0..n {
			if i == j {
				continue;
			}
			stats.comparisons += 1;
			if swarm.costs[i] > swarm.costs[j] {
				let candidate = attract(&swarm.positions[i], &swarm.positions[j], config, bounds, rng);
				let candidate_cost = objective.cost(&candidate);
				stats.evaluations += 1;
				if candidate_cost < swarm.costs[i] {
					log::trace!(
						"firefly {} -> {} toward {}: cost {:.6e} -> {:.6e}",
						i,
						candidate,
						j,
						swarm.costs[i],
						candidate_cost
					);
					swarm.positions[i] = candidate;
					swarm.costs[i] = candidate_cost;
					stats.accepted += 1;
				}
			}
		}
	}
	stats
}
