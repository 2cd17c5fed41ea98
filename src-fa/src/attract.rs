use firefly_objectives::{Point, distance};
use rand::Rng;

use crate::FAConfig;
use crate::bounds::Bounds;
use crate::clamp_to_bounds::clamp_to_bounds;

/// Attractiveness of a firefly seen from distance `r`: beta0 * exp(-gamma * r^2)
pub fn attractiveness(beta0: f64, gamma: f64, r: f64) -> f64 {
	beta0 * (-gamma * r * r).exp()
}

/// Move firefly `a` toward the brighter firefly `b`.
///
/// Draws exactly one `r ~ U[-1, 1]` from `rng`; both axes share it.
pub fn attract<R: Rng + ?Sized>(
	a: &Point,
	b: &Point,
	config: &FAConfig,
	bounds: &Bounds,
	rng: &mut R,
) -> Point {
	let r = rng.random_range(-1.0..=1.0);
	attract_with_draw(a, b, r, config, bounds)
}

/// Deterministic part of [`attract`] for a given draw `r`.
///
/// `new = a + beta * (b - a) + alpha0 * delta * (r - 0.5) * axis_range`, then clamped.
pub fn attract_with_draw(a: &Point, b: &Point, r: f64, config: &FAConfig, bounds: &Bounds) -> Point {
	let beta = attractiveness(config.beta0, config.gamma, distance(a, b));
	// same r on both axes, scaled by each axis' extent
	let walk = config.alpha0 * config.delta * (r - 0.5);
	let moved = Point::new(
		a.x + beta * (b.x - a.x) + walk * bounds.x_range(),
		a.y + beta * (b.y - a.y) + walk * bounds.y_range(),
	);
	clamp_to_bounds(moved, bounds)
}
