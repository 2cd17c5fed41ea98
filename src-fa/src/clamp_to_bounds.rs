use firefly_objectives::Point;

use crate::bounds::Bounds;

/// Clip each coordinate of `p` into its axis range, independently.
/// NaN coordinates pass through unchanged.
pub fn clamp_to_bounds(p: Point, bounds: &Bounds) -> Point {
	let mut q = p;
	if q.x < bounds.x_min {
		q.x = bounds.x_min;
	}
	if q.x > bounds.x_max {
		q.x = bounds.x_max;
	}
	if q.y < bounds.y_min {
		q.y = bounds.y_min;
	}
	if q.y > bounds.y_max {
		q.y = bounds.y_max;
	}
	q
}
