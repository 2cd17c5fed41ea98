use firefly_objectives::Point;
use rand::Rng;

use crate::bounds::Bounds;
use crate::error::FAError;

/// Sample `n` points uniformly over the closed rectangle `bounds`.
///
/// x is drawn before y for every point, so a seeded generator always yields
/// the same swarm.
pub fn init_random<R: Rng + ?Sized>(
	bounds: &Bounds,
	n: usize,
	rng: &mut R,
) -> Result<Vec<Point>, FAError> {
	if n == 0 {
		return Err(FAError::EmptySwarm);
	}
	bounds.validate()?;
	let mut pop = Vec::with_capacity(n);
	for _ in 0..n {
		let x = rng.random_range(bounds.x_min..=bounds.x_max);
		let y = rng.random_range(bounds.y_min..=bounds.y_max);
		pop.push(Point::new(x, y));
	}
	Ok(pop)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn test_init_random_within_bounds() {
		let b = Bounds::new((0.0, 50.0), (-3.0, -1.0)).unwrap();
		let mut rng = StdRng::seed_from_u64(7);
		let pop = init_random(&b, 200, &mut rng).unwrap();
		assert_eq!(pop.len(), 200);
		for p in &pop {
			assert!(b.contains(p), "{} outside bounds", p);
		}
	}

	#[test]
	fn test_init_random_is_seeded() {
		let b = Bounds::default();
		let a = init_random(&b, 10, &mut StdRng::seed_from_u64(42)).unwrap();
		let c = init_random(&b, 10, &mut StdRng::seed_from_u64(42)).unwrap();
		assert_eq!(a, c);
	}

	#[test]
	fn test_init_random_zero_rejected() {
		let mut rng = StdRng::seed_from_u64(1);
		assert_eq!(init_random(&Bounds::default(), 0, &mut rng), Err(FAError::EmptySwarm));
	}

	#[test]
	fn test_init_random_degenerate_axis() {
		let b = Bounds::new((2.0, 2.0), (0.0, 1.0)).unwrap();
		let mut rng = StdRng::seed_from_u64(3);
		let pop = init_random(&b, 5, &mut rng).unwrap();
		assert!(pop.iter().all(|p| p.x == 2.0));
	}
}
