use firefly_fa::{Bounds, FAConfigBuilder, FireflyAlgorithm, SwarmState, init_random, run_optimizer};
use firefly_objectives::{ObjectiveFunction, ObjectiveVariant, Point, PotentialField, product};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_fa_swarm_stays_in_bounds_every_generation() {
	let bounds = Bounds::new((-2.0, 3.0), (10.0, 11.0)).unwrap();
	// large walk so that many candidates need clamping
	let config = FAConfigBuilder::new().seed(17).swarm_size(15).generations(20).alpha0(3.0).build();
	let mut fa = FireflyAlgorithm::new(&product, bounds, config).unwrap();
	fa.initialize().unwrap();

	let mut generations = 0;
	while let SwarmState::Running { .. } = fa.state() {
		fa.step().unwrap();
		generations += 1;
		for p in fa.swarm().unwrap().positions() {
			assert!(bounds.contains(p), "{} left the box after generation {}", p, generations);
		}
	}
	assert_eq!(generations, 20);
}

#[test]
fn test_fa_costs_never_worsen() {
	let field = PotentialField::new(Point::new(25.0, 25.0), 5.0, Point::new(45.0, 45.0));
	let bounds = Bounds::square(0.0, 50.0).unwrap();
	let config = FAConfigBuilder::new().seed(3).swarm_size(25).generations(15).build();
	let mut fa = FireflyAlgorithm::new(&field, bounds, config).unwrap();
	fa.initialize().unwrap();

	let mut before = fa.swarm().unwrap().costs().clone();
	while let SwarmState::Running { generation } = fa.state() {
		fa.step().unwrap();
		let after = fa.swarm().unwrap().costs().clone();
		for (i, (b, a)) in before.iter().zip(after.iter()).enumerate() {
			assert!(a <= b, "firefly {} got worse in generation {}: {} -> {}", i, generation + 1, b, a);
		}
		before = after;
	}
}

#[test]
fn test_fa_same_seed_is_bit_identical() {
	let bounds = Bounds::square(-5.0, 5.0).unwrap();
	let objective = ObjectiveVariant::Product;
	let run = |seed: u64| {
		let config = FAConfigBuilder::new().swarm_size(12).generations(10).build();
		run_optimizer(&bounds, &objective, config, Some(seed)).unwrap()
	};
	let a = run(2025);
	let b = run(2025);
	assert_eq!(a.len(), b.len());
	for (p, q) in a.iter().zip(b.iter()) {
		assert_eq!(p.x.to_bits(), q.x.to_bits());
		assert_eq!(p.y.to_bits(), q.y.to_bits());
	}
	assert_ne!(a, run(2026), "different seeds should give different swarms");
}

#[test]
fn test_fa_zero_generations_returns_initial_swarm() {
	let bounds = Bounds::new((0.0, 50.0), (-1.0, 1.0)).unwrap();
	let objective = ObjectiveVariant::PotentialField(PotentialField::default());
	let config = FAConfigBuilder::new().seed(88).swarm_size(9).generations(0).build();
	let mut fa = FireflyAlgorithm::new(&objective, bounds, config).unwrap();
	let report = fa.solve().unwrap();

	let mut rng = StdRng::seed_from_u64(88);
	let expected = init_random(&bounds, 9, &mut rng).unwrap();
	assert_eq!(report.population, expected);
	assert_eq!(report.population_costs, objective.cost_batch(&expected));
	assert_eq!(report.nit, 0);
	assert_eq!(report.nfev, 9);
}

#[test]
fn test_fa_single_firefly_never_moves() {
	let bounds = Bounds::default();
	let config = FAConfigBuilder::new().seed(4).swarm_size(1).generations(5).build();
	let mut fa = FireflyAlgorithm::new(&product, bounds, config).unwrap();
	fa.initialize().unwrap();
	let start = fa.swarm().unwrap().positions().to_vec();
	let report = fa.solve().unwrap();
	assert_eq!(report.population, start);
	assert_eq!(report.nit, 5);
	assert_eq!(report.nfev, 1);
}

#[test]
fn test_fa_degenerate_bounds_pin_every_firefly() {
	let bounds = Bounds::new((2.0, 2.0), (-3.0, -3.0)).unwrap();
	let config = FAConfigBuilder::new().seed(6).swarm_size(4).generations(3).build();
	let positions = run_optimizer(&bounds, &ObjectiveVariant::Product, config, None).unwrap();
	assert!(positions.iter().all(|p| *p == Point::new(2.0, -3.0)));
}
