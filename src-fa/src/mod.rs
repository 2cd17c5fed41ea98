//! Firefly Algorithm (FA) global optimizer for 2-D box-bounded problems
//!
//! Each firefly is a candidate point; its brightness is the inverse of its
//! cost. In every generation each firefly `i` is compared with every other
//! firefly `j`, and when `j` is strictly brighter, `i` tries a move toward it:
//!
//! `x_i' = x_i + beta0 * exp(-gamma * r_ij^2) * (x_j - x_i) + alpha0 * delta * (u - 0.5) * range`
//!
//! with a single `u ~ U[-1, 1]` shared by both axes. The move is clamped to the
//! bounds and kept only when it strictly lowers the firefly's cost.
//!
//! Supported features:
//! - Box constraints (clamped, never left)
//! - Seeded, reproducible runs from one `StdRng` per run
//! - Explicit state machine: `Uninitialized -> Running -> Converged`
//! - Optional per-generation callback (may stop early at a generation boundary)
//! - Any `ObjectiveFunction`, including plain `Fn(&Point) -> f64`

use std::fmt;

use firefly_objectives::{ObjectiveFunction, Point};
use ndarray::Array1;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

pub mod attract;
pub mod bounds;
pub mod clamp_to_bounds;
pub mod cli;
pub mod error;
pub mod firefly_algorithm;
pub mod init_random;
pub mod output;
pub mod run_optimizer;
pub mod swarm;
pub mod sweep;

pub use attract::{attract, attract_with_draw, attractiveness};
pub use bounds::Bounds;
pub use clamp_to_bounds::clamp_to_bounds;
pub use error::FAError;
pub use firefly_algorithm::firefly_algorithm;
pub use init_random::init_random;
pub use output::{sort_axes_independently, write_positions, write_positions_csv};
pub use run_optimizer::run_optimizer;
pub use swarm::Swarm;
pub use sweep::{SweepStats, sweep};

pub(crate) fn argmin(v: &Array1<f64>) -> (usize, f64) {
	let mut best_i = 0usize;
	let mut best_v = v[0];
	for (i, &val) in v.iter().enumerate() {
		if val < best_v || (best_v.is_nan() && !val.is_nan()) {
			best_v = val;
			best_i = i;
		}
	}
	(best_i, best_v)
}

/// Serializable run parameters (everything in `FAConfig` except the callback)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FAParams {
	pub generations: usize,
	pub swarm_size: usize,
	pub beta0: f64,
	pub gamma: f64,
	pub alpha0: f64,
	pub delta: f64,
	pub seed: Option<u64>,
}

impl Default for FAParams {
	fn default() -> Self {
		Self {
			generations: 100,
			swarm_size: 100,
			beta0: 1.0,
			gamma: 0.01,
			alpha0: 1.0,
			delta: 0.97,
			seed: None,
		}
	}
}

/// Configuration for the Firefly optimizer
pub struct FAConfig {
	/// Number of full pairwise sweeps
	pub generations: usize,
	/// Number of fireflies, at least 1
	pub swarm_size: usize,
	/// Attractiveness at distance 0
	pub beta0: f64,
	/// Light absorption coefficient
	pub gamma: f64,
	/// Random walk scale
	pub alpha0: f64,
	/// Random walk damping
	pub delta: f64,
	pub seed: Option<u64>,
	/// Optional per-generation callback (may stop early)
	pub callback: Option<Box<dyn FnMut(&FAIntermediate) -> CallbackAction>>,
}

impl Default for FAConfig {
	fn default() -> Self {
		FAParams::default().into()
	}
}

impl From<FAParams> for FAConfig {
	fn from(p: FAParams) -> Self {
		Self {
			generations: p.generations,
			swarm_size: p.swarm_size,
			beta0: p.beta0,
			gamma: p.gamma,
			alpha0: p.alpha0,
			delta: p.delta,
			seed: p.seed,
			callback: None,
		}
	}
}

impl fmt::Debug for FAConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FAConfig")
			.field("params", &self.params())
			.field("callback", &self.callback.as_ref().map(|_| "<fn>"))
			.finish()
	}
}

impl FAConfig {
	pub fn params(&self) -> FAParams {
		FAParams {
			generations: self.generations,
			swarm_size: self.swarm_size,
			beta0: self.beta0,
			gamma: self.gamma,
			alpha0: self.alpha0,
			delta: self.delta,
			seed: self.seed,
		}
	}

	/// Reject configurations that cannot start a run
	pub fn validate(&self) -> Result<(), FAError> {
		if self.swarm_size < 1 {
			return Err(FAError::EmptySwarm);
		}
		for (name, value) in [
			("beta0", self.beta0),
			("gamma", self.gamma),
			("alpha0", self.alpha0),
			("delta", self.delta),
		] {
			if !value.is_finite() {
				return Err(FAError::InvalidParameter { name, value });
			}
		}
		Ok(())
	}
}

/// Fluent builder for `FAConfig`
pub struct FAConfigBuilder {
	cfg: FAConfig,
}

impl Default for FAConfigBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl FAConfigBuilder {
	pub fn new() -> Self {
		Self { cfg: FAConfig::default() }
	}
	pub fn generations(mut self, v: usize) -> Self {
		self.cfg.generations = v;
		self
	}
	pub fn swarm_size(mut self, v: usize) -> Self {
		self.cfg.swarm_size = v;
		self
	}
	pub fn beta0(mut self, v: f64) -> Self {
		self.cfg.beta0 = v;
		self
	}
	pub fn gamma(mut self, v: f64) -> Self {
		self.cfg.gamma = v;
		self
	}
	pub fn alpha0(mut self, v: f64) -> Self {
		self.cfg.alpha0 = v;
		self
	}
	pub fn delta(mut self, v: f64) -> Self {
		self.cfg.delta = v;
		self
	}
	pub fn seed(mut self, v: u64) -> Self {
		self.cfg.seed = Some(v);
		self
	}
	pub fn callback(mut self, cb: Box<dyn FnMut(&FAIntermediate) -> CallbackAction>) -> Self {
		self.cfg.callback = Some(cb);
		self
	}
	pub fn build(self) -> FAConfig {
		self.cfg
	}
}

/// Result of a firefly run
#[derive(Clone)]
pub struct FAReport {
	/// Brightest firefly
	pub x: Point,
	pub fun: f64,
	/// False when no firefly reached a finite cost
	pub success: bool,
	pub message: String,
	/// Generations completed
	pub nit: usize,
	/// Objective evaluations, initial scoring included
	pub nfev: usize,
	pub population: Vec<Point>,
	pub population_costs: Array1<f64>,
}

impl fmt::Debug for FAReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FAReport")
			.field("x", &self.x)
			.field("fun", &self.fun)
			.field("success", &self.success)
			.field("message", &self.message)
			.field("nit", &self.nit)
			.field("nfev", &self.nfev)
			.field("population", &format!("len={}", self.population.len()))
			.finish()
	}
}

/// Information passed to callback after each generation
pub struct FAIntermediate {
	pub x: Point,
	pub fun: f64,
	pub convergence: f64, // measured as std(costs)
	pub iter: usize,
	pub accepted: usize,
}

/// Action returned by callback
pub enum CallbackAction {
	Continue,
	Stop,
}

/// Lifecycle of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwarmState {
	Uninitialized,
	/// `generation` sweeps completed so far
	Running { generation: usize },
	Converged,
}

/// Firefly optimizer over a 2-D box
pub struct FireflyAlgorithm<'a, O>
where
	O: ObjectiveFunction + ?Sized,
{
	objective: &'a O,
	bounds: Bounds,
	config: FAConfig,
	state: SwarmState,
	swarm: Option<Swarm>,
	rng: Option<StdRng>,
	nit: usize,
	nfev: usize,
	stopped_by_callback: bool,
}

impl<'a, O> FireflyAlgorithm<'a, O>
where
	O: ObjectiveFunction + ?Sized,
{
	/// Create an optimizer minimizing `objective` over `bounds`
	pub fn new(objective: &'a O, bounds: Bounds, config: FAConfig) -> Result<Self, FAError> {
		bounds.validate()?;
		config.validate()?;
		objective.validate()?;
		Ok(Self {
			objective,
			bounds,
			config,
			state: SwarmState::Uninitialized,
			swarm: None,
			rng: None,
			nit: 0,
			nfev: 0,
			stopped_by_callback: false,
		})
	}

	pub fn config(&self) -> &FAConfig {
		&self.config
	}

	/// Mutable access to configuration, re-validated by `initialize`
	pub fn config_mut(&mut self) -> &mut FAConfig {
		&mut self.config
	}

	pub fn bounds(&self) -> &Bounds {
		&self.bounds
	}

	pub fn state(&self) -> SwarmState {
		self.state
	}

	/// Current swarm, available once initialized
	pub fn swarm(&self) -> Option<&Swarm> {
		self.swarm.as_ref()
	}

	/// Final swarm, only once the run has converged
	pub fn final_swarm(&self) -> Option<&Swarm> {
		match self.state {
			SwarmState::Converged => self.swarm.as_ref(),
			_ => None,
		}
	}

	pub fn nfev(&self) -> usize {
		self.nfev
	}

	/// Seed the generator, sample and score the swarm. Restarts any previous run.
	pub fn initialize(&mut self) -> Result<(), FAError> {
		self.bounds.validate()?;
		self.config.validate()?;
		self.objective.validate()?;

		let mut rng: StdRng = match self.config.seed {
			Some(s) => StdRng::seed_from_u64(s),
			None => {
				let mut thread_rng = rand::rng();
				StdRng::from_rng(&mut thread_rng)
			}
		};

		let positions = init_random(&self.bounds, self.config.swarm_size, &mut rng)?;
		let swarm = Swarm::new(positions, self.objective);
		let (best_idx, best_f) = swarm.best();
		let (mean, std) = swarm.cost_stats();

		log::info!(
			"FA init: swarm={}, generations={}, beta0={}, gamma={}, alpha0={}, delta={}, seed={:?}",
			self.config.swarm_size,
			self.config.generations,
			self.config.beta0,
			self.config.gamma,
			self.config.alpha0,
			self.config.delta,
			self.config.seed
		);
		log::debug!(
			"FA initial swarm: best_f={:.6e} at index {}, mean={:.6e}, std={:.6e}",
			best_f,
			best_idx,
			mean,
			std
		);

		self.nfev = swarm.len();
		self.nit = 0;
		self.stopped_by_callback = false;
		self.swarm = Some(swarm);
		self.rng = Some(rng);
		self.state = if self.config.generations == 0 {
			SwarmState::Converged
		} else {
			SwarmState::Running { generation: 0 }
		};
		Ok(())
	}

	/// Run one generation. Only valid while `Running`.
	pub fn step(&mut self) -> Result<SweepStats, FAError> {
		let generation = match self.state {
			SwarmState::Running { generation } => generation,
			_ => return Err(FAError::NotRunning),
		};
		let (Some(swarm), Some(rng)) = (self.swarm.as_mut(), self.rng.as_mut()) else {
			return Err(FAError::NotRunning);
		};

		let stats = sweep(swarm, self.objective, &self.bounds, &self.config, rng);
		self.nfev += stats.evaluations;
		self.nit = generation + 1;

		let (_, best_f) = swarm.best();
		let (mean, std) = swarm.cost_stats();
		log::debug!(
			"FA gen {:4}  best_f={:.6e}  mean={:.6e}  std={:.3e}  accepted={}/{}",
			self.nit,
			best_f,
			mean,
			std,
			stats.accepted,
			stats.evaluations
		);

		self.state = if self.nit >= self.config.generations {
			SwarmState::Converged
		} else {
			SwarmState::Running { generation: self.nit }
		};
		Ok(stats)
	}

	/// Run all remaining generations and return a report
	pub fn solve(&mut self) -> Result<FAReport, FAError> {
		if self.state == SwarmState::Uninitialized {
			self.initialize()?;
		}

		while let SwarmState::Running { .. } = self.state {
			let stats = self.step()?;

			if let Some(ref mut cb) = self.config.callback {
				let Some(swarm) = self.swarm.as_ref() else {
					return Err(FAError::NotRunning);
				};
				let (best_idx, best_f) = swarm.best();
				let (_, std) = swarm.cost_stats();
				let intermediate = FAIntermediate {
					x: swarm.positions()[best_idx],
					fun: best_f,
					convergence: std,
					iter: self.nit,
					accepted: stats.accepted,
				};
				if let CallbackAction::Stop = cb(&intermediate) {
					self.stopped_by_callback = true;
					self.state = SwarmState::Converged;
				}
			}
		}

		self.report()
	}

	fn report(&self) -> Result<FAReport, FAError> {
		let Some(swarm) = self.final_swarm() else {
			return Err(FAError::NotRunning);
		};
		let (best_idx, best_f) = swarm.best();
		let message = if self.stopped_by_callback {
			format!("Optimization stopped by callback after {} generations", self.nit)
		} else {
			format!("Completed {} generations", self.nit)
		};
		log::info!("FA finished: {}, best_f={:.6e}, nfev={}", message, best_f, self.nfev);

		Ok(FAReport {
			x: swarm.positions()[best_idx],
			fun: best_f,
			success: best_f.is_finite(),
			message,
			nit: self.nit,
			nfev: self.nfev,
			population: swarm.positions().to_vec(),
			population_costs: swarm.costs().clone(),
		})
	}
}
