//! Command-line interface definitions for the firefly binaries

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use firefly_objectives::{ObjectiveFunction, ObjectiveVariant, Point, PotentialField};
use serde::{Deserialize, Serialize};

use crate::{Bounds, FAParams};

/// Everything needed to reproduce a run, as stored in a `--config` JSON file
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunDescription {
	pub bounds: Bounds,
	pub objective: ObjectiveVariant,
	#[serde(default)]
	pub params: FAParams,
}

impl Default for RunDescription {
	fn default() -> Self {
		Self { bounds: Bounds::default(), objective: ObjectiveVariant::Product, params: FAParams::default() }
	}
}

/// Read a run description from a JSON file
pub fn load_run_description(path: &Path) -> Result<RunDescription, Box<dyn std::error::Error>> {
	let content = fs::read_to_string(path)?;
	let desc: RunDescription = serde_json::from_str(&content)?;
	desc.bounds.validate()?;
	desc.objective.validate()?;
	Ok(desc)
}

/// Run the Firefly Algorithm on a generic test function or a robot potential field.
/// Flags override values read from `--config`.
#[derive(Parser, Debug, Clone)]
#[command(name = "run_firefly", author, about, long_about = None)]
pub struct Args {
	/// JSON run description (bounds, objective, params)
	#[arg(short, long)]
	pub config: Option<PathBuf>,

	/// Objective: product | potential-field
	#[arg(long)]
	pub objective: Option<ObjectiveVariant>,

	/// X-axis bounds (min,max)
	#[arg(long, allow_hyphen_values = true, value_parser = parse_pair)]
	pub x_bounds: Option<(f64, f64)>,

	/// Y-axis bounds (min,max)
	#[arg(long, allow_hyphen_values = true, value_parser = parse_pair)]
	pub y_bounds: Option<(f64, f64)>,

	/// Number of generations (full pairwise sweeps)
	#[arg(short, long)]
	pub generations: Option<usize>,

	/// Number of fireflies
	#[arg(short = 'n', long, value_parser = parse_strictly_positive_usize)]
	pub swarm_size: Option<usize>,

	/// Attractiveness at distance 0
	#[arg(long, allow_hyphen_values = true, value_parser = parse_finite_f64)]
	pub beta0: Option<f64>,

	/// Light absorption coefficient
	#[arg(long, allow_hyphen_values = true, value_parser = parse_finite_f64)]
	pub gamma: Option<f64>,

	/// Random walk scale
	#[arg(long, allow_hyphen_values = true, value_parser = parse_finite_f64)]
	pub alpha0: Option<f64>,

	/// Random walk damping
	#[arg(long, allow_hyphen_values = true, value_parser = parse_finite_f64)]
	pub delta: Option<f64>,

	/// Random seed for a reproducible run
	#[arg(short, long)]
	pub seed: Option<u64>,

	/// Obstacle center (x,y) for the potential field
	#[arg(long, allow_hyphen_values = true, value_parser = parse_pair)]
	pub obstacle: Option<(f64, f64)>,

	/// Obstacle radius for the potential field
	#[arg(long, value_parser = parse_strictly_positive_f64)]
	pub obstacle_radius: Option<f64>,

	/// Goal position (x,y) for the potential field
	#[arg(long, allow_hyphen_values = true, value_parser = parse_pair)]
	pub goal: Option<(f64, f64)>,

	/// Goal attraction weight K2 for the potential field
	#[arg(long, allow_hyphen_values = true, value_parser = parse_finite_f64)]
	pub goal_weight: Option<f64>,

	/// Write final positions to this CSV file instead of stdout
	#[arg(short, long)]
	pub output: Option<PathBuf>,

	/// Sort x and y independently before output (path ordering for plotting)
	#[arg(long)]
	pub sort: bool,
}

impl Args {
	/// Merge `--config` (if any) with the command-line overrides
	pub fn run_description(&self) -> Result<RunDescription, Box<dyn std::error::Error>> {
		let mut desc = match &self.config {
			Some(path) => load_run_description(path)?,
			None => RunDescription::default(),
		};

		if let Some(objective) = self.objective {
			// keep a field read from the config file when only the kind is repeated
			desc.objective = match (objective, desc.objective) {
				(ObjectiveVariant::PotentialField(_), ObjectiveVariant::PotentialField(f)) => {
					ObjectiveVariant::PotentialField(f)
				}
				(o, _) => {
					// the robot scene lives on [0,50]^2 unless told otherwise
					if self.config.is_none() && matches!(o, ObjectiveVariant::PotentialField(_)) {
						desc.bounds = Bounds { x_min: 0.0, x_max: 50.0, y_min: 0.0, y_max: 50.0 };
					}
					o
				}
			};
		}

		if let ObjectiveVariant::PotentialField(ref mut field) = desc.objective {
			apply_field_overrides(self, field);
		}

		if let Some((lo, hi)) = self.x_bounds {
			desc.bounds.x_min = lo;
			desc.bounds.x_max = hi;
		}
		if let Some((lo, hi)) = self.y_bounds {
			desc.bounds.y_min = lo;
			desc.bounds.y_max = hi;
		}
		desc.bounds.validate()?;
		desc.objective.validate()?;

		let p = &mut desc.params;
		if let Some(v) = self.generations {
			p.generations = v;
		}
		if let Some(v) = self.swarm_size {
			p.swarm_size = v;
		}
		if let Some(v) = self.beta0 {
			p.beta0 = v;
		}
		if let Some(v) = self.gamma {
			p.gamma = v;
		}
		if let Some(v) = self.alpha0 {
			p.alpha0 = v;
		}
		if let Some(v) = self.delta {
			p.delta = v;
		}
		if self.seed.is_some() {
			p.seed = self.seed;
		}
		Ok(desc)
	}
}

fn apply_field_overrides(args: &Args, field: &mut PotentialField) {
	if let Some(c) = args.obstacle {
		field.obstacle = Point::from(c);
	}
	if let Some(r) = args.obstacle_radius {
		field.obstacle_radius = r;
	}
	if let Some(g) = args.goal {
		field.goal = Point::from(g);
	}
	if let Some(w) = args.goal_weight {
		field.goal_weight = w;
	}
}

/// Resolve the run description or exit with a readable message
pub fn run_description_or_exit(args: &Args) -> RunDescription {
	match args.run_description() {
		Ok(desc) => desc,
		Err(e) => {
			eprintln!("❌ Invalid configuration: {}", e);
			process::exit(1);
		}
	}
}

/// Parse "min,max" or "min max"
pub fn parse_pair(s: &str) -> Result<(f64, f64), String> {
	let cleaned = s.trim_matches(|c| c == '\'' || c == '"');
	let parts: Vec<&str> = if cleaned.contains(',') {
		cleaned.split(',').collect()
	} else {
		cleaned.split_whitespace().collect()
	};
	if parts.len() != 2 {
		return Err("expected two values in format 'a,b' or 'a b'".to_string());
	}
	let a = parse_finite_f64(parts[0].trim())?;
	let b = parse_finite_f64(parts[1].trim())?;
	Ok((a, b))
}

fn parse_finite_f64(s: &str) -> Result<f64, String> {
	let v: f64 = s.parse().map_err(|_| format!("invalid float: {s}"))?;
	if v.is_finite() { Ok(v) } else { Err("value must be finite".to_string()) }
}

fn parse_strictly_positive_f64(s: &str) -> Result<f64, String> {
	let v = parse_finite_f64(s)?;
	if v > 0.0 { Ok(v) } else { Err("value must be strictly positive (> 0)".to_string()) }
}

fn parse_strictly_positive_usize(s: &str) -> Result<usize, String> {
	let v: usize = s.parse().map_err(|_| format!("invalid integer: {s}"))?;
	if v >= 1 { Ok(v) } else { Err("value must be at least 1".to_string()) }
}
