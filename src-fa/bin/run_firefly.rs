//! Run the Firefly Algorithm from the command line and print the final swarm.
//!
//! ```text
//! RUST_LOG=debug run_firefly --objective potential-field --obstacle-radius 5 --seed 7 --sort
//! ```

use std::error::Error;
use std::io;
use std::process;

use clap::Parser;
use firefly_fa::cli::{Args, RunDescription, run_description_or_exit};
use firefly_fa::{FAConfig, run_optimizer, sort_axes_independently, write_positions, write_positions_csv};

fn run(args: &Args, desc: RunDescription) -> Result<(), Box<dyn Error>> {
	log::info!(
		"objective={} bounds=[{}, {}]x[{}, {}]",
		desc.objective,
		desc.bounds.x_min,
		desc.bounds.x_max,
		desc.bounds.y_min,
		desc.bounds.y_max
	);

	let config = FAConfig::from(desc.params);
	let mut positions = run_optimizer(&desc.bounds, &desc.objective, config, desc.params.seed)?;
	if args.sort {
		positions = sort_axes_independently(&positions);
	}

	match &args.output {
		Some(path) => {
			write_positions_csv(path, &positions)?;
			log::info!("wrote {} positions to {}", positions.len(), path.display());
		}
		None => write_positions(io::stdout().lock(), &positions)?,
	}
	Ok(())
}

fn main() {
	env_logger::init();

	let args = Args::parse();
	let desc = run_description_or_exit(&args);

	if let Err(e) = run(&args, desc) {
		eprintln!("❌ {}", e);
		process::exit(1);
	}
}
