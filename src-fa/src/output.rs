use std::io::Write;
use std::path::Path;

use firefly_objectives::Point;

/// Sort x and y coordinates independently, in ascending order.
///
/// The pairing between coordinates is not kept: the result is a monotone
/// path from the lower-left corner, used to draw the robot trajectory.
pub fn sort_axes_independently(points: &[Point]) -> Vec<Point> {
	let mut xs: Vec<f64> = points.iter().map(|p| p.x).collect();
	let mut ys: Vec<f64> = points.iter().map(|p| p.y).collect();
	xs.sort_by(f64::total_cmp);
	ys.sort_by(f64::total_cmp);
	xs.into_iter().zip(ys).map(|(x, y)| Point::new(x, y)).collect()
}

/// Write positions as `x ,y` lines
pub fn write_positions<W: Write>(mut out: W, points: &[Point]) -> std::io::Result<()> {
	for p in points {
		writeln!(out, "{} ,{}", p.x, p.y)?;
	}
	out.flush()
}

/// Write positions to a CSV file with an `x,y` header
pub fn write_positions_csv(path: &Path, points: &[Point]) -> Result<(), Box<dyn std::error::Error>> {
	let mut wtr = csv::Writer::from_path(path)?;
	wtr.write_record(["x", "y"])?;
	for p in points {
		wtr.write_record([p.x.to_string(), p.y.to_string()])?;
	}
	wtr.flush()?;
	Ok(())
}
