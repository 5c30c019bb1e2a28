use crate::{Algorithm, Cost, Point};

use std::time::Duration;

/// Options for configuring the [`Driver`](crate::Driver)
///
/// Default options:
/// ```
/// # use lockstep_pathfinding::DriverConfig;
/// # use std::time::Duration;
/// assert_eq!(
/// 	DriverConfig {
/// 		width: 30,
/// 		height: 21,
/// 		step_delay: Duration::from_millis(12),
/// 		heuristic_weight: 2,
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DriverConfig {
	/// The number of columns of the Grid (defaults to `30`). Must be at least `2`.
	pub width: usize,
	/// The number of rows of the Grid (defaults to `21`). Must be at least `1`.
	pub height: usize,
	/// How long [`run`](crate::Driver::run) waits between two ticks (defaults to `12ms`)
	pub step_delay: Duration,
	/// The factor the Heuristic of the weighted A* is multiplied by (defaults to `2`).
	/// Must be greater than `1`.
	pub heuristic_weight: Cost,
}

impl DriverConfig {
	/// The default Grid without any delay between ticks, for headless runs
	///
	/// Values:
	/// ```
	/// # use lockstep_pathfinding::DriverConfig;
	/// # use std::time::Duration;
	/// assert_eq!(
	/// 	DriverConfig {
	/// 		width: 30,
	/// 		height: 21,
	/// 		step_delay: Duration::ZERO,
	/// 		heuristic_weight: 2,
	/// 	},
	/// 	DriverConfig::INSTANT
	/// );
	/// ```
	pub const INSTANT: DriverConfig = DriverConfig {
		width: 30,
		height: 21,
		step_delay: Duration::ZERO,
		heuristic_weight: 2,
	};

	/// A config for a Grid of the given size, otherwise [`INSTANT`](DriverConfig::INSTANT)
	pub fn with_size(width: usize, height: usize) -> DriverConfig {
		DriverConfig {
			width,
			height,
			..DriverConfig::INSTANT
		}
	}

	/// The searches that are run side by side
	pub fn algorithms(&self) -> [Algorithm; 4] {
		Algorithm::lineup(self.heuristic_weight)
	}

	/// Where the start is placed on a cleared Grid: a quarter into the width, centered vertically
	pub fn default_start(&self) -> Point {
		(self.width / 4, self.height / 2)
	}

	/// Where the target is placed on a cleared Grid: three quarters into the width, centered
	/// vertically, and never on the start
	pub fn default_target(&self) -> Point {
		let x = (self.width - self.width / 4)
			.min(self.width - 1)
			.max(self.width / 4 + 1);
		(x, self.height / 2)
	}
}

impl Default for DriverConfig {
	fn default() -> DriverConfig {
		DriverConfig {
			width: 30,
			height: 21,
			step_delay: Duration::from_millis(12),
			heuristic_weight: 2,
		}
	}
}
