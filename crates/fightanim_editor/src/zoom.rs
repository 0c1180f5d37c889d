//! Viewer zoom.

use crate::settings::ViewerSettings;

/// Zoom level in percent, clamped to the configured range.
#[derive(Debug, Clone, PartialEq)]
pub struct Zoom {
	percent: f64,
	min: f64,
	max: f64,
	step: f64,
	wheel_factor: f64,
}

impl Zoom {
	/// Creates a zoom at the configured default level.
	pub fn new(settings: &ViewerSettings) -> Self {
		let mut zoom = Self {
			percent: settings.zoom_default,
			min: settings.zoom_min,
			max: settings.zoom_max,
			step: settings.zoom_step,
			wheel_factor: settings.wheel_factor,
		};
		zoom.set(settings.zoom_default);
		zoom
	}

	/// Current zoom in percent.
	pub fn percent(&self) -> f64 {
		self.percent
	}

	/// Current zoom as a scale factor (`1.0` is 100%).
	pub fn scale(&self) -> f64 {
		self.percent / 100.0
	}

	/// Sets the zoom, clamped to range. Returns the applied value.
	pub fn set(&mut self, percent: f64) -> f64 {
		self.percent = percent.min(self.max).max(self.min);
		self.percent
	}

	/// Zooms in by one step.
	pub fn zoom_in(&mut self) -> f64 {
		self.set(self.percent + self.step)
	}

	/// Zooms out by one step.
	pub fn zoom_out(&mut self) -> f64 {
		self.set(self.percent - self.step)
	}

	/// Applies a mouse wheel delta. Negative deltas (scrolling up) zoom in.
	///
	/// The result is rounded to two decimals.
	pub fn apply_wheel(&mut self, delta_y: f64) -> f64 {
		let target = self.percent - delta_y * self.wheel_factor;
		self.set((target * 100.0).round() / 100.0)
	}
}

impl Default for Zoom {
	fn default() -> Self {
		Self::new(&ViewerSettings::default())
	}
}
