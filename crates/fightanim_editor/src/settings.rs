//! Editor settings.
//!
//! Settings are assembled with the `config` crate from an optional TOML file
//! and `FIGHTANIM__*` environment variables, environment taking precedence.
//! Nested keys are separated by a double underscore, for example
//! `FIGHTANIM__PLAYBACK__MAX_HOLD_TICKS=12`.
//!
//! ```toml
//! layers = ["Back", "Body", "Front"]
//!
//! [playback]
//! placeholder_frame_count = 10
//! max_hold_ticks = 10
//! loop_by_default = true
//!
//! [viewer]
//! zoom_min = 50
//! zoom_max = 200
//!
//! [load]
//! reject_unknown_fields = true
//! max_frames = 4096
//! ```

use std::path::Path;

use config::{Config, Environment, File, FileFormat};
use fightanim_types::fighter::LoadConfig;
use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// Prefix of environment variables read by [`EditorSettings::load`]
pub const ENV_PREFIX: &str = "FIGHTANIM";

/// Separator between prefix and key, and between nesting levels
pub const ENV_SEPARATOR: &str = "__";

/// Playback and timing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
	/// Frame count shown before any fighter file is loaded
	pub placeholder_frame_count: usize,
	/// Lower bound of the random hold ticks seeded before a load
	pub seed_hold_min: u32,
	/// Upper bound (inclusive) of the random hold ticks seeded before a load
	pub seed_hold_max: u32,
	/// Largest hold value the timing editor accepts
	pub max_hold_ticks: u32,
	/// Whether looping starts enabled
	pub loop_by_default: bool,
}

impl Default for PlaybackSettings {
	fn default() -> Self {
		Self {
			placeholder_frame_count: 10,
			seed_hold_min: 1,
			seed_hold_max: 5,
			max_hold_ticks: 10,
			loop_by_default: false,
		}
	}
}

/// Viewer zoom settings, in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
	/// Smallest zoom
	pub zoom_min: f64,
	/// Largest zoom
	pub zoom_max: f64,
	/// Zoom change per button press
	pub zoom_step: f64,
	/// Initial zoom
	pub zoom_default: f64,
	/// Zoom change per unit of wheel delta (negated: scrolling up zooms in)
	pub wheel_factor: f64,
}

impl Default for ViewerSettings {
	fn default() -> Self {
		Self {
			zoom_min: 50.0,
			zoom_max: 200.0,
			zoom_step: 10.0,
			zoom_default: 100.0,
			wheel_factor: 0.05,
		}
	}
}

/// All editor settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
	/// Playback and timing
	pub playback: PlaybackSettings,
	/// Viewer zoom
	pub viewer: ViewerSettings,
	/// Initial layer order, back to front
	pub layers: Vec<String>,
	/// Fighter file loading options
	pub load: LoadConfig,
}

impl Default for EditorSettings {
	fn default() -> Self {
		Self {
			playback: PlaybackSettings::default(),
			viewer: ViewerSettings::default(),
			layers: vec!["Layer 1".to_string(), "Layer 2".to_string(), "Layer 3".to_string()],
			load: LoadConfig::default(),
		}
	}
}

impl EditorSettings {
	/// Loads settings from an optional TOML file and the process environment.
	///
	/// # Errors
	///
	/// Returns an error if the file is missing or malformed, or if the result
	/// fails [`validate`](Self::validate).
	pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
		Self::load_with_environment(path, Self::environment())
	}

	/// The environment source used by [`load`](Self::load).
	pub fn environment() -> Environment {
		Environment::with_prefix(ENV_PREFIX)
			.prefix_separator(ENV_SEPARATOR)
			.separator(ENV_SEPARATOR)
			.try_parsing(true)
	}

	/// Loads settings from an optional TOML file and an explicit environment source.
	///
	/// # Errors
	///
	/// See [`load`](Self::load).
	pub fn load_with_environment(
		path: Option<&Path>,
		environment: Environment,
	) -> Result<Self, SettingsError> {
		let mut builder = Config::builder();
		if let Some(path) = path {
			builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
		}
		let settings: Self = builder.add_source(environment).build()?.try_deserialize()?;
		settings.validate()?;
		Ok(settings)
	}

	/// Parses settings from TOML text.
	///
	/// # Errors
	///
	/// Returns an error if the text is malformed or fails validation.
	pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
		let settings: Self = Config::builder()
			.add_source(File::from_str(content, FileFormat::Toml))
			.build()?
			.try_deserialize()?;
		settings.validate()?;
		Ok(settings)
	}

	/// Checks that ranges are ordered and counts are positive.
	///
	/// # Errors
	///
	/// Returns [`SettingsError::Invalid`] describing the first problem found.
	pub fn validate(&self) -> Result<(), SettingsError> {
		let playback = &self.playback;
		if playback.placeholder_frame_count == 0 {
			return Err(SettingsError::Invalid(
				"playback.placeholder_frame_count must be greater than zero".to_string(),
			));
		}
		if playback.seed_hold_min == 0 || playback.seed_hold_min > playback.seed_hold_max {
			return Err(SettingsError::Invalid(format!(
				"playback seed hold range {}..={} must be non-empty and start at 1 or more",
				playback.seed_hold_min, playback.seed_hold_max
			)));
		}
		if playback.max_hold_ticks == 0 {
			return Err(SettingsError::Invalid(
				"playback.max_hold_ticks must be greater than zero".to_string(),
			));
		}

		let viewer = &self.viewer;
		if !(viewer.zoom_min > 0.0
			&& viewer.zoom_min <= viewer.zoom_default
			&& viewer.zoom_default <= viewer.zoom_max)
		{
			return Err(SettingsError::Invalid(format!(
				"viewer zoom must satisfy 0 < min ({}) <= default ({}) <= max ({})",
				viewer.zoom_min, viewer.zoom_default, viewer.zoom_max
			)));
		}
		if viewer.zoom_step <= 0.0 {
			return Err(SettingsError::Invalid("viewer.zoom_step must be positive".to_string()));
		}

		if self.load.max_frames == 0 {
			return Err(SettingsError::Invalid("load.max_frames must be greater than zero".to_string()));
		}

		for (index, layer) in self.layers.iter().enumerate() {
			if self.layers[..index].contains(layer) {
				return Err(SettingsError::Invalid(format!("duplicate layer name '{}'", layer)));
			}
		}

		Ok(())
	}
}
