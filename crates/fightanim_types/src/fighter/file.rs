//! Fighter file structure and loading entry points.

use std::{io::Read, str::FromStr};

use log::info;
use serde_json::Value;

use super::{animation::Animation, decode, error::ParseError, load_config::LoadConfig};

/// A loaded fighter file: the ordered animation set.
///
/// # Examples
///
/// ```
/// use fightanim_types::fighter::File;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let fighter: File = r#"{"Idle": {"loop_and_end": [0, 1], "a": {}, "b": {}}}"#.parse()?;
/// assert_eq!(fighter.len(), 1);
/// assert_eq!(fighter.get("Idle").map(|a| a.frames.len()), Some(2));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct File {
	animations: Vec<Animation>,
}

impl File {
	/// Creates an empty fighter file.
	pub fn new() -> Self {
		Self::default()
	}

	/// Wraps an existing animation list.
	pub fn from_animations(animations: Vec<Animation>) -> Self {
		Self {
			animations,
		}
	}

	/// Reads and loads a fighter file from disk with the default configuration.
	///
	/// # Errors
	///
	/// Returns an error if the file cannot be read or does not decode.
	pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, ParseError> {
		Self::open_with_config(path, &LoadConfig::default())
	}

	/// Reads and loads a fighter file from disk.
	///
	/// # Errors
	///
	/// Returns an error if the file cannot be read or does not decode.
	pub fn open_with_config(
		path: impl AsRef<std::path::Path>,
		config: &LoadConfig,
	) -> Result<Self, ParseError> {
		let content = std::fs::read_to_string(path)?;
		Self::from_str_with_config(&content, config)
	}

	/// Loads a fighter file from a reader that yields the whole document.
	///
	/// # Errors
	///
	/// Returns an error if reading fails or the document does not decode.
	pub fn from_reader<R: Read>(reader: R) -> Result<Self, ParseError> {
		Self::from_reader_with_config(reader, &LoadConfig::default())
	}

	/// Loads a fighter file from a reader with a custom configuration.
	///
	/// # Errors
	///
	/// Returns an error if reading fails or the document does not decode.
	pub fn from_reader_with_config<R: Read>(
		mut reader: R,
		config: &LoadConfig,
	) -> Result<Self, ParseError> {
		let mut content = String::new();
		reader.read_to_string(&mut content)?;
		Self::from_str_with_config(&content, config)
	}

	/// Loads a fighter file from raw UTF-8 bytes.
	///
	/// # Errors
	///
	/// Returns an error if the bytes are not a valid fighter document.
	pub fn from_bytes(data: &[u8]) -> Result<Self, ParseError> {
		Self::from_bytes_with_config(data, &LoadConfig::default())
	}

	/// Loads a fighter file from raw UTF-8 bytes with a custom configuration.
	///
	/// # Errors
	///
	/// Returns an error if the bytes are not a valid fighter document.
	pub fn from_bytes_with_config(data: &[u8], config: &LoadConfig) -> Result<Self, ParseError> {
		let document: Value = serde_json::from_slice(data)?;
		Self::from_value(&document, config)
	}

	/// Loads a fighter file from text with a custom configuration.
	///
	/// # Errors
	///
	/// Returns an error if the text is not a valid fighter document.
	pub fn from_str_with_config(content: &str, config: &LoadConfig) -> Result<Self, ParseError> {
		let document: Value = serde_json::from_str(content)?;
		Self::from_value(&document, config)
	}

	/// Loads a fighter file from an already parsed JSON document.
	///
	/// # Errors
	///
	/// Returns an error if the document does not match the fighter layout.
	pub fn from_value(document: &Value, config: &LoadConfig) -> Result<Self, ParseError> {
		let animations = decode::decode_document(document, config)?;
		info!(
			"Loaded fighter file: {} animations, {} frames",
			animations.len(),
			animations.iter().map(Animation::frame_count).sum::<usize>()
		);
		Ok(Self {
			animations,
		})
	}

	/// Animations in document order.
	pub fn animations(&self) -> &[Animation] {
		&self.animations
	}

	/// Consumes the file, returning its animations.
	pub fn into_animations(self) -> Vec<Animation> {
		self.animations
	}

	/// Looks up an animation by name.
	pub fn get(&self, name: &str) -> Option<&Animation> {
		self.animations.iter().find(|anim| anim.name == name)
	}

	/// Number of animations.
	pub fn len(&self) -> usize {
		self.animations.len()
	}

	/// Returns `true` when the file holds no animations.
	pub fn is_empty(&self) -> bool {
		self.animations.is_empty()
	}

	/// Iterates over animations in document order.
	pub fn iter(&self) -> std::slice::Iter<'_, Animation> {
		self.animations.iter()
	}

	/// Largest `end_frame` across all animations.
	pub fn max_end_frame(&self) -> Option<usize> {
		self.animations.iter().map(|anim| anim.end_frame).max()
	}
}

impl FromStr for File {
	type Err = ParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_str_with_config(s, &LoadConfig::default())
	}
}

impl<'a> IntoIterator for &'a File {
	type Item = &'a Animation;
	type IntoIter = std::slice::Iter<'a, Animation>;

	fn into_iter(self) -> Self::IntoIter {
		self.animations.iter()
	}
}

impl std::fmt::Display for File {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "FighterFile({} animations)", self.animations.len())
	}
}

/// Loads the animation set of a fighter document.
///
/// This performs no I/O; `content` is the fully read document.
///
/// # Errors
///
/// Returns a [`ParseError`] naming the offending animation, frame and slot.
/// No partial result is produced.
pub fn load(content: &str) -> Result<Vec<Animation>, ParseError> {
	load_with_config(content, &LoadConfig::default())
}

/// [`load`] with a custom configuration.
///
/// # Errors
///
/// See [`load`].
pub fn load_with_config(content: &str, config: &LoadConfig) -> Result<Vec<Animation>, ParseError> {
	File::from_str_with_config(content, config).map(File::into_animations)
}
