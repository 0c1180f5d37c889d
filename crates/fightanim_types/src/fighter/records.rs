//! Positional records carried by animation frames.
//!
//! Each record here is stored in the fighter document as a fixed-length JSON
//! array. See [`super::constants`] for the slot tables.

use serde::{Deserialize, Serialize};

use super::{decode::Slots, error::ParseError};

/// Placement of one sprite image on a frame.
///
/// All numeric fields are free-form; `blend_mode` is an opaque tag that only
/// the renderer interprets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePlacement {
	/// Placement identifier
	pub id: i64,
	/// Sprite sheet name
	pub sprite_name: String,
	/// Sub-image index inside the sprite
	pub image_index: i64,
	/// Horizontal offset
	pub xoff: f64,
	/// Vertical offset
	pub yoff: f64,
	/// Rotation
	pub rotation: f64,
	/// Horizontal scale
	pub xscale: f64,
	/// Vertical scale
	pub yscale: f64,
	/// Opacity
	pub alpha: f64,
	/// Blend mode tag
	pub blend_mode: String,
}

impl ImagePlacement {
	pub(crate) fn decode(slots: &Slots<'_>) -> Result<Self, ParseError> {
		use crate::fighter::constants::image;

		Ok(Self {
			id: slots.int(image::ID)?,
			sprite_name: slots.tag(image::SPRITE_NAME)?,
			image_index: slots.int(image::IMAGE_INDEX)?,
			xoff: slots.float(image::XOFF)?,
			yoff: slots.float(image::YOFF)?,
			rotation: slots.float(image::ROTATION)?,
			xscale: slots.float(image::XSCALE)?,
			yscale: slots.float(image::YSCALE)?,
			alpha: slots.float(image::ALPHA)?,
			blend_mode: slots.tag(image::BLEND_MODE)?,
		})
	}
}

/// Axis-aligned hurtbox.
///
/// Edges are kept exactly as authored; `left` may exceed `right`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hurtbox {
	/// Left edge
	pub left: f64,
	/// Top edge
	pub top: f64,
	/// Right edge
	pub right: f64,
	/// Bottom edge
	pub bottom: f64,
	/// State tag, e.g. `"vulnerable"`
	pub state: String,
}

impl Hurtbox {
	pub(crate) fn decode(slots: &Slots<'_>) -> Result<Self, ParseError> {
		use crate::fighter::constants::hurtbox;

		Ok(Self {
			left: slots.float(hurtbox::LEFT)?,
			top: slots.float(hurtbox::TOP)?,
			right: slots.float(hurtbox::RIGHT)?,
			bottom: slots.float(hurtbox::BOTTOM)?,
			state: slots.tag(hurtbox::STATE)?,
		})
	}

	/// Returns `true` when `left <= right` and `top <= bottom`.
	pub fn is_normalized(&self) -> bool {
		self.left <= self.right && self.top <= self.bottom
	}

	/// Returns a copy with edges swapped so that `left <= right` and `top <= bottom`.
	pub fn normalized(&self) -> Self {
		Self {
			left: self.left.min(self.right),
			top: self.top.min(self.bottom),
			right: self.left.max(self.right),
			bottom: self.top.max(self.bottom),
			state: self.state.clone(),
		}
	}

	/// Width of the normalized box.
	pub fn width(&self) -> f64 {
		(self.right - self.left).abs()
	}

	/// Height of the normalized box.
	pub fn height(&self) -> f64 {
		(self.bottom - self.top).abs()
	}
}

/// Pose placeholder used for body and particle markers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placeholder {
	/// Horizontal offset
	pub xoff: f64,
	/// Vertical offset
	pub yoff: f64,
	/// Rotation
	pub rotation: f64,
}

impl Placeholder {
	pub(crate) fn decode(slots: &Slots<'_>) -> Result<Self, ParseError> {
		use crate::fighter::constants::placeholder;

		Ok(Self {
			xoff: slots.float(placeholder::XOFF)?,
			yoff: slots.float(placeholder::YOFF)?,
			rotation: slots.float(placeholder::ROTATION)?,
		})
	}
}

/// Item placeholder; `id` correlates the same item across frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaceholderItem {
	/// Item identity
	pub id: i64,
	/// Horizontal offset
	pub xoff: f64,
	/// Vertical offset
	pub yoff: f64,
	/// Rotation
	pub rotation: f64,
}

impl PlaceholderItem {
	pub(crate) fn decode(slots: &Slots<'_>) -> Result<Self, ParseError> {
		use crate::fighter::constants::placeholder_item;

		Ok(Self {
			id: slots.int(placeholder_item::ID)?,
			xoff: slots.float(placeholder_item::XOFF)?,
			yoff: slots.float(placeholder_item::YOFF)?,
			rotation: slots.float(placeholder_item::ROTATION)?,
		})
	}

	/// The pose part of the item, without its identity.
	pub fn placeholder(&self) -> Placeholder {
		Placeholder {
			xoff: self.xoff,
			yoff: self.yoff,
			rotation: self.rotation,
		}
	}
}
