//! Animation frame types.
//!
//! A frame is a sparse bag of independently optional channels. A missing
//! channel means nothing is drawn or defined for it on that frame, which is
//! different from a channel holding zero values.

use serde::{Deserialize, Serialize};

use super::{
	constants,
	records::{Hurtbox, ImagePlacement, Placeholder, PlaceholderItem},
};

/// Image placement channels of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageChannel {
	/// `img_main`
	Main,
	/// `img_other`
	Other,
	/// `img_other_b`
	OtherB,
	/// `vfx_a`
	VfxA,
	/// `vfx_b`
	VfxB,
	/// `vfxind_a`
	VfxIndA,
	/// `vfxind_b`
	VfxIndB,
}

impl ImageChannel {
	/// All channels in document field order.
	pub const ALL: [Self; 7] = [
		Self::Main,
		Self::Other,
		Self::OtherB,
		Self::VfxA,
		Self::VfxB,
		Self::VfxIndA,
		Self::VfxIndB,
	];

	/// Field key used in the fighter document.
	pub fn key(self) -> &'static str {
		match self {
			Self::Main => constants::IMG_MAIN_KEY,
			Self::Other => constants::IMG_OTHER_KEY,
			Self::OtherB => constants::IMG_OTHER_B_KEY,
			Self::VfxA => constants::VFX_A_KEY,
			Self::VfxB => constants::VFX_B_KEY,
			Self::VfxIndA => constants::VFXIND_A_KEY,
			Self::VfxIndB => constants::VFXIND_B_KEY,
		}
	}
}

impl std::fmt::Display for ImageChannel {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.key())
	}
}

/// Body and particle placeholder channels of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderChannel {
	/// `placeholder_body`
	Body,
	/// `placeholder_particle_a`
	ParticleA,
	/// `placeholder_particle_b`
	ParticleB,
}

impl PlaceholderChannel {
	/// All channels in document field order.
	pub const ALL: [Self; 3] = [Self::Body, Self::ParticleA, Self::ParticleB];

	/// Field key used in the fighter document.
	pub fn key(self) -> &'static str {
		match self {
			Self::Body => constants::PLACEHOLDER_BODY_KEY,
			Self::ParticleA => constants::PLACEHOLDER_PARTICLE_A_KEY,
			Self::ParticleB => constants::PLACEHOLDER_PARTICLE_B_KEY,
		}
	}
}

impl std::fmt::Display for PlaceholderChannel {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.key())
	}
}

/// One frame of an animation.
///
/// # Examples
///
/// ```
/// use fightanim_types::fighter::{AnimationFrame, ImageChannel};
///
/// let frame = AnimationFrame::default();
/// assert!(frame.is_empty());
/// assert!(frame.image(ImageChannel::Main).is_none());
/// assert!(frame.hurtboxes.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationFrame {
	/// Main body image
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub img_main: Option<ImagePlacement>,
	/// Secondary image
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub img_other: Option<ImagePlacement>,
	/// Tertiary image
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub img_other_b: Option<ImagePlacement>,
	/// First effect image
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub vfx_a: Option<ImagePlacement>,
	/// Second effect image
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub vfx_b: Option<ImagePlacement>,
	/// First independent effect image
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub vfxind_a: Option<ImagePlacement>,
	/// Second independent effect image
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub vfxind_b: Option<ImagePlacement>,
	/// Hurtboxes in authored order
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub hurtboxes: Option<Vec<Hurtbox>>,
	/// Body placeholder
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub placeholder_body: Option<Placeholder>,
	/// First particle placeholder
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub placeholder_particle_a: Option<Placeholder>,
	/// Second particle placeholder
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub placeholder_particle_b: Option<Placeholder>,
	/// Item placeholder
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub placeholder_item: Option<PlaceholderItem>,
}

impl AnimationFrame {
	/// Returns the image placed on `channel`, if any.
	pub fn image(&self, channel: ImageChannel) -> Option<&ImagePlacement> {
		match channel {
			ImageChannel::Main => self.img_main.as_ref(),
			ImageChannel::Other => self.img_other.as_ref(),
			ImageChannel::OtherB => self.img_other_b.as_ref(),
			ImageChannel::VfxA => self.vfx_a.as_ref(),
			ImageChannel::VfxB => self.vfx_b.as_ref(),
			ImageChannel::VfxIndA => self.vfxind_a.as_ref(),
			ImageChannel::VfxIndB => self.vfxind_b.as_ref(),
		}
	}

	/// Returns the storage slot of `channel`.
	pub fn image_slot_mut(&mut self, channel: ImageChannel) -> &mut Option<ImagePlacement> {
		match channel {
			ImageChannel::Main => &mut self.img_main,
			ImageChannel::Other => &mut self.img_other,
			ImageChannel::OtherB => &mut self.img_other_b,
			ImageChannel::VfxA => &mut self.vfx_a,
			ImageChannel::VfxB => &mut self.vfx_b,
			ImageChannel::VfxIndA => &mut self.vfxind_a,
			ImageChannel::VfxIndB => &mut self.vfxind_b,
		}
	}

	/// Returns the placeholder on `channel`, if any.
	pub fn placeholder(&self, channel: PlaceholderChannel) -> Option<&Placeholder> {
		match channel {
			PlaceholderChannel::Body => self.placeholder_body.as_ref(),
			PlaceholderChannel::ParticleA => self.placeholder_particle_a.as_ref(),
			PlaceholderChannel::ParticleB => self.placeholder_particle_b.as_ref(),
		}
	}

	/// Returns the storage slot of `channel`.
	pub fn placeholder_slot_mut(&mut self, channel: PlaceholderChannel) -> &mut Option<Placeholder> {
		match channel {
			PlaceholderChannel::Body => &mut self.placeholder_body,
			PlaceholderChannel::ParticleA => &mut self.placeholder_particle_a,
			PlaceholderChannel::ParticleB => &mut self.placeholder_particle_b,
		}
	}

	/// Iterates over the image channels that are present, in field order.
	pub fn images(&self) -> impl Iterator<Item = (ImageChannel, &ImagePlacement)> {
		ImageChannel::ALL
			.into_iter()
			.filter_map(move |channel| self.image(channel).map(|image| (channel, image)))
	}

	/// Iterates over the placeholder channels that are present, in field order.
	pub fn placeholders(&self) -> impl Iterator<Item = (PlaceholderChannel, &Placeholder)> {
		PlaceholderChannel::ALL
			.into_iter()
			.filter_map(move |channel| self.placeholder(channel).map(|p| (channel, p)))
	}

	/// Hurtboxes as a slice; `None` when the channel is absent.
	pub fn hurtboxes(&self) -> Option<&[Hurtbox]> {
		self.hurtboxes.as_deref()
	}

	/// Returns `true` when no channel is present.
	pub fn is_empty(&self) -> bool {
		self.images().next().is_none()
			&& self.placeholders().next().is_none()
			&& self.hurtboxes.is_none()
			&& self.placeholder_item.is_none()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn image(id: i64) -> ImagePlacement {
		ImagePlacement {
			id,
			sprite_name: "body".to_string(),
			image_index: 0,
			xoff: 0.0,
			yoff: 0.0,
			rotation: 0.0,
			xscale: 1.0,
			yscale: 1.0,
			alpha: 1.0,
			blend_mode: "normal".to_string(),
		}
	}

	#[test]
	fn test_channel_keys_match_field_table() {
		let keys: Vec<_> = ImageChannel::ALL.iter().map(|c| c.key()).collect();
		assert_eq!(&keys[..], &constants::FRAME_FIELD_KEYS[..7]);
		assert_eq!(PlaceholderChannel::Body.key(), "placeholder_body");
	}

	#[test]
	fn test_image_slot_roundtrip() {
		let mut frame = AnimationFrame::default();
		*frame.image_slot_mut(ImageChannel::VfxIndB) = Some(image(4));

		assert_eq!(frame.vfxind_b.as_ref().map(|i| i.id), Some(4));
		assert_eq!(frame.image(ImageChannel::VfxIndB).map(|i| i.id), Some(4));
		assert!(frame.image(ImageChannel::Main).is_none());
		assert!(!frame.is_empty());
	}

	#[test]
	fn test_images_iterates_present_channels_in_order() {
		let mut frame = AnimationFrame::default();
		frame.vfx_b = Some(image(2));
		frame.img_main = Some(image(1));

		let channels: Vec<_> = frame.images().map(|(channel, _)| channel).collect();
		assert_eq!(channels, vec![ImageChannel::Main, ImageChannel::VfxB]);
	}

	#[test]
	fn test_empty_hurtbox_list_is_present() {
		let frame = AnimationFrame {
			hurtboxes: Some(Vec::new()),
			..Default::default()
		};
		assert_eq!(frame.hurtboxes(), Some(&[][..]));
		assert!(!frame.is_empty());
	}

	#[test]
	fn test_serialization_skips_absent_channels() {
		let mut frame = AnimationFrame::default();
		frame.placeholder_particle_a = Some(Placeholder {
			xoff: 1.0,
			yoff: 2.0,
			rotation: 0.0,
		});

		let json = serde_json::to_value(&frame).unwrap();
		let object = json.as_object().unwrap();
		assert_eq!(object.len(), 1);
		assert!(object.contains_key("placeholderParticleA"));
	}
}
