//! Benchmark helper utilities for fightanim-rs
//!
//! This module generates synthetic fighter documents shaped like real
//! character files: a handful of image channels per frame, occasional
//! hurtbox lists and placeholders, and loop bounds spread over the timeline.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use serde_json::{Map, Value, json};

/// Generates a fighter document with `animations` animations of `frames` frames each.
///
/// The output is deterministic for a given `seed`.
pub fn generate_fighter_document(animations: usize, frames: usize, seed: u64) -> String {
	let mut rng = SmallRng::seed_from_u64(seed);
	let mut root = Map::new();

	for anim in 0..animations {
		let mut record = Map::new();
		let end = frames.saturating_sub(1) + rng.random_range(0..4);
		let loop_start = rng.random_range(0..=end);
		record.insert("loop_and_end".to_string(), json!([loop_start, end]));

		for frame in 0..frames {
			record.insert(format!("anim{anim}_f{frame}"), generate_frame(&mut rng, anim, frame));
		}
		root.insert(format!("Animation{anim:03}"), Value::Object(record));
	}

	Value::Object(root).to_string()
}

fn generate_frame<R: Rng>(rng: &mut R, anim: usize, frame: usize) -> Value {
	let mut record = Map::new();
	record.insert("img_main".to_string(), image(rng, 100 + anim, "body", frame));

	if rng.random_bool(0.4) {
		record.insert("img_other".to_string(), image(rng, 200 + anim, "arm", frame));
	}
	if rng.random_bool(0.2) {
		record.insert("vfx_a".to_string(), image(rng, 900, "spark", frame));
		record.insert("vfxind_a".to_string(), image(rng, 901, "spark_glow", frame));
	}
	if rng.random_bool(0.7) {
		let boxes: Vec<Value> = (0..rng.random_range(1..4))
			.map(|_| {
				let left = rng.random_range(-40.0..0.0);
				let top = rng.random_range(-120.0..-40.0);
				json!([left, top, left + 40.0, top + 60.0, "vulnerable"])
			})
			.collect();
		record.insert("hurtboxes".to_string(), Value::Array(boxes));
	}
	if rng.random_bool(0.3) {
		record.insert("placeholder_body".to_string(), json!([0.0, -45.0, 0.0]));
	}
	if rng.random_bool(0.1) {
		record.insert(
			"placeholder_item".to_string(),
			json!([rng.random_range(1..8), 30.0, -50.0, rng.random_range(0.0..360.0)]),
		);
	}

	Value::Object(record)
}

fn image<R: Rng>(rng: &mut R, id: usize, sprite: &str, frame: usize) -> Value {
	json!([
		id,
		sprite,
		frame,
		rng.random_range(-20.0..20.0),
		rng.random_range(-100.0..0.0),
		0.0,
		1.0,
		1.0,
		1.0,
		"normal"
	])
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_generated_document_loads() {
		let content = generate_fighter_document(4, 6, 42);
		let animations = fightanim_types::fighter::load(&content).unwrap();
		assert_eq!(animations.len(), 4);
		assert!(animations.iter().all(|anim| anim.frame_count() == 6));
		assert_eq!(content, generate_fighter_document(4, 6, 42));
	}
}
