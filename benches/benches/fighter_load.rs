//! Benchmark suite for fighter file loading and editor playback
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fightanim_benches::generate_fighter_document;
use fightanim_editor::{Editor, EditorSettings, PlaybackState};
use fightanim_types::fighter;

/// Benchmark document decoding across file sizes
fn bench_load(c: &mut Criterion) {
	let mut group = c.benchmark_group("fighter_load");

	for (animations, frames) in [(8, 8), (64, 16), (256, 24)] {
		let content = generate_fighter_document(animations, frames, 7);
		group.throughput(Throughput::Bytes(content.len() as u64));
		group.bench_with_input(
			BenchmarkId::new("load", format!("{animations}x{frames}")),
			&content,
			|b, content| {
				b.iter(|| {
					let result = fighter::load(black_box(content));
					black_box(result)
				});
			},
		);
	}

	group.finish();
}

/// Benchmark playback derivation separately from decoding
fn bench_derive(c: &mut Criterion) {
	let content = generate_fighter_document(256, 24, 7);
	let animations = match fighter::load(&content) {
		Ok(animations) => animations,
		Err(err) => {
			eprintln!("Warning: Could not load generated document: {}", err);
			return;
		}
	};

	c.bench_function("playback_derive", |b| {
		b.iter(|| {
			let result = PlaybackState::derive(black_box(&animations));
			black_box(result)
		});
	});
}

/// Full editor load followed by a second of looping playback
fn bench_editor_session(c: &mut Criterion) {
	let mut group = c.benchmark_group("editor_session");
	let content = generate_fighter_document(64, 16, 11);

	group.sample_size(50);
	group.bench_function("load_and_play", |b| {
		b.iter(|| {
			let mut editor = Editor::new(EditorSettings::default());
			if editor.load_fighter_file(black_box(&content)).is_err() {
				return 0;
			}
			editor.set_looping(true);
			editor.play();
			(0..60).filter_map(|_| editor.tick()).count()
		});
	});

	group.finish();
}

criterion_group!(benches, bench_load, bench_derive, bench_editor_session);

criterion_main!(benches);
