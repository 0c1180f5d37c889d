//! Fighter file utility.
//!
//! Provides three subcommands:
//! - `validate`: scan a directory and decode every `.fighter` file.
//! - `inspect`: summarize a single file (images, hurtbox extents, placeholders), or dump it as JSON.
//! - `play`: simulate playback of one animation tick by tick and print the head.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use fightanim_rs::prelude::*;
use log::{debug, info};
use walkdir::WalkDir;

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	match cli.command {
		Command::Validate(opts) => run_validate(opts),
		Command::Inspect(opts) => run_inspect(opts),
		Command::Play(opts) => run_play(opts),
	}
}

#[derive(Parser)]
#[command(name = "fighter_utils")]
#[command(author = "fightanim-rs project")]
#[command(version)]
#[command(about = "Validate, inspect and play fighter animation files", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Validate every fighter file under a directory
	Validate(ValidateArgs),
	/// Inspect a single fighter file
	Inspect(InspectArgs),
	/// Simulate playback of one animation
	Play(PlayArgs),
}

#[derive(Args)]
struct ValidateArgs {
	/// Directory containing fighter files
	#[arg(short = 'd', long, value_name = "DIR", default_value = ".")]
	root: PathBuf,

	/// Recurse into sub-directories while scanning
	#[arg(short, long, default_value_t = false)]
	recursive: bool,

	/// File extension to look for
	#[arg(short, long, value_name = "EXT", default_value = "fighter")]
	extension: String,

	/// Reject unknown frame fields and extra slots
	#[arg(long, default_value_t = false)]
	strict: bool,

	/// Print a line per animation
	#[arg(short, long, default_value_t = false)]
	verbose: bool,
}

#[derive(Args)]
struct InspectArgs {
	/// Path to a single fighter file
	#[arg(value_name = "FILE")]
	file: PathBuf,

	/// Only show the named animation
	#[arg(short, long, value_name = "NAME")]
	animation: Option<String>,

	/// Print the decoded animations as JSON
	#[arg(long, default_value_t = false)]
	json: bool,
}

#[derive(Args)]
struct PlayArgs {
	/// Path to a single fighter file
	#[arg(value_name = "FILE")]
	file: PathBuf,

	/// Animation to play; plays the whole timeline when omitted
	#[arg(short, long, value_name = "NAME")]
	animation: Option<String>,

	/// Number of scheduler ticks to simulate
	#[arg(short, long, value_name = "COUNT", default_value_t = 60)]
	ticks: usize,

	/// Wrap from the end frame back to the loop start
	#[arg(short = 'l', long = "loop", default_value_t = false)]
	looping: bool,

	/// Hold override as FRAME=TICKS, may be repeated
	#[arg(long, value_name = "FRAME=TICKS")]
	hold: Vec<String>,

	/// Editor settings file (TOML); FIGHTANIM__* variables are applied on top
	#[arg(short, long, value_name = "FILE", env = "FIGHTANIM_SETTINGS")]
	settings: Option<PathBuf>,
}

fn run_validate(args: ValidateArgs) -> Result<()> {
	if !args.root.is_dir() {
		bail!("{} is not a directory", args.root.display());
	}

	let config = if args.strict {
		LoadConfig::strict()
	} else {
		LoadConfig::default()
	};
	let files = collect_fighter_files(&args.root, args.recursive, &args.extension);
	if files.is_empty() {
		println!("No .{} files found under {}", args.extension, args.root.display());
		return Ok(());
	}

	let mut totals = ScanTotals::default();
	for path in files {
		totals.files += 1;
		match FighterFile::open_with_config(&path, &config) {
			Ok(fighter) => {
				totals.ok += 1;
				totals.animations += fighter.len();
				totals.frames += fighter.iter().map(Animation::frame_count).sum::<usize>();
				println!("✓ {} - {}", path.display(), fighter);
				if args.verbose {
					for animation in &fighter {
						println!("    {}", animation);
					}
				}
			}
			Err(err) => {
				totals.failed += 1;
				println!("✗ {} - {}", path.display(), err);
			}
		}
	}

	println!(
		"\nSummary: files={} | ok={} err={} | animations={} frames={}",
		totals.files, totals.ok, totals.failed, totals.animations, totals.frames
	);

	if totals.failed > 0 {
		bail!("Validation finished with errors (see summary)");
	}
	Ok(())
}

fn run_inspect(args: InspectArgs) -> Result<()> {
	let fighter = open_fighter(&args.file, &LoadConfig::default())?;

	let selected: Vec<&Animation> = match &args.animation {
		Some(name) => {
			let animation = fighter
				.get(name)
				.with_context(|| format!("No animation named '{}' in {}", name, args.file.display()))?;
			vec![animation]
		}
		None => fighter.iter().collect(),
	};

	if args.json {
		println!("{}", serde_json::to_string_pretty(&selected)?);
		return Ok(());
	}

	println!("File: {}", args.file.display());
	println!(
		"Animations: {} | timeline frames: {}",
		fighter.len(),
		fighter.max_end_frame().map_or(0, |end| end + 1)
	);

	for animation in selected {
		println!(
			"\n{} [{}] loop {} | frames: {} | hurtboxes: {}",
			animation.name,
			animation.kind,
			animation.bounds(),
			animation.frame_count(),
			animation.hurtbox_count()
		);
		for (index, frame) in animation.frames.iter().enumerate() {
			let images: Vec<String> =
				frame.images().map(|(channel, image)| format!("{}={}", channel, image.sprite_name)).collect();
			let hurtboxes: Vec<String> =
				frame.hurtboxes().unwrap_or_default().iter().map(describe_hurtbox).collect();
			let placeholders: Vec<String> =
				frame.placeholders().map(|(channel, _)| channel.to_string()).collect();
			println!(
				"  #{:<3} images: [{}] hurtboxes: [{}] placeholders: [{}]{}",
				index,
				images.join(", "),
				hurtboxes.join(", "),
				placeholders.join(", "),
				if frame.placeholder_item.is_some() {
					" +item"
				} else {
					""
				}
			);
		}
	}

	Ok(())
}

fn run_play(args: PlayArgs) -> Result<()> {
	let settings = EditorSettings::load(args.settings.as_deref())
		.context("Failed to load editor settings")?;
	let mut editor = Editor::new(settings);
	editor
		.open_fighter_file(&args.file)
		.with_context(|| format!("Failed to load {}", args.file.display()))?;

	if let Some(name) = &args.animation {
		editor.select_animation(name)?;
		editor.first_frame();
	}
	for hold in &args.hold {
		let (frame, ticks) = parse_hold(hold)?;
		let applied = editor.set_frame_timing_at(frame, ticks)?;
		debug!("Hold override: frame {} -> {} ticks", frame, applied);
	}

	editor.set_looping(args.looping);
	editor.play();
	info!(
		"Playing {} within {} for {} ticks",
		editor.selected_name().unwrap_or("<timeline>"),
		editor.active_bounds().map_or_else(|| "-".to_string(), |bounds| bounds.to_string()),
		args.ticks
	);

	println!("tick {:>4}: frame {}", 0, editor.current_frame());
	for tick in 1..=args.ticks {
		if let Some(frame) = editor.tick() {
			println!("tick {:>4}: frame {}", tick, frame);
		}
	}

	Ok(())
}

/// Formats a hurtbox as `state WxH@(left,top)`, marking boxes with swapped edges.
fn describe_hurtbox(hurtbox: &Hurtbox) -> String {
	let normalized = hurtbox.normalized();
	format!(
		"{} {}x{}@({},{}){}",
		hurtbox.state,
		normalized.width(),
		normalized.height(),
		normalized.left,
		normalized.top,
		if hurtbox.is_normalized() {
			""
		} else {
			" (flipped)"
		}
	)
}

fn parse_hold(hold: &str) -> Result<(usize, i64)> {
	let Some((frame, ticks)) = hold.split_once('=') else {
		bail!("Hold override '{}' is not FRAME=TICKS", hold);
	};
	let frame = frame.trim().parse().with_context(|| format!("Invalid frame in '{}'", hold))?;
	let ticks = ticks.trim().parse().with_context(|| format!("Invalid ticks in '{}'", hold))?;
	Ok((frame, ticks))
}

fn open_fighter(path: &Path, config: &LoadConfig) -> Result<FighterFile> {
	FighterFile::open_with_config(path, config)
		.with_context(|| format!("Failed to load {}", path.display()))
}

fn collect_fighter_files(root: &Path, recursive: bool, extension: &str) -> Vec<PathBuf> {
	let max_depth = if recursive {
		usize::MAX
	} else {
		1
	};
	let mut files = Vec::new();

	for entry in WalkDir::new(root).max_depth(max_depth).follow_links(false) {
		let entry = match entry {
			Ok(entry) => entry,
			Err(err) => {
				println!("{}", err);
				continue;
			}
		};

		let matches = entry
			.path()
			.extension()
			.is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(extension));
		if entry.file_type().is_file() && matches {
			files.push(entry.into_path());
		}
	}

	files.sort();
	files
}

#[derive(Default)]
struct ScanTotals {
	files: usize,
	ok: usize,
	failed: usize,
	animations: usize,
	frames: usize,
}
