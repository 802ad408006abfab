use image::error::ImageError;

use quadtree_anim::{BuildConfig, Quadtree};

/// Helper function for `main`.
fn error_exit(msg: &str, code: i32) -> ! {
	eprintln!("{}", msg);
	std::process::exit(code)
}

/// `clap`-based CLI for approximating images with quadtrees.
///
/// May exit process with status code if there are errors:
///
/// 1: `clap` error
///
/// 2: invalid arguments
///
/// 3: file I/O issues
///
/// 4: invalid image data
///
/// 5: computation limits exceeded
///
/// 10: other, potentially unknown error
fn main() {
	env_logger::init();
	let clap_matches = clap::App::new("quadtree_anim")
		.version("0.1.0")
		.author("vkcz")
		.about("Approximates an image with a quadtree of near-uniform regions, as a still PNG or a progressive-refinement GIF.")
		.arg_from_usage("-a, --animate 'Write an animated GIF of successive refinement depths instead of a still image'")
		.arg_from_usage("-d, --max-depth=[N] 'Deepest subdivision level; defaults to 10'")
		.arg_from_usage("-t, --threshold=[N] 'Color error below which a region is not subdivided; defaults to 13'")
		.arg_from_usage("-l, --lines 'Outline every painted rectangle in black'")
		.arg_from_usage("-r, --render-depth=[N] 'Depth to flatten the still image at (ignored with --animate); defaults to the tree height'")
		.arg_from_usage("--duration=[N] 'Milliseconds each animation frame is shown; defaults to 1000'")
		.arg_from_usage("--loop=[N] 'Number of animation replays, 0 for endless; defaults to 0'")
		.arg_from_usage("<INPUT> 'Path to input file'")
		.arg_from_usage("[OUTPUT] 'Path to output file; defaults to INPUT with a modified file extension'")
		.get_matches();

	let input_path = clap_matches.value_of("INPUT").unwrap();
	let source = match image::open(input_path) {
		Ok(i) => i,
		Err(e) => {
			let (msg, code) = match e {
				ImageError::Decoding(_) => ("Invalid image data", 4),
				ImageError::Limits(_) => ("Computation limits exceeded", 5),
				ImageError::IoError(_) => ("File not found or could not be read", 3),
				_ => ("An error occurred", 10)
			};
			error_exit(msg, code)
		}
	}.into_rgba8();
	let config = BuildConfig {
		max_depth: match clap_matches.value_of("max-depth").unwrap_or("10").parse() {
			Ok(n) => n,
			Err(_) => error_exit("Non-numeric value for max-depth", 2)
		},
		error_threshold: match clap_matches.value_of("threshold").unwrap_or("13").parse() {
			Ok(n) => n,
			Err(_) => error_exit("Non-numeric value for threshold", 2)
		},
	};
	let show_lines = clap_matches.is_present("lines");

	let tree = match Quadtree::from_source(&source, &config) {
		Ok(t) => t,
		Err(_) => error_exit("Input image has no pixels", 4)
	};
	log::info!(
		"built quadtree of height {} with {} leaves",
		tree.tree_height,
		tree.leaf_count()
	);

	if clap_matches.is_present("animate") {
		let duration = match clap_matches.value_of("duration").unwrap_or("1000").parse() {
			Ok(n) => n,
			Err(_) => error_exit("Non-numeric value for duration", 2)
		};
		let loop_count = match clap_matches.value_of("loop").unwrap_or("0").parse() {
			Ok(n) => n,
			Err(_) => error_exit("Non-numeric value for loop", 2)
		};
		let output_path = clap_matches.value_of("OUTPUT")
			.map(str::to_string)
			.unwrap_or_else(|| input_path.rsplitn(2, '.').last().unwrap().to_string() + ".gif");
		log::debug!(
			"encoding {} frames of {} ms to {}",
			tree.tree_height as usize + 5,
			duration,
			output_path
		);
		match tree.save_gif(&output_path, duration, loop_count, show_lines) {
			Ok(()) => (),
			Err(_) => error_exit("Could not write to output file", 3)
		}
	} else {
		let render_depth = match clap_matches.value_of("render-depth") {
			Some(s) => match s.parse() {
				Ok(n) => n,
				Err(_) => error_exit("Non-numeric value for render-depth", 2)
			},
			None => tree.tree_height
		};
		let still = tree.render(render_depth, show_lines);
		match still.save(clap_matches.value_of("OUTPUT")
			.unwrap_or(&(input_path.rsplitn(2, '.').last().unwrap().to_string() + ".png"))) {
			Ok(_) => (),
			Err(_) => error_exit("Could not save output", 3)
		}
	}
}
