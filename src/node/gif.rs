use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame};

use super::error::AnimationError;
use super::Quadtree;

use std::fs::File;
use std::path::Path;

/// How many times the fully refined frame is appended so playback
/// holds on the finished image.
const HOLD_FRAMES: usize = 5;

impl Quadtree {
	/// Assembles the animation frames: one render per depth from 0 up
	/// to (but not including) the tree height, then the fully refined
	/// frame another `HOLD_FRAMES` times.
	///
	/// A tree of height 0 therefore animates as the held final frame
	/// alone.
	pub fn frames(&self, show_lines: bool) -> Vec<image::RgbaImage> {
		let final_frame = self.render(self.tree_height, show_lines);
		let mut sequence = (0..self.tree_height)
			.map(|depth| self.render(depth, show_lines))
			.collect::<Vec<_>>();
		sequence.extend(std::iter::repeat(final_frame).take(HOLD_FRAMES));
		sequence
	}

	/// Encodes the frame sequence into an animated GIF at `path`.
	///
	/// `duration` is the per-frame delay in milliseconds. `loop_count`
	/// follows GIF conventions: 0 repeats forever, anything else plays
	/// that many extra times.
	pub fn save_gif<P: AsRef<Path>>(
		&self,
		path: P,
		duration: u32,
		loop_count: u16,
		show_lines: bool
	) -> Result<(), AnimationError> {
		let mut encoder = GifEncoder::new(File::create(path)?);
		encoder.set_repeat(match loop_count {
			0 => Repeat::Infinite,
			n => Repeat::Finite(n),
		})?;
		encoder.encode_frames(self.frames(show_lines)
			.into_iter()
			.map(|frame| Frame::from_parts(
				frame,
				0,
				0,
				Delay::from_numer_denom_ms(duration, 1),
			)))?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::super::{BuildConfig, Quadtree};
	use super::HOLD_FRAMES;

	use image::AnimationDecoder;

	fn checkerboard(w: u32, h: u32) -> ::image::RgbaImage {
		::image::RgbaImage::from_fn(w, h, |x, y| {
			if (x + y) % 2 == 0 {
				::image::Rgba([0, 0, 0, 0xff])
			} else {
				::image::Rgba([0xff, 0xff, 0xff, 0xff])
			}
		})
	}

	#[test]
	fn sequence_is_heights_plus_held_frames() {
		let tree = Quadtree::from_source(&checkerboard(8, 8), &BuildConfig::default()).unwrap();
		assert_eq!(tree.tree_height, 3);
		let frames = tree.frames(false);
		assert_eq!(frames.len(), 3 + HOLD_FRAMES);
		// The held tail repeats the fully refined render.
		let final_frame = tree.render(tree.tree_height, false);
		for frame in &frames[3..] {
			assert_eq!(*frame, final_frame);
		}
		// Earlier frames are the coarser flattenings, in depth order.
		assert_eq!(frames[0], tree.render(0, false));
		assert_eq!(frames[2], tree.render(2, false));
	}

	#[test]
	fn flat_tree_still_yields_the_held_tail() {
		let img = ::image::RgbaImage::from_pixel(4, 4, ::image::Rgba([7, 7, 7, 0xff]));
		let tree = Quadtree::from_source(&img, &BuildConfig::default()).unwrap();
		assert_eq!(tree.tree_height, 0);
		assert_eq!(tree.frames(false).len(), HOLD_FRAMES);
	}

	#[test]
	fn gif_file_roundtrips_the_frame_count() {
		let tree = Quadtree::from_source(&checkerboard(4, 4), &BuildConfig::default()).unwrap();
		let path = std::env::temp_dir().join("quadtree_anim_roundtrip.gif");
		tree.save_gif(&path, 100, 0, false).unwrap();
		let decoder = image::codecs::gif::GifDecoder::new(std::fs::File::open(&path).unwrap())
			.unwrap();
		let frames = decoder.into_frames().collect_frames().unwrap();
		assert_eq!(frames.len(), tree.tree_height as usize + HOLD_FRAMES);
		std::fs::remove_file(&path).ok();
	}
}
