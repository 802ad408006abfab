use super::stats::Color;
use super::{Quadtree, QuadtreeNode, Rect};

/// Canvas background and outline color.
const BLACK: Color = image::Rgba([0, 0, 0, 0xff]);

impl Quadtree {
	/// Flattens the tree into a raster at the requested depth.
	///
	/// Descent down each path stops at the first node that is a leaf
	/// or sits exactly at `depth`; that node's region is painted as
	/// one solid rectangle of its average color. A branch node at the
	/// requested depth is deliberately flattened even though finer
	/// children exist, so successive depths play back coarse to fine.
	///
	/// With `show_lines`, every painted rectangle also gets a
	/// one-pixel black outline.
	pub fn render(&self, depth: u32, show_lines: bool) -> image::RgbaImage {
		let mut img = image::RgbaImage::from_pixel(self.width, self.height, BLACK);
		paint(&self.root, depth, show_lines, &mut img);
		img
	}
}

fn paint(node: &QuadtreeNode, depth: u32, show_lines: bool, img: &mut image::RgbaImage) {
	if node.is_leaf() || node.depth == depth {
		fill_rect(img, node.bbox, node.color);
		if show_lines {
			outline_rect(img, node.bbox, BLACK);
		}
		return;
	}
	if let Some(ref sections) = node.sections {
		for section in sections.iter() {
			paint(section, depth, show_lines, img);
		}
	}
}

fn fill_rect(img: &mut image::RgbaImage, bbox: Rect, color: Color) {
	if bbox.is_empty() {
		return;
	}
	image::imageops::replace(
		img,
		&image::RgbaImage::from_pixel(bbox.width(), bbox.height(), color),
		bbox.x0,
		bbox.y0,
	);
}

fn outline_rect(img: &mut image::RgbaImage, bbox: Rect, color: Color) {
	if bbox.is_empty() {
		return;
	}
	for x in bbox.x0..bbox.x1 {
		img.put_pixel(x, bbox.y0, color);
		img.put_pixel(x, bbox.y1 - 1, color);
	}
	for y in bbox.y0..bbox.y1 {
		img.put_pixel(bbox.x0, y, color);
		img.put_pixel(bbox.x1 - 1, y, color);
	}
}

#[cfg(test)]
mod tests {
	use super::super::{BuildConfig, Quadtree};

	fn two_tone(w: u32, h: u32) -> ::image::RgbaImage {
		// Left half red, right half blue; forces exactly one split level
		// horizontally while the quadrants themselves are uniform.
		::image::RgbaImage::from_fn(w, h, |x, _| {
			if x < w / 2 {
				::image::Rgba([0xff, 0, 0, 0xff])
			} else {
				::image::Rgba([0, 0, 0xff, 0xff])
			}
		})
	}

	#[test]
	fn uniform_tree_renders_one_solid_rectangle() {
		let img = ::image::RgbaImage::from_pixel(8, 8, ::image::Rgba([90, 120, 30, 0xff]));
		let tree = Quadtree::from_source(&img, &BuildConfig::default()).unwrap();
		for depth in 0..4 {
			let out = tree.render(depth, false);
			assert!(out.pixels().all(|p| *p == ::image::Rgba([90, 120, 30, 0xff])));
		}
	}

	#[test]
	fn depth_zero_flattens_to_the_root_average() {
		let img = two_tone(8, 8);
		let tree = Quadtree::from_source(&img, &BuildConfig::default()).unwrap();
		assert_eq!(tree.tree_height, 1);
		let out = tree.render(0, false);
		// Half red, half blue averages to the root color everywhere.
		let root_color = tree.root.color;
		assert!(out.pixels().all(|p| *p == root_color));
	}

	#[test]
	fn full_depth_recovers_the_two_tones() {
		let img = two_tone(8, 8);
		let tree = Quadtree::from_source(&img, &BuildConfig::default()).unwrap();
		let out = tree.render(tree.tree_height, false);
		assert_eq!(*out.get_pixel(0, 0), ::image::Rgba([0xff, 0, 0, 0xff]));
		assert_eq!(*out.get_pixel(7, 7), ::image::Rgba([0, 0, 0xff, 0xff]));
	}

	#[test]
	fn outlines_border_every_painted_rectangle() {
		let img = two_tone(8, 8);
		let tree = Quadtree::from_source(&img, &BuildConfig::default()).unwrap();
		let out = tree.render(tree.tree_height, true);
		// Quadrant borders run along the canvas edges and the midlines.
		assert_eq!(*out.get_pixel(0, 0), ::image::Rgba([0, 0, 0, 0xff]));
		assert_eq!(*out.get_pixel(4, 2), ::image::Rgba([0, 0, 0, 0xff]));
		assert_eq!(*out.get_pixel(2, 3), ::image::Rgba([0, 0, 0, 0xff]));
		// Quadrant interiors keep their fill.
		assert_eq!(*out.get_pixel(2, 2), ::image::Rgba([0xff, 0, 0, 0xff]));
	}
}
