pub mod error;
pub mod stats;

use stats::{Color, PixelSource};

/// Axis-aligned, half-open pixel rectangle: `x0 <= x < x1`, `y0 <= y < y1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
	pub x0: u32,
	pub y0: u32,
	pub x1: u32,
	pub y1: u32,
}

impl Rect {
	pub fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Rect {
		Rect { x0, y0, x1, y1 }
	}

	pub fn width(&self) -> u32 {
		self.x1 - self.x0
	}

	pub fn height(&self) -> u32 {
		self.y1 - self.y0
	}

	/// True if the rectangle covers no pixels.
	///
	/// Degenerate rectangles fall out of subdividing a region a single
	/// pixel wide or tall; they are legal everywhere in the tree and
	/// simply contribute nothing.
	pub fn is_empty(&self) -> bool {
		self.x0 >= self.x1 || self.y0 >= self.y1
	}

	/// Splits at the integer midpoint into the four quadrants, always
	/// in the order top-left, top-right, bottom-left, bottom-right.
	///
	/// The quadrants tile `self` exactly.
	pub fn split(&self) -> [Rect; 4] {
		let mx = self.x0 + self.width() / 2;
		let my = self.y0 + self.height() / 2;
		[
			Rect::new(self.x0, self.y0, mx, my),
			Rect::new(mx, self.y0, self.x1, my),
			Rect::new(self.x0, my, mx, self.y1),
			Rect::new(mx, my, self.x1, self.y1),
		]
	}
}

/// Node in a quadtree approximating an image.
///
/// May contain subnodes (branch node) or no subnodes (leaf node).
///
/// It must always contain the average color and error of its region,
/// whether or not it was subdivided, such that tree descent can stop
/// at any level and still paint a meaningful preview.
#[derive(Clone, Debug, PartialEq)]
pub struct QuadtreeNode {
	pub bbox: Rect,
	pub depth: u32,
	pub color: Color,
	pub error: f64,
	pub sections: Option<Box<[QuadtreeNode; 4]>>,
}

impl QuadtreeNode {
	/// Samples the node's region exactly once, storing the resulting
	/// color and error. Whether the node stays a leaf is the builder's
	/// decision, not this function's.
	fn sample<S: PixelSource>(source: &S, bbox: Rect, depth: u32) -> QuadtreeNode {
		let (color, error) = stats::color_from_region(source, bbox);
		QuadtreeNode { bbox, depth, color, error, sections: None }
	}

	/// A node without subsections is a leaf; there is no separate flag
	/// to fall out of sync with the children.
	pub fn is_leaf(&self) -> bool {
		self.sections.is_none()
	}
}

/// Knobs controlling how far the builder subdivides.
///
/// Carried explicitly through the build so trees with different
/// settings can be grown side by side.
#[derive(Clone, Copy, Debug)]
pub struct BuildConfig {
	/// Hard bound on node depth; subdivision never goes past it.
	pub max_depth: u32,
	/// Regions whose error does not exceed this count as uniform and
	/// stay leaves.
	pub error_threshold: f64,
}

impl Default for BuildConfig {
	fn default() -> BuildConfig {
		BuildConfig {
			max_depth: 10,
			error_threshold: 13.0,
		}
	}
}

/// A quadtree approximation of one image.
///
/// Owns its whole node tree; nothing is shared between subtrees and
/// nothing is mutated once the build returns.
#[derive(Clone, Debug, PartialEq)]
pub struct Quadtree {
	pub root: QuadtreeNode,
	pub width: u32,
	pub height: u32,
	pub max_depth: u32,
	/// Deepest depth at which a leaf was finalized; never exceeds
	/// `max_depth`.
	pub tree_height: u32,
}

impl Quadtree {
	/// Builds the full tree from a pixel source in one pass.
	///
	/// Given identical pixel data and config, the resulting tree is
	/// exactly reproducible.
	pub fn from_source<S: PixelSource>(
		source: &S,
		config: &BuildConfig
	) -> Result<Quadtree, error::BuildError> {
		let (width, height) = source.dimensions();
		if width == 0 || height == 0 {
			return Err(error::BuildError::EmptySource);
		}
		let mut root = QuadtreeNode::sample(source, Rect::new(0, 0, width, height), 0);
		let mut tree_height = 0;
		grow(&mut root, source, config, &mut tree_height);
		Ok(Quadtree {
			root,
			width,
			height,
			max_depth: config.max_depth,
			tree_height,
		})
	}
}

/// Finalizes `node` as a leaf or subdivides it, recursively.
///
/// The depth bound always wins; below it, a region at or under the
/// error threshold stops subdividing. Leaves push `tree_height` up to
/// their depth.
fn grow<S: PixelSource>(
	node: &mut QuadtreeNode,
	source: &S,
	config: &BuildConfig,
	tree_height: &mut u32
) {
	if node.depth >= config.max_depth || node.error <= config.error_threshold {
		if node.depth > *tree_height {
			*tree_height = node.depth;
		}
		return;
	}
	let [q0, q1, q2, q3] = node.bbox.split();
	let mut sections = Box::new([
		QuadtreeNode::sample(source, q0, node.depth + 1),
		QuadtreeNode::sample(source, q1, node.depth + 1),
		QuadtreeNode::sample(source, q2, node.depth + 1),
		QuadtreeNode::sample(source, q3, node.depth + 1),
	]);
	for section in sections.iter_mut() {
		grow(section, source, config, tree_height);
	}
	node.sections = Some(sections);
}

pub mod image;
pub mod gif;
