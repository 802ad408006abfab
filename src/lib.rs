pub mod node;

pub use node::*;

impl node::Quadtree {
	/// Counts the leaf nodes of the tree.
	///
	/// This is the number of rectangles the fully refined rendering is
	/// stitched from, which makes it a decent one-number measure of how
	/// much detail survived the error threshold.
	pub fn leaf_count(&self) -> usize {
		fn count(node: &node::QuadtreeNode) -> usize {
			match node.sections {
				Some(ref sections) => sections.iter().map(count).sum(),
				None => 1,
			}
		}
		count(&self.root)
	}
}
