use thiserror::Error;

/// Reason why a pixel source couldn't be grown into a quadtree.
#[derive(Debug, Error)]
pub enum BuildError {
	/// The source image has zero width or height; there is no region
	/// to approximate.
	#[error("source image has no pixels")]
	EmptySource,
}

/// Reason why a frame sequence couldn't be written out as an animation.
#[derive(Debug, Error)]
pub enum AnimationError {
	/// The destination file could not be created or written.
	#[error("could not write animation: {0}")]
	Io(#[from] std::io::Error),
	/// A frame could not be encoded into the GIF stream.
	#[error("could not encode animation frame: {0}")]
	Encode(#[from] image::error::ImageError),
}
