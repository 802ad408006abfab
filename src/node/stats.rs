use super::Rect;

/// Color carried by every node and painted into rasters.
///
/// Alpha is stored for compatibility with the raster buffers but is
/// always fully opaque.
pub type Color = image::Rgba<u8>;

/// Per-channel intensity histogram: one count for each of the 256
/// discrete levels.
pub type Histogram = [u64; 256];

/// The three channel histograms of one image region.
#[derive(Clone, Debug)]
pub struct ChannelHistograms {
	pub red: Histogram,
	pub green: Histogram,
	pub blue: Histogram,
}

/// Trait for types that can serve per-region pixel statistics.
///
/// This is the only access the tree builder gets to the source image;
/// anything that can count the pixels of a rectangle into per-channel
/// histograms can be quadtreeified.
pub trait PixelSource {
	/// Width and height of the underlying image.
	fn dimensions(&self) -> (u32, u32);
	/// Counts the pixels of `region` into three 256-bucket histograms.
	///
	/// An empty region must produce all-zero histograms.
	fn histograms(&self, region: Rect) -> ChannelHistograms;
}

impl PixelSource for image::RgbaImage {
	fn dimensions(&self) -> (u32, u32) {
		(self.width(), self.height())
	}

	fn histograms(&self, region: Rect) -> ChannelHistograms {
		let mut hists = ChannelHistograms {
			red: [0; 256],
			green: [0; 256],
			blue: [0; 256],
		};
		for y in region.y0..region.y1 {
			for x in region.x0..region.x1 {
				let pixel = self.get_pixel(x, y);
				hists.red[pixel.0[0] as usize] += 1;
				hists.green[pixel.0[1] as usize] += 1;
				hists.blue[pixel.0[2] as usize] += 1;
			}
		}
		hists
	}
}

/// ITU-R BT.601 luma coefficients for red, green and blue.
const LUMA: (f64, f64, f64) = (0.2989, 0.5870, 0.1140);

/// Returns the weighted mean intensity of a histogram along with the
/// population standard deviation about that mean.
///
/// A histogram with no mass yields `(0.0, 0.0)`; empty regions are
/// ordinary input here, not an error.
pub fn weighted_average(hist: &Histogram) -> (f64, f64) {
	let total: u64 = hist.iter().sum();
	if total == 0 {
		return (0.0, 0.0);
	}
	let value = hist.iter()
		.enumerate()
		.map(|(i, &count)| (i as u64 * count) as f64)
		.sum::<f64>() / total as f64;
	let variance = hist.iter()
		.enumerate()
		.map(|(i, &count)| count as f64 * (value - i as f64).powi(2))
		.sum::<f64>() / total as f64;
	(value, variance.sqrt())
}

/// Samples `region` of `source` and reduces it to one representative
/// color and one scalar non-uniformity error.
///
/// Channel means are truncated toward zero to 8-bit components; the
/// per-channel errors are blended into one number with the luma
/// weights.
pub fn color_from_region<S: PixelSource>(source: &S, region: Rect) -> (Color, f64) {
	let hists = source.histograms(region);
	let (r, r_err) = weighted_average(&hists.red);
	let (g, g_err) = weighted_average(&hists.green);
	let (b, b_err) = weighted_average(&hists.blue);
	let error = r_err * LUMA.0 + g_err * LUMA.1 + b_err * LUMA.2;
	(image::Rgba([r as u8, g as u8, b as u8, 0xff]), error)
}
