//! Heatmap rasterization.
//!
//! Converts a 2D layer into a PNG overlay that can be embedded as a data URI.
//! Row 0 of a layer is the southernmost row while image rows grow downwards,
//! so the image is flipped vertically: image row `y` reads layer row
//! `height - 1 - y`.

mod cache;
mod scale;

pub use cache::OverlayCache;
pub use scale::{ColorScale, Rgb};

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::{ImageBuffer, ImageFormat, Rgba, RgbaImage};
use ndarray::ArrayView2;

use crate::error::{GrowflowError, Result};

/// MIME prefix of the embeddable overlay.
pub const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Color every cell of `matrix` into an RGBA image, north up.
pub fn rasterize_rgba(matrix: ArrayView2<'_, f64>, scale: &ColorScale) -> Result<RgbaImage> {
    let (height, width) = matrix.dim();
    if height == 0 || width == 0 {
        return Err(GrowflowError::EmptyRaster);
    }
    let too_large = |_| GrowflowError::invalid_dataset("layer too large for an image");
    let img_width = u32::try_from(width).map_err(too_large)?;
    let img_height = u32::try_from(height).map_err(too_large)?;

    let mut img: RgbaImage = ImageBuffer::new(img_width, img_height);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let value = matrix[[height - 1 - y as usize, x as usize]];
        *pixel = Rgba(scale.rgba(value));
    }
    Ok(img)
}

/// Rasterize `matrix` and encode it as PNG.
///
/// Output is byte-identical for identical input.
pub fn rasterize(matrix: ArrayView2<'_, f64>, scale: &ColorScale) -> Result<Vec<u8>> {
    let img = rasterize_rgba(matrix, scale)?;
    let mut bytes = Cursor::new(Vec::new());
    img.write_to(&mut bytes, ImageFormat::Png)?;

    tracing::debug!(
        "Rasterized {}x{} layer into {} PNG bytes",
        img.width(),
        img.height(),
        bytes.get_ref().len()
    );
    Ok(bytes.into_inner())
}

/// Wrap PNG bytes into a self-contained data URI.
pub fn to_data_uri(png: &[u8]) -> String {
    format!("{}{}", DATA_URI_PREFIX, STANDARD.encode(png))
}
