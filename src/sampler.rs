use crate::filter::{DefaultFilter, Filter};

/// Sample the RGB values of an RGBA buffer using the default filter.
///
/// Only every `stride`th pixel is visited, so a stride of 1 visits every pixel. A stride of 0 is
/// treated as 1. Pixels past `width * height` and trailing bytes that don't form a whole pixel are
/// ignored.
pub fn sample(pixels: &[u8], width: u32, height: u32, stride: usize) -> Vec<(u8, u8, u8)> {
    let filters: [Box<dyn Filter>; 1] = [Box::new(DefaultFilter)];
    sample_with(pixels, width, height, stride, &filters)
}

/// Sample the RGB values of an RGBA buffer, keeping only the pixels every given filter allows.
///
/// The stride works the same as in [`sample`].
pub fn sample_with(
    pixels: &[u8],
    width: u32,
    height: u32,
    stride: usize,
    filters: &[Box<dyn Filter>],
) -> Vec<(u8, u8, u8)> {
    let pixel_count = width as usize * height as usize;

    pixels
        .chunks_exact(4)
        .take(pixel_count)
        .step_by(stride.max(1))
        .map(|p| (p[0], p[1], p[2], p[3]))
        .filter(|&rgba| filters.iter().all(|filter| filter.is_allowed(rgba)))
        .map(|(r, g, b, _)| (r, g, b))
        .collect()
}
