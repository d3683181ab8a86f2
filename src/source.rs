use crate::error::{Error, Result};
use image::{DynamicImage, RgbImage, RgbaImage};
use std::path::{Path, PathBuf};

/// A decoded image as a flat, row-major RGBA8 buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

/// Anything a palette can be extracted from.
///
/// Acquisition is the only step of the extraction that may block (decoding a file, for example).
/// It is resolved completely before quantization starts, and a failure here aborts the extraction
/// without looking at any partial data. Callers with an asynchronous loader should await it
/// themselves and hand the resulting [`PixelBuffer`] over.
pub trait PixelSource {
    fn acquire(&self) -> Result<PixelBuffer>;
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 4;

        if pixels.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self { width, height, pixels })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Copy out a rectangular region of the buffer. The region is clamped to the buffer's bounds, so
    /// a region entirely outside of it results in an empty buffer.
    pub fn crop(&self, x: u32, y: u32, width: u32, height: u32) -> PixelBuffer {
        let x = x.min(self.width);
        let y = y.min(self.height);
        let width = width.min(self.width - x);
        let height = height.min(self.height - y);

        if width == 0 || height == 0 {
            return PixelBuffer {
                width,
                height,
                pixels: Vec::new(),
            };
        }

        let row_len = self.width as usize * 4;
        let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);

        for row in self.pixels.chunks_exact(row_len).skip(y as usize).take(height as usize) {
            let start = x as usize * 4;
            pixels.extend_from_slice(&row[start..start + width as usize * 4]);
        }

        PixelBuffer { width, height, pixels }
    }
}

impl PixelSource for PixelBuffer {
    fn acquire(&self) -> Result<PixelBuffer> {
        Ok(self.clone())
    }
}

impl PixelSource for RgbaImage {
    fn acquire(&self) -> Result<PixelBuffer> {
        PixelBuffer::new(self.width(), self.height(), self.as_raw().clone())
    }
}

impl PixelSource for RgbImage {
    fn acquire(&self) -> Result<PixelBuffer> {
        DynamicImage::ImageRgb8(self.clone()).acquire()
    }
}

impl PixelSource for DynamicImage {
    fn acquire(&self) -> Result<PixelBuffer> {
        self.to_rgba8().acquire()
    }
}

impl PixelSource for Path {
    fn acquire(&self) -> Result<PixelBuffer> {
        image::open(self)?.acquire()
    }
}

impl PixelSource for PathBuf {
    fn acquire(&self) -> Result<PixelBuffer> {
        self.as_path().acquire()
    }
}

impl<S> PixelSource for &S
where
    S: PixelSource + ?Sized,
{
    fn acquire(&self) -> Result<PixelBuffer> {
        (**self).acquire()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(width: u32, height: u32) -> PixelBuffer {
        let pixels = (0..width * height).flat_map(|i| [i as u8, 0, 0, 255]).collect();
        PixelBuffer::new(width, height, pixels).unwrap()
    }

    #[test]
    fn rejects_mismatched_buffer() {
        let err = PixelBuffer::new(2, 2, vec![0; 15]).unwrap_err();
        assert!(matches!(
            err,
            Error::BufferSizeMismatch {
                expected: 16,
                actual: 15
            }
        ));
    }

    #[test]
    fn crop_copies_the_region() {
        let cropped = numbered(4, 3).crop(1, 1, 2, 2);

        assert_eq!((cropped.width(), cropped.height()), (2, 2));
        let reds: Vec<u8> = cropped.pixels().chunks_exact(4).map(|p| p[0]).collect();
        assert_eq!(reds, vec![5, 6, 9, 10]);
    }

    #[test]
    fn crop_is_clamped_to_bounds() {
        let buffer = numbered(4, 3);

        let cropped = buffer.crop(3, 2, 10, 10);
        assert_eq!((cropped.width(), cropped.height()), (1, 1));
        assert_eq!(cropped.pixels(), &[11, 0, 0, 255]);

        let outside = buffer.crop(10, 10, 5, 5);
        assert_eq!(outside.pixel_count(), 0);
        assert!(outside.pixels().is_empty());
    }

    #[test]
    fn rgb_images_are_fully_opaque() {
        let image = RgbImage::from_pixel(2, 1, image::Rgb([1, 2, 3]));
        let buffer = image.acquire().unwrap();

        assert_eq!(buffer.pixels(), &[1, 2, 3, 255, 1, 2, 3, 255]);
    }

    #[test]
    fn missing_file_is_unavailable() {
        let err = Path::new("does/not/exist.png").acquire().unwrap_err();
        assert!(matches!(err, Error::SourceUnavailable(_)));
    }
}
