// Copyright 2026 The couleur authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A library to extract a dominant color and a small color palette from an image.
//!
//! Pixels are sampled from the image, skipping mostly transparent and near-white ones, and clustered
//! with median cut: the box of samples with the largest volume times population is repeatedly split
//! at the population median of its widest channel. Each final box contributes its mean color to the
//! palette.
//!
//! The returned palette may hold fewer colors than requested when the image doesn't have enough
//! distinct colors to split into, but never more.
//!
//! ```no_run
//! let image = couleur::image::open("cover.jpg").unwrap();
//!
//! let palette = couleur::get_palette(&image, 8, 10).unwrap();
//! for swatch in &palette {
//!     println!("{} {}", swatch.hex(), swatch.population());
//! }
//!
//! let dominant = couleur::get_color(&image, 10).unwrap();
//! assert_eq!(palette.dominant_color(), Some(dominant));
//! ```

mod color_box;
mod error;
mod filter;
mod palette;
mod quantizer;
mod sampler;
mod source;
mod swatch;

pub const DEFAULT_COLOR_COUNT: usize = 10;
pub const DEFAULT_QUALITY: usize = 10;
/// The palette size used to pick the single dominant color.
pub const DOMINANT_COLOR_COUNT: usize = 5;

pub use crate::{
    error::{Error, Result},
    filter::{DefaultFilter, Filter},
    palette::Palette,
    sampler::{sample, sample_with},
    source::{PixelBuffer, PixelSource},
    swatch::Swatch,
};
pub use image;

use log::debug;
use quantizer::MedianCutQuantizer;

/// Extract the dominant color of an image, sampling every `quality`th pixel.
pub fn get_color<S>(source: S, quality: usize) -> Result<(u8, u8, u8)>
where
    S: PixelSource,
{
    PaletteExtractor::new().quality(quality).get_color(source)
}

/// Extract a palette of about `color_count` colors from an image, sampling every `quality`th pixel.
pub fn get_palette<S>(source: S, color_count: usize, quality: usize) -> Result<Palette>
where
    S: PixelSource,
{
    PaletteExtractor::new()
        .color_count(color_count)
        .quality(quality)
        .get_palette(source)
}

/// Extracts palettes with a given configuration.
///
/// A configured extractor can be shared between threads and reused for any number of images.
pub struct PaletteExtractor {
    color_count: usize,
    quality: usize,
    region: Option<Region>,
    filters: Vec<Box<dyn Filter>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Region {
    x: u32,
    y: u32,
    width: u32,
    height: u32,
}

impl PaletteExtractor {
    pub fn new() -> Self {
        Self {
            color_count: DEFAULT_COLOR_COUNT,
            quality: DEFAULT_QUALITY,
            region: None,
            filters: vec![Box::new(DefaultFilter)],
        }
    }

    /// The number of colors to aim for. The palette may end up smaller but never larger.
    pub fn color_count(self, color_count: usize) -> Self {
        Self { color_count, ..self }
    }

    /// Sample only every `quality`th pixel. 1 samples every pixel; larger values are faster but more
    /// likely to miss colors.
    pub fn quality(self, quality: usize) -> Self {
        Self { quality, ..self }
    }

    /// Only sample the pixels within the given rectangle. The rectangle is clamped to the image.
    pub fn region(self, x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            region: Some(Region { x, y, width, height }),
            ..self
        }
    }

    pub fn add_filter<F>(mut self, filter: F) -> Self
    where
        F: Filter + 'static,
    {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn clear_region(self) -> Self {
        Self { region: None, ..self }
    }

    pub fn clear_filters(self) -> Self {
        Self {
            filters: Vec::new(),
            ..self
        }
    }

    pub fn get_palette<S>(&self, source: S) -> Result<Palette>
    where
        S: PixelSource,
    {
        self.extract(source, self.color_count)
    }

    /// Extract the most populous color of a small palette of the image.
    pub fn get_color<S>(&self, source: S) -> Result<(u8, u8, u8)>
    where
        S: PixelSource,
    {
        self.extract(source, DOMINANT_COLOR_COUNT)?
            .dominant_color()
            .ok_or(Error::EmptyPalette)
    }

    fn extract<S>(&self, source: S, color_count: usize) -> Result<Palette>
    where
        S: PixelSource,
    {
        if color_count == 0 {
            return Err(Error::InvalidArgument("color count must be at least 1"));
        }

        if self.quality == 0 {
            return Err(Error::InvalidArgument("quality must be at least 1"));
        }

        let mut buffer = source.acquire()?;
        if let Some(Region { x, y, width, height }) = self.region {
            buffer = buffer.crop(x, y, width, height);
        }

        let samples = sample_with(
            buffer.pixels(),
            buffer.width(),
            buffer.height(),
            self.quality,
            &self.filters,
        );

        debug!(
            "sampled {} of {} pixels ({}x{}, quality {})",
            samples.len(),
            buffer.pixel_count(),
            buffer.width(),
            buffer.height(),
            self.quality
        );

        if samples.is_empty() {
            return Err(Error::EmptyPalette);
        }

        let quantized = MedianCutQuantizer::new(samples, color_count).quantize();
        let palette = Palette::build(&quantized.boxes, &quantized.samples);

        debug!("built a palette of {} colors, {} requested", palette.len(), color_count);

        Ok(palette)
    }
}

impl Default for PaletteExtractor {
    fn default() -> Self {
        Self::new()
    }
}
