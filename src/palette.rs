use crate::{color_box::ColorBox, swatch::Swatch};

/// An ordered set of representative colors, most populous first.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    swatches: Vec<Swatch>,
}

impl Palette {
    /// Turn each box into a swatch holding the mean color of its samples, ordered by descending
    /// population. Boxes with equal populations keep their relative order.
    pub(crate) fn build(boxes: &[ColorBox], samples: &[(u8, u8, u8)]) -> Palette {
        let mut swatches: Vec<Swatch> = boxes
            .iter()
            .map(|color_box| average_color(&samples[color_box.region()]))
            .collect();

        swatches.sort_by(|lhs, rhs| rhs.population().cmp(&lhs.population()));

        Palette { swatches }
    }

    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    pub fn colors(&self) -> Vec<(u8, u8, u8)> {
        self.swatches.iter().map(|swatch| swatch.rgb()).collect()
    }

    /// The color of the most populous swatch.
    pub fn dominant_color(&self) -> Option<(u8, u8, u8)> {
        self.swatches.first().map(|swatch| swatch.rgb())
    }

    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }
}

impl IntoIterator for Palette {
    type Item = Swatch;
    type IntoIter = std::vec::IntoIter<Swatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.swatches.into_iter()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Swatch;
    type IntoIter = std::slice::Iter<'a, Swatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.swatches.iter()
    }
}

fn average_color(samples: &[(u8, u8, u8)]) -> Swatch {
    let (red_sum, green_sum, blue_sum) = samples
        .iter()
        .fold((0u64, 0u64, 0u64), |(red_sum, green_sum, blue_sum), &(r, g, b)| {
            (red_sum + r as u64, green_sum + g as u64, blue_sum + b as u64)
        });

    let pop = samples.len() as u64;

    // a mean never exceeds the largest sample, so it always fits back into 8 bits
    Swatch::new(
        (
            (red_sum / pop) as u8,
            (green_sum / pop) as u8,
            (blue_sum / pop) as u8,
        ),
        samples.len() as u32,
    )
}
