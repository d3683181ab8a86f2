const MIN_OPAQUE_ALPHA: u8 = 125;
const NEAR_WHITE_MIN_CHANNEL: u8 = 250;

/// A trait used to implement filters for the pixel sampling process.
///
/// Every visited pixel is passed through each filter before it's handed to the quantizer. A pixel
/// is sampled only if every filter allows it. This trait allows the library consumer to implement
/// custom filters.
///
/// See [`crate::PaletteExtractor::add_filter`] on how to add filters to the extraction process.
pub trait Filter: Send + Sync {
    /// Return whether a given RGBA pixel should be sampled or not.
    fn is_allowed(&self, rgba: (u8, u8, u8, u8)) -> bool;
}

/// The default filter included in every [`crate::PaletteExtractor`] by default.
///
/// This filter will disallow mostly transparent pixels and pixels very close to white, which
/// would otherwise let an image's background dominate the palette.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFilter;
impl Filter for DefaultFilter {
    fn is_allowed(&self, (r, g, b, a): (u8, u8, u8, u8)) -> bool {
        is_opaque(a) && !is_near_white(r, g, b)
    }
}

fn is_opaque(a: u8) -> bool {
    a >= MIN_OPAQUE_ALPHA
}

fn is_near_white(r: u8, g: u8, b: u8) -> bool {
    r > NEAR_WHITE_MIN_CHANNEL && g > NEAR_WHITE_MIN_CHANNEL && b > NEAR_WHITE_MIN_CHANNEL
}
