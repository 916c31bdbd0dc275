//! HSLA pixel value type.
//!
//! [`HslaPixel`] is a plain aggregate of four `f64` channels with public
//! fields and no behavior. The documented channel ranges are conventions
//! only: nothing here validates or clamps, so out-of-range values are
//! stored and read back unchanged.

use serde::{Deserialize, Serialize};

/// A color in HSLA space.
///
/// Serializes as a JSON object with `hue`, `saturation`, `luminance` and
/// `alpha` keys. Values pass through serde untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HslaPixel {
    /// Hue of the pixel, in degrees [0, 360).
    pub hue: f64,
    /// Saturation of the pixel, [0, 1].
    pub saturation: f64,
    /// Luminance of the pixel, [0, 1].
    pub luminance: f64,
    /// Alpha (transparency) of the pixel, [0, 1].
    pub alpha: f64,
}
