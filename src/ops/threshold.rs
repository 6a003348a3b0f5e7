use image::{GrayImage, Luma, Rgb, RgbImage};

use super::color_space::ColorSpace;

/// Mask value for pixels inside the range.
pub const MASK_ON: u8 = 255;

// ============================================================================
// SliderState — six bounded slider values, (lower, upper) per channel
// ============================================================================

/// Slider values laid out as `[lo0, hi0, lo1, hi1, lo2, hi2]`.
///
/// Every value stays inside its channel's range for the mode it was built
/// for. Lower may exceed upper; that simply selects nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliderState {
    values: [i32; 6],
}

impl SliderState {
    /// Full-range sliders for `mode`: lower = channel min, upper = channel max.
    pub fn full_range(mode: ColorSpace) -> Self {
        let mut values = [0; 6];
        for (i, v) in values.iter_mut().enumerate() {
            let ch = mode.channel(i / 2);
            *v = if i % 2 == 0 { ch.min } else { ch.max };
        }
        Self { values }
    }

    pub fn values(&self) -> [i32; 6] {
        self.values
    }

    pub fn get(&self, index: usize) -> Option<i32> {
        self.values.get(index).copied()
    }

    /// Set slider `index`, clamped into `mode`'s range for that channel.
    /// Returns true when the stored value changed.
    pub fn set(&mut self, mode: ColorSpace, index: usize, value: i32) -> bool {
        let Some(slot) = self.values.get_mut(index) else {
            return false;
        };
        let ch = mode.channel(index / 2);
        let value = value.clamp(ch.min, ch.max);
        if *slot == value {
            return false;
        }
        *slot = value;
        true
    }

    pub fn lower(&self) -> [i32; 3] {
        [self.values[0], self.values[2], self.values[4]]
    }

    pub fn upper(&self) -> [i32; 3] {
        [self.values[1], self.values[3], self.values[5]]
    }
}

// ============================================================================
// Range masking
// ============================================================================

/// Derived result of one thresholding pass.
#[derive(Clone, Debug, PartialEq)]
pub struct ThresholdOutput {
    /// [`MASK_ON`] where every channel is inside its bounds, 0 elsewhere.
    pub mask: GrayImage,
    /// Source pixels where the mask is set, black elsewhere.
    pub preview: RgbImage,
}

/// Per-pixel inclusive range test across all three channels.
pub fn in_range(image: &RgbImage, lower: [i32; 3], upper: [i32; 3]) -> GrayImage {
    let mut mask = GrayImage::new(image.width(), image.height());
    for (m, p) in mask.pixels_mut().zip(image.pixels()) {
        let inside = (0..3).all(|c| {
            let v = p.0[c] as i32;
            v >= lower[c] && v <= upper[c]
        });
        *m = Luma([if inside { MASK_ON } else { 0 }]);
    }
    mask
}

/// Keep `image` pixels where `mask` is set; zero the rest.
pub fn apply_mask(image: &RgbImage, mask: &GrayImage) -> RgbImage {
    let mut out = RgbImage::new(image.width(), image.height());
    for ((dst, src), m) in out.pixels_mut().zip(image.pixels()).zip(mask.pixels()) {
        if m.0[0] != 0 {
            *dst = *src;
        } else {
            *dst = Rgb([0, 0, 0]);
        }
    }
    out
}

/// Full thresholding pass: convert to the mode's working representation,
/// remap the slider bounds into storage units, mask, and apply.
pub fn compute_threshold(image: &RgbImage, mode: ColorSpace, sliders: &SliderState) -> ThresholdOutput {
    threshold_converted(image, &mode.convert(image), mode, sliders)
}

/// Same as [`compute_threshold`] with `working` already produced by
/// `mode.convert(image)`.
pub fn threshold_converted(
    image: &RgbImage,
    working: &RgbImage,
    mode: ColorSpace,
    sliders: &SliderState,
) -> ThresholdOutput {
    let lower = mode.bounds_to_storage(sliders.lower());
    let upper = mode.bounds_to_storage(sliders.upper());
    let mask = in_range(working, lower, upper);
    let preview = apply_mask(image, &mask);
    ThresholdOutput { mask, preview }
}
