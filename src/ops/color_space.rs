use image::{Rgb, RgbImage};
use palette::{FromColor, Lab, Srgb};

// ============================================================================
// ColorSpace — the three thresholding modes and their channel table
// ============================================================================

/// Color space the thresholds are expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ColorSpace {
    #[default]
    Rgb,
    Lab,
    Hsv,
}

/// One channel of a color space: its slider label, slider domain, and the
/// mapping from slider domain into the 0-255 pixel-storage domain.
#[derive(Clone, Copy, Debug)]
pub struct ChannelInfo {
    pub name: &'static str,
    pub min: i32,
    pub max: i32,
    pub to_storage: fn(i32) -> i32,
}

#[derive(Clone, Copy, Debug)]
pub struct ColorSpaceInfo {
    pub name: &'static str,
    pub channels: [ChannelInfo; 3],
}

fn identity(v: i32) -> i32 {
    v
}

/// L* slider (0..=100) → 8-bit L (0..=255).
pub fn lab_lightness_to_storage(v: i32) -> i32 {
    (v as f32 * 255.0 / 100.0).round() as i32
}

/// a*/b* slider (-128..=127) → 8-bit offset encoding (0..=255).
pub fn lab_chroma_to_storage(v: i32) -> i32 {
    v + 128
}

const fn channel(name: &'static str, min: i32, max: i32, to_storage: fn(i32) -> i32) -> ChannelInfo {
    ChannelInfo {
        name,
        min,
        max,
        to_storage,
    }
}

static RGB_INFO: ColorSpaceInfo = ColorSpaceInfo {
    name: "RGB",
    channels: [
        channel("R", 0, 255, identity),
        channel("G", 0, 255, identity),
        channel("B", 0, 255, identity),
    ],
};

static LAB_INFO: ColorSpaceInfo = ColorSpaceInfo {
    name: "LAB",
    channels: [
        channel("L", 0, 100, lab_lightness_to_storage),
        channel("A", -128, 127, lab_chroma_to_storage),
        channel("B", -128, 127, lab_chroma_to_storage),
    ],
};

static HSV_INFO: ColorSpaceInfo = ColorSpaceInfo {
    name: "HSV",
    channels: [
        channel("H", 0, 179, identity),
        channel("S", 0, 255, identity),
        channel("V", 0, 255, identity),
    ],
};

impl ColorSpace {
    pub const ALL: [ColorSpace; 3] = [ColorSpace::Rgb, ColorSpace::Lab, ColorSpace::Hsv];

    pub fn info(&self) -> &'static ColorSpaceInfo {
        match self {
            ColorSpace::Rgb => &RGB_INFO,
            ColorSpace::Lab => &LAB_INFO,
            ColorSpace::Hsv => &HSV_INFO,
        }
    }

    pub fn name(&self) -> &'static str {
        self.info().name
    }

    pub fn channel(&self, c: usize) -> &'static ChannelInfo {
        &self.info().channels[c]
    }

    /// Map slider-domain bounds into the domain pixels are stored in after
    /// [`ColorSpace::convert`].
    pub fn bounds_to_storage(&self, bounds: [i32; 3]) -> [i32; 3] {
        let channels = &self.info().channels;
        [
            (channels[0].to_storage)(bounds[0]),
            (channels[1].to_storage)(bounds[1]),
            (channels[2].to_storage)(bounds[2]),
        ]
    }

    /// Convert an RGB buffer into this color space's 8-bit working
    /// representation. RGB returns an untouched copy.
    pub fn convert(&self, image: &RgbImage) -> RgbImage {
        let convert_pixel: fn([u8; 3]) -> [u8; 3] = match self {
            ColorSpace::Rgb => return image.clone(),
            ColorSpace::Lab => rgb_to_lab8,
            ColorSpace::Hsv => rgb_to_hsv8,
        };
        let mut out = RgbImage::new(image.width(), image.height());
        for (dst, src) in out.pixels_mut().zip(image.pixels()) {
            *dst = Rgb(convert_pixel(src.0));
        }
        out
    }
}

// -- Per-pixel conversions -------------------------------------------------

/// sRGB → 8-bit HSV: H in 0..=179 (degrees / 2), S and V in 0..=255.
pub fn rgb_to_hsv8(rgb: [u8; 3]) -> [u8; 3] {
    let r = rgb[0] as f32 / 255.0;
    let g = rgb[1] as f32 / 255.0;
    let b = rgb[2] as f32 / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let h = if d == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / d % 6.0) / 6.0
    } else if max == g {
        (((b - r) / d) + 2.0) / 6.0
    } else {
        (((r - g) / d) + 4.0) / 6.0
    };
    let h = if h < 0.0 { h + 1.0 } else { h };
    let s = if max == 0.0 { 0.0 } else { d / max };

    // Hue wraps: 360° rounds back onto 0.
    let h8 = ((h * 180.0).round() as u32 % 180) as u8;
    [h8, (s * 255.0).round() as u8, (max * 255.0).round() as u8]
}

/// sRGB → 8-bit L*a*b* (D65): L scaled to 0..=255, a/b offset by 128.
pub fn rgb_to_lab8(rgb: [u8; 3]) -> [u8; 3] {
    let srgb = Srgb::new(
        rgb[0] as f32 / 255.0,
        rgb[1] as f32 / 255.0,
        rgb[2] as f32 / 255.0,
    );
    let lab: Lab = Lab::from_color(srgb);
    let to_u8 = |v: f32| v.round().clamp(0.0, 255.0) as u8;
    [
        to_u8(lab.l * 255.0 / 100.0),
        to_u8(lab.a + 128.0),
        to_u8(lab.b + 128.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_ranges_match_modes() {
        let ranges = |cs: ColorSpace| {
            cs.info()
                .channels
                .iter()
                .map(|c| (c.min, c.max))
                .collect::<Vec<_>>()
        };
        assert_eq!(ranges(ColorSpace::Rgb), vec![(0, 255), (0, 255), (0, 255)]);
        assert_eq!(ranges(ColorSpace::Lab), vec![(0, 100), (-128, 127), (-128, 127)]);
        assert_eq!(ranges(ColorSpace::Hsv), vec![(0, 179), (0, 255), (0, 255)]);
    }

    #[test]
    fn lab_bounds_remap_into_storage_domain() {
        assert_eq!(ColorSpace::Lab.bounds_to_storage([0, -128, 127]), [0, 0, 255]);
        assert_eq!(ColorSpace::Lab.bounds_to_storage([100, 0, 0]), [255, 128, 128]);
        // 50 * 2.55 = 127.5 rounds away from zero
        assert_eq!(lab_lightness_to_storage(50), 128);
        assert_eq!(lab_lightness_to_storage(33), 84);
        for v in -128..=127 {
            let s = lab_chroma_to_storage(v);
            assert!((0..=255).contains(&s));
        }
        for v in 0..=100 {
            let s = lab_lightness_to_storage(v);
            assert!((0..=255).contains(&s));
        }
    }

    #[test]
    fn rgb_and_hsv_bounds_pass_through() {
        assert_eq!(ColorSpace::Rgb.bounds_to_storage([1, 2, 3]), [1, 2, 3]);
        assert_eq!(ColorSpace::Hsv.bounds_to_storage([179, 0, 255]), [179, 0, 255]);
    }

    #[test]
    fn hsv_primaries() {
        assert_eq!(rgb_to_hsv8([255, 0, 0]), [0, 255, 255]);
        assert_eq!(rgb_to_hsv8([0, 255, 0]), [60, 255, 255]);
        assert_eq!(rgb_to_hsv8([0, 0, 255]), [120, 255, 255]);
        assert_eq!(rgb_to_hsv8([0, 0, 0]), [0, 0, 0]);
        assert_eq!(rgb_to_hsv8([255, 255, 255]), [0, 0, 255]);
    }

    #[test]
    fn hsv_hue_stays_below_180() {
        // Just shy of 360°: magenta-red
        let [h, _, _] = rgb_to_hsv8([255, 0, 1]);
        assert!(h < 180);
    }

    #[test]
    fn lab_neutral_axis() {
        let black = rgb_to_lab8([0, 0, 0]);
        assert_eq!(black, [0, 128, 128]);
        let white = rgb_to_lab8([255, 255, 255]);
        assert_eq!(white[0], 255);
        assert!((white[1] as i32 - 128).abs() <= 1);
        assert!((white[2] as i32 - 128).abs() <= 1);
    }

    #[test]
    fn lab_red_has_positive_a() {
        let [l, a, b] = rgb_to_lab8([255, 0, 0]);
        // L* ≈ 53, a* ≈ 80, b* ≈ 67
        assert!((l as i32 - 136).abs() <= 2);
        assert!(a > 200);
        assert!(b > 185);
    }

    #[test]
    fn convert_rgb_is_identity() {
        let img = RgbImage::from_fn(4, 3, |x, y| Rgb([x as u8 * 40, y as u8 * 60, 7]));
        assert_eq!(ColorSpace::Rgb.convert(&img), img);
    }

    #[test]
    fn convert_preserves_dimensions() {
        let img = RgbImage::from_pixel(5, 2, Rgb([0, 0, 255]));
        let hsv = ColorSpace::Hsv.convert(&img);
        assert_eq!(hsv.dimensions(), (5, 2));
        assert_eq!(hsv.get_pixel(4, 1).0, [120, 255, 255]);
    }
}
