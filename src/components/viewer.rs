use eframe::egui;
use egui::{Color32, ColorImage, TextureHandle, TextureOptions, Vec2};
use image::imageops::FilterType;
use image::{GrayImage, ImageBuffer, Pixel, RgbImage};

// ============================================================================
// ImageViewer — one image pane, scaled to fit a fixed box
// ============================================================================

/// Caches one GPU texture and re-uploads it only when the caller's
/// generation counter moves.
pub struct ImageViewer {
    name: String,
    texture: Option<TextureHandle>,
    generation: Option<u64>,
    /// Dimensions of the full-resolution buffer, for aspect ratio.
    source_size: [u32; 2],
}

impl ImageViewer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            texture: None,
            generation: None,
            source_size: [0, 0],
        }
    }

    /// Upload the buffer produced by `build` if `generation` differs from
    /// what is on the GPU. `source_size` is the unscaled image size.
    pub fn update(
        &mut self,
        ctx: &egui::Context,
        generation: u64,
        source_size: [u32; 2],
        build: impl FnOnce() -> ColorImage,
    ) {
        if self.generation == Some(generation) && self.texture.is_some() {
            return;
        }
        self.source_size = source_size;
        let color_image = build();
        match &mut self.texture {
            Some(tex) => tex.set(color_image, TextureOptions::LINEAR),
            None => {
                self.texture = Some(ctx.load_texture(self.name.clone(), color_image, TextureOptions::LINEAR));
            }
        }
        self.generation = Some(generation);
    }

    pub fn texture_size(&self) -> Option<[usize; 2]> {
        self.texture.as_ref().map(|tex| tex.size())
    }

    /// Draw the cached texture fitted into a `box_size` square, or a
    /// placeholder of the same size when nothing has been uploaded.
    pub fn show(&self, ui: &mut egui::Ui, box_size: f32, placeholder: &str) {
        let bounds = Vec2::splat(box_size);
        ui.allocate_ui(bounds, |ui| {
            ui.set_min_size(bounds);
            ui.centered_and_justified(|ui| match &self.texture {
                Some(tex) => {
                    let [w, h] = self.source_size;
                    let size = fit_size(w as f32, h as f32, box_size);
                    ui.add(egui::Image::new(egui::load::SizedTexture::new(tex.id(), size)));
                }
                None => {
                    ui.label(egui::RichText::new(placeholder).weak());
                }
            });
        });
    }
}

/// Largest size with the aspect ratio of `w`×`h` that fits a `box_size`
/// square. Scales both up and down; never crops.
pub fn fit_size(w: f32, h: f32, box_size: f32) -> Vec2 {
    if w <= 0.0 || h <= 0.0 {
        return Vec2::ZERO;
    }
    let scale = (box_size / w).min(box_size / h);
    Vec2::new(w * scale, h * scale)
}

/// Largest texture side to upload for a pane: the pane box, capped by what
/// the GPU backend accepts.
pub fn texture_side_limit(ctx: &egui::Context, box_size: f32) -> u32 {
    let max_side = ctx.input(|i| i.max_texture_side) as u32;
    (box_size.ceil() as u32).clamp(1, max_side.max(1))
}

/// Downscale so neither side exceeds `max_size`. Smaller images are cloned.
pub fn create_thumbnail<P>(image: &ImageBuffer<P, Vec<u8>>, max_size: u32) -> ImageBuffer<P, Vec<u8>>
where
    P: Pixel<Subpixel = u8> + 'static,
{
    let (width, height) = image.dimensions();

    if width <= max_size && height <= max_size {
        return image.clone();
    }

    // Long side lands exactly on max_size; short side keeps the ratio
    let long = width.max(height) as u64;
    let shrink = |side: u32| ((side as u64 * max_size as u64 / long) as u32).clamp(1, max_size);
    let new_width = shrink(width);
    let new_height = shrink(height);

    image::imageops::resize(image, new_width, new_height, FilterType::Triangle)
}

/// Copy an RGB buffer into an egui image no larger than `max_side`.
pub fn rgb_to_color_image(img: &RgbImage, max_side: u32) -> ColorImage {
    let img = create_thumbnail(img, max_side);
    ColorImage::from_rgb([img.width() as usize, img.height() as usize], img.as_raw())
}

/// Copy a mask into an egui image no larger than `max_side` (white = inside).
pub fn mask_to_color_image(mask: &GrayImage, max_side: u32) -> ColorImage {
    let mask = create_thumbnail(mask, max_side);
    let size = [mask.width() as usize, mask.height() as usize];
    let pixels: Vec<Color32> = mask.pixels().map(|p| Color32::from_gray(p.0[0])).collect();
    ColorImage { size, pixels }
}
