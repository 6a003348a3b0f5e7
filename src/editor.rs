use image::RgbImage;
use std::path::Path;

use crate::io::{LoadError, load_rgb_image};
use crate::ops::clipboard::{ClipboardSink, format_thresholds};
use crate::ops::color_space::ColorSpace;
use crate::ops::threshold::{SliderState, ThresholdOutput, threshold_converted};

/// Observable editor state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorState {
    NoImage,
    ImageLoaded,
}

/// The loaded image converted into one mode's channel layout.
struct WorkingImage {
    image_generation: u64,
    mode: ColorSpace,
    pixels: RgbImage,
}

// ============================================================================
// ThresholdEditor — image + mode + sliders, with derived mask/preview
// ============================================================================

/// Owns the loaded image and the threshold parameters. Every mutating call
/// recomputes the output synchronously, so `output()` is always current.
pub struct ThresholdEditor {
    image: Option<RgbImage>,
    mode: ColorSpace,
    sliders: SliderState,
    output: Option<ThresholdOutput>,
    /// Reused across slider moves; rebuilt on image or mode change.
    working: Option<WorkingImage>,
    /// Number of times `working` was rebuilt.
    conversions: u64,
    /// Bumped on every image replacement.
    image_generation: u64,
    /// Bumped on every recomputation that produced output.
    output_generation: u64,
}

impl Default for ThresholdEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl ThresholdEditor {
    pub fn new() -> Self {
        let mode = ColorSpace::default();
        Self {
            image: None,
            mode,
            sliders: SliderState::full_range(mode),
            output: None,
            working: None,
            conversions: 0,
            image_generation: 0,
            output_generation: 0,
        }
    }

    pub fn state(&self) -> EditorState {
        if self.image.is_some() {
            EditorState::ImageLoaded
        } else {
            EditorState::NoImage
        }
    }

    pub fn image(&self) -> Option<&RgbImage> {
        self.image.as_ref()
    }

    pub fn mode(&self) -> ColorSpace {
        self.mode
    }

    pub fn sliders(&self) -> &SliderState {
        &self.sliders
    }

    pub fn output(&self) -> Option<&ThresholdOutput> {
        self.output.as_ref()
    }

    pub fn image_generation(&self) -> u64 {
        self.image_generation
    }

    pub fn output_generation(&self) -> u64 {
        self.output_generation
    }

    pub fn conversion_count(&self) -> u64 {
        self.conversions
    }

    // -- Mode / sliders --------------------------------------------------

    /// Switch color space. Sliders always reset to the new mode's full range,
    /// even when `mode` is already active.
    pub fn set_mode(&mut self, mode: ColorSpace) {
        if mode != self.mode {
            crate::log_info!("Color space {} -> {}", self.mode.name(), mode.name());
        }
        self.mode = mode;
        self.reset_sliders();
    }

    pub fn reset_sliders(&mut self) {
        self.sliders = SliderState::full_range(self.mode);
        self.recompute();
    }

    /// Set slider `index` (clamped to its channel range). Returns true when
    /// the value changed and the output was recomputed.
    pub fn set_slider(&mut self, index: usize, value: i32) -> bool {
        if self.sliders.set(self.mode, index, value) {
            self.recompute();
            true
        } else {
            false
        }
    }

    // -- Image -----------------------------------------------------------

    /// Read and decode `path`. On failure the current image and output are
    /// left exactly as they were.
    pub fn load_image(&mut self, path: &Path) -> Result<(), LoadError> {
        match load_rgb_image(path) {
            Ok(img) => {
                crate::log_info!(
                    "Loaded {} ({}x{})",
                    path.display(),
                    img.width(),
                    img.height()
                );
                self.set_image(img);
                Ok(())
            }
            Err(e) => {
                crate::log_err!("Failed to load image {}: {}", path.display(), e);
                Err(e)
            }
        }
    }

    /// Replace the current image wholesale and recompute.
    pub fn set_image(&mut self, image: RgbImage) {
        self.image = Some(image);
        self.image_generation += 1;
        self.recompute();
    }

    // -- Recompute / export ------------------------------------------------

    fn recompute(&mut self) {
        let Some(image) = &self.image else {
            return;
        };
        let stale = self
            .working
            .as_ref()
            .is_none_or(|w| w.image_generation != self.image_generation || w.mode != self.mode);
        if stale {
            self.working = Some(WorkingImage {
                image_generation: self.image_generation,
                mode: self.mode,
                pixels: self.mode.convert(image),
            });
            self.conversions += 1;
        }
        let Some(working) = &self.working else {
            return;
        };
        self.output = Some(threshold_converted(image, &working.pixels, self.mode, &self.sliders));
        self.output_generation += 1;
    }

    pub fn threshold_text(&self) -> String {
        format_thresholds(self.mode, &self.sliders)
    }

    /// Write the threshold text to `sink` and return it.
    pub fn copy_thresholds(&self, sink: &mut dyn ClipboardSink) -> String {
        let text = self.threshold_text();
        sink.set_text(&text);
        crate::log_info!("Copied to clipboard: {}", text);
        text
    }
}
