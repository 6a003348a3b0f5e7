use crate::components::sliders::show_sliders;
use crate::components::viewer::{
    ImageViewer, mask_to_color_image, rgb_to_color_image, texture_side_limit,
};
use crate::editor::ThresholdEditor;
use crate::ops::clipboard::{ClipboardSink, SystemClipboard};
use crate::ops::color_space::ColorSpace;
use crate::settings::AppSettings;
use eframe::egui;
use std::path::Path;

/// What the right-hand pane shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ResultView {
    #[default]
    Preview,
    Mask,
}

pub struct ThresholdApp {
    editor: ThresholdEditor,
    settings: AppSettings,

    // UI Components
    source_view: ImageViewer,
    result_view: ImageViewer,
    clipboard: Box<dyn ClipboardSink>,

    result_mode: ResultView,
    status: String,
}

impl ThresholdApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: AppSettings) -> Self {
        Self {
            editor: ThresholdEditor::new(),
            settings,
            source_view: ImageViewer::new("source_image"),
            result_view: ImageViewer::new("threshold_result"),
            clipboard: Box::new(SystemClipboard),
            result_mode: ResultView::default(),
            status: t!("status.ready"),
        }
    }

    fn open_image(&mut self) {
        let Some(path) = crate::io::pick_image_path() else {
            return;
        };
        self.open_image_path(&path);
    }

    fn open_image_path(&mut self, path: &Path) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        match self.editor.load_image(path) {
            Ok(()) => {
                let (width, height) = self
                    .editor
                    .image()
                    .map(|img| img.dimensions())
                    .unwrap_or((0, 0));
                self.status = t!("status.loaded", name = name, width = width, height = height);
            }
            Err(e) => {
                self.status = t!("status.load_failed", name = name, error = e);
            }
        }
    }

    fn copy_thresholds(&mut self) {
        let text = self.editor.copy_thresholds(self.clipboard.as_mut());
        self.status = t!("status.copied", text = text);
    }

    /// Push the editor's current buffers to the GPU when they changed.
    fn sync_textures(&mut self, ctx: &egui::Context) {
        let max_side = texture_side_limit(ctx, self.settings.viewer_box);
        if let Some(img) = self.editor.image() {
            let size = [img.width(), img.height()];
            self.source_view.update(ctx, self.editor.image_generation(), size, || {
                rgb_to_color_image(img, max_side)
            });
        }
        if let Some(out) = self.editor.output() {
            // Keyed on (generation, view) so toggling the view re-uploads
            let key = self.editor.output_generation() * 2 + self.result_mode as u64;
            let size = [out.preview.width(), out.preview.height()];
            match self.result_mode {
                ResultView::Preview => self
                    .result_view
                    .update(ctx, key, size, || rgb_to_color_image(&out.preview, max_side)),
                ResultView::Mask => self
                    .result_view
                    .update(ctx, key, size, || mask_to_color_image(&out.mask, max_side)),
            }
        }
    }

    fn show_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button(t!("button.load")).clicked() {
                self.open_image();
            }

            ui.label(t!("combo.color_space"));
            let mut mode = self.editor.mode();
            egui::ComboBox::from_id_source("color_space")
                .selected_text(mode.name())
                .show_ui(ui, |ui| {
                    for cs in ColorSpace::ALL {
                        ui.selectable_value(&mut mode, cs, cs.name());
                    }
                });
            if mode != self.editor.mode() {
                self.editor.set_mode(mode);
            }

            if ui.button(t!("button.reset")).clicked() {
                self.editor.reset_sliders();
            }
            if ui.button(t!("button.copy")).clicked() {
                self.copy_thresholds();
            }

            ui.separator();
            ui.selectable_value(&mut self.result_mode, ResultView::Preview, t!("view.preview"));
            ui.selectable_value(&mut self.result_mode, ResultView::Mask, t!("view.mask"));
        });
    }
}

impl eframe::App for ThresholdApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.add_space(4.0);
            self.show_controls(ui);
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(egui::RichText::new(&self.status).small());
        });

        egui::TopBottomPanel::bottom("sliders").show(ctx, |ui| {
            ui.add_space(4.0);
            show_sliders(ui, &mut self.editor);
            ui.add_space(4.0);
        });

        // Sliders and buttons above have already recomputed synchronously
        self.sync_textures(ctx);

        let box_size = self.settings.viewer_box;
        let placeholder = t!("view.no_image");
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                ui.horizontal_top(|ui| {
                    ui.vertical(|ui| {
                        ui.label(t!("view.source"));
                        self.source_view.show(ui, box_size, &placeholder);
                    });
                    ui.vertical(|ui| {
                        let title = match self.result_mode {
                            ResultView::Preview => t!("view.preview"),
                            ResultView::Mask => t!("view.mask"),
                        };
                        ui.label(title);
                        self.result_view.show(ui, box_size, &placeholder);
                    });
                });
            });
        });
    }
}
