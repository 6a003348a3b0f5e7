use eframe::egui;

use crate::editor::ThresholdEditor;
use crate::ops::color_space::ColorSpace;

const LABEL_WIDTH: f32 = 80.0;
const VALUE_WIDTH: f32 = 40.0;

/// Descriptive label for slider `index`: `"<Channel> <Min|Max>"`.
pub fn slider_label(mode: ColorSpace, index: usize) -> String {
    let channel = mode.channel(index / 2).name;
    let bound = if index % 2 == 0 {
        t!("slider.min")
    } else {
        t!("slider.max")
    };
    format!("{} {}", channel, bound)
}

// ============================================================================
// Slider panel — six rows of label / slider / live value
// ============================================================================

/// Draw all six rows. Moved sliders go straight through
/// [`ThresholdEditor::set_slider`], which recomputes on change.
pub fn show_sliders(ui: &mut egui::Ui, editor: &mut ThresholdEditor) {
    let mode = editor.mode();
    for index in 0..6 {
        let ch = mode.channel(index / 2);
        let Some(mut value) = editor.sliders().get(index) else {
            continue;
        };
        ui.horizontal(|ui| {
            ui.add_sized(
                [LABEL_WIDTH, 18.0],
                egui::Label::new(slider_label(mode, index)),
            );
            let slider_width = (ui.available_width() - VALUE_WIDTH - 8.0).max(60.0);
            ui.spacing_mut().slider_width = slider_width;
            let r = ui.add(egui::Slider::new(&mut value, ch.min..=ch.max).show_value(false));
            if r.changed() {
                editor.set_slider(index, value);
            }
            // Read back so the label reflects the clamped, stored value
            let shown = editor.sliders().get(index).unwrap_or(value);
            ui.add_sized([VALUE_WIDTH, 18.0], egui::Label::new(shown.to_string()));
        });
    }
}
