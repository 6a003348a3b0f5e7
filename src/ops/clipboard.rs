use super::color_space::ColorSpace;
use super::threshold::SliderState;

// ---------------------------------------------------------------------------
//  Threshold text export
// ---------------------------------------------------------------------------

/// Anything that can receive the exported threshold text.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str);
}

/// Format the current thresholds as `"<MODE> 阈值: 下界=[..], 上界=[..]"`.
/// Values are the raw slider values, before any storage remapping.
pub fn format_thresholds(mode: ColorSpace, sliders: &SliderState) -> String {
    format!(
        "{} 阈值: 下界={:?}, 上界={:?}",
        mode.name(),
        sliders.lower(),
        sliders.upper()
    )
}

// ---------------------------------------------------------------------------
//  System clipboard (OS-level via arboard)
// ---------------------------------------------------------------------------

/// OS clipboard sink. Failures are logged and otherwise ignored.
#[derive(Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) {
        match arboard::Clipboard::new() {
            Ok(mut clip) => {
                if let Err(e) = clip.set_text(text.to_owned()) {
                    crate::log_warn!("Clipboard write failed: {}", e);
                }
            }
            Err(e) => {
                crate::log_warn!("Clipboard unavailable: {}", e);
            }
        }
    }
}
