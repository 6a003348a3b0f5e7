/// In-memory application settings. Nothing here is persisted between runs.
#[derive(Clone, Debug, PartialEq)]
pub struct AppSettings {
    /// Initial inner window size in points.
    pub window_size: [f32; 2],
    /// Bounding box each image pane is scaled to fit.
    pub viewer_box: f32,
    /// UI language code, one of `i18n::LANGUAGES`.
    pub language: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            window_size: [1200.0, 800.0],
            viewer_box: 600.0,
            language: "en".to_string(),
        }
    }
}

impl AppSettings {
    /// Defaults with the language taken from the system locale.
    pub fn detect() -> Self {
        Self {
            language: crate::i18n::detect_system_language(),
            ..Self::default()
        }
    }
}
