#[macro_use]
pub mod i18n;
pub mod logger;

pub mod app;
pub mod components;
pub mod editor;
pub mod io;
pub mod ops;
pub mod settings;

pub use editor::{EditorState, ThresholdEditor};
pub use ops::color_space::ColorSpace;
pub use ops::threshold::{SliderState, ThresholdOutput};
