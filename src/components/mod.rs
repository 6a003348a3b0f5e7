pub mod sliders;
pub mod viewer;
