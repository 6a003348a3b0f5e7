pub mod clipboard;
pub mod color_space;
pub mod threshold;
