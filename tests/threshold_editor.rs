use image::{Rgb, RgbImage};
use thresholdfe::io::LoadError;
use thresholdfe::ops::clipboard::ClipboardSink;
use thresholdfe::ops::threshold::MASK_ON;
use thresholdfe::{ColorSpace, EditorState, ThresholdEditor};

#[derive(Default)]
struct Captured(Vec<String>);

impl ClipboardSink for Captured {
    fn set_text(&mut self, text: &str) {
        self.0.push(text.to_owned());
    }
}

fn checkerboard() -> RgbImage {
    RgbImage::from_fn(8, 6, |x, y| {
        if (x + y) % 2 == 0 {
            Rgb([220, 30, 30])
        } else {
            Rgb([30, 30, 220])
        }
    })
}

#[test]
fn load_then_failed_load_keeps_previous_state() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("board.png");
    checkerboard().save(&good).unwrap();
    let bad = dir.path().join("corrupt.jpg");
    std::fs::write(&bad, [0xFF, 0xD8, 0x00, 0x01, 0x02]).unwrap();

    let mut ed = ThresholdEditor::new();
    assert_eq!(ed.state(), EditorState::NoImage);
    ed.load_image(&good).unwrap();
    assert_eq!(ed.state(), EditorState::ImageLoaded);
    ed.set_slider(0, 100);

    let image_before = ed.image().cloned();
    let output_before = ed.output().cloned();
    let generation_before = ed.output_generation();

    let err = ed.load_image(&bad).unwrap_err();
    assert!(matches!(err, LoadError::Decode(_)));
    let err = ed.load_image(&dir.path().join("missing.png")).unwrap_err();
    assert!(matches!(err, LoadError::Io(_)));

    assert_eq!(ed.state(), EditorState::ImageLoaded);
    assert_eq!(ed.image().cloned(), image_before);
    assert_eq!(ed.output().cloned(), output_before);
    assert_eq!(ed.output_generation(), generation_before);
}

#[test]
fn failed_first_load_stays_in_no_image() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("empty.png");
    std::fs::write(&bad, b"").unwrap();

    let mut ed = ThresholdEditor::new();
    assert!(ed.load_image(&bad).is_err());
    assert_eq!(ed.state(), EditorState::NoImage);
    assert!(ed.output().is_none());
}

#[test]
fn reloading_replaces_image() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.png");
    let second = dir.path().join("second.bmp");
    checkerboard().save(&first).unwrap();
    RgbImage::from_pixel(2, 2, Rgb([1, 2, 3])).save(&second).unwrap();

    let mut ed = ThresholdEditor::new();
    ed.load_image(&first).unwrap();
    ed.load_image(&second).unwrap();
    assert_eq!(ed.image().map(|i| i.dimensions()), Some((2, 2)));
    assert_eq!(ed.image_generation(), 2);
    assert_eq!(ed.output().map(|o| o.preview.dimensions()), Some((2, 2)));
}

#[test]
fn hsv_hue_band_isolates_red_squares() {
    let mut ed = ThresholdEditor::new();
    ed.set_image(checkerboard());
    ed.set_mode(ColorSpace::Hsv);
    // red sits at hue 0, blue at 120
    ed.set_slider(1, 10);

    let out = ed.output().unwrap();
    for (x, y, p) in out.mask.enumerate_pixels() {
        let expected = if (x + y) % 2 == 0 { MASK_ON } else { 0 };
        assert_eq!(p.0[0], expected, "mask at ({x}, {y})");
    }
    assert_eq!(out.preview.get_pixel(0, 0).0, [220, 30, 30]);
    assert_eq!(out.preview.get_pixel(1, 0).0, [0, 0, 0]);
}

#[test]
fn lab_b_channel_separates_warm_from_cool() {
    let mut ed = ThresholdEditor::new();
    ed.set_image(checkerboard());
    ed.set_mode(ColorSpace::Lab);
    // b* > 0 (yellowish side): red has positive b*, blue strongly negative
    ed.set_slider(4, 0);

    let out = ed.output().unwrap();
    assert_eq!(out.mask.get_pixel(0, 0).0[0], MASK_ON);
    assert_eq!(out.mask.get_pixel(1, 0).0[0], 0);
}

#[test]
fn mode_switch_recomputes_with_full_range() {
    let mut ed = ThresholdEditor::new();
    let img = checkerboard();
    ed.set_image(img.clone());
    ed.set_slider(0, 250);
    assert!(ed.output().unwrap().mask.pixels().all(|p| p.0[0] == 0));

    ed.set_mode(ColorSpace::Lab);
    let out = ed.output().unwrap();
    assert!(out.mask.pixels().all(|p| p.0[0] == MASK_ON));
    assert_eq!(out.preview, img);
}

#[test]
fn clipboard_export_after_edits() {
    let mut ed = ThresholdEditor::new();
    ed.set_mode(ColorSpace::Rgb);
    ed.set_slider(0, 12);
    ed.set_slider(3, 300);
    ed.set_slider(5, 64);

    let mut sink = Captured::default();
    ed.copy_thresholds(&mut sink);
    assert_eq!(
        sink.0,
        vec!["RGB 阈值: 下界=[12, 0, 0], 上界=[255, 255, 64]".to_string()]
    );
}
