use super::*;

#[test]
fn provenance_caller_reports_this_file() {
    let here = Provenance::caller();
    assert!(here.file.ends_with("core.rs"), "{}", here.file);
    assert!(here.line > 0);
}

#[test]
fn provenance_display_is_file_colon_line() {
    assert_eq!(Provenance::new("src/art.rs", 7).to_string(), "src/art.rs:7");
}

#[test]
fn canvas_rejects_empty() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert_eq!(Canvas::new(3, 2).unwrap().pixel_count(), 6);
}

#[test]
fn pixel_mapping_covers_half_open_unit_square() {
    let canvas = Canvas::new(800, 800).unwrap();
    assert_eq!(canvas.normalized_x(0), -1.0);
    assert_eq!(canvas.normalized_y(0), -1.0);
    let last = 1.0 - 2.0 / 800.0;
    assert!((canvas.normalized_x(799) - last).abs() < 1e-6);
    assert!((canvas.normalized_y(799) - last).abs() < 1e-6);
    assert_eq!(canvas.normalized_x(400), 0.0);
}

#[test]
fn color_packing_maps_unit_range_to_bytes() {
    assert_eq!(Color::new(-1.0, 1.0, 0.0).to_rgba8(), [0, 255, 127, 255]);
}

#[test]
fn color_packing_saturates_out_of_range_and_nan() {
    assert_eq!(
        Color::new(-3.0, 5.0, f32::NAN).to_rgba8(),
        [0, 255, 0, 255]
    );
}
