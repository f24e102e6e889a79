use super::*;

#[test]
fn png_pixels_are_palette_colors() {
    let palette = Palette::gradient();
    let frame = IndexedFrame {
        width: 2,
        height: 2,
        indices: vec![0, 15, 7, 0],
    };
    let path = std::path::PathBuf::from("target")
        .join("unit_png")
        .join("frame.png");
    let _ = std::fs::remove_file(&path);

    save_frame_png(&frame, &palette, &path).unwrap();

    let img = image::open(&path).unwrap().to_rgb8();
    assert_eq!(img.dimensions(), (2, 2));
    let white = palette.get(15).unwrap();
    assert_eq!(img.get_pixel(1, 0).0, [white.r, white.g, white.b]);
    let mid = palette.get(7).unwrap();
    assert_eq!(img.get_pixel(0, 1).0, [mid.r, mid.g, mid.b]);
}

#[test]
fn short_buffer_is_an_encode_error() {
    let frame = IndexedFrame {
        width: 4,
        height: 4,
        indices: vec![0; 3],
    };
    let err = save_frame_png(&frame, &Palette::gradient(), Path::new("target/never.png"))
        .unwrap_err();
    assert!(matches!(err, LissajousError::Encode(_)));
}
