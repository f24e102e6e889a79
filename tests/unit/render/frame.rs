use super::*;

fn five_four() -> LissajousParams {
    LissajousParams {
        xfreq: 5.0,
        yfreq: 4.0,
        xphase: 0.0,
        yphase: 0.0,
    }
}

#[test]
fn small_frame_has_asymmetric_dimensions_and_lit_origin() {
    let palette = Palette::gradient();
    let frame = build_frame(10, &palette, &five_four(), 2.0, 0.01).unwrap();
    assert_eq!((frame.width, frame.height), (21, 19));
    assert_eq!(frame.indices.len(), 21 * 19);

    // t = 0 maps to the curve origin, cell (scale, scale) = (8, 8).
    assert!(frame.index_at(8, 8).unwrap() > 0);
    assert!(frame.indices.iter().all(|&i| i <= palette.max_intensity()));
    assert!(frame.indices.iter().any(|&i| i == palette.max_intensity()));
}

#[test]
fn padding_column_stays_background() {
    let frame = build_frame(10, &Palette::gradient(), &five_four(), 2.0, 0.01).unwrap();
    for y in 0..frame.height {
        assert_eq!(frame.index_at(20, y), Some(0));
    }
    assert_eq!(frame.index_at(21, 0), None);
    assert_eq!(frame.index_at(0, 19), None);
}

#[test]
fn grid_maps_cell_xy_to_pixel_xy_and_crops_last_row() {
    let mut grid = IntensityGrid::new(20, 15).unwrap();
    // y taps land on rows 18, 19, 19.
    grid.paint(0.0, 1.375, 8);
    assert_eq!(grid.get(8, 18), Some(3));
    assert_eq!(grid.get(8, 19), Some(6));

    let frame = grid_to_frame(&grid, Canvas::for_size(10).unwrap());
    assert_eq!(frame.index_at(8, 18), Some(3));
    assert_eq!(frame.index_at(8, 19), None);
    let lit = frame.indices.iter().filter(|&&i| i != 0).count();
    assert_eq!(lit, 1);
}

#[test]
fn accumulated_grid_matches_frame_pixels() {
    let grid = accumulate_sweep(10, 15, &five_four(), 2.0, 0.01).unwrap();
    let frame = build_frame(10, &Palette::gradient(), &five_four(), 2.0, 0.01).unwrap();
    for y in 0..frame.height {
        for x in 0..20 {
            assert_eq!(frame.index_at(x, y), grid.get(x as usize, y as usize));
        }
    }
}

#[test]
fn building_twice_is_bit_identical() {
    let palette = Palette::gradient();
    let a = build_frame(16, &palette, &five_four(), 1.0, 0.02).unwrap();
    let b = build_frame(16, &palette, &five_four(), 1.0, 0.02).unwrap();
    assert_eq!(a, b);
}

#[test]
fn tiny_sizes_do_not_panic() {
    let palette = Palette::gradient();
    for size in 1..=3 {
        let frame = build_frame(size, &palette, &five_four(), 1.0, 0.1).unwrap();
        assert_eq!(frame.width, 2 * size + 1);
        assert_eq!(frame.height, 2 * size - 1);
    }
}

#[test]
fn invalid_resolution_fails_the_frame() {
    assert!(build_frame(10, &Palette::gradient(), &five_four(), 1.0, 0.0).is_err());
}

#[test]
fn rgb_expansion_uses_palette_colors() {
    let palette = Palette::gradient();
    let frame = IndexedFrame {
        width: 2,
        height: 1,
        indices: vec![0, 15],
    };
    let rgb = frame.to_rgb8(&palette).unwrap();
    assert_eq!(rgb, vec![0x2c, 0x2f, 0x34, 0xff, 0xff, 0xff]);

    let bad = IndexedFrame {
        width: 1,
        height: 1,
        indices: vec![16],
    };
    assert!(bad.to_rgb8(&palette).is_err());
}

#[test]
fn sweep_scale_drives_the_painted_origin() {
    assert_eq!(sweep_scale(100), 98);
    assert_eq!(sweep_scale(1), -1);

    let origin = LissajousParams {
        xfreq: 0.0,
        yfreq: 0.0,
        xphase: 0.0,
        yphase: 0.0,
    };
    let grid = accumulate_sweep(10, 15, &origin, 1.0, 0.5).unwrap();
    let s = sweep_scale(10) as usize;
    assert!(grid.get(s, s).unwrap() > 0);
    let lit = grid.cells().iter().filter(|&&c| c != 0).count();
    assert_eq!(lit, 1);
}
