use super::*;

const ALL_ORIENTATIONS: [ScreenOrientation; 5] = [
    ScreenOrientation::Unknown,
    ScreenOrientation::Portrait,
    ScreenOrientation::PortraitUpsideDown,
    ScreenOrientation::LandscapeLeft,
    ScreenOrientation::LandscapeRight,
];

fn flagged(orientation: ScreenOrientation) -> ScreenState {
    ScreenState {
        safe_area: Rect::new(100.0, 200.0, 900.0, 1800.0),
        width: 1000,
        height: 2000,
        orientation,
        needs_cutout_correction: true,
    }
}

#[test]
fn portrait_scales_bottom_from_origin() {
    let s = flagged(ScreenOrientation::Portrait);
    let r = apply_cutout_correction(s.safe_area, &s, 0.5);
    assert_eq!(r, Rect::new(100.0, 100.0, 900.0, 1800.0));
}

#[test]
fn upside_down_scales_top_from_far_edge() {
    let s = flagged(ScreenOrientation::PortraitUpsideDown);
    let r = apply_cutout_correction(s.safe_area, &s, 0.5);
    // 200px top inset halves to 100px.
    assert_eq!(r, Rect::new(100.0, 200.0, 900.0, 1900.0));
}

#[test]
fn landscape_right_scales_left_from_origin() {
    let s = flagged(ScreenOrientation::LandscapeRight);
    let r = apply_cutout_correction(s.safe_area, &s, 0.5);
    assert_eq!(r, Rect::new(50.0, 200.0, 900.0, 1800.0));
}

#[test]
fn landscape_left_scales_right_from_far_edge() {
    let s = flagged(ScreenOrientation::LandscapeLeft);
    let r = apply_cutout_correction(s.safe_area, &s, 0.5);
    assert_eq!(r, Rect::new(100.0, 200.0, 950.0, 1800.0));
}

#[test]
fn unknown_orientation_is_untouched() {
    let s = flagged(ScreenOrientation::Unknown);
    assert_eq!(apply_cutout_correction(s.safe_area, &s, 0.5), s.safe_area);
}

#[test]
fn unit_factor_or_unflagged_device_is_a_no_op() {
    for orientation in ALL_ORIENTATIONS {
        let s = flagged(orientation);
        assert_eq!(apply_cutout_correction(s.safe_area, &s, 1.0), s.safe_area);

        let plain = ScreenState {
            needs_cutout_correction: false,
            ..s
        };
        assert_eq!(
            apply_cutout_correction(plain.safe_area, &plain, 0.417),
            plain.safe_area
        );
    }
}

#[test]
fn factor_above_one_grows_the_inset() {
    let s = flagged(ScreenOrientation::Portrait);
    let r = apply_cutout_correction(s.safe_area, &s, 1.5);
    assert_eq!(r.y0, 300.0);
}
