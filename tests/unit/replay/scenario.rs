use super::*;
use crate::apply::output::AppliedOutput;
use crate::config::model::OutputMode;
use crate::foundation::core::Rect;
use crate::screen::state::ScreenOrientation;

fn portrait() -> ScreenState {
    ScreenState::full(1080, 2400, ScreenOrientation::Portrait)
        .with_safe_area(Rect::new(0.0, 102.0, 1080.0, 2400.0))
}

fn landscape() -> ScreenState {
    ScreenState::full(2400, 1080, ScreenOrientation::LandscapeLeft)
        .with_safe_area(Rect::new(0.0, 0.0, 2298.0, 1080.0))
}

fn scenario(mode: OutputMode, frames: Vec<ScreenState>) -> Scenario {
    Scenario {
        config: SafeAreaConfig::with_mode(mode),
        root_size: Size::new(1080.0, 2400.0),
        layout_container: true,
        frames,
    }
}

#[test]
fn replay_reports_only_changed_frames() {
    let s = scenario(
        OutputMode::Anchor,
        vec![portrait(), portrait(), landscape(), landscape(), portrait()],
    );
    let reports = replay(&s).unwrap();
    let changed: Vec<u64> = reports
        .iter()
        .filter(|r| r.change.is_some())
        .map(|r| r.frame)
        .collect();
    assert_eq!(changed, vec![0, 2, 4]);
    assert_eq!(reports.len(), 5);
}

#[test]
fn replay_without_container_in_padding_mode_fails() {
    let mut s = scenario(OutputMode::Padding, vec![portrait()]);
    s.layout_container = false;
    assert!(replay(&s).unwrap_err().is_missing_layout_container());
}

#[test]
fn replay_padding_mode_reports_padding() {
    let s = scenario(OutputMode::Padding, vec![portrait()]);
    let reports = replay(&s).unwrap();
    match reports[0].change.unwrap().applied {
        AppliedOutput::Padding(p) => assert_eq!(p.bottom, 102),
        other => panic!("unexpected output {other:?}"),
    }
}

#[test]
fn validation_rejects_bad_root_size() {
    let mut s = scenario(OutputMode::Anchor, vec![portrait()]);
    s.root_size = Size::new(0.0, 2400.0);
    assert!(s.validate().is_err());
}

#[test]
fn validation_rejects_non_finite_safe_area() {
    let bad = portrait().with_safe_area(Rect::new(0.0, f64::NAN, 1080.0, 2400.0));
    let s = scenario(OutputMode::Anchor, vec![bad]);
    let err = s.validate().unwrap_err();
    assert!(err.to_string().contains("frame 0"));
}

#[test]
fn json_defaults_layout_container_to_true() {
    let s = Scenario::from_reader(
        r#"{
            "root_size": { "width": 1080, "height": 2400 },
            "frames": []
        }"#
        .as_bytes(),
    )
    .unwrap();
    assert!(s.layout_container);
    assert_eq!(s.config, SafeAreaConfig::default());
}
