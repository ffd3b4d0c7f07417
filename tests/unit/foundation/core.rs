use super::*;

#[test]
fn derived_sums_follow_edges() {
    let o = RectOffset::new(1.0, 2.0, 3.0, 4.5);
    assert_eq!(o.horizontal(), 3.0);
    assert_eq!(o.vertical(), 7.5);
}

#[test]
fn equality_is_by_value() {
    let a = RectOffset::new(1.0, 2.0, 3.0, 4.0);
    let b = a;
    assert_eq!(a, b);
    assert_ne!(a, RectOffset::new(1.0, 2.0, 3.0, 4.25));
    assert_eq!(RectOffset::default(), RectOffset::ZERO);
    assert_eq!(RectOffset::uniform(2.0), RectOffset::new(2.0, 2.0, 2.0, 2.0));
}

#[test]
fn missing_json_fields_default_to_zero() {
    let o: RectOffset = serde_json::from_str(r#"{ "top": 20 }"#).unwrap();
    assert_eq!(o, RectOffset::new(0.0, 0.0, 20.0, 0.0));
}
