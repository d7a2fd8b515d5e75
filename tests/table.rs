use pavement_engineering_toolbox::isoline::{IsolineTable, TableError};

#[test]
fn duplicate_x_within_one_isoline_is_rejected() {
    let err = IsolineTable::new(vec![
        (0.7, vec![(0.1, 0.5), (0.1, 0.6), (0.5, 0.8)]),
        (0.9, vec![(0.1, 0.6), (0.5, 0.95)]),
    ])
    .unwrap_err();
    assert!(matches!(err, TableError::DuplicateX { .. }), "{err:?}");
}

#[test]
fn fewer_than_two_levels_is_rejected() {
    let err = IsolineTable::new(vec![(0.7, vec![(0.1, 0.5), (0.5, 0.8)])]).unwrap_err();
    assert_eq!(err, TableError::TooFewLevels(1));
}

#[test]
fn single_sample_curve_is_rejected() {
    let err = IsolineTable::new(vec![
        (0.7, vec![(0.1, 0.5)]),
        (0.9, vec![(0.1, 0.6), (0.5, 0.95)]),
    ])
    .unwrap_err();
    assert!(
        matches!(err, TableError::TooFewSamples { count: 1, .. }),
        "{err:?}"
    );
}

#[test]
fn non_finite_values_are_rejected() {
    let err = IsolineTable::new(vec![
        (0.7, vec![(0.1, f64::NAN), (0.5, 0.8)]),
        (0.9, vec![(0.1, 0.6), (0.5, 0.95)]),
    ])
    .unwrap_err();
    assert!(matches!(err, TableError::NonFinite { .. }), "{err:?}");
}

#[test]
fn samples_and_levels_are_sorted_on_construction() {
    // 표본과 레벨을 뒤섞어 넣어도 오름차순으로 정리되어야 한다.
    let table = IsolineTable::new(vec![
        (0.9, vec![(0.5, 0.95), (0.1, 0.6)]),
        (0.7, vec![(0.5, 0.8), (0.1, 0.5)]),
    ])
    .expect("valid table");
    assert_eq!(table.levels(), vec![0.7, 0.9]);
    let curve = table.curve(0.7).expect("known level");
    assert!((curve.x_min() - 0.1).abs() < 1e-12);
    assert!((curve.x_max() - 0.5).abs() < 1e-12);
    // 정렬이 제대로 되어야 중간 보간이 맞는다
    let y = curve.y_at(0.3).expect("inside range");
    assert!((y - 0.65).abs() < 1e-9);
}

#[test]
fn interpolation_outside_curve_range_returns_none() {
    let table = IsolineTable::new(vec![
        (0.7, vec![(0.1, 0.5), (0.5, 0.8)]),
        (0.9, vec![(0.1, 0.6), (0.5, 0.95)]),
    ])
    .expect("valid table");
    let curve = table.curve(0.7).expect("known level");
    assert!(curve.y_at(0.05).is_none());
    assert!(curve.y_at(0.6).is_none());
    assert!(curve.y_at(0.1).is_some());
    assert!(curve.y_at(0.5).is_some());
}

#[test]
fn unknown_level_lookup_fails() {
    let table = IsolineTable::new(vec![
        (0.7, vec![(0.1, 0.5), (0.5, 0.8)]),
        (0.9, vec![(0.1, 0.6), (0.5, 0.95)]),
    ])
    .expect("valid table");
    assert_eq!(table.curve(0.8).unwrap_err(), TableError::UnknownLevel(0.8));
    assert!(table.x_range(0.8).is_err());
    assert_eq!(table.x_range(0.9).unwrap(), (0.1, 0.5));
}
