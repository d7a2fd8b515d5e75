use pavement_engineering_toolbox::isoline::{Engine, InputError, IsolineTable};

/// 두 이솔라인짜리 기준 표: level=0.70과 level=0.90.
fn two_level_table() -> IsolineTable {
    IsolineTable::new(vec![
        (0.70, vec![(0.1, 0.50), (0.5, 0.80)]),
        (0.90, vec![(0.1, 0.60), (0.5, 0.95)]),
    ])
    .expect("valid table")
}

#[test]
fn forward_interpolates_between_isolines() {
    let table = two_level_table();
    let engine = Engine::new(&table);
    let sol = engine.level_at(0.3, 0.675).expect("in range");
    // y_low=0.65, y_high=0.775 → frac=0.2 → level=0.74
    assert!((sol.level - 0.74).abs() < 1e-9, "level={}", sol.level);
    assert!((sol.bracket.y_lower - 0.65).abs() < 1e-9);
    assert!((sol.bracket.y_upper - 0.775).abs() < 1e-9);
    assert!((sol.bracket.lower_level - 0.70).abs() < 1e-12);
    assert!((sol.bracket.upper_level - 0.90).abs() < 1e-12);
}

#[test]
fn forward_below_lowest_curve_is_out_of_range() {
    let table = two_level_table();
    let engine = Engine::new(&table);
    assert!(engine.level_at(0.3, 0.50).is_none());
}

#[test]
fn forward_verbose_reports_rejected_pairs() {
    let table = two_level_table();
    let engine = Engine::new(&table);
    let (found, rejected) = engine.level_at_verbose(0.3, 0.50);
    assert!(found.is_none());
    assert_eq!(rejected.len(), 1);
    let r = &rejected[0];
    assert!((r.y_lower - 0.65).abs() < 1e-9);
    assert!((r.y_upper - 0.775).abs() < 1e-9);
    assert!((r.y_query - 0.50).abs() < 1e-12);
}

#[test]
fn forward_outside_x_overlap_is_out_of_range() {
    let table = two_level_table();
    let engine = Engine::new(&table);
    assert!(engine.level_at(0.9, 0.7).is_none());
    assert!(engine.level_at(0.01, 0.55).is_none());
}

#[test]
fn first_matching_bracket_wins() {
    // y 범위가 겹치는 세 레벨: (0.5,0.7)과 (0.7,0.9) 쌍이 모두 y=0.55를 포함한다.
    let table = IsolineTable::new(vec![
        (0.5, vec![(0.0, 0.4), (1.0, 0.4)]),
        (0.7, vec![(0.0, 0.6), (1.0, 0.6)]),
        (0.9, vec![(0.0, 0.5), (1.0, 0.5)]),
    ])
    .expect("valid table");
    let engine = Engine::new(&table);
    let sol = engine.level_at(0.5, 0.55).expect("in range");
    assert!((sol.bracket.lower_level - 0.5).abs() < 1e-12);
    assert!((sol.bracket.upper_level - 0.7).abs() < 1e-12);
    // frac = (0.55-0.4)/0.2 = 0.75 → level = 0.5 + 0.75*0.2 = 0.65
    assert!((sol.level - 0.65).abs() < 1e-9);
}

#[test]
fn bracket_monotonicity_with_three_levels() {
    let table = IsolineTable::new(vec![
        (0.5, vec![(0.0, 0.2), (1.0, 0.4)]),
        (0.7, vec![(0.0, 0.4), (1.0, 0.6)]),
        (0.9, vec![(0.0, 0.6), (1.0, 0.8)]),
    ])
    .expect("valid table");
    let engine = Engine::new(&table);
    // y=0.35는 x=0.5에서 curve(0.5)=0.3과 curve(0.7)=0.5 사이 → (0.5,0.7) 브래킷
    let sol = engine.level_at(0.5, 0.35).expect("in range");
    assert!((sol.bracket.lower_level - 0.5).abs() < 1e-12);
    assert!((sol.bracket.upper_level - 0.7).abs() < 1e-12);
}

#[test]
fn boundary_query_on_tabulated_point_returns_its_level() {
    let table = IsolineTable::new(vec![
        (0.5, vec![(0.0, 0.2), (1.0, 0.4)]),
        (0.7, vec![(0.0, 0.4), (1.0, 0.6)]),
        (0.9, vec![(0.0, 0.6), (1.0, 0.8)]),
    ])
    .expect("valid table");
    let engine = Engine::new(&table);
    // (1.0, 0.6)은 level=0.7 곡선 위의 표본점이다
    let sol = engine.level_at(1.0, 0.6).expect("in range");
    assert!((sol.level - 0.7).abs() < 1e-6, "level={}", sol.level);
}

#[test]
fn degenerate_equal_curves_resolve_to_lower_level() {
    // 두 곡선의 y가 일치하면 frac=0으로 보고 나눗셈을 피해야 한다.
    let table = IsolineTable::new(vec![
        (0.7, vec![(0.0, 0.5), (1.0, 0.5)]),
        (0.9, vec![(0.0, 0.5), (1.0, 0.5)]),
    ])
    .expect("valid table");
    let engine = Engine::new(&table);
    let sol = engine.level_at(0.5, 0.5).expect("in range");
    assert!((sol.level - 0.7).abs() < 1e-12);
}

#[test]
fn equal_adjacent_levels_keep_inverse_queries_finite() {
    // 레벨이 수치적으로 같은 인접 곡선 쌍에서는 레벨 분율이 0으로 떨어져야 한다.
    // (0 나눗셈 없이 아래쪽 곡선의 값을 그대로 쓴다.)
    let table = IsolineTable::new(vec![
        (0.7, vec![(0.0, 0.4), (1.0, 0.5)]),
        (0.7, vec![(0.0, 0.6), (1.0, 0.7)]),
    ])
    .expect("valid table");
    let engine = Engine::new(&table);

    let ratio = engine.ratio_at(0.7, 0.5).expect("in range");
    assert!(ratio.y.is_finite());
    assert!((ratio.y - 0.45).abs() < 1e-9, "y={}", ratio.y);
    assert!((ratio.bracket.lower_level - 0.7).abs() < 1e-12);
    assert!((ratio.bracket.upper_level - 0.7).abs() < 1e-12);

    let thickness = engine.x_for(0.7, 0.45).expect("in range");
    assert!(thickness.x.is_finite());
    assert!((thickness.x - 0.5).abs() < 2e-3, "x={}", thickness.x);
}

#[test]
fn inverse_y_round_trips_forward_result() {
    let table = two_level_table();
    let engine = Engine::new(&table);
    let forward = engine.level_at(0.3, 0.675).expect("in range");
    let inverse = engine.ratio_at(forward.level, 0.3).expect("in range");
    assert!(
        (inverse.y - 0.675).abs() < 1e-9,
        "round trip y={}",
        inverse.y
    );
}

#[test]
fn inverse_y_outside_overlap_is_out_of_range() {
    let table = two_level_table();
    let engine = Engine::new(&table);
    assert!(engine.ratio_at(0.74, 0.9).is_none());
    // 레벨 범위 밖 역시 브래킷이 없다
    assert!(engine.ratio_at(0.3, 0.3).is_none());
}

#[test]
fn inverse_x_finds_overlap_edge_sample() {
    let table = two_level_table();
    let engine = Engine::new(&table);
    // x=0.1에서 y_cand = 0.50 + 0.2*(0.60-0.50) = 0.52 (첫 표본에서 정확히 일치)
    let sol = engine.x_for(0.74, 0.52).expect("in range");
    assert!((sol.x - 0.1).abs() < 1e-9, "x={}", sol.x);
}

#[test]
fn inverse_x_interior_root_within_sampling_tolerance() {
    let table = two_level_table();
    // 표본 간격(≈4e-4)에 맞춘 허용오차. 기본 1e-4는 표본 사이를 스치는 근을 놓칠 수 있다.
    let engine = Engine::with_tolerance(&table, 1e-3);
    let sol = engine.x_for(0.74, 0.675).expect("in range");
    assert!((sol.x - 0.3).abs() < 2e-3, "x={}", sol.x);
}

#[test]
fn inverse_x_unreachable_target_is_out_of_range() {
    let table = two_level_table();
    let engine = Engine::new(&table);
    assert!(engine.x_for(0.74, 0.99).is_none());
}

#[test]
fn forward_wrapper_scales_by_reference_modulus() {
    let table = two_level_table();
    let engine = Engine::new(&table);
    // h/D = 0.3, E1/E2 = 0.675
    let sol = engine
        .forward(2025.0, 3000.0, 12.0, 40.0)
        .expect("valid inputs")
        .expect("in range");
    assert!((sol.level - 0.74).abs() < 1e-9);
    assert!((sol.equivalent_modulus - 2220.0).abs() < 1e-6);
}

#[test]
fn solve_upper_modulus_round_trip() {
    let table = two_level_table();
    let engine = Engine::new(&table);
    let sol = engine
        .solve_upper_modulus(0.74, 12.0, 40.0, 3000.0)
        .expect("valid inputs")
        .expect("in range");
    assert!((sol.y - 0.675).abs() < 1e-9);
    assert!((sol.upper_modulus - 2025.0).abs() < 1e-6);
}

#[test]
fn solve_thickness_scales_by_diameter() {
    let table = two_level_table();
    let engine = Engine::with_tolerance(&table, 1e-3);
    let sol = engine
        .solve_thickness(0.74, 2025.0, 3000.0, 40.0)
        .expect("valid inputs")
        .expect("in range");
    assert!((sol.thickness - 12.0).abs() < 0.1, "h={}", sol.thickness);
    assert!((sol.x - 0.3).abs() < 2e-3);
}

#[test]
fn zero_diameter_is_an_input_error_not_out_of_range() {
    let table = two_level_table();
    let engine = Engine::new(&table);
    assert_eq!(
        engine.forward(2025.0, 3000.0, 12.0, 0.0).unwrap_err(),
        InputError::ZeroLoadDiameter
    );
    assert_eq!(
        engine.forward(2025.0, 0.0, 12.0, 40.0).unwrap_err(),
        InputError::ZeroReferenceModulus
    );
    assert_eq!(
        engine
            .solve_upper_modulus(0.74, 12.0, 40.0, 0.0)
            .unwrap_err(),
        InputError::ZeroReferenceModulus
    );
    assert_eq!(
        engine
            .solve_thickness(0.74, 2025.0, 3000.0, 0.0)
            .unwrap_err(),
        InputError::ZeroLoadDiameter
    );
}
