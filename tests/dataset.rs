use pavement_engineering_toolbox::dataset::{self, DatasetError};
use pavement_engineering_toolbox::isoline::Engine;

const STANDARD_CSV: &str = "\
Eeq_over_E2,h_over_D,E1_over_E2
0.70,0.1,0.50
0.70,0.5,0.80
0.90,0.1,0.60
0.90,0.5,0.95
";

#[test]
fn reads_standard_headers() {
    let ds = dataset::from_csv_reader(STANDARD_CSV.as_bytes(), "standard").expect("parse");
    assert_eq!(ds.name, "standard");
    assert_eq!(ds.labels.level, "Eeq_over_E2");
    assert_eq!(ds.labels.x, "h_over_D");
    assert_eq!(ds.labels.y, "E1_over_E2");
    assert_eq!(ds.table.levels(), vec![0.70, 0.90]);

    let engine = Engine::new(&ds.table);
    let sol = engine.level_at(0.3, 0.675).expect("in range");
    assert!((sol.level - 0.74).abs() < 1e-9);
}

#[test]
fn reads_ed_over_ei_header_variant() {
    // 판본에 따라 Ee/Ei, Ed/Ei 표기를 쓴다. 대소문자와 공백도 섞일 수 있다.
    let csv = "\
Ee_over_Ei, h_over_D , Ed_over_Ei
0.70,0.1,0.50
0.70,0.5,0.80
0.90,0.1,0.60
0.90,0.5,0.95
";
    let ds = dataset::from_csv_reader(csv.as_bytes(), "variant").expect("parse");
    assert_eq!(ds.labels.level, "Ee_over_Ei");
    assert_eq!(ds.labels.y, "Ed_over_Ei");
    assert_eq!(ds.table.levels(), vec![0.70, 0.90]);
}

#[test]
fn missing_column_is_reported() {
    let csv = "\
Eeq_over_E2,h_over_D
0.70,0.1
";
    let err = dataset::from_csv_reader(csv.as_bytes(), "broken").unwrap_err();
    assert!(matches!(err, DatasetError::MissingColumn("y")), "{err:?}");
}

#[test]
fn unparsable_cell_is_reported_with_row_and_column() {
    let csv = "\
Eeq_over_E2,h_over_D,E1_over_E2
0.70,0.1,0.50
0.70,abc,0.80
0.90,0.1,0.60
0.90,0.5,0.95
";
    let err = dataset::from_csv_reader(csv.as_bytes(), "broken").unwrap_err();
    match err {
        DatasetError::Parse { record, column } => {
            assert_eq!(record, 2);
            assert_eq!(column, "h_over_D");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn malformed_rows_fail_table_validation() {
    // 레벨이 하나뿐이면 구간을 만들 수 없다
    let csv = "\
Eeq_over_E2,h_over_D,E1_over_E2
0.70,0.1,0.50
0.70,0.5,0.80
";
    let err = dataset::from_csv_reader(csv.as_bytes(), "one-level").unwrap_err();
    assert!(matches!(err, DatasetError::Table(_)), "{err:?}");
}

#[test]
fn built_in_nomogram_is_valid_and_ascending() {
    let ds = dataset::built_in();
    let levels = ds.table.levels();
    assert_eq!(levels.len(), 9);
    assert!((levels[0] - 0.55).abs() < 1e-12);
    assert!((levels[8] - 0.95).abs() < 1e-12);
    assert!(levels.windows(2).all(|w| w[0] < w[1]));
    for curve in ds.table.isolines() {
        assert!(curve.points().len() >= 2);
        assert!(curve.x_min() < curve.x_max());
    }
}

#[test]
fn built_in_nomogram_answers_reference_query() {
    // 원전 예제 기본값: E1=2600, E2=3000, h=20, D=40 → x=0.5, y≈0.867
    let ds = dataset::built_in();
    let engine = Engine::new(&ds.table);
    let sol = engine
        .forward(2600.0, 3000.0, 20.0, 40.0)
        .expect("valid inputs")
        .expect("in range");
    assert!(
        sol.level > 0.90 && sol.level < 0.95,
        "level={}",
        sol.level
    );
    assert!(sol.equivalent_modulus > 2700.0 && sol.equivalent_modulus < 2850.0);
}
