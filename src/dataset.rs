//! 이바노프(Иванов) 노모그램 데이터 적재.
//! 내장 표(디지타이즈된 Eeq/E2 이솔라인)와 CSV 파일 두 경로를 지원한다.
//! CSV 열 이름은 판본마다 달라서(E1_over_E2 / Ed_over_Ei 등) 여기서 정규화한 뒤
//! 코어 표에 넘긴다.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::isoline::{IsolineTable, SamplePoint, TableError};

/// 데이터 판본이 쓰는 열 이름. 표시는 이 라벨을 따른다.
#[derive(Debug, Clone)]
pub struct CurveLabels {
    pub level: String,
    pub x: String,
    pub y: String,
}

impl Default for CurveLabels {
    fn default() -> Self {
        Self {
            level: "Eeq/E2".into(),
            x: "h/D".into(),
            y: "E1/E2".into(),
        }
    }
}

/// 적재가 끝난 이솔라인 가족: 표 + 판본 라벨.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub name: String,
    pub labels: CurveLabels,
    pub table: IsolineTable,
}

/// 데이터 적재 시 발생 가능한 오류.
#[derive(Debug)]
pub enum DatasetError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// CSV 파싱 오류
    Csv(csv::Error),
    /// 필수 열이 헤더에 없음
    MissingColumn(&'static str),
    /// 숫자로 읽을 수 없는 셀
    Parse { record: usize, column: String },
    /// 표 구성 검증 실패
    Table(TableError),
}

impl std::fmt::Display for DatasetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            DatasetError::Csv(e) => write!(f, "CSV 파싱 오류: {e}"),
            DatasetError::MissingColumn(role) => {
                write!(f, "필수 열({role})을 헤더에서 찾지 못했습니다")
            }
            DatasetError::Parse { record, column } => {
                write!(f, "{record}번째 행의 {column} 값을 숫자로 읽지 못했습니다")
            }
            DatasetError::Table(e) => write!(f, "표 구성 오류: {e}"),
        }
    }
}

impl std::error::Error for DatasetError {}

impl From<std::io::Error> for DatasetError {
    fn from(value: std::io::Error) -> Self {
        DatasetError::Io(value)
    }
}

impl From<csv::Error> for DatasetError {
    fn from(value: csv::Error) -> Self {
        DatasetError::Csv(value)
    }
}

impl From<TableError> for DatasetError {
    fn from(value: TableError) -> Self {
        DatasetError::Table(value)
    }
}

// 판본별 열 이름 별칭. 비교 전에 normalize_header를 거친다.
const LEVEL_ALIASES: &[&str] = &["eeq_over_e2", "ee_over_ei", "eeq/e2", "ee/ei", "level"];
const X_ALIASES: &[&str] = &["h_over_d", "h/d"];
const Y_ALIASES: &[&str] = &["e1_over_e2", "ed_over_ei", "e1/e2", "ed/ei"];

fn normalize_header(s: &str) -> String {
    s.trim().to_lowercase().replace(char::is_whitespace, "")
}

fn find_column(headers: &csv::StringRecord, aliases: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| aliases.contains(&normalize_header(h).as_str()))
}

/// CSV 파일에서 이솔라인 가족을 읽는다.
pub fn load_csv(path: &Path) -> Result<Dataset, DatasetError> {
    let file = File::open(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "csv".into());
    from_csv_reader(file, &name)
}

/// 임의의 리더에서 CSV 이솔라인 가족을 읽는다. 헤더 행이 필요하다.
pub fn from_csv_reader<R: Read>(reader: R, name: &str) -> Result<Dataset, DatasetError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let level_col = find_column(&headers, LEVEL_ALIASES)
        .ok_or(DatasetError::MissingColumn("level"))?;
    let x_col = find_column(&headers, X_ALIASES).ok_or(DatasetError::MissingColumn("x"))?;
    let y_col = find_column(&headers, Y_ALIASES).ok_or(DatasetError::MissingColumn("y"))?;

    let labels = CurveLabels {
        level: headers[level_col].to_string(),
        x: headers[x_col].to_string(),
        y: headers[y_col].to_string(),
    };

    let parse_cell = |record: &csv::StringRecord, idx: usize, row: usize| -> Result<f64, DatasetError> {
        record
            .get(idx)
            .and_then(|s| s.parse::<f64>().ok())
            .ok_or_else(|| DatasetError::Parse {
                record: row,
                column: headers[idx].to_string(),
            })
    };

    let mut curves: Vec<(f64, Vec<(f64, f64)>)> = Vec::new();
    for (row, result) in rdr.records().enumerate() {
        let record = result?;
        let level = parse_cell(&record, level_col, row + 1)?;
        let x = parse_cell(&record, x_col, row + 1)?;
        let y = parse_cell(&record, y_col, row + 1)?;
        match curves.iter_mut().find(|(l, _)| *l == level) {
            Some((_, points)) => points.push((x, y)),
            None => curves.push((level, vec![(x, y)])),
        }
    }

    let table = IsolineTable::new(curves)?;
    Ok(Dataset {
        name: name.to_string(),
        labels,
        table,
    })
}

#[derive(Debug)]
struct CurveData {
    level: f64,
    points: &'static [SamplePoint],
}

const fn sp(x: f64, y: f64) -> SamplePoint {
    SamplePoint::new(x, y)
}

// 노모그램에서 디지타이즈한 Eeq/E2 이솔라인. 레벨이 낮을수록 곡선이 시작하는
// h/D가 커서 x 범위가 서로 다르다(겹침 구간 계산이 실제로 쓰인다).
const NOMOGRAM: &[CurveData] = &[
    CurveData {
        level: 0.55,
        points: &[
            sp(0.4, 0.048),
            sp(0.5, 0.183),
            sp(0.6, 0.271),
            sp(0.8, 0.377),
            sp(1.0, 0.436),
            sp(1.25, 0.480),
            sp(1.5, 0.505),
            sp(2.0, 0.531),
        ],
    },
    CurveData {
        level: 0.60,
        points: &[
            sp(0.4, 0.154),
            sp(0.5, 0.274),
            sp(0.6, 0.352),
            sp(0.8, 0.446),
            sp(1.0, 0.499),
            sp(1.25, 0.537),
            sp(1.5, 0.560),
            sp(2.0, 0.583),
        ],
    },
    CurveData {
        level: 0.65,
        points: &[
            sp(0.3, 0.082),
            sp(0.4, 0.260),
            sp(0.5, 0.364),
            sp(0.6, 0.433),
            sp(0.8, 0.515),
            sp(1.0, 0.561),
            sp(1.25, 0.595),
            sp(1.5, 0.615),
            sp(2.0, 0.635),
        ],
    },
    CurveData {
        level: 0.70,
        points: &[
            sp(0.25, 0.090),
            sp(0.3, 0.213),
            sp(0.4, 0.365),
            sp(0.5, 0.455),
            sp(0.6, 0.514),
            sp(0.8, 0.584),
            sp(1.0, 0.624),
            sp(1.25, 0.653),
            sp(1.5, 0.670),
            sp(2.0, 0.687),
        ],
    },
    CurveData {
        level: 0.75,
        points: &[
            sp(0.2, 0.087),
            sp(0.25, 0.242),
            sp(0.3, 0.344),
            sp(0.4, 0.471),
            sp(0.5, 0.546),
            sp(0.6, 0.595),
            sp(0.8, 0.654),
            sp(1.0, 0.687),
            sp(1.25, 0.711),
            sp(1.5, 0.725),
            sp(2.0, 0.739),
        ],
    },
    CurveData {
        level: 0.80,
        points: &[
            sp(0.15, 0.063),
            sp(0.2, 0.270),
            sp(0.25, 0.393),
            sp(0.3, 0.475),
            sp(0.4, 0.577),
            sp(0.5, 0.637),
            sp(0.6, 0.676),
            sp(0.8, 0.723),
            sp(1.0, 0.749),
            sp(1.25, 0.769),
            sp(1.5, 0.780),
            sp(2.0, 0.792),
        ],
    },
    CurveData {
        level: 0.85,
        points: &[
            sp(0.15, 0.297),
            sp(0.2, 0.452),
            sp(0.25, 0.545),
            sp(0.3, 0.607),
            sp(0.4, 0.683),
            sp(0.5, 0.728),
            sp(0.6, 0.757),
            sp(0.8, 0.792),
            sp(1.0, 0.812),
            sp(1.25, 0.827),
            sp(1.5, 0.835),
            sp(2.0, 0.844),
        ],
    },
    CurveData {
        level: 0.90,
        points: &[
            sp(0.1, 0.324),
            sp(0.15, 0.531),
            sp(0.2, 0.635),
            sp(0.25, 0.697),
            sp(0.3, 0.738),
            sp(0.4, 0.788),
            sp(0.5, 0.818),
            sp(0.6, 0.838),
            sp(0.8, 0.861),
            sp(1.0, 0.875),
            sp(1.25, 0.884),
            sp(1.5, 0.890),
            sp(2.0, 0.896),
        ],
    },
    CurveData {
        level: 0.95,
        points: &[
            sp(0.05, 0.350),
            sp(0.1, 0.662),
            sp(0.15, 0.766),
            sp(0.2, 0.817),
            sp(0.25, 0.848),
            sp(0.3, 0.869),
            sp(0.4, 0.894),
            sp(0.5, 0.909),
            sp(0.6, 0.919),
            sp(0.8, 0.931),
            sp(1.0, 0.937),
            sp(1.25, 0.942),
            sp(1.5, 0.945),
            sp(2.0, 0.948),
        ],
    },
];

/// 내장 노모그램 데이터셋.
pub fn built_in() -> Dataset {
    let curves = NOMOGRAM
        .iter()
        .map(|c| {
            (
                c.level,
                c.points.iter().map(|p| (p.x, p.y)).collect::<Vec<_>>(),
            )
        })
        .collect();
    let table = IsolineTable::new(curves).expect("내장 노모그램 데이터는 항상 유효하다");
    Dataset {
        name: "built-in".into(),
        labels: CurveLabels::default(),
        table,
    }
}
