/// 노모그램에서 읽어낸 한 점. `x = h/D`, `y = E1/E2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    pub x: f64,
    pub y: f64,
}

impl SamplePoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// 하나의 이솔라인: 고정된 `level`(Eeq/E2)과 x 오름차순으로 정렬된 표본열.
#[derive(Debug, Clone)]
pub struct Isoline {
    level: f64,
    points: Vec<SamplePoint>,
}

impl Isoline {
    pub fn level(&self) -> f64 {
        self.level
    }

    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    pub fn x_min(&self) -> f64 {
        self.points[0].x
    }

    pub fn x_max(&self) -> f64 {
        self.points[self.points.len() - 1].x
    }

    /// 곡선 내부에서 x 위치의 y를 구간 선형 보간으로 구한다.
    /// `[x_min, x_max]` 밖이면 None (외삽하지 않는다).
    pub fn y_at(&self, x: f64) -> Option<f64> {
        if x < self.x_min() || x > self.x_max() {
            return None;
        }
        for pair in self.points.windows(2) {
            let a = pair[0];
            let b = pair[1];
            if x >= a.x && x <= b.x {
                let frac = (x - a.x) / (b.x - a.x);
                return Some(a.y + frac * (b.y - a.y));
            }
        }
        None
    }
}

/// 표 구성 시 발견되는 데이터 결함. 질의 전에 거부한다.
#[derive(Debug, Clone, PartialEq)]
pub enum TableError {
    /// 같은 이솔라인 안에 x가 중복됨
    DuplicateX { level: f64, x: f64 },
    /// 구간을 만들 수 없는 레벨 수 (2개 미만)
    TooFewLevels(usize),
    /// 보간할 수 없는 표본 수 (레벨당 2점 미만)
    TooFewSamples { level: f64, count: usize },
    /// NaN/무한대 값 포함
    NonFinite { level: f64 },
    /// 요청한 레벨이 표에 없음
    UnknownLevel(f64),
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::DuplicateX { level, x } => {
                write!(f, "레벨 {level}의 이솔라인에 x={x} 중복 표본이 있습니다")
            }
            TableError::TooFewLevels(n) => {
                write!(f, "레벨이 {n}개뿐입니다. 구간 보간에는 2개 이상 필요합니다")
            }
            TableError::TooFewSamples { level, count } => {
                write!(f, "레벨 {level}의 표본이 {count}개뿐입니다. 2점 이상 필요합니다")
            }
            TableError::NonFinite { level } => {
                write!(f, "레벨 {level}에 NaN/무한대 값이 있습니다")
            }
            TableError::UnknownLevel(level) => write!(f, "레벨 {level}이(가) 표에 없습니다"),
        }
    }
}

impl std::error::Error for TableError {}

/// 이솔라인 가족의 불변 표현. 생성 시 1회 검증하며 이후 질의는 읽기 전용이다.
#[derive(Debug, Clone)]
pub struct IsolineTable {
    isolines: Vec<Isoline>,
}

impl IsolineTable {
    /// `레벨 → (x, y) 표본열` 매핑으로 표를 만든다.
    /// 표본은 x 오름차순으로, 이솔라인은 레벨 오름차순으로 정렬한다.
    pub fn new(curves: Vec<(f64, Vec<(f64, f64)>)>) -> Result<Self, TableError> {
        let mut isolines = Vec::with_capacity(curves.len());
        for (level, samples) in curves {
            if !level.is_finite() {
                return Err(TableError::NonFinite { level });
            }
            if samples.len() < 2 {
                return Err(TableError::TooFewSamples {
                    level,
                    count: samples.len(),
                });
            }
            let mut points: Vec<SamplePoint> = samples
                .into_iter()
                .map(|(x, y)| SamplePoint::new(x, y))
                .collect();
            if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
                return Err(TableError::NonFinite { level });
            }
            points.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal));
            for pair in points.windows(2) {
                if pair[1].x - pair[0].x <= 0.0 {
                    return Err(TableError::DuplicateX {
                        level,
                        x: pair[0].x,
                    });
                }
            }
            isolines.push(Isoline { level, points });
        }
        isolines.sort_by(|a, b| {
            a.level
                .partial_cmp(&b.level)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        // 레벨 중복도 구간을 무너뜨리는 건 아니므로 허용하되, 2개 미만이면 거부
        if isolines.len() < 2 {
            return Err(TableError::TooFewLevels(isolines.len()));
        }
        Ok(Self { isolines })
    }

    /// 레벨 목록(오름차순).
    pub fn levels(&self) -> Vec<f64> {
        self.isolines.iter().map(|c| c.level).collect()
    }

    /// 레벨 오름차순의 이솔라인 슬라이스.
    pub fn isolines(&self) -> &[Isoline] {
        &self.isolines
    }

    /// 특정 레벨의 곡선을 찾는다.
    pub fn curve(&self, level: f64) -> Result<&Isoline, TableError> {
        self.isolines
            .iter()
            .find(|c| c.level == level)
            .ok_or(TableError::UnknownLevel(level))
    }

    /// 특정 레벨 곡선의 x 범위 `(min, max)`.
    pub fn x_range(&self, level: f64) -> Result<(f64, f64), TableError> {
        let curve = self.curve(level)?;
        Ok((curve.x_min(), curve.x_max()))
    }
}
