use super::table::{Isoline, IsolineTable};

/// 포함/브래킷 판정에 쓰는 기본 절대 허용오차.
pub const DEFAULT_TOLERANCE: f64 = 1e-4;
/// 역방향(두께) 해를 찾을 때 x 구간을 나누는 기본 표본 수.
pub const DEFAULT_INVERSE_SAMPLES: usize = 1000;

/// 질의를 감싼 인접 이솔라인 쌍과 질의 x에서의 두 보간값. 진단/표시용으로 보존한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    pub lower_level: f64,
    pub upper_level: f64,
    pub y_lower: f64,
    pub y_upper: f64,
}

/// 순방향 질의 결과: 보간된 레벨(Eeq/E2)과 사용한 브래킷.
#[derive(Debug, Clone, Copy)]
pub struct LevelSolution {
    pub level: f64,
    pub bracket: Bracket,
}

/// 역방향(y) 질의 결과: 보간된 비율(E1/E2)과 사용한 브래킷.
#[derive(Debug, Clone, Copy)]
pub struct RatioSolution {
    pub y: f64,
    pub bracket: Bracket,
}

/// 역방향(x) 질의 결과: 허용오차 안에서 처음 맞은 x(h/D)와 사용한 브래킷.
#[derive(Debug, Clone, Copy)]
pub struct ThicknessSolution {
    pub x: f64,
    pub bracket: Bracket,
}

/// x 범위 검사는 통과했지만 y 포함 검사에서 탈락한 쌍. 디버깅 표시용.
#[derive(Debug, Clone, Copy)]
pub struct RejectedPair {
    pub lower_level: f64,
    pub upper_level: f64,
    pub y_lower: f64,
    pub y_upper: f64,
    pub y_query: f64,
}

/// 순방향 계산 결과. `equivalent_modulus = level * e2`.
#[derive(Debug, Clone, Copy)]
pub struct ForwardResult {
    pub equivalent_modulus: f64,
    pub level: f64,
    pub bracket: Bracket,
}

/// 역방향(y) 계산 결과. `upper_modulus = y * e2`.
#[derive(Debug, Clone, Copy)]
pub struct ModulusResult {
    pub upper_modulus: f64,
    pub y: f64,
    pub bracket: Bracket,
}

/// 역방향(x) 계산 결과. `thickness = x * d`.
#[derive(Debug, Clone, Copy)]
pub struct ThicknessResult {
    pub thickness: f64,
    pub x: f64,
    pub bracket: Bracket,
}

/// 엔진을 호출하기 전에 걸러야 하는 입력 오류. 범위 밖(out of range)과는 구별된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// 하중판 지름 D = 0
    ZeroLoadDiameter,
    /// 기준 탄성계수 E2 = 0
    ZeroReferenceModulus,
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::ZeroLoadDiameter => write!(f, "하중판 지름 D는 0이 될 수 없습니다"),
            InputError::ZeroReferenceModulus => {
                write!(f, "기준 탄성계수 E2는 0이 될 수 없습니다")
            }
        }
    }
}

impl std::error::Error for InputError {}

/// 브래킷 탐색 + 2단 선형 보간 엔진. 표를 빌려 쓰며 상태를 갖지 않는다.
#[derive(Debug, Clone, Copy)]
pub struct Engine<'a> {
    table: &'a IsolineTable,
    tolerance: f64,
    inverse_samples: usize,
}

impl<'a> Engine<'a> {
    pub fn new(table: &'a IsolineTable) -> Self {
        Self {
            table,
            tolerance: DEFAULT_TOLERANCE,
            inverse_samples: DEFAULT_INVERSE_SAMPLES,
        }
    }

    pub fn with_tolerance(table: &'a IsolineTable, tolerance: f64) -> Self {
        Self {
            table,
            tolerance,
            inverse_samples: DEFAULT_INVERSE_SAMPLES,
        }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// 순방향 질의: `(x=h/D, y=E1/E2)`에서 레벨(Eeq/E2)을 보간한다.
    /// 레벨 오름차순으로 인접 쌍을 훑고, 조건을 만족하는 첫 쌍을 쓴다.
    pub fn level_at(&self, x: f64, y: f64) -> Option<LevelSolution> {
        self.scan_forward(x, y, None)
    }

    /// `level_at`과 동일하되, x 검사는 통과하고 y 포함에서 탈락한 쌍들을 함께 돌려준다.
    pub fn level_at_verbose(&self, x: f64, y: f64) -> (Option<LevelSolution>, Vec<RejectedPair>) {
        let mut rejected = Vec::new();
        let found = self.scan_forward(x, y, Some(&mut rejected));
        (found, rejected)
    }

    fn scan_forward(
        &self,
        x: f64,
        y: f64,
        mut rejected: Option<&mut Vec<RejectedPair>>,
    ) -> Option<LevelSolution> {
        let tol = self.tolerance;
        for pair in self.table.isolines().windows(2) {
            let lower = &pair[0];
            let upper = &pair[1];
            let (y_lower, y_upper) = match self.pair_values_at(lower, upper, x) {
                Some(v) => v,
                None => continue,
            };
            let y_lo = y_lower.min(y_upper);
            let y_hi = y_lower.max(y_upper);
            if y < y_lo - tol || y > y_hi + tol {
                if let Some(rows) = rejected.as_deref_mut() {
                    rows.push(RejectedPair {
                        lower_level: lower.level(),
                        upper_level: upper.level(),
                        y_lower,
                        y_upper,
                        y_query: y,
                    });
                }
                continue;
            }
            let frac = interp_fraction(y, y_lower, y_upper, tol);
            let level = lower.level() + frac * (upper.level() - lower.level());
            return Some(LevelSolution {
                level,
                bracket: Bracket {
                    lower_level: lower.level(),
                    upper_level: upper.level(),
                    y_lower,
                    y_upper,
                },
            });
        }
        None
    }

    /// 역방향(y) 질의: 목표 레벨과 x에서 비율 y(E1/E2)를 보간한다.
    pub fn ratio_at(&self, level: f64, x: f64) -> Option<RatioSolution> {
        let (lower, upper) = self.level_bracket(level)?;
        let (y_lower, y_upper) = self.pair_values_at(lower, upper, x)?;
        let frac = interp_fraction(level, lower.level(), upper.level(), self.tolerance);
        Some(RatioSolution {
            y: y_lower + frac * (y_upper - y_lower),
            bracket: Bracket {
                lower_level: lower.level(),
                upper_level: upper.level(),
                y_lower,
                y_upper,
            },
        })
    }

    /// 역방향(x) 질의: 목표 레벨과 목표 y에서 x(h/D)를 찾는다.
    /// 두 곡선의 x 겹침 구간을 고정 분해능으로 훑어 허용오차 안에 드는 첫 표본을 채택한다.
    /// 분해능보다 좁게 스치는 근은 놓칠 수 있다.
    pub fn x_for(&self, level: f64, y_target: f64) -> Option<ThicknessSolution> {
        let (lower, upper) = self.level_bracket(level)?;
        let x_lo = lower.x_min().max(upper.x_min());
        let x_hi = lower.x_max().min(upper.x_max());
        if x_lo > x_hi {
            return None;
        }
        let frac = interp_fraction(level, lower.level(), upper.level(), self.tolerance);
        let n = self.inverse_samples.max(2);
        for i in 0..n {
            let x = x_lo + (x_hi - x_lo) * (i as f64) / ((n - 1) as f64);
            let (y_lower, y_upper) = match self.pair_values_at(lower, upper, x) {
                Some(v) => v,
                None => continue,
            };
            let y_candidate = y_lower + frac * (y_upper - y_lower);
            if (y_candidate - y_target).abs() < self.tolerance {
                return Some(ThicknessSolution {
                    x,
                    bracket: Bracket {
                        lower_level: lower.level(),
                        upper_level: upper.level(),
                        y_lower,
                        y_upper,
                    },
                });
            }
        }
        None
    }

    /// 순방향 편의 래퍼: 탄성계수/기하 입력으로 등가탄성계수 Eeq를 계산한다.
    /// 범위 밖이면 `Ok(None)`.
    pub fn forward(
        &self,
        e1: f64,
        e2: f64,
        h: f64,
        d: f64,
    ) -> Result<Option<ForwardResult>, InputError> {
        check_inputs(e2, d)?;
        Ok(self.level_at(h / d, e1 / e2).map(|sol| ForwardResult {
            equivalent_modulus: sol.level * e2,
            level: sol.level,
            bracket: sol.bracket,
        }))
    }

    /// 순방향 래퍼 + 탈락 쌍 진단.
    pub fn forward_verbose(
        &self,
        e1: f64,
        e2: f64,
        h: f64,
        d: f64,
    ) -> Result<(Option<ForwardResult>, Vec<RejectedPair>), InputError> {
        check_inputs(e2, d)?;
        let (found, rejected) = self.level_at_verbose(h / d, e1 / e2);
        Ok((
            found.map(|sol| ForwardResult {
                equivalent_modulus: sol.level * e2,
                level: sol.level,
                bracket: sol.bracket,
            }),
            rejected,
        ))
    }

    /// 역방향(y) 래퍼: 목표 레벨(Eeq/E2)과 h, D, E2로 상층 탄성계수 E1을 구한다.
    pub fn solve_upper_modulus(
        &self,
        level_target: f64,
        h: f64,
        d: f64,
        e2: f64,
    ) -> Result<Option<ModulusResult>, InputError> {
        check_inputs(e2, d)?;
        Ok(self.ratio_at(level_target, h / d).map(|sol| ModulusResult {
            upper_modulus: sol.y * e2,
            y: sol.y,
            bracket: sol.bracket,
        }))
    }

    /// 역방향(x) 래퍼: 목표 레벨과 E1, E2, D로 층 두께 h를 구한다.
    pub fn solve_thickness(
        &self,
        level_target: f64,
        e1: f64,
        e2: f64,
        d: f64,
    ) -> Result<Option<ThicknessResult>, InputError> {
        check_inputs(e2, d)?;
        Ok(self.x_for(level_target, e1 / e2).map(|sol| ThicknessResult {
            thickness: sol.x * d,
            x: sol.x,
            bracket: sol.bracket,
        }))
    }

    /// 인접 쌍의 x 겹침 구간을 구하고, 질의 x가 허용오차 안에 들면
    /// 구간 안으로 눌러 넣은 x에서 두 곡선의 y를 보간한다.
    fn pair_values_at(&self, lower: &Isoline, upper: &Isoline, x: f64) -> Option<(f64, f64)> {
        let x_lo = lower.x_min().max(upper.x_min());
        let x_hi = lower.x_max().min(upper.x_max());
        if x_lo > x_hi {
            return None;
        }
        if x < x_lo - self.tolerance || x > x_hi + self.tolerance {
            return None;
        }
        // 허용오차로 걸친 가장자리 질의는 가장자리 표본을 쓴다
        let x = x.clamp(x_lo, x_hi);
        let y_lower = lower.y_at(x)?;
        let y_upper = upper.y_at(x)?;
        Some((y_lower, y_upper))
    }

    /// `lower ≤ level ≤ upper`(허용오차 포함)를 만족하는 첫 인접 레벨 쌍.
    fn level_bracket(&self, level: f64) -> Option<(&'a Isoline, &'a Isoline)> {
        let tol = self.tolerance;
        for pair in self.table.isolines().windows(2) {
            let lower = &pair[0];
            let upper = &pair[1];
            if level >= lower.level() - tol && level <= upper.level() + tol {
                return Some((lower, upper));
            }
        }
        None
    }
}

/// 두 끝값 사이에서 value가 차지하는 비율. 끝값이 허용오차 안에서 같으면 0으로
/// 간주해 0 나눗셈을 피하고, 결과는 [0, 1]로 클램프한다.
fn interp_fraction(value: f64, low: f64, high: f64, tol: f64) -> f64 {
    if (high - low).abs() <= tol {
        0.0
    } else {
        ((value - low) / (high - low)).clamp(0.0, 1.0)
    }
}

fn check_inputs(e2: f64, d: f64) -> Result<(), InputError> {
    if d == 0.0 {
        return Err(InputError::ZeroLoadDiameter);
    }
    if e2 == 0.0 {
        return Err(InputError::ZeroReferenceModulus);
    }
    Ok(())
}
