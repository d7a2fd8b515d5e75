use serde::{Deserialize, Serialize};

/// 길이 단위. 내부 기준은 센티미터이다(층 두께 h, 하중판 지름 D 모두 cm로 계산).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Centimeter,
    Millimeter,
    Meter,
    Inch,
}

impl LengthUnit {
    /// 화면 표시용 단위 기호.
    pub fn label(&self) -> &'static str {
        match self {
            LengthUnit::Centimeter => "cm",
            LengthUnit::Millimeter => "mm",
            LengthUnit::Meter => "m",
            LengthUnit::Inch => "in",
        }
    }
}

fn to_centimeter(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Centimeter => value,
        LengthUnit::Millimeter => value / 10.0,
        LengthUnit::Meter => value * 100.0,
        LengthUnit::Inch => value * 2.54,
    }
}

fn from_centimeter(value_cm: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Centimeter => value_cm,
        LengthUnit::Millimeter => value_cm * 10.0,
        LengthUnit::Meter => value_cm / 100.0,
        LengthUnit::Inch => value_cm / 2.54,
    }
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    let cm = to_centimeter(value, from);
    from_centimeter(cm, to)
}
