use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `MPa`, `kgf/cm2`, `psi`, `cm`, `mm`, `in` 등을 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Modulus => {
            let from = parse_modulus_unit(from_unit_str)?;
            let to = parse_modulus_unit(to_unit_str)?;
            Ok(convert_modulus(value, from, to))
        }
        QuantityKind::Length => {
            let from = parse_length_unit(from_unit_str)?;
            let to = parse_length_unit(to_unit_str)?;
            Ok(convert_length(value, from, to))
        }
    }
}

pub fn parse_modulus_unit(s: &str) -> Result<ModulusUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "mpa" | "megapascal" => Ok(ModulusUnit::MegaPascal),
        "kpa" | "kilopascal" => Ok(ModulusUnit::KiloPascal),
        "kg/cm2" | "kgf/cm2" | "kgf/cm^2" => Ok(ModulusUnit::KgfPerCm2),
        "psi" => Ok(ModulusUnit::Psi),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "cm" | "centimeter" => Ok(LengthUnit::Centimeter),
        "mm" => Ok(LengthUnit::Millimeter),
        "m" | "meter" | "metre" => Ok(LengthUnit::Meter),
        "in" | "inch" | "\"" => Ok(LengthUnit::Inch),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
