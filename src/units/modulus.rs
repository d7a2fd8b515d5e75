use serde::{Deserialize, Serialize};

/// 탄성계수 단위. 내부 기준은 MPa이다.
/// kgf/cm²는 구소련권 노모그램 원전에서 흔한 단위라 함께 지원한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModulusUnit {
    MegaPascal,
    KiloPascal,
    KgfPerCm2,
    Psi,
}

impl ModulusUnit {
    /// 화면 표시용 단위 기호.
    pub fn label(&self) -> &'static str {
        match self {
            ModulusUnit::MegaPascal => "MPa",
            ModulusUnit::KiloPascal => "kPa",
            ModulusUnit::KgfPerCm2 => "kgf/cm²",
            ModulusUnit::Psi => "psi",
        }
    }
}

const KGF_CM2_MPA: f64 = 0.0980665;
const PSI_MPA: f64 = 0.00689476;

fn to_mpa(value: f64, unit: ModulusUnit) -> f64 {
    match unit {
        ModulusUnit::MegaPascal => value,
        ModulusUnit::KiloPascal => value / 1000.0,
        ModulusUnit::KgfPerCm2 => value * KGF_CM2_MPA,
        ModulusUnit::Psi => value * PSI_MPA,
    }
}

fn from_mpa(value_mpa: f64, unit: ModulusUnit) -> f64 {
    match unit {
        ModulusUnit::MegaPascal => value_mpa,
        ModulusUnit::KiloPascal => value_mpa * 1000.0,
        ModulusUnit::KgfPerCm2 => value_mpa / KGF_CM2_MPA,
        ModulusUnit::Psi => value_mpa / PSI_MPA,
    }
}

/// 탄성계수를 다른 단위로 변환한다.
pub fn convert_modulus(value: f64, from: ModulusUnit, to: ModulusUnit) -> f64 {
    let mpa = to_mpa(value, from);
    from_mpa(mpa, to)
}
