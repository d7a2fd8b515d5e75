use pavement_engineering_toolbox::conversion::{self, ConversionError};
use pavement_engineering_toolbox::quantity::QuantityKind;
use pavement_engineering_toolbox::units::{
    convert_length, convert_modulus, LengthUnit, ModulusUnit,
};

#[test]
fn modulus_kgf_cm2_to_mpa() {
    let mpa = convert_modulus(1.0, ModulusUnit::KgfPerCm2, ModulusUnit::MegaPascal);
    assert!((mpa - 0.0980665).abs() < 1e-9);
    let back = convert_modulus(mpa, ModulusUnit::MegaPascal, ModulusUnit::KgfPerCm2);
    assert!((back - 1.0).abs() < 1e-9);
}

#[test]
fn modulus_psi_and_kpa() {
    let mpa = convert_modulus(1000.0, ModulusUnit::Psi, ModulusUnit::MegaPascal);
    assert!((mpa - 6.89476).abs() < 1e-4);
    let kpa = convert_modulus(1.0, ModulusUnit::MegaPascal, ModulusUnit::KiloPascal);
    assert!((kpa - 1000.0).abs() < 1e-9);
}

#[test]
fn length_round_trips() {
    let mm = convert_length(20.0, LengthUnit::Centimeter, LengthUnit::Millimeter);
    assert!((mm - 200.0).abs() < 1e-9);
    let inch = convert_length(2.54, LengthUnit::Centimeter, LengthUnit::Inch);
    assert!((inch - 1.0).abs() < 1e-9);
    let m = convert_length(20.0, LengthUnit::Centimeter, LengthUnit::Meter);
    assert!((m - 0.2).abs() < 1e-12);
}

#[test]
fn string_conversion_accepts_common_spellings() {
    let v = conversion::convert(QuantityKind::Modulus, 3000.0, "MPa", "kgf/cm2").expect("convert");
    assert!((v - 3000.0 / 0.0980665).abs() < 1e-6);
    let v = conversion::convert(QuantityKind::Length, 40.0, "cm", "in").expect("convert");
    assert!((v - 40.0 / 2.54).abs() < 1e-9);
    let v = conversion::convert(QuantityKind::Length, 1.0, "M", "mm").expect("convert");
    assert!((v - 1000.0).abs() < 1e-9);
}

#[test]
fn unknown_unit_is_an_error() {
    let err = conversion::convert(QuantityKind::Modulus, 1.0, "bar", "MPa").unwrap_err();
    assert!(matches!(err, ConversionError::UnknownUnit(u) if u == "bar"));
}

#[test]
fn unit_labels_for_display() {
    assert_eq!(ModulusUnit::KgfPerCm2.label(), "kgf/cm²");
    assert_eq!(LengthUnit::Inch.label(), "in");
}
