use std::io::{self, Write};
use std::path::Path;

use crate::app::AppError;
use crate::config::Config;
use crate::conversion;
use crate::dataset::{self, Dataset};
use crate::i18n::{keys, Translator};
use crate::isoline::{Bracket, Engine, RejectedPair};
use crate::quantity::QuantityKind;
use crate::units::{convert_length, convert_modulus, LengthUnit, ModulusUnit};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Forward,
    InverseModulus,
    InverseThickness,
    UnitConversion,
    Dataset,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_FORWARD));
    println!("{}", tr.t(keys::MAIN_MENU_INVERSE_MODULUS));
    println!("{}", tr.t(keys::MAIN_MENU_INVERSE_THICKNESS));
    println!("{}", tr.t(keys::MAIN_MENU_UNIT_CONVERSION));
    println!("{}", tr.t(keys::MAIN_MENU_DATASET));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Forward),
            "2" => return Ok(MenuChoice::InverseModulus),
            "3" => return Ok(MenuChoice::InverseThickness),
            "4" => return Ok(MenuChoice::UnitConversion),
            "5" => return Ok(MenuChoice::Dataset),
            "6" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 순방향 계산 메뉴: E1, E2, h, D → Eeq.
pub fn handle_forward(tr: &Translator, cfg: &Config, data: &Dataset) -> Result<(), AppError> {
    println!("{}", tr.t(keys::FORWARD_HEADING));
    println!("{}", tr.t(keys::HELP_FORWARD));
    let e1 = read_f64(tr, tr.t(keys::PROMPT_E1))?;
    let e2 = read_f64(tr, tr.t(keys::PROMPT_E2))?;
    let h = read_f64(tr, tr.t(keys::PROMPT_H))?;
    let d = read_f64(tr, tr.t(keys::PROMPT_D))?;

    let engine = Engine::with_tolerance(&data.table, cfg.tolerance);
    let (result, rejected) = match engine.forward_verbose(e1, e2, h, d) {
        Ok(v) => v,
        Err(e) => {
            println!("{}: {e}", tr.t(keys::ERROR_PREFIX));
            return Ok(());
        }
    };
    match result {
        Some(sol) => {
            let unit = cfg.default_units.modulus;
            let eeq = convert_modulus(sol.equivalent_modulus, ModulusUnit::MegaPascal, unit);
            println!(
                "{} {:.1} {}",
                tr.t(keys::FORWARD_RESULT_EEQ),
                eeq,
                unit.label()
            );
            println!("{} {:.4}", tr.t(keys::FORWARD_RESULT_LEVEL), sol.level);
            print_bracket(tr, &sol.bracket);
        }
        None => {
            println!("{}", tr.t(keys::OUT_OF_RANGE));
            if !rejected.is_empty() {
                let ans = read_line(tr.t(keys::PROMPT_SHOW_REJECTED))?;
                if ans.trim().eq_ignore_ascii_case("y") {
                    print_rejected(tr, &rejected);
                }
            }
        }
    }
    Ok(())
}

/// 역방향(E1) 계산 메뉴: 목표 Eeq, E2, h, D → 필요 E1.
pub fn handle_inverse_modulus(
    tr: &Translator,
    cfg: &Config,
    data: &Dataset,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::INVERSE_MODULUS_HEADING));
    println!("{}", tr.t(keys::HELP_INVERSE_MODULUS));
    let target = read_f64(tr, tr.t(keys::PROMPT_TARGET_EEQ))?;
    let e2 = read_f64(tr, tr.t(keys::PROMPT_E2))?;
    let h = read_f64(tr, tr.t(keys::PROMPT_H))?;
    let d = read_f64(tr, tr.t(keys::PROMPT_D))?;

    let engine = Engine::with_tolerance(&data.table, cfg.tolerance);
    let result = match engine.solve_upper_modulus(target / e2, h, d, e2) {
        Ok(v) => v,
        Err(e) => {
            println!("{}: {e}", tr.t(keys::ERROR_PREFIX));
            return Ok(());
        }
    };
    match result {
        Some(sol) => {
            let unit = cfg.default_units.modulus;
            let e1 = convert_modulus(sol.upper_modulus, ModulusUnit::MegaPascal, unit);
            println!(
                "{} {:.1} {} (E1/E2 = {:.4})",
                tr.t(keys::INVERSE_MODULUS_RESULT),
                e1,
                unit.label(),
                sol.y
            );
            print_bracket(tr, &sol.bracket);
        }
        None => println!("{}", tr.t(keys::OUT_OF_RANGE)),
    }
    Ok(())
}

/// 역방향(h) 계산 메뉴: 목표 Eeq, E1, E2, D → 필요 h.
pub fn handle_inverse_thickness(
    tr: &Translator,
    cfg: &Config,
    data: &Dataset,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::INVERSE_THICKNESS_HEADING));
    println!("{}", tr.t(keys::HELP_INVERSE_THICKNESS));
    let target = read_f64(tr, tr.t(keys::PROMPT_TARGET_EEQ))?;
    let e1 = read_f64(tr, tr.t(keys::PROMPT_E1))?;
    let e2 = read_f64(tr, tr.t(keys::PROMPT_E2))?;
    let d = read_f64(tr, tr.t(keys::PROMPT_D))?;

    let engine = Engine::with_tolerance(&data.table, cfg.tolerance);
    let result = match engine.solve_thickness(target / e2, e1, e2, d) {
        Ok(v) => v,
        Err(e) => {
            println!("{}: {e}", tr.t(keys::ERROR_PREFIX));
            return Ok(());
        }
    };
    match result {
        Some(sol) => {
            let unit = cfg.default_units.length;
            let h = convert_length(sol.thickness, LengthUnit::Centimeter, unit);
            println!(
                "{} {:.2} {} (h/D = {:.4})",
                tr.t(keys::INVERSE_THICKNESS_RESULT),
                h,
                unit.label(),
                sol.x
            );
            print_bracket(tr, &sol.bracket);
        }
        None => println!("{}", tr.t(keys::OUT_OF_RANGE)),
    }
    Ok(())
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator, _cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    println!("{}", tr.t(keys::UNIT_CONVERSION_OPTIONS));
    let kind = loop {
        let sel = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_KIND))?;
        match sel.trim() {
            "1" => break QuantityKind::Modulus,
            "2" => break QuantityKind::Length,
            _ => println!("{}", tr.t(keys::UNIT_CONVERSION_UNSUPPORTED)),
        }
    };
    let value = read_f64(tr, tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?;
    let result = conversion::convert(kind, value, from_unit.trim(), to_unit.trim())?;
    println!(
        "{} {result} {}",
        tr.t(keys::UNIT_CONVERSION_RESULT),
        to_unit.trim()
    );
    Ok(())
}

/// 데이터셋 메뉴: 현재 데이터 요약 표시 및 CSV 적재.
/// 새 데이터셋을 읽었으면 Some으로 돌려준다.
pub fn handle_dataset(
    tr: &Translator,
    cfg: &mut Config,
    data: &Dataset,
) -> Result<Option<Dataset>, AppError> {
    println!("{}", tr.t(keys::DATASET_HEADING));
    println!("{}", tr.t(keys::HELP_DATASET));
    println!("{} {}", tr.t(keys::DATASET_CURRENT), data.name);
    println!(
        "{} {} / {} / {}",
        tr.t(keys::DATASET_COLUMNS),
        data.labels.level,
        data.labels.x,
        data.labels.y
    );
    println!("{}", tr.t(keys::DATASET_LEVELS));
    for curve in data.table.isolines() {
        println!(
            "  {:.3}  [{:.3}, {:.3}]  {}",
            curve.level(),
            curve.x_min(),
            curve.x_max(),
            curve.points().len()
        );
    }
    let path = read_line(tr.t(keys::DATASET_PROMPT_CSV))?;
    let path = path.trim();
    if path.is_empty() {
        return Ok(None);
    }
    let loaded = dataset::load_csv(Path::new(path))?;
    println!("{} {}", tr.t(keys::DATASET_LOADED), loaded.name);
    cfg.dataset_path = Some(path.to_string());
    Ok(Some(loaded))
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {} / {}",
        tr.t(keys::SETTINGS_CURRENT_UNITS),
        cfg.default_units.modulus.label(),
        cfg.default_units.length.label()
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    match sel.trim() {
        "1" => {
            cfg.default_units.modulus = ModulusUnit::MegaPascal;
            cfg.default_units.length = LengthUnit::Centimeter;
        }
        "2" => {
            cfg.default_units.modulus = ModulusUnit::KgfPerCm2;
            cfg.default_units.length = LengthUnit::Centimeter;
        }
        "3" => {
            cfg.default_units.modulus = ModulusUnit::Psi;
            cfg.default_units.length = LengthUnit::Inch;
        }
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    }
    println!(
        "{} {} / {}",
        tr.t(keys::SETTINGS_SAVED),
        cfg.default_units.modulus.label(),
        cfg.default_units.length.label()
    );
    Ok(())
}

fn print_bracket(tr: &Translator, b: &Bracket) {
    println!(
        "{} ({:.3}, {:.3}), y = [{:.4}, {:.4}]",
        tr.t(keys::RESULT_BRACKET),
        b.lower_level,
        b.upper_level,
        b.y_lower,
        b.y_upper
    );
}

fn print_rejected(tr: &Translator, rejected: &[RejectedPair]) {
    println!("{}", tr.t(keys::REJECTED_HEADING));
    for r in rejected {
        println!(
            "  ({:.3}, {:.3}): y = [{:.4}, {:.4}], y* = {:.4}",
            r.lower_level,
            r.upper_level,
            r.y_lower,
            r.y_upper,
            r.y_query
        );
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
