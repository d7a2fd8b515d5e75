use crate::config::Config;
use crate::conversion;
use crate::dataset::{self, Dataset, DatasetError};
use crate::i18n::{self, Translator};
use crate::isoline::InputError;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 단위 변환 오류
    Conversion(conversion::ConversionError),
    /// 이솔라인 데이터 적재 오류
    Dataset(DatasetError),
    /// 물리 입력 오류 (D=0, E2=0 등)
    Input(InputError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Conversion(e) => write!(f, "단위 변환 오류: {e}"),
            AppError::Dataset(e) => write!(f, "데이터 오류: {e}"),
            AppError::Input(e) => write!(f, "입력 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<conversion::ConversionError> for AppError {
    fn from(value: conversion::ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

impl From<DatasetError> for AppError {
    fn from(value: DatasetError) -> Self {
        AppError::Dataset(value)
    }
}

impl From<InputError> for AppError {
    fn from(value: InputError) -> Self {
        AppError::Input(value)
    }
}

/// 시작 시 사용할 데이터셋을 고른다. 설정에 CSV 경로가 있으면 그것을,
/// 없으면 내장 노모그램을 사용한다.
pub fn initial_dataset(config: &Config) -> Result<Dataset, AppError> {
    match config.dataset_path.as_deref() {
        Some(path) => Ok(dataset::load_csv(std::path::Path::new(path))?),
        None => Ok(dataset::built_in()),
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    let mut data = initial_dataset(config)?;
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Forward => ui_cli::handle_forward(tr, config, &data)?,
            MenuChoice::InverseModulus => ui_cli::handle_inverse_modulus(tr, config, &data)?,
            MenuChoice::InverseThickness => ui_cli::handle_inverse_thickness(tr, config, &data)?,
            MenuChoice::UnitConversion => ui_cli::handle_unit_conversion(tr, config)?,
            MenuChoice::Dataset => {
                if let Some(loaded) = ui_cli::handle_dataset(tr, config, &data)? {
                    data = loaded;
                    config.save()?;
                }
            }
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
