//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 뿐 아니라 GUI에서도 함께 쓴다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod dataset;
pub mod i18n;
pub mod isoline;
pub mod quantity;
pub mod ui_cli;
pub mod units;
